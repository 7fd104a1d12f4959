// Reusable pieces shared by the screens

pub mod button;
pub mod component;
pub mod footer;
pub mod header;
pub mod help_overlay;

pub use button::Button;
pub use component::{Component, ComponentAction};
pub use footer::Footer;
pub use header::Header;
pub use help_overlay::HelpOverlay;
