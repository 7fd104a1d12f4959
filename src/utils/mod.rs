pub mod layout;
pub mod path;

pub use layout::{center_popup, center_rect, create_standard_layout, offset_rect, scale_rect};
pub use path::{expand_path, expand_path_from, get_config_dir, get_config_path, get_home_dir, get_log_dir};
