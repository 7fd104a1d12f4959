//! Screen controllers for the application.
//!
//! One screen per quiz mode. The app picks the screen from the session's
//! mode on every frame, so there is no separate navigation state.
//!
//! ```text
//! Mode::Welcome    -> WelcomeScreen  (Begin)
//! Mode::InProgress -> QuizScreen     (Tap(answer))
//! Mode::Finished   -> ScoreScreen    (Retake)
//! ```

pub mod quiz;
pub mod score;
pub mod screen_trait;
pub mod welcome;

pub use quiz::QuizScreen;
pub use score::ScoreScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use welcome::WelcomeScreen;
