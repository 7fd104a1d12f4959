//! Screen trait and associated types.
//!
//! Screens own their presentation state (focus, hit-test areas) and report
//! what the user asked for as a [`ScreenAction`]. The quiz itself is only
//! ever read here; the app applies actions to it.

use crate::config::Config;
use crate::keymap::{Action, Keymap};
use crate::quiz::QuizFlow;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Application configuration (keymap for footers).
    pub config: &'a Config,
    /// Quiz state to draw.
    pub flow: &'a QuizFlow,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, flow: &'a QuizFlow) -> Self {
        Self { config, flow }
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    pub keymap: &'a Keymap,
    pub flow: &'a QuizFlow,
}

impl<'a> ScreenContext<'a> {
    pub fn new(keymap: &'a Keymap, flow: &'a QuizFlow) -> Self {
        Self { keymap, flow }
    }

    /// Resolve a key press through the keymap. Releases and repeats are ignored.
    pub fn action_for(&self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.keymap.get_action(key.code, key.modifiers)
            }
            _ => None,
        }
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Leave the welcome screen and start the quiz.
    Begin,
    /// Tap the answer control showing this text.
    Tap(String),
    /// Start over from the score screen.
    Retake,
    /// Open help overlay.
    ShowHelp,
    /// Request to quit the application.
    Quit,
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: &Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(match ctx.action_for(event) {
///             Some(Action::Quit) => ScreenAction::Quit,
///             _ => ScreenAction::None,
///         })
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event and say what should happen next.
    fn handle_event(&mut self, event: &Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Called when the screen becomes the active one.
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
