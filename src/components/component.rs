use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;

/// Action that a component can return after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentAction {
    /// No action needed
    None,
    /// The component was activated (clicked)
    Pressed,
}

/// Trait for small self-contained UI elements
///
/// Components:
/// - Manage their own state
/// - Render themselves
/// - Return actions for the owning screen to handle
pub trait Component {
    /// Render the component to the given area
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;

    /// Handle an event (mouse, mostly). Keyboard input goes through the keymap.
    fn handle_event(&mut self, event: &Event) -> Result<ComponentAction>;
}
