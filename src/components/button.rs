use crate::components::component::{Component, ComponentAction};
use crate::styles::theme;
use anyhow::Result;
use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Filled, clickable button (Begin, Retake)
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    /// Where the button was last drawn, for mouse hit-testing
    area: Option<Rect>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            area: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Width needed to draw the label with borders and padding
    pub fn width(&self) -> u16 {
        self.label.chars().count() as u16 + 6
    }

    pub const HEIGHT: u16 = 3;

    pub fn area(&self) -> Option<Rect> {
        self.area
    }
}

impl Component for Button {
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .style(t.button_style());
        let para = Paragraph::new(self.label.as_str())
            .alignment(Alignment::Center)
            .style(t.button_style())
            .block(block);
        frame.render_widget(para, area);
        self.area = Some(area);
        Ok(())
    }

    fn handle_event(&mut self, event: &Event) -> Result<ComponentAction> {
        if let Event::Mouse(mouse) = event {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                if let Some(area) = self.area {
                    if area.contains(Position::new(mouse.column, mouse.row)) {
                        return Ok(ComponentAction::Pressed);
                    }
                }
            }
        }
        Ok(ComponentAction::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_click_before_render_is_ignored() {
        let mut button = Button::new("Begin");
        assert_eq!(button.handle_event(&click(0, 0)).unwrap(), ComponentAction::None);
    }

    #[test]
    fn test_click_inside_drawn_area() {
        let mut button = Button::new("Begin");
        button.area = Some(Rect::new(10, 5, 11, 3));
        assert_eq!(button.handle_event(&click(12, 6)).unwrap(), ComponentAction::Pressed);
        assert_eq!(button.handle_event(&click(2, 6)).unwrap(), ComponentAction::None);
    }

    #[test]
    fn test_width_fits_label() {
        assert_eq!(Button::new("Retake Quiz").width(), 17);
    }
}
