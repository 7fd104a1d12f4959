//! Help Overlay Component
//!
//! Displays current keybindings when user presses '?' key.

use crate::keymap::{Action, Keymap};
use crate::styles::theme;
use crate::utils::center_popup;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CATEGORIES: [&str; 3] = ["Answering", "Navigation", "Global"];

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the help overlay in the center of the screen
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) -> Result<()> {
        let t = theme();
        let popup_area = center_popup(area, 80, 80);

        frame.render_widget(Clear, popup_area);

        let title = format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_alignment(Alignment::Center)
            .title_style(t.title_style())
            .border_style(t.border_focused_style());

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(2)])
            .split(inner_area);

        frame.render_widget(
            Paragraph::new(Self::binding_lines(keymap)).wrap(Wrap { trim: false }),
            chunks[0],
        );

        let footer_text = format!(
            "Edit keybindings in: {}\nPress {} or {} to close",
            config_path,
            keymap.key_for(Action::Cancel),
            keymap.key_for(Action::Help),
        );
        let footer = Paragraph::new(footer_text)
            .style(t.muted_style())
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);

        Ok(())
    }

    /// Bindings grouped under their category headings
    fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let bindings = keymap.all_bindings();
        let mut lines = vec![Line::from("")];

        for category in CATEGORIES {
            let mut group = bindings
                .iter()
                .filter(|b| b.action.category() == category)
                .peekable();
            if group.peek().is_none() {
                continue;
            }

            lines.push(Line::from(Span::styled(
                format!("  {} ", category),
                t.title_style().add_modifier(Modifier::UNDERLINED),
            )));
            for binding in group {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {:12}", binding.display()), t.emphasis_style()),
                    Span::styled(binding.get_description().to_string(), t.text_style()),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_binding_is_listed() {
        let keymap = Keymap::default();
        let lines = HelpOverlay::binding_lines(&keymap);
        let text: String = lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        for binding in keymap.all_bindings() {
            assert!(text.contains(binding.get_description()), "missing {:?}", binding.action);
        }
        assert!(text.contains("Answering"));
    }
}
