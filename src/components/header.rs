use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Common header component for all screens
pub struct Header;

impl Header {
    /// Render a header with a title on the border and a one-line status inside
    ///
    /// # Returns
    /// The height of the header (for layout calculations)
    pub fn render(frame: &mut Frame, area: Rect, title: &str, status: Line) -> Result<u16> {
        let t = theme();
        let header_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));

        let inner_area = header_block.inner(area);
        frame.render_widget(header_block, area);

        let status = Paragraph::new(status)
            .style(t.text_style())
            .alignment(Alignment::Center);
        frame.render_widget(status, inner_area);

        Ok(3)
    }
}
