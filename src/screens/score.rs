//! Score screen: final tally and the Retake button.

use crate::components::{Button, Component, ComponentAction, Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::{center_rect, create_standard_layout};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const FINISHED_TITLE: &str = "Quiz Finished!";

pub struct ScoreScreen {
    retake: Button,
}

impl Default for ScoreScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreScreen {
    pub fn new() -> Self {
        Self {
            retake: Button::new("Retake Quiz"),
        }
    }
}

impl Screen for ScoreScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header, content, footer) = create_standard_layout(area, 3, 2);
        let score = ctx.flow.session().score();

        let status = Line::from(Span::styled(
            format!("{} of {} right", score.correct, score.total()),
            t.emphasis_style(),
        ));
        Header::render(frame, header, "Quizzo", status)?;

        let body = center_rect(content, content.width, 5 + Button::HEIGHT);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(Button::HEIGHT),
            ])
            .split(body);

        frame.render_widget(
            Paragraph::new(FINISHED_TITLE)
                .style(t.title_style())
                .alignment(Alignment::Center),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(format!("Correct Answers: {}", score.correct))
                .style(t.success_style())
                .alignment(Alignment::Center),
            rows[2],
        );
        frame.render_widget(
            Paragraph::new(format!("Incorrect Answers: {}", score.incorrect))
                .style(t.error_style())
                .alignment(Alignment::Center),
            rows[3],
        );
        let button_area = center_rect(rows[5], self.retake.width(), Button::HEIGHT);
        self.retake.render(frame, button_area)?;

        Footer::render(frame, footer, &ctx.config.keymap.footer_button("Retake"))?;
        Ok(())
    }

    fn handle_event(&mut self, event: &Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        if self.retake.handle_event(event)? == ComponentAction::Pressed {
            return Ok(ScreenAction::Retake);
        }

        Ok(match ctx.action_for(event) {
            Some(Action::Confirm) => ScreenAction::Retake,
            Some(Action::Help) => ScreenAction::ShowHelp,
            Some(Action::Quit) => ScreenAction::Quit,
            _ => ScreenAction::None,
        })
    }
}
