//! Welcome screen: greeting and the Begin button.

use crate::components::{Button, Component, ComponentAction, Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::{center_rect, create_standard_layout};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const WELCOME_TITLE: &str = "Welcome to Quizzo!";

pub struct WelcomeScreen {
    begin: Button,
}

impl Default for WelcomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl WelcomeScreen {
    pub fn new() -> Self {
        Self {
            begin: Button::new("Begin"),
        }
    }
}

impl Screen for WelcomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header, content, footer) = create_standard_layout(area, 3, 2);

        let bank = ctx.flow.session().bank();
        let status = Line::from(vec![
            Span::styled(format!("{} questions", bank.len()), t.emphasis_style()),
            Span::styled(" · ", t.muted_style()),
            Span::styled(bank.categories().join(", "), t.text_style()),
        ]);
        Header::render(frame, header, "Quizzo", status)?;

        // title, blank, tagline, blank, button
        let body = center_rect(content, content.width, 4 + Button::HEIGHT);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(Button::HEIGHT),
            ])
            .split(body);

        frame.render_widget(
            Paragraph::new(WELCOME_TITLE)
                .style(t.title_style())
                .alignment(Alignment::Center),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new("Pick the right answer. Wrong picks count against you.")
                .style(t.muted_style())
                .alignment(Alignment::Center),
            rows[2],
        );
        let button_area = center_rect(rows[4], self.begin.width(), Button::HEIGHT);
        self.begin.render(frame, button_area)?;

        Footer::render(frame, footer, &ctx.config.keymap.footer_button("Begin"))?;
        Ok(())
    }

    fn handle_event(&mut self, event: &Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        if self.begin.handle_event(event)? == ComponentAction::Pressed {
            return Ok(ScreenAction::Begin);
        }

        Ok(match ctx.action_for(event) {
            Some(Action::Confirm) => ScreenAction::Begin,
            Some(Action::Help) => ScreenAction::ShowHelp,
            Some(Action::Quit) => ScreenAction::Quit,
            _ => ScreenAction::None,
        })
    }
}
