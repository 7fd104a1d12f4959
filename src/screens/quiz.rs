//! Question screen: the question, a 2x2 grid of answer controls and the
//! running score. Controls are drawn with whatever scale, offset and color
//! the feedback controller reports for them.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::quiz::QuestionId;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::{center_rect, create_standard_layout, offset_rect, scale_rect};
use anyhow::Result;
use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

const COLUMNS: usize = 2;
const QUESTION_HEIGHT: u16 = 5;
const CONTROL_HEIGHT: u16 = 3;

#[derive(Debug, Default)]
pub struct QuizScreen {
    /// Grid slot with keyboard focus
    focus: usize,
    /// Question the focus belongs to
    question: Option<QuestionId>,
    /// Controls as last drawn, in draw order
    controls: Vec<(Rect, String)>,
}

impl QuizScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    fn move_focus(&mut self, action: Action, count: usize) {
        let focus = self.focus;
        self.focus = match action {
            Action::MoveLeft if focus % COLUMNS > 0 => focus - 1,
            Action::MoveRight if focus % COLUMNS + 1 < COLUMNS && focus + 1 < count => focus + 1,
            Action::MoveUp if focus >= COLUMNS => focus - COLUMNS,
            Action::MoveDown if focus + COLUMNS < count => focus + COLUMNS,
            _ => focus,
        };
    }

    /// Answer under a mouse position. Later controls are drawn on top.
    fn hit(&self, column: u16, row: u16) -> Option<&str> {
        self.controls
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(Position::new(column, row)))
            .map(|(_, answer)| answer.as_str())
    }

    fn render_controls(&mut self, frame: &mut Frame, grid: Rect, ctx: &RenderContext) {
        let t = theme();
        let answers = ctx.flow.session().current_answers();
        let rows = answers.len().div_ceil(COLUMNS).max(1);

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
            .split(grid);

        let mut slots = Vec::with_capacity(answers.len());
        for (i, answer) in answers.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .split(row_areas[i / COLUMNS]);
            let cell = cells[i % COLUMNS];
            // leave room around each control so it can grow
            let base = center_rect(cell, cell.width * 2 / 3, CONTROL_HEIGHT);
            slots.push((i, answer, base, ctx.flow.visual(answer)));
        }

        // animated controls last so they overlap their neighbours
        slots.sort_by_key(|(_, _, _, visual)| visual.scale > 1.0);

        self.controls.clear();
        for (i, answer, base, visual) in slots {
            let rect = offset_rect(scale_rect(base, visual.scale, grid), visual.jiggle_offset, grid);
            let style = if visual.red {
                t.button_wrong_style()
            } else {
                t.button_style()
            };
            let focused = i == self.focus;
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(if focused {
                    BorderType::Double
                } else {
                    BorderType::Rounded
                })
                .border_style(if focused {
                    t.border_focused_style()
                } else {
                    t.border_style()
                })
                .style(style);
            let label = Paragraph::new(format!("{}  {}", i + 1, answer))
                .alignment(Alignment::Center)
                .style(style)
                .block(block);

            frame.render_widget(Clear, rect);
            frame.render_widget(label, rect);
            self.controls.push((rect, answer.clone()));
        }
    }
}

impl Screen for QuizScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let session = ctx.flow.session();
        let question = session.current_question()?;

        if self.question != Some(question.id) {
            self.question = Some(question.id);
            self.focus = 0;
        }

        let (header, content, footer) = create_standard_layout(area, 3, 2);

        let answered = session.index();
        let wrong = session.incorrect_count();
        let status = Line::from(vec![
            Span::styled(question.category.clone(), t.emphasis_style()),
            Span::styled("  ·  ", t.muted_style()),
            Span::styled(format!("✓ {}", answered.saturating_sub(wrong)), t.success_style()),
            Span::raw("  "),
            Span::styled(format!("✗ {}", wrong), t.error_style()),
        ]);
        let title = format!("Question {} of {}", answered + 1, session.len());
        Header::render(frame, header, &title, status)?;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(QUESTION_HEIGHT), Constraint::Min(CONTROL_HEIGHT)])
            .split(content);

        let question_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .padding(Padding::horizontal(2));
        frame.render_widget(
            Paragraph::new(question.text.as_str())
                .style(t.text_style().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(question_block),
            chunks[0],
        );

        self.render_controls(frame, chunks[1], ctx);

        Footer::render(frame, footer, &ctx.config.keymap.footer_quiz())?;
        Ok(())
    }

    fn handle_event(&mut self, event: &Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Mouse(mouse) = event {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                if let Some(answer) = self.hit(mouse.column, mouse.row) {
                    return Ok(ScreenAction::Tap(answer.to_string()));
                }
            }
            return Ok(ScreenAction::None);
        }

        let answers = ctx.flow.session().current_answers();
        let Some(action) = ctx.action_for(event) else {
            return Ok(ScreenAction::None);
        };

        let tap = |slot: usize| {
            answers
                .get(slot)
                .map_or(ScreenAction::None, |a| ScreenAction::Tap(a.clone()))
        };

        Ok(match action {
            Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => {
                self.move_focus(action, answers.len());
                ScreenAction::None
            }
            Action::Confirm => tap(self.focus),
            Action::Choice1 | Action::Choice2 | Action::Choice3 | Action::Choice4 => {
                action.choice_index().map_or(ScreenAction::None, tap)
            }
            Action::Help => ScreenAction::ShowHelp,
            Action::Quit => ScreenAction::Quit,
            Action::Cancel => ScreenAction::None,
        })
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.focus = 0;
        self.question = None;
        self.controls.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_moves_within_grid() {
        let mut screen = QuizScreen::new();
        screen.move_focus(Action::MoveRight, 4);
        assert_eq!(screen.focus(), 1);
        screen.move_focus(Action::MoveRight, 4);
        assert_eq!(screen.focus(), 1);
        screen.move_focus(Action::MoveDown, 4);
        assert_eq!(screen.focus(), 3);
        screen.move_focus(Action::MoveDown, 4);
        assert_eq!(screen.focus(), 3);
        screen.move_focus(Action::MoveLeft, 4);
        assert_eq!(screen.focus(), 2);
        screen.move_focus(Action::MoveUp, 4);
        assert_eq!(screen.focus(), 0);
    }

    #[test]
    fn test_focus_skips_missing_slots() {
        let mut screen = QuizScreen::new();
        screen.move_focus(Action::MoveRight, 1);
        assert_eq!(screen.focus(), 0);
        screen.focus = 1;
        screen.move_focus(Action::MoveDown, 3);
        assert_eq!(screen.focus(), 1);
    }

    #[test]
    fn test_hit_prefers_topmost_control() {
        let mut screen = QuizScreen::new();
        screen.controls = vec![
            (Rect::new(0, 0, 10, 3), "under".to_string()),
            (Rect::new(5, 0, 10, 3), "over".to_string()),
        ];
        assert_eq!(screen.hit(6, 1), Some("over"));
        assert_eq!(screen.hit(1, 1), Some("under"));
        assert_eq!(screen.hit(30, 1), None);
    }
}
