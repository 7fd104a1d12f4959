//! Screen routing and input handling, independent of the real terminal.
//!
//! [`UiState`] owns the quiz and the three screens. It draws into any ratatui
//! frame and takes crossterm events, so it runs the same against a
//! `TestBackend` as inside the app loop.

use crate::components::HelpOverlay;
use crate::config::Config;
use crate::quiz::{Mode, QuizFlow};
use crate::screens::{
    QuizScreen, RenderContext, Screen, ScreenAction, ScreenContext, ScoreScreen, WelcomeScreen,
};
use crate::styles::theme;
use anyhow::Result;
use crate::keymap::Action;
use crossterm::event::{Event, MouseEventKind};
use ratatui::widgets::Block;
use ratatui::Frame;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

pub struct UiState {
    config: Config,
    config_path: PathBuf,
    flow: QuizFlow,
    welcome: WelcomeScreen,
    quiz: QuizScreen,
    score: ScoreScreen,
    help_visible: bool,
    should_quit: bool,
    /// Mode the screens were last synced to
    last_mode: Option<Mode>,
}

impl UiState {
    pub fn new(config: Config, config_path: PathBuf, flow: QuizFlow) -> Self {
        Self {
            config,
            config_path,
            flow,
            welcome: WelcomeScreen::new(),
            quiz: QuizScreen::new(),
            score: ScoreScreen::new(),
            help_visible: false,
            should_quit: false,
            last_mode: None,
        }
    }

    pub fn flow(&self) -> &QuizFlow {
        &self.flow
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Draw the screen for the current mode, plus the help overlay if open
    pub fn render(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme().background_style()), area);

        let ctx = RenderContext::new(&self.config, &self.flow);
        match self.flow.mode() {
            Mode::Welcome => self.welcome.render(frame, area, &ctx)?,
            Mode::InProgress => self.quiz.render(frame, area, &ctx)?,
            Mode::Finished => self.score.render(frame, area, &ctx)?,
        }

        if self.help_visible {
            let config_path = self.config_path.display().to_string();
            HelpOverlay::render(frame, area, &self.config.keymap, &config_path)?;
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if self.help_visible {
            let action = ScreenContext::new(&self.config.keymap, &self.flow).action_for(&event);
            match action {
                Some(Action::Cancel | Action::Help) => self.help_visible = false,
                Some(Action::Quit) => return self.apply(ScreenAction::Quit),
                _ => {
                    if let Event::Mouse(mouse) = &event {
                        if matches!(mouse.kind, MouseEventKind::Down(_)) {
                            self.help_visible = false;
                        }
                    }
                }
            }
            return Ok(());
        }

        let ctx = ScreenContext::new(&self.config.keymap, &self.flow);
        let action = match self.flow.mode() {
            Mode::Welcome => self.welcome.handle_event(&event, &ctx)?,
            Mode::InProgress => self.quiz.handle_event(&event, &ctx)?,
            Mode::Finished => self.score.handle_event(&event, &ctx)?,
        };
        self.apply(action)
    }

    /// Apply a screen action to the quiz
    pub fn apply(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Begin => {
                if self.flow.mode() == Mode::Welcome {
                    self.flow.begin();
                }
            }
            ScreenAction::Tap(answer) => {
                if !self.flow.tap(&answer)? {
                    debug!("Tap on {:?} ignored", answer);
                }
            }
            ScreenAction::Retake => {
                if self.flow.mode() == Mode::Finished {
                    self.flow.retake();
                }
            }
            ScreenAction::ShowHelp => self.help_visible = true,
            ScreenAction::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
        self.sync_screen()
    }

    /// Advance feedback effects by `dt` of wall-clock time
    pub fn tick(&mut self, dt: Duration) -> Result<()> {
        self.flow.tick(dt)?;
        self.sync_screen()
    }

    fn sync_screen(&mut self) -> Result<()> {
        let mode = self.flow.mode();
        if self.last_mode == Some(mode) {
            return Ok(());
        }
        debug!("Screen changed: {:?} -> {:?}", self.last_mode, mode);
        self.last_mode = Some(mode);

        let ctx = ScreenContext::new(&self.config.keymap, &self.flow);
        match mode {
            Mode::Welcome => self.welcome.on_enter(&ctx),
            Mode::InProgress => self.quiz.on_enter(&ctx),
            Mode::Finished => self.score.on_enter(&ctx),
        }
    }
}
