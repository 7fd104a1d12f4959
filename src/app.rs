use crate::config::Config;
use crate::quiz::QuizFlow;
use crate::tui::Tui;
use crate::ui::UiState;
use anyhow::Result;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Main application: the terminal plus the quiz UI it drives
pub struct App {
    tui: Tui,
    ui_state: UiState,
    frame_interval: Duration,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf, flow: QuizFlow) -> Result<Self> {
        let tui = Tui::new()?;
        let frame_interval = config.frame_interval();
        Ok(Self {
            tui,
            ui_state: UiState::new(config, config_path, flow),
            frame_interval,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        info!("Quizzo started");

        let result = self.event_loop();

        // Restore the terminal even if the loop failed
        self.tui.exit()?;
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut last_tick = Instant::now();

        loop {
            // Feed real elapsed time into the feedback effects
            let now = Instant::now();
            self.ui_state.tick(now.duration_since(last_tick))?;
            last_tick = now;

            self.tui.terminal_mut().draw(|frame| {
                if let Err(e) = self.ui_state.render(frame) {
                    error!("Render failed: {:#}", e);
                }
            })?;

            if self.ui_state.should_quit() {
                break;
            }

            // Poll at frame rate so animations keep moving without input
            if let Some(event) = self.tui.poll_event(self.frame_interval)? {
                self.ui_state.handle_event(event)?;
            }
        }

        let score = self.ui_state.flow().session().score();
        info!("Quizzo exiting ({:?}, {})", self.ui_state.flow().mode(), score);
        Ok(())
    }
}
