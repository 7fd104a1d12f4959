//! Quizzo - a terminal trivia quiz
//!
//! The quiz core (question bank, session, answer feedback with a virtual-time
//! scheduler) is independent of the terminal. The TUI layer on top draws it
//! with ratatui and feeds it crossterm input.

// Core modules
pub mod feedback;
pub mod quiz;

// Application
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use feedback::{AnswerFeedbackController, FeedbackTimings, Scheduler};
pub use quiz::{Mode, Question, QuestionBank, QuizFlow, QuizSession, Score};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
