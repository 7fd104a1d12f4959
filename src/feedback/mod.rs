//! Timed answer feedback: the effect scheduler and the per-control controller.

pub mod controller;
pub mod scheduler;

pub use controller::{
    AnswerFeedbackController, ControlVisual, FeedbackOutcome, FeedbackTimings, Phase,
};
pub use scheduler::{Scheduler, TaskId};
