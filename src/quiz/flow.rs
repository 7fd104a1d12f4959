//! Glue between the quiz session and the answer feedback controller.
//!
//! The session decides what is on screen; the controller decides how taps
//! play out over time. [`QuizFlow`] passes the current question down, routes
//! outcomes back up, and drops any outcome that no longer refers to the
//! question on screen.
//!
//! A wrong tap is scored and advanced in the same call, and re-arming the
//! controller for the next question clears the red flash and jiggle. The
//! wrong-answer effect is therefore only observable on a controller driven
//! directly; in the app the next question appears at once.

use super::bank::QuestionBank;
use super::session::{Mode, QuizError, QuizSession};
use crate::feedback::{AnswerFeedbackController, ControlVisual, FeedbackOutcome, FeedbackTimings};
use std::time::Duration;
use tracing::debug;

#[derive(Debug)]
pub struct QuizFlow {
    session: QuizSession,
    feedback: AnswerFeedbackController,
}

impl QuizFlow {
    pub fn new(session: QuizSession, timings: FeedbackTimings) -> Self {
        Self {
            session,
            feedback: AnswerFeedbackController::new(timings),
        }
    }

    /// Convenience constructor with a seeded session and default timings
    pub fn seeded(bank: QuestionBank, seed: u64) -> Self {
        Self::new(QuizSession::with_seed(bank, seed), FeedbackTimings::default())
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Mutable access, e.g. to subscribe listeners
    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    pub fn feedback(&self) -> &AnswerFeedbackController {
        &self.feedback
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    /// Leave the welcome screen and start the first run
    pub fn begin(&mut self) {
        self.session.start();
        self.arm();
    }

    /// Start over from the score screen
    pub fn retake(&mut self) {
        self.session.reset();
        self.arm();
    }

    /// Tap the control showing `answer`. Returns whether the tap was accepted.
    pub fn tap(&mut self, answer: &str) -> Result<bool, QuizError> {
        if self.session.mode() != Mode::InProgress {
            debug!("Ignoring tap on {:?} outside a running quiz", answer);
            return Ok(false);
        }

        let correct = self.session.current_question()?.correct_answer.clone();
        let busy_before = self.feedback.is_busy();
        let outcome = self.feedback.on_tap(answer, &correct);
        let accepted = outcome.is_some() || (!busy_before && self.feedback.is_busy());

        if let Some(outcome) = outcome {
            self.apply(outcome)?;
        }
        Ok(accepted)
    }

    /// Advance effect time by `dt`, applying any outcome that becomes due
    pub fn tick(&mut self, dt: Duration) -> Result<(), QuizError> {
        for outcome in self.feedback.tick(dt) {
            self.apply(outcome)?;
        }
        Ok(())
    }

    /// Visual state of the control showing `answer`
    pub fn visual(&self, answer: &str) -> ControlVisual {
        self.feedback.visual(answer)
    }

    fn apply(&mut self, outcome: FeedbackOutcome) -> Result<(), QuizError> {
        if self.session.mode() != Mode::InProgress {
            debug!("Dropping outcome for question {}: quiz not running", outcome.question_id);
            return Ok(());
        }

        let current = self.session.current_question()?.id;
        if current != outcome.question_id {
            debug!(
                "Dropping stale outcome for question {} (now showing {})",
                outcome.question_id, current
            );
            return Ok(());
        }

        self.session.submit_answer(&outcome.answer)?;
        self.arm();
        Ok(())
    }

    /// Point the feedback controller at whatever the session now shows
    fn arm(&mut self) {
        match self.session.current_question() {
            Ok(question) => {
                let id = question.id;
                self.feedback.begin_question(id, self.session.current_answers());
            }
            Err(_) => self.feedback.clear(),
        }
    }
}
