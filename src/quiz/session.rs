//! Quiz progression and scoring.
//!
//! A [`QuizSession`] owns one run through the bank: the shuffled question
//! order, the position in it, the incorrect-answer count and the screen mode.
//! The presentation layer reads it through accessors and can subscribe to
//! [`QuizEvent`]s instead of polling for transitions.

use super::bank::{Question, QuestionBank, QuestionId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use thiserror::Error;
use tracing::info;

/// Top-level screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Welcome,
    InProgress,
    Finished,
}

/// Running or final tally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub correct: usize,
    pub incorrect: usize,
}

impl Score {
    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} correct, {} incorrect", self.correct, self.incorrect)
    }
}

/// Misuse of the session API. Not reachable through the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("question index {index} is out of range ({len} questions)")]
    OutOfRange { index: usize, len: usize },

    #[error("quiz is not in progress (mode: {0:?})")]
    NotInProgress(Mode),
}

/// Transitions reported to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// A fresh run began (start or retake)
    Started { questions: usize },
    /// A question became current; `position` is 1-based
    QuestionShown {
        question_id: QuestionId,
        position: usize,
        total: usize,
    },
    AnswerSubmitted {
        question_id: QuestionId,
        answer: String,
        correct: bool,
    },
    Finished(Score),
}

/// Callback invoked for every [`QuizEvent`]
pub type Listener = Box<dyn FnMut(&QuizEvent)>;

/// One run of the quiz from start to finish.
pub struct QuizSession {
    bank: QuestionBank,
    /// Permutation of bank indices
    order: Vec<usize>,
    index: usize,
    incorrect: usize,
    mode: Mode,
    /// Current question's answers in display order
    answers: Vec<String>,
    rng: StdRng,
    listeners: Vec<Listener>,
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("order", &self.order)
            .field("index", &self.index)
            .field("incorrect", &self.incorrect)
            .field("mode", &self.mode)
            .field("answers", &self.answers)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl QuizSession {
    /// Create a session on the welcome screen, seeded from OS entropy
    pub fn new(bank: QuestionBank) -> Self {
        Self::with_rng(bank, StdRng::from_entropy())
    }

    /// Create a session with a deterministic shuffle sequence
    pub fn with_seed(bank: QuestionBank, seed: u64) -> Self {
        Self::with_rng(bank, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(bank: QuestionBank, rng: StdRng) -> Self {
        let order = (0..bank.len()).collect();
        let mut session = Self {
            bank,
            order,
            index: 0,
            incorrect: 0,
            mode: Mode::Welcome,
            answers: Vec::new(),
            rng,
            listeners: Vec::new(),
        };
        session.order.shuffle(&mut session.rng);
        session
    }

    /// Register a callback for every subsequent transition
    pub fn subscribe(&mut self, listener: impl FnMut(&QuizEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: QuizEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Begin a fresh run: new question order, counters zeroed
    pub fn start(&mut self) {
        self.order.shuffle(&mut self.rng);
        self.index = 0;
        self.incorrect = 0;
        self.mode = Mode::InProgress;
        self.shuffle_answers();

        info!("Quiz started with {} questions", self.order.len());
        self.emit(QuizEvent::Started {
            questions: self.order.len(),
        });
        self.emit_question_shown();
    }

    /// Retake the quiz. Goes straight to a new run, skipping the welcome screen.
    pub fn reset(&mut self) {
        info!("Quiz reset after {} ({:?})", self.score(), self.mode);
        self.start();
    }

    pub fn current_question(&self) -> Result<&Question, QuizError> {
        if self.mode != Mode::InProgress {
            return Err(QuizError::NotInProgress(self.mode));
        }
        self.order
            .get(self.index)
            .and_then(|&i| self.bank.get(i))
            .ok_or(QuizError::OutOfRange {
                index: self.index,
                len: self.order.len(),
            })
    }

    /// Answers of the current question in display order
    pub fn current_answers(&self) -> &[String] {
        &self.answers
    }

    /// Record an answer for the current question and move on.
    ///
    /// A wrong answer counts against the score and still advances; there is
    /// no second attempt. Returns whether the answer was correct.
    pub fn submit_answer(&mut self, selected: &str) -> Result<bool, QuizError> {
        let question = self.current_question()?;
        let question_id = question.id;
        let correct = question.is_correct(selected);
        if !correct {
            self.incorrect += 1;
        }

        self.emit(QuizEvent::AnswerSubmitted {
            question_id,
            answer: selected.to_string(),
            correct,
        });
        self.advance();
        Ok(correct)
    }

    /// Move to the next question, or finish after the last one
    pub fn advance(&mut self) {
        if self.mode != Mode::InProgress {
            return;
        }

        if self.index + 1 < self.order.len() {
            self.index += 1;
            self.shuffle_answers();
            self.emit_question_shown();
        } else {
            self.mode = Mode::Finished;
            let score = self.score();
            info!("Quiz finished: {}", score);
            self.emit(QuizEvent::Finished(score));
        }
    }

    /// Correct and incorrect counts so far
    pub fn score(&self) -> Score {
        let len = self.order.len();
        Score {
            correct: len.saturating_sub(self.incorrect),
            incorrect: self.incorrect,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn incorrect_count(&self) -> usize {
        self.incorrect
    }

    /// Number of questions in a run
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Question ids in the order this run asks them
    pub fn order(&self) -> Vec<QuestionId> {
        self.order
            .iter()
            .filter_map(|&i| self.bank.get(i))
            .map(|q| q.id)
            .collect()
    }

    fn shuffle_answers(&mut self) {
        let Some(question) = self.order.get(self.index).and_then(|&i| self.bank.get(i)) else {
            self.answers.clear();
            return;
        };
        let mut answers = question.answers.clone();
        answers.shuffle(&mut self.rng);
        self.answers = answers;
    }

    fn emit_question_shown(&mut self) {
        let Ok(question) = self.current_question() else {
            return;
        };
        let event = QuizEvent::QuestionShown {
            question_id: question.id,
            position: self.index + 1,
            total: self.order.len(),
        };
        self.emit(event);
    }
}
