//! Shared helpers for the integration tests.

#![allow(dead_code)]

use quizzo::quiz::{Question, QuestionBank};
use std::path::PathBuf;
use tempfile::TempDir;

/// Three questions with two answers each, so correct and wrong picks are
/// easy to name
pub fn small_bank() -> QuestionBank {
    QuestionBank::new(vec![
        Question::new(1, "Math", "2 + 2?", &["4", "5"], "4"),
        Question::new(2, "Math", "3 × 3?", &["6", "9"], "9"),
        Question::new(3, "Science", "Water?", &["H2O", "CO2"], "H2O"),
    ])
    .expect("small bank is valid")
}

/// Some answer of `question` that is not the correct one
pub fn wrong_answer(question: &Question) -> String {
    question
        .answers
        .iter()
        .find(|a| **a != question.correct_answer)
        .cloned()
        .expect("every question has a wrong answer")
}

/// Isolated directory holding config and bank files for one test
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `content` to `name` inside the environment and return its path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("write test file");
        path
    }
}
