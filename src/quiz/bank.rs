//! Question bank: the static, validated set of quiz questions.
//!
//! A bank is built once at startup, either from the compiled-in sample data or
//! from a TOML file, and is read-only afterwards. Every question is validated
//! when the bank is built so a malformed bank never reaches a running quiz.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Fewest answers a question may offer
pub const MIN_ANSWERS: usize = 2;
/// Most answers a question may offer (the answer grid is 2x2)
pub const MAX_ANSWERS: usize = 4;

/// Stable identifier of a question within a bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reasons a question bank is rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,

    #[error("question {id} has no text")]
    EmptyText { id: QuestionId },

    #[error("question {id} has {count} answers (expected 2-4)")]
    AnswerCount { id: QuestionId, count: usize },

    #[error("question {id}: correct answer {answer:?} is not one of its answers")]
    CorrectAnswerMissing { id: QuestionId, answer: String },

    #[error("question {id} lists answer {answer:?} more than once")]
    DuplicateAnswer { id: QuestionId, answer: String },

    #[error("question id {id} is used more than once")]
    DuplicateId { id: QuestionId },
}

/// A single multiple-choice question. Immutable once the bank is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// Grouping used when listing the bank (e.g. "Geography")
    #[serde(default = "default_category")]
    pub category: String,
    pub text: String,
    pub answers: Vec<String>,
    pub correct_answer: String,
}

fn default_category() -> String {
    "General".to_string()
}

impl Question {
    pub fn new(
        id: u32,
        category: &str,
        text: &str,
        answers: &[&str],
        correct_answer: &str,
    ) -> Self {
        Self {
            id: QuestionId(id),
            category: category.to_string(),
            text: text.to_string(),
            answers: answers.iter().map(|a| (*a).to_string()).collect(),
            correct_answer: correct_answer.to_string(),
        }
    }

    /// Check whether `answer` is the correct one
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    /// Validate the invariants of a single question
    pub fn validate(&self) -> Result<(), BankError> {
        if self.text.trim().is_empty() {
            return Err(BankError::EmptyText { id: self.id });
        }

        let count = self.answers.len();
        if !(MIN_ANSWERS..=MAX_ANSWERS).contains(&count) {
            return Err(BankError::AnswerCount { id: self.id, count });
        }

        let mut seen = HashSet::new();
        for answer in &self.answers {
            if !seen.insert(answer.as_str()) {
                return Err(BankError::DuplicateAnswer {
                    id: self.id,
                    answer: answer.clone(),
                });
            }
        }

        if !seen.contains(self.correct_answer.as_str()) {
            return Err(BankError::CorrectAnswerMissing {
                id: self.id,
                answer: self.correct_answer.clone(),
            });
        }

        Ok(())
    }
}

/// On-disk layout of a bank file
#[derive(Debug, Serialize, Deserialize)]
struct BankFile {
    #[serde(default)]
    questions: Vec<Question>,
}

/// A validated, read-only set of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank, validating every question and the uniqueness of ids
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        let mut ids = HashSet::new();
        for question in &questions {
            question.validate()?;
            if !ids.insert(question.id) {
                return Err(BankError::DuplicateId { id: question.id });
            }
        }

        Ok(Self { questions })
    }

    /// The compiled-in sample bank (9 questions across 3 categories)
    pub fn builtin() -> Result<Self, BankError> {
        Self::new(vec![
            // Geography
            Question::new(1, "Geography", "Which country has the most deserts?", &["Australia", "Brazil", "Canada", "Russia"], "Australia"),
            Question::new(2, "Geography", "What is the longest river in the world?", &["Amazon", "Nile", "Yangtze", "Mississippi"], "Nile"),
            Question::new(3, "Geography", "Which continent is the largest by land area?", &["Africa", "Asia", "Europe", "North America"], "Asia"),
            // Math
            Question::new(4, "Math", "What is the square root of 16?", &["2", "4", "6", "8"], "4"),
            Question::new(5, "Math", "What is 5 × 3?", &["10", "12", "15", "18"], "15"),
            Question::new(6, "Math", "How many sides does a hexagon have?", &["4", "5", "6", "7"], "6"),
            // Science
            Question::new(7, "Science", "Which planet is known as the Red Planet?", &["Venus", "Mars", "Jupiter", "Saturn"], "Mars"),
            Question::new(8, "Science", "What gas do plants primarily use for photosynthesis?", &["Oxygen", "Nitrogen", "Carbon Dioxide", "Hydrogen"], "Carbon Dioxide"),
            Question::new(9, "Science", "What is the chemical symbol for water?", &["H2O", "CO2", "O2", "NaCl"], "H2O"),
        ])
    }

    /// Parse and validate a bank from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: BankFile = toml::from_str(content).context("Failed to parse question bank")?;
        let bank = Self::new(file.questions).context("Invalid question bank")?;
        Ok(bank)
    }

    /// Load and validate a bank file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read question bank: {:?}", path))?;
        let bank = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load question bank: {:?}", path))?;
        tracing::info!("Loaded {} questions from {:?}", bank.len(), path);
        Ok(bank)
    }

    /// Serialize the bank back to its TOML file layout
    pub fn to_toml_string(&self) -> Result<String> {
        let file = BankFile {
            questions: self.questions.clone(),
        };
        toml::to_string_pretty(&file).context("Failed to serialize question bank")
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Category names in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for question in &self.questions {
            if !categories.contains(&question.category.as_str()) {
                categories.push(&question.category);
            }
        }
        categories
    }

    /// Questions belonging to `category`
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Question> + 'a {
        self.questions.iter().filter(move |q| q.category == category)
    }
}
