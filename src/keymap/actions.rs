//! Semantic actions the quiz screens respond to.

use serde::{Deserialize, Serialize};

/// Everything a key press can mean to the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Answer grid focus ============
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // ============ Answering ============
    /// Tap the focused answer / press the screen's button
    Confirm,
    /// Tap the first answer in the grid directly
    Choice1,
    Choice2,
    Choice3,
    Choice4,

    // ============ Global ============
    /// Close an overlay
    Cancel,
    Quit,
    Help,
}

impl Action {
    /// Human-readable description for the help overlay
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Focus answer above",
            Action::MoveDown => "Focus answer below",
            Action::MoveLeft => "Focus answer to the left",
            Action::MoveRight => "Focus answer to the right",
            Action::Confirm => "Select / Begin / Retake",
            Action::Choice1 => "Pick answer 1",
            Action::Choice2 => "Pick answer 2",
            Action::Choice3 => "Pick answer 3",
            Action::Choice4 => "Pick answer 4",
            Action::Cancel => "Close overlay",
            Action::Quit => "Quit",
            Action::Help => "Show help",
        }
    }

    /// Group heading in the help overlay
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => {
                "Navigation"
            }
            Action::Confirm
            | Action::Choice1
            | Action::Choice2
            | Action::Choice3
            | Action::Choice4 => "Answering",
            Action::Cancel | Action::Quit | Action::Help => "Global",
        }
    }

    /// Grid slot picked directly by this action, if any
    pub fn choice_index(&self) -> Option<usize> {
        match self {
            Action::Choice1 => Some(0),
            Action::Choice2 => Some(1),
            Action::Choice3 => Some(2),
            Action::Choice4 => Some(3),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_category() {
        assert_eq!(Action::MoveUp.category(), "Navigation");
        assert_eq!(Action::Choice3.category(), "Answering");
        assert_eq!(Action::Quit.category(), "Global");
    }

    #[test]
    fn test_choice_index() {
        assert_eq!(Action::Choice1.choice_index(), Some(0));
        assert_eq!(Action::Choice4.choice_index(), Some(3));
        assert_eq!(Action::Confirm.choice_index(), None);
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::Choice2).unwrap();
        assert_eq!(json, "\"choice2\"");
        let action: Action = serde_json::from_str("\"move_down\"").unwrap();
        assert_eq!(action, Action::MoveDown);
    }
}
