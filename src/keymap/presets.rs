//! Preset keymaps: Standard, Vim, Emacs.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc
    #[default]
    Standard,
    /// hjkl focus movement
    Vim,
    /// Ctrl+N/P/B/F focus movement
    Emacs,
}

impl KeymapPreset {
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = match self {
            KeymapPreset::Standard => vec![
                KeyBinding::new("up", Action::MoveUp),
                KeyBinding::new("down", Action::MoveDown),
                KeyBinding::new("left", Action::MoveLeft),
                KeyBinding::new("right", Action::MoveRight),
                KeyBinding::new("esc", Action::Cancel),
            ],
            KeymapPreset::Vim => vec![
                KeyBinding::new("k", Action::MoveUp),
                KeyBinding::new("up", Action::MoveUp),
                KeyBinding::new("j", Action::MoveDown),
                KeyBinding::new("down", Action::MoveDown),
                KeyBinding::new("h", Action::MoveLeft),
                KeyBinding::new("left", Action::MoveLeft),
                KeyBinding::new("l", Action::MoveRight),
                KeyBinding::new("right", Action::MoveRight),
                KeyBinding::new("esc", Action::Cancel),
            ],
            KeymapPreset::Emacs => vec![
                KeyBinding::new("ctrl+p", Action::MoveUp),
                KeyBinding::new("up", Action::MoveUp),
                KeyBinding::new("ctrl+n", Action::MoveDown),
                KeyBinding::new("down", Action::MoveDown),
                KeyBinding::new("ctrl+b", Action::MoveLeft),
                KeyBinding::new("left", Action::MoveLeft),
                KeyBinding::new("ctrl+f", Action::MoveRight),
                KeyBinding::new("right", Action::MoveRight),
                KeyBinding::new("ctrl+g", Action::Cancel), // C-g is cancel in emacs
                KeyBinding::new("esc", Action::Cancel),
            ],
        };

        // Shared by every preset
        bindings.extend([
            KeyBinding::new("enter", Action::Confirm),
            KeyBinding::new("space", Action::Confirm),
            KeyBinding::new("1", Action::Choice1),
            KeyBinding::new("2", Action::Choice2),
            KeyBinding::new("3", Action::Choice3),
            KeyBinding::new("4", Action::Choice4),
            KeyBinding::new("q", Action::Quit),
            KeyBinding::new("ctrl+c", Action::Quit),
            KeyBinding::new("?", Action::Help),
        ]);
        bindings
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_can_answer_and_quit() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Vim, KeymapPreset::Emacs] {
            let bindings = preset.bindings();
            for action in [
                Action::Confirm,
                Action::Choice1,
                Action::Choice4,
                Action::Quit,
                Action::Help,
                Action::MoveUp,
                Action::MoveRight,
            ] {
                assert!(
                    bindings.iter().any(|b| b.action == action),
                    "{} preset has no binding for {:?}",
                    preset.name(),
                    action
                );
            }
        }
    }

    #[test]
    fn test_vim_has_hjkl() {
        let bindings = KeymapPreset::Vim.bindings();
        assert!(bindings.iter().any(|b| b.key == "j" && b.action == Action::MoveDown));
        assert!(bindings.iter().any(|b| b.key == "k" && b.action == Action::MoveUp));
        assert!(bindings.iter().any(|b| b.key == "h" && b.action == Action::MoveLeft));
        assert!(bindings.iter().any(|b| b.key == "l" && b.action == Action::MoveRight));
    }

    #[test]
    fn test_preset_serialization() {
        assert_eq!(serde_json::to_string(&KeymapPreset::Vim).unwrap(), "\"vim\"");
        let preset: KeymapPreset = serde_json::from_str("\"emacs\"").unwrap();
        assert_eq!(preset, KeymapPreset::Emacs);
    }
}
