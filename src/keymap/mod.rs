//! Keymap configuration
//!
//! Customizable keyboard shortcuts with preset keymaps (standard, vim, emacs)
//! and user overrides from the config file.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined bindings, checked before the preset
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Resolve a key event to an action, checking overrides first
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Overrides followed by the preset bindings they don't shadow.
    /// Overriding an action hides every preset binding for it.
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|preset| !self.overrides.iter().any(|o| o.action == preset.action)),
        );
        bindings
    }

    /// Display string of the first key bound to `action`
    pub fn key_for(&self, action: Action) -> String {
        self.all_bindings()
            .into_iter()
            .find(|b| b.action == action)
            .map(|b| b.display())
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Footer text for the question screen
    pub fn footer_quiz(&self) -> String {
        format!(
            "{}-{}: Answer | {}/{}/{}/{}: Move | {}: Select | {}: Help | {}: Quit",
            self.key_for(Action::Choice1),
            self.key_for(Action::Choice4),
            self.key_for(Action::MoveUp),
            self.key_for(Action::MoveDown),
            self.key_for(Action::MoveLeft),
            self.key_for(Action::MoveRight),
            self.key_for(Action::Confirm),
            self.key_for(Action::Help),
            self.key_for(Action::Quit),
        )
    }

    /// Footer text for screens with a single button
    pub fn footer_button(&self, label: &str) -> String {
        format!(
            "{}: {} | {}: Help | {}: Quit",
            self.key_for(Action::Confirm),
            label,
            self.key_for(Action::Help),
            self.key_for(Action::Quit),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
    }

    #[test]
    fn test_digits_pick_answers() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.get_action(KeyCode::Char('1'), KeyModifiers::NONE),
            Some(Action::Choice1)
        );
        assert_eq!(
            keymap.get_action(KeyCode::Char('4'), KeyModifiers::NONE),
            Some(Action::Choice4)
        );
    }

    #[test]
    fn test_override_takes_precedence() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("q", Action::Help)],
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Help)
        );
        // '?' was the preset Help key and is shadowed by the override
        assert_eq!(keymap.get_action(KeyCode::Char('?'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_vim_preset() {
        let keymap = Keymap {
            preset: KeymapPreset::Vim,
            overrides: Vec::new(),
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(Action::MoveDown)
        );
    }

    #[test]
    fn test_footer_uses_bound_keys() {
        let keymap = Keymap::default();
        assert_eq!(keymap.footer_button("Begin"), "Enter: Begin | ?: Help | Q: Quit");
    }
}
