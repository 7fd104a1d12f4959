//! Key binding strings such as "ctrl+n", "esc" or "?" and their parsing.

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A key combination mapped to an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string, e.g. "j", "down", "ctrl+n"
    pub key: String,

    pub action: Action,

    /// Overrides the action's own description in the help overlay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Check if this binding matches a key event.
    ///
    /// Shift is ignored for character keys, since terminals report "?" and
    /// uppercase letters with or without it.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Ok(parsed) = self.parse() else {
            return false;
        };
        if parsed.code != code {
            return false;
        }
        if matches!(code, KeyCode::Char(_)) {
            parsed.modifiers.difference(KeyModifiers::SHIFT) == modifiers.difference(KeyModifiers::SHIFT)
        } else {
            parsed.modifiers == modifiers
        }
    }

    pub fn parse(&self) -> Result<ParsedKey, String> {
        parse_key_string(&self.key)
    }

    /// Display form for footers and help, e.g. "Ctrl+N"
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

/// Parse "ctrl+shift+n" style strings
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    // "+" on its own is a key, not a separator
    if key == "+" {
        return Ok(ParsedKey {
            code: KeyCode::Char('+'),
            modifiers: KeyModifiers::NONE,
        });
    }

    let mut parts: Vec<&str> = key.split('+').map(str::trim).collect();
    let key_part = parts.pop().unwrap_or_default();

    let mut modifiers = KeyModifiers::NONE;
    for part in parts {
        modifiers |= match part {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" => KeyModifiers::SUPER,
            _ => return Err(format!("Unknown modifier: {}", part)),
        };
    }

    Ok(ParsedKey {
        code: parse_key_code(key_part)?,
        modifiers,
    })
}

fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let code = match key {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                (Some('f'), Some(_)) => key[1..]
                    .parse::<u8>()
                    .map(KeyCode::F)
                    .map_err(|_| format!("Unknown key: {}", key))?,
                _ => return Err(format!("Unknown key: {}", key)),
            }
        }
    };
    Ok(code)
}

/// Format a key string for display ("ctrl+n" -> "Ctrl+N", "up" -> "↑")
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "super" | "meta" | "cmd" => "Cmd".to_string(),
                "up" => "↑".to_string(),
                "down" => "↓".to_string(),
                "left" => "←".to_string(),
                "right" => "→".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Space".to_string(),
                "tab" => "Tab".to_string(),
                "backspace" => "Backspace".to_string(),
                _ => part.to_uppercase(),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_and_named_keys() {
        assert_eq!(parse_key_string("j").unwrap().code, KeyCode::Char('j'));
        assert_eq!(parse_key_string("3").unwrap().code, KeyCode::Char('3'));
        assert_eq!(parse_key_string("enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_string("f5").unwrap().code, KeyCode::F(5));
    }

    #[test]
    fn test_parse_modifiers() {
        let parsed = parse_key_string("ctrl+shift+n").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('n'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_key_string("hyper+x").is_err());
        assert!(parse_key_string("nonsense").is_err());
    }

    #[test]
    fn test_question_mark_matches_with_shift() {
        let binding = KeyBinding::new("?", Action::Help);
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::NONE));
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert!(!binding.matches(KeyCode::Char('?'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_ctrl_binding_requires_ctrl() {
        let binding = KeyBinding::new("ctrl+n", Action::MoveDown);
        assert!(binding.matches(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert!(!binding.matches(KeyCode::Char('n'), KeyModifiers::NONE));
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key_display("ctrl+n"), "Ctrl+N");
        assert_eq!(format_key_display("up"), "↑");
        assert_eq!(format_key_display("enter"), "Enter");
        assert_eq!(format_key_display("?"), "?");
    }
}
