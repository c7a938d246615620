//! Key bindings as written in the config file.
//!
//! Bindings are plain strings such as `"ctrl+b"`, `"shift+tab"` or `"f5"`;
//! they are resolved against crossterm key events when a key arrives.

use super::Action;
use anyhow::{anyhow, bail, Result};
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Named keys: accepted spellings, the crossterm code, the label shown in hints
const NAMED_KEYS: &[(&[&str], KeyCode, &str)] = &[
    (&["up"], KeyCode::Up, "↑"),
    (&["down"], KeyCode::Down, "↓"),
    (&["left"], KeyCode::Left, "←"),
    (&["right"], KeyCode::Right, "→"),
    (&["home"], KeyCode::Home, "Home"),
    (&["end"], KeyCode::End, "End"),
    (&["pageup", "pgup"], KeyCode::PageUp, "PgUp"),
    (&["pagedown", "pgdn"], KeyCode::PageDown, "PgDn"),
    (&["enter", "return"], KeyCode::Enter, "Enter"),
    (&["esc", "escape"], KeyCode::Esc, "Esc"),
    (&["space"], KeyCode::Char(' '), "Space"),
    (&["tab"], KeyCode::Tab, "Tab"),
    (&["backtab"], KeyCode::BackTab, "Shift+Tab"),
    (&["backspace", "bs"], KeyCode::Backspace, "Backspace"),
    (&["delete", "del"], KeyCode::Delete, "Del"),
];

const MODIFIERS: &[(&[&str], KeyModifiers, &str)] = &[
    (&["ctrl", "control"], KeyModifiers::CONTROL, "Ctrl"),
    (&["alt", "option"], KeyModifiers::ALT, "Alt"),
    (&["shift"], KeyModifiers::SHIFT, "Shift"),
];

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string, e.g. `"esc"` or `"ctrl+h"`
    pub key: String,
    pub action: Action,
    /// Shown in the help overlay instead of the action's own description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A key string resolved to what crossterm reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl ParsedKey {
    /// Shift is dropped for printable characters (the character already
    /// carries it) and Shift+Tab is folded into BackTab.
    fn normalized(self) -> Self {
        let shift = KeyModifiers::SHIFT;
        let code = match self.code {
            KeyCode::Tab if self.modifiers.contains(shift) => KeyCode::BackTab,
            code => code,
        };
        let modifiers = match code {
            KeyCode::Char(_) | KeyCode::BackTab => self.modifiers.difference(shift),
            _ => self.modifiers,
        };
        Self { code, modifiers }
    }
}

impl KeyBinding {
    /// Binding without a description override
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Unparseable key strings never match
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Ok(bound) = parse_key_string(&self.key) else {
            return false;
        };
        bound.normalized() == ParsedKey { code, modifiers }.normalized()
    }

    /// Label for hints and the help overlay, e.g. `Ctrl+B`
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    /// Custom description, or the action's own
    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

fn lookup_named(name: &str) -> Option<(KeyCode, &'static str)> {
    NAMED_KEYS
        .iter()
        .find(|(names, _, _)| names.contains(&name))
        .map(|(_, code, label)| (*code, *label))
}

fn lookup_modifier(name: &str) -> Option<(KeyModifiers, &'static str)> {
    MODIFIERS
        .iter()
        .find(|(names, _, _)| names.contains(&name))
        .map(|(_, modifier, label)| (*modifier, *label))
}

/// Parse `"ctrl+shift+n"` style strings. A lone `"+"` is the plus key.
pub fn parse_key_string(key: &str) -> Result<ParsedKey> {
    let key = key.trim().to_lowercase();
    if key == "+" {
        return Ok(ParsedKey {
            code: KeyCode::Char('+'),
            modifiers: KeyModifiers::NONE,
        });
    }

    let mut parts: Vec<&str> = key.split('+').map(str::trim).collect();
    let last = parts.pop().unwrap_or_default();

    let mut modifiers = KeyModifiers::NONE;
    for part in parts {
        let (modifier, _) =
            lookup_modifier(part).ok_or_else(|| anyhow!("Unknown modifier: {}", part))?;
        modifiers |= modifier;
    }

    Ok(ParsedKey {
        code: parse_key_code(last)?,
        modifiers,
    })
}

fn parse_key_code(key: &str) -> Result<KeyCode> {
    if let Some((code, _)) = lookup_named(key) {
        return Ok(code);
    }
    if let Some(n) = key.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&n) {
            return Ok(KeyCode::F(n));
        }
        bail!("Function key out of range: {}", key);
    }
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(KeyCode::Char(c)),
        _ => bail!("Unknown key: {}", key),
    }
}

/// `"ctrl+b"` becomes `"Ctrl+B"`, `"up"` becomes `"↑"`
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            if let Some((_, label)) = lookup_modifier(&part) {
                label.to_string()
            } else if let Some((_, label)) = lookup_named(&part) {
                label.to_string()
            } else if part.chars().count() == 1 || (part.starts_with('f') && part.len() <= 3) {
                part.to_uppercase()
            } else {
                part
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_chorded() {
        let plain = parse_key_string("q").unwrap();
        assert_eq!(plain.code, KeyCode::Char('q'));
        assert_eq!(plain.modifiers, KeyModifiers::NONE);

        let chord = parse_key_string("Ctrl+B").unwrap();
        assert_eq!(chord.code, KeyCode::Char('b'));
        assert_eq!(chord.modifiers, KeyModifiers::CONTROL);

        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));
        assert_eq!(parse_key_string("pgdn").unwrap().code, KeyCode::PageDown);
    }

    #[test]
    fn test_parse_function_keys() {
        assert_eq!(parse_key_string("f5").unwrap().code, KeyCode::F(5));
        assert!(parse_key_string("f13").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(parse_key_string("hyper+x").is_err());
        assert!(parse_key_string("carpool").is_err());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(format_key_display("ctrl+b"), "Ctrl+B");
        assert_eq!(format_key_display("down"), "↓");
        assert_eq!(format_key_display("f5"), "F5");
        assert_eq!(format_key_display("esc"), "Esc");
        assert_eq!(format_key_display("backtab"), "Shift+Tab");
    }

    #[test]
    fn test_matches_respects_modifiers() {
        let binding = KeyBinding::new("ctrl+h", Action::GoHome);
        assert!(binding.matches(KeyCode::Char('h'), KeyModifiers::CONTROL));
        assert!(!binding.matches(KeyCode::Char('h'), KeyModifiers::NONE));
        assert!(!binding.matches(KeyCode::Char('j'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_shift_folded_into_printable_and_backtab() {
        let help = KeyBinding::new("?", Action::Help);
        assert!(help.matches(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert!(help.matches(KeyCode::Char('?'), KeyModifiers::NONE));

        for key in ["backtab", "shift+tab"] {
            let binding = KeyBinding::new(key, Action::PrevField);
            assert!(binding.matches(KeyCode::BackTab, KeyModifiers::SHIFT));
            assert!(binding.matches(KeyCode::Tab, KeyModifiers::SHIFT));
        }
    }
}
