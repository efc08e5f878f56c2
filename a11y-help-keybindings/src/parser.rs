//! Binding text parser.
//!
//! Parses human-readable binding strings like "Ctrl-ArrowRight" or "Cmd+H"
//! into [`KeyCombo`] values. Both `-` and `+` are accepted as separators;
//! `Display` always renders the canonical `-` form used by the registry.

use std::fmt;
use thiserror::Error;
use winit::keyboard::NamedKey;

/// Error type for binding parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty key combination")]
    Empty,
    #[error("Empty segment in key combination '{0}'")]
    EmptySegment(String),
    #[error("Key combination ends with modifier, no key specified")]
    MissingKey,
    #[error("Multiple keys specified: already have key, found '{0}'")]
    MultipleKeys(String),
    #[error("Unknown key: '{0}'")]
    UnknownKey(String),
}

/// Set of active modifiers for a key combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    /// Cmd on macOS, Super/Windows key elsewhere
    pub super_key: bool,
    /// If true, this represents CmdOrCtrl (Cmd on macOS, Ctrl elsewhere)
    pub cmd_or_ctrl: bool,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.alt || self.shift || self.super_key || self.cmd_or_ctrl)
    }
}

/// The key part of a combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParsedKey {
    /// A single character key (e.g., 'H', '1'), stored uppercase
    Character(char),
    /// A named key (e.g., ArrowUp, F1, Enter)
    Named(NamedKey),
}

/// A parsed key combination (modifiers + key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    pub key: ParsedKey,
}

impl KeyCombo {
    /// Replace `CmdOrCtrl` with the concrete modifier for the target:
    /// Cmd when `mac` is true, Ctrl otherwise.
    pub fn resolve_cmd_or_ctrl(mut self, mac: bool) -> Self {
        if self.modifiers.cmd_or_ctrl {
            self.modifiers.cmd_or_ctrl = false;
            if mac {
                self.modifiers.super_key = true;
            } else {
                self.modifiers.ctrl = true;
            }
        }
        self
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.cmd_or_ctrl {
            parts.push("CmdOrCtrl".to_string());
        }
        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.super_key {
            parts.push("Cmd".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }

        match &self.key {
            ParsedKey::Character('-') => parts.push("Minus".to_string()),
            ParsedKey::Character('+') => parts.push("Plus".to_string()),
            ParsedKey::Character(c) => parts.push(c.to_string()),
            ParsedKey::Named(n) => parts.push(format!("{:?}", n)),
        }

        write!(f, "{}", parts.join("-"))
    }
}

/// Parse a binding string into a KeyCombo.
///
/// Supported format: "Modifier-Modifier-Key" (or with `+`)
///
/// Modifiers:
/// - `Ctrl`, `Control` - Control key
/// - `Alt`, `Option` - Alt/Option key
/// - `Shift` - Shift key
/// - `Cmd`, `Command`, `Super`, `Meta`, `Win` - Cmd/Super key
/// - `CmdOrCtrl` - Cmd on macOS, Ctrl on other platforms
///
/// Keys:
/// - Single characters: `H`, `1`, etc.
/// - Named keys: arrows, `F1`-`F12`, `Enter`, `Escape`, `Space`, `Tab`, etc.
/// - `Minus` and `Plus` for the separator characters themselves
pub fn parse_key_combo(s: &str) -> Result<KeyCombo, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let parts: Vec<&str> = s.split(['-', '+']).map(str::trim).collect();

    let mut modifiers = Modifiers::default();
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            return Err(ParseError::EmptySegment(s.to_string()));
        }
        let is_last = i == parts.len() - 1;

        let is_modifier = match part.to_lowercase().as_str() {
            "ctrl" | "control" => {
                modifiers.ctrl = true;
                true
            }
            "alt" | "option" => {
                modifiers.alt = true;
                true
            }
            "shift" => {
                modifiers.shift = true;
                true
            }
            "super" | "cmd" | "command" | "meta" | "win" => {
                modifiers.super_key = true;
                true
            }
            "cmdorctrl" => {
                modifiers.cmd_or_ctrl = true;
                true
            }
            _ => false,
        };

        if !is_modifier {
            if key_part.is_some() {
                return Err(ParseError::MultipleKeys(part.to_string()));
            }
            key_part = Some(*part);
        } else if is_last {
            return Err(ParseError::MissingKey);
        }
    }

    let key_str = key_part.ok_or(ParseError::MissingKey)?;
    let key = parse_key(key_str)?;

    Ok(KeyCombo { modifiers, key })
}

/// Parse and re-render a binding in canonical form.
pub fn normalize_binding(s: &str) -> Result<String, ParseError> {
    parse_key_combo(s).map(|combo| combo.to_string())
}

fn parse_key(s: &str) -> Result<ParsedKey, ParseError> {
    if let Some(named) = parse_named_key(s) {
        return Ok(ParsedKey::Named(named));
    }

    match s.to_lowercase().as_str() {
        "minus" => return Ok(ParsedKey::Character('-')),
        "plus" => return Ok(ParsedKey::Character('+')),
        _ => {}
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(ParsedKey::Character(c.to_ascii_uppercase())),
        _ => Err(ParseError::UnknownKey(s.to_string())),
    }
}

/// Parse a named key string into a NamedKey. Matching is case-insensitive.
fn parse_named_key(s: &str) -> Option<NamedKey> {
    match s.to_lowercase().as_str() {
        // Function keys
        "f1" => Some(NamedKey::F1),
        "f2" => Some(NamedKey::F2),
        "f3" => Some(NamedKey::F3),
        "f4" => Some(NamedKey::F4),
        "f5" => Some(NamedKey::F5),
        "f6" => Some(NamedKey::F6),
        "f7" => Some(NamedKey::F7),
        "f8" => Some(NamedKey::F8),
        "f9" => Some(NamedKey::F9),
        "f10" => Some(NamedKey::F10),
        "f11" => Some(NamedKey::F11),
        "f12" => Some(NamedKey::F12),

        // Common named keys
        "enter" | "return" => Some(NamedKey::Enter),
        "escape" | "esc" => Some(NamedKey::Escape),
        "space" => Some(NamedKey::Space),
        "tab" => Some(NamedKey::Tab),
        "backspace" => Some(NamedKey::Backspace),
        "delete" | "del" => Some(NamedKey::Delete),
        "insert" | "ins" => Some(NamedKey::Insert),
        "home" => Some(NamedKey::Home),
        "end" => Some(NamedKey::End),
        "pageup" | "pgup" => Some(NamedKey::PageUp),
        "pagedown" | "pgdn" => Some(NamedKey::PageDown),

        // Arrow keys
        "up" | "arrowup" => Some(NamedKey::ArrowUp),
        "down" | "arrowdown" => Some(NamedKey::ArrowDown),
        "left" | "arrowleft" => Some(NamedKey::ArrowLeft),
        "right" | "arrowright" => Some(NamedKey::ArrowRight),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_named_key() {
        let combo = parse_key_combo("ArrowRight").unwrap();
        assert!(combo.modifiers.is_empty());
        assert_eq!(combo.key, ParsedKey::Named(NamedKey::ArrowRight));
    }

    #[test]
    fn test_ctrl_dash_separator() {
        let combo = parse_key_combo("Ctrl-ArrowUp").unwrap();
        assert!(combo.modifiers.ctrl);
        assert!(!combo.modifiers.shift);
        assert_eq!(combo.key, ParsedKey::Named(NamedKey::ArrowUp));
    }

    #[test]
    fn test_plus_separator() {
        let combo = parse_key_combo("Ctrl+Shift+B").unwrap();
        assert!(combo.modifiers.ctrl);
        assert!(combo.modifiers.shift);
        assert_eq!(combo.key, ParsedKey::Character('B'));
    }

    #[test]
    fn test_cmd_key() {
        let combo = parse_key_combo("Cmd-H").unwrap();
        assert!(combo.modifiers.super_key);
        assert_eq!(combo.key, ParsedKey::Character('H'));
    }

    #[test]
    fn test_case_insensitive() {
        let combo = parse_key_combo("ctrl-shift-h").unwrap();
        assert!(combo.modifiers.ctrl);
        assert!(combo.modifiers.shift);
        assert_eq!(combo.key, ParsedKey::Character('H'));
    }

    #[test]
    fn test_modifier_aliases() {
        assert!(parse_key_combo("Control-A").unwrap().modifiers.ctrl);
        assert!(parse_key_combo("Option-A").unwrap().modifiers.alt);
        assert!(parse_key_combo("Command-A").unwrap().modifiers.super_key);
        assert!(parse_key_combo("Meta-A").unwrap().modifiers.super_key);
    }

    #[test]
    fn test_named_key_aliases() {
        let combo = parse_key_combo("Return").unwrap();
        assert_eq!(combo.key, ParsedKey::Named(NamedKey::Enter));

        let combo = parse_key_combo("Esc").unwrap();
        assert_eq!(combo.key, ParsedKey::Named(NamedKey::Escape));

        let combo = parse_key_combo("Up").unwrap();
        assert_eq!(combo.key, ParsedKey::Named(NamedKey::ArrowUp));
    }

    #[test]
    fn test_minus_and_plus_keys() {
        let combo = parse_key_combo("Ctrl-Minus").unwrap();
        assert_eq!(combo.key, ParsedKey::Character('-'));
        assert_eq!(combo.to_string(), "Ctrl-Minus");

        let combo = parse_key_combo("Ctrl+Plus").unwrap();
        assert_eq!(combo.key, ParsedKey::Character('+'));
        assert_eq!(combo.to_string(), "Ctrl-Plus");
    }

    #[test]
    fn test_invalid_empty() {
        assert_eq!(parse_key_combo(""), Err(ParseError::Empty));
        assert_eq!(parse_key_combo("   "), Err(ParseError::Empty));
    }

    #[test]
    fn test_invalid_empty_segment() {
        assert!(matches!(
            parse_key_combo("Ctrl--"),
            Err(ParseError::EmptySegment(_))
        ));
    }

    #[test]
    fn test_invalid_modifier_only() {
        assert_eq!(parse_key_combo("Ctrl"), Err(ParseError::MissingKey));
        assert_eq!(parse_key_combo("Ctrl-Shift"), Err(ParseError::MissingKey));
    }

    #[test]
    fn test_invalid_multiple_keys() {
        assert_eq!(
            parse_key_combo("A-B"),
            Err(ParseError::MultipleKeys("B".to_string()))
        );
    }

    #[test]
    fn test_invalid_unknown_key() {
        assert_eq!(
            parse_key_combo("Ctrl-UnknownKey"),
            Err(ParseError::UnknownKey("UnknownKey".to_string()))
        );
    }

    #[test]
    fn test_display_canonical_order() {
        let combo = parse_key_combo("shift+alt+ctrl+arrowleft").unwrap();
        assert_eq!(combo.to_string(), "Ctrl-Alt-Shift-ArrowLeft");
    }

    #[test]
    fn test_resolve_cmd_or_ctrl() {
        let combo = parse_key_combo("CmdOrCtrl-H").unwrap();
        assert_eq!(combo.clone().resolve_cmd_or_ctrl(true).to_string(), "Cmd-H");
        assert_eq!(combo.resolve_cmd_or_ctrl(false).to_string(), "Ctrl-H");
    }

    #[test]
    fn test_normalize_binding() {
        assert_eq!(normalize_binding("ctrl + h").unwrap(), "Ctrl-H");
        assert!(normalize_binding("Ctrl-").is_err());
    }
}
