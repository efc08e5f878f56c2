//! Shortcut names and definitions.

use super::keybinding::KeyBinding;
use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Identifier of a configurable shortcut action.
///
/// The set is closed: new actions are added here and in the default registry,
/// never at runtime. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShortcutName {
    CanvasRight,
    CanvasDown,
    CanvasLeft,
    CanvasUp,
    MoveRight,
    MoveDown,
    MoveLeft,
    MoveUp,
    #[serde(rename = "A11Y_HELP_CENTER")]
    A11yHelpCenter,
}

impl ShortcutName {
    /// Number of shortcut actions.
    pub const COUNT: usize = 9;

    /// Every shortcut in declaration order.
    pub const ALL: [ShortcutName; Self::COUNT] = [
        ShortcutName::CanvasRight,
        ShortcutName::CanvasDown,
        ShortcutName::CanvasLeft,
        ShortcutName::CanvasUp,
        ShortcutName::MoveRight,
        ShortcutName::MoveDown,
        ShortcutName::MoveLeft,
        ShortcutName::MoveUp,
        ShortcutName::A11yHelpCenter,
    ];

    /// Position in declaration order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable identifier used in saved overrides and UI form keys.
    pub const fn as_str(self) -> &'static str {
        match self {
            ShortcutName::CanvasRight => "CANVAS_RIGHT",
            ShortcutName::CanvasDown => "CANVAS_DOWN",
            ShortcutName::CanvasLeft => "CANVAS_LEFT",
            ShortcutName::CanvasUp => "CANVAS_UP",
            ShortcutName::MoveRight => "MOVE_RIGHT",
            ShortcutName::MoveDown => "MOVE_DOWN",
            ShortcutName::MoveLeft => "MOVE_LEFT",
            ShortcutName::MoveUp => "MOVE_UP",
            ShortcutName::A11yHelpCenter => "A11Y_HELP_CENTER",
        }
    }

    /// Look up a shortcut by its identifier. Matching is case-insensitive.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for ShortcutName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShortcutName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| ConfigError::UnknownShortcut(s.to_string()))
    }
}

/// An immutable default shortcut definition.
#[derive(Debug, Clone, Copy)]
pub struct ShortcutDefinition {
    /// Action identifier
    pub name: ShortcutName,
    /// Human-readable description shown in the settings table
    pub description: &'static str,
    /// Default bindings per platform
    pub key_binding: KeyBinding,
    /// Optional handler the host runs when the shortcut fires
    pub action: Option<fn()>,
}

impl ShortcutDefinition {
    /// Definition without an action handler.
    pub const fn new(name: ShortcutName, description: &'static str, key_binding: KeyBinding) -> Self {
        Self {
            name,
            description,
            key_binding,
            action: None,
        }
    }

    /// Copy of this definition that runs `action` when invoked.
    pub const fn with_action(mut self, action: fn()) -> Self {
        self.action = Some(action);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, name) in ShortcutName::ALL.iter().enumerate() {
            assert_eq!(name.index(), i);
        }
    }

    #[test]
    fn test_from_id_round_trip() {
        for name in ShortcutName::ALL {
            assert_eq!(ShortcutName::from_id(name.as_str()), Some(name));
        }
        assert_eq!(
            ShortcutName::from_id("canvas_up"),
            Some(ShortcutName::CanvasUp)
        );
        assert_eq!(ShortcutName::from_id("ZOOM_IN"), None);
    }

    #[test]
    fn test_from_str_unknown_is_error() {
        let err = "ZOOM_IN".parse::<ShortcutName>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownShortcut(ref s) if s == "ZOOM_IN"));
    }

    #[test]
    fn test_serialize_matches_identifier() {
        for name in ShortcutName::ALL {
            let yaml = serde_yaml_ng::to_string(&name).unwrap();
            assert_eq!(yaml.trim(), name.as_str());
        }
    }
}
