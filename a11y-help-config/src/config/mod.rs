//! Saved per-user shortcut overrides.
//!
//! An override records only what the user changed: the enabled flag, the
//! binding, or both. Anything not recorded falls back to the registry default.

mod persistence;

pub use persistence::{
    config_dir, load_overrides, overrides_path, parse_overrides, save_overrides,
    serialize_overrides,
};

use crate::types::ShortcutName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A saved customization for one shortcut.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedShortcut {
    /// Saved enabled flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Saved binding text, e.g. `"Ctrl-Shift-ArrowUp"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
}

impl SavedShortcut {
    /// True when neither field is set.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_none() && self.shortcut.is_none()
    }
}

/// Saved overrides keyed by shortcut, in declaration order.
pub type ShortcutOverrides = BTreeMap<ShortcutName, SavedShortcut>;
