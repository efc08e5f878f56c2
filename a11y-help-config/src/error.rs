//! Typed error variants for the a11y-help-config crate.
//!
//! Callers at the application boundary usually hold these inside an
//! `anyhow::Error`; they can still `downcast_ref::<ConfigError>()` to match on
//! a specific failure mode.

use crate::types::ShortcutName;
use thiserror::Error;

/// Errors that can occur when loading, saving or assembling shortcut
/// configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the overrides file.
    #[error("I/O error accessing shortcut overrides: {0}")]
    Io(#[from] std::io::Error),

    /// The overrides file contained invalid YAML.
    #[error("YAML parse error in shortcut overrides: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A partial map was promoted to a [`crate::ShortcutMap`] without an
    /// entry for every shortcut.
    #[error("Shortcut map is missing an entry for {0}")]
    MissingShortcut(ShortcutName),

    /// A shortcut identifier did not name any known action.
    #[error("Unknown shortcut name: '{0}'")]
    UnknownShortcut(String),
}
