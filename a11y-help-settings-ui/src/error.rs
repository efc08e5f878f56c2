//! Typed error types for a11y-help-settings-ui.

use a11y_help_config::ShortcutName;
use a11y_help_keybindings::ParseError;
use thiserror::Error;

/// Errors produced by fallible presenter edits.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A rebind was rejected because the binding text did not parse.
    #[error("Invalid binding '{text}' for {name}: {source}")]
    InvalidBinding {
        /// Shortcut being rebound.
        name: ShortcutName,
        /// Text the user entered.
        text: String,
        /// Underlying parse failure.
        #[source]
        source: ParseError,
    },
}
