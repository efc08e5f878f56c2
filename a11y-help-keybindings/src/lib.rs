//! Binding text handling for the accessibility help center.
//!
//! This crate turns registry bindings into what a settings table shows and
//! validates the bindings users type in.
//!
//! Features:
//! - Platform detection and master/mac/windows/linux fallback
//! - Binding parser accepting `Ctrl-ArrowRight` and `Ctrl+ArrowRight` forms
//! - Canonical rendering so saved bindings compare reliably

pub mod parser;
pub mod platform;

pub use parser::{KeyCombo, ParseError, normalize_binding, parse_key_combo};
pub use platform::{current_platform, resolve_binding, resolve_combo};

use a11y_help_config::{Platform, ShortcutName, ShortcutRegistry};

/// Default binding text for `name` on `platform`.
pub fn default_binding(name: ShortcutName, platform: Platform) -> &'static str {
    resolve_binding(&ShortcutRegistry::get(name).key_binding, platform)
}

/// Validate user-entered binding text for `platform`.
///
/// Returns the canonical text with `CmdOrCtrl` expanded, or the parse error.
pub fn validate_binding(text: &str, platform: Platform) -> Result<String, ParseError> {
    match parse_key_combo(text) {
        Ok(combo) => Ok(resolve_combo(combo, platform).to_string()),
        Err(e) => {
            log::warn!("Invalid binding '{}': {}", text, e);
            Err(e)
        }
    }
}
