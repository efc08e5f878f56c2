//! Trait definitions for settings UI dependencies.
//!
//! These traits define the interface between the settings presenter and the
//! host application. The host (or one of the stores in [`crate::store`])
//! implements them to provide concrete functionality.

use a11y_help_config::ShortcutOverrides;

/// Saved-override persistence.
///
/// Implemented by the host to load the user's customizations when the dialog
/// opens and to store them when it is saved.
pub trait ShortcutStore {
    /// Load saved overrides. No saved state yields an empty map.
    fn load(&self) -> anyhow::Result<ShortcutOverrides>;

    /// Replace the saved overrides.
    fn save(&mut self, overrides: &ShortcutOverrides) -> anyhow::Result<()>;
}
