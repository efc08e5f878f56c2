//! Shortcut settings presenter for the accessibility help center.
//!
//! This crate holds the live, per-session state behind the keyboard-shortcut
//! settings dialog: one enabled flag and binding per shortcut, the select-all
//! tri-state, tooltip text, and save/restore. It is decoupled from any UI
//! toolkit and from storage through plain data and the [`ShortcutStore`]
//! trait.

// Trait interfaces for decoupling from the host application
mod traits;
pub use traits::*;

pub mod aggregate;
pub mod error;
mod settings;
mod state;
pub mod store;
pub mod tooltips;

pub use aggregate::SelectAllState;
pub use error::SettingsError;
pub use settings::ShortcutSettings;
pub use state::{ChangeKind, ShortcutChange, ShortcutRow, ShortcutState};
pub use store::{MemoryShortcutStore, YamlShortcutStore};

// Re-export types that settings consumers need
pub use a11y_help_config::{
    self as config, Platform, SavedShortcut, ShortcutName, ShortcutOverrides,
};
