//! Shortcut configuration for the accessibility help center.
//!
//! This crate provides the data model behind the keyboard-shortcut settings
//! dialog. It includes:
//!
//! - The closed set of shortcut actions (`ShortcutName`)
//! - Per-platform default key bindings and descriptions (`ShortcutRegistry`)
//! - A total map keyed by shortcut name (`ShortcutMap`)
//! - Saved per-user overrides and their YAML persistence

pub mod config;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::{SavedShortcut, ShortcutOverrides};
pub use defaults::ShortcutRegistry;
pub use error::ConfigError;
pub use types::{KeyBinding, Platform, ShortcutDefinition, ShortcutMap, ShortcutName};
