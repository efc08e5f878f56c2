//! a11y-help: keyboard shortcut accessibility settings.
//!
//! The library half of the `a11y-help` binary: command-line parsing and
//! dispatch onto the shortcut settings presenter, plus the log bridge.

pub mod cli;
pub mod debug;

pub use a11y_help_config as config;
pub use a11y_help_keybindings as keybindings;
pub use a11y_help_settings_ui as settings_ui;
