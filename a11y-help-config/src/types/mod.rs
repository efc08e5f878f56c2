//! Shortcut data model types.

mod keybinding;
mod shortcut;
mod shortcut_map;

pub use keybinding::{KeyBinding, Platform};
pub use shortcut::{ShortcutDefinition, ShortcutName};
pub use shortcut_map::ShortcutMap;
