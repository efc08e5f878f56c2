//! Default shortcut registry.
//!
//! The table is indexed by [`ShortcutName::index`], so every shortcut has a
//! definition and lookups are infallible.

use crate::types::{KeyBinding, ShortcutDefinition, ShortcutName};

static DEFAULT_SHORTCUTS: [ShortcutDefinition; ShortcutName::COUNT] = [
    ShortcutDefinition::new(
        ShortcutName::CanvasRight,
        "Move right on the canvas",
        KeyBinding::new("Ctrl-ArrowRight", Some("Cmd-ArrowRight")),
    ),
    ShortcutDefinition::new(
        ShortcutName::CanvasDown,
        "Move down on the canvas",
        KeyBinding::new("Ctrl-ArrowDown", Some("Cmd-ArrowDown")),
    ),
    ShortcutDefinition::new(
        ShortcutName::CanvasLeft,
        "Move left on the canvas",
        KeyBinding::new("Ctrl-ArrowLeft", Some("Cmd-ArrowLeft")),
    ),
    ShortcutDefinition::new(
        ShortcutName::CanvasUp,
        "Move up on the canvas",
        KeyBinding::new("Ctrl-ArrowUp", Some("Cmd-ArrowUp")),
    ),
    ShortcutDefinition::new(
        ShortcutName::MoveRight,
        "Move right",
        KeyBinding::new("ArrowRight", Some("ArrowRight")),
    ),
    ShortcutDefinition::new(
        ShortcutName::MoveDown,
        "Move down",
        KeyBinding::new("ArrowDown", Some("ArrowDown")),
    ),
    ShortcutDefinition::new(
        ShortcutName::MoveLeft,
        "Move left",
        KeyBinding::new("ArrowLeft", Some("ArrowLeft")),
    ),
    ShortcutDefinition::new(
        ShortcutName::MoveUp,
        "Move up",
        KeyBinding::new("ArrowUp", Some("ArrowUp")),
    ),
    ShortcutDefinition::new(
        ShortcutName::A11yHelpCenter,
        "Open the Accessibility Help Center",
        KeyBinding::new("Ctrl-H", Some("Cmd-H")),
    ),
];

/// Read-only access to the built-in shortcut definitions.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Definition for `name`.
    pub fn get(name: ShortcutName) -> &'static ShortcutDefinition {
        &DEFAULT_SHORTCUTS[name.index()]
    }

    /// All definitions in display order.
    pub fn all() -> &'static [ShortcutDefinition] {
        &DEFAULT_SHORTCUTS
    }
}
