//! Per-session shortcut state and change records.

use a11y_help_config::{ShortcutDefinition, ShortcutName};

/// Live state of one shortcut while the settings dialog is open.
#[derive(Debug, Clone)]
pub struct ShortcutState {
    /// Registry definition this state was seeded from
    pub definition: &'static ShortcutDefinition,
    /// Whether the shortcut is active
    pub enabled: bool,
    /// Binding currently assigned, in canonical text form
    pub current_binding: String,
}

impl ShortcutState {
    pub fn name(&self) -> ShortcutName {
        self.definition.name
    }

    pub fn description(&self) -> &'static str {
        self.definition.description
    }

    /// Run the definition's action if there is one and the shortcut is
    /// enabled. Returns whether the action ran.
    pub fn invoke(&self) -> bool {
        match self.definition.action {
            Some(action) if self.enabled => {
                action();
                true
            }
            _ => false,
        }
    }
}

impl PartialEq for ShortcutState {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
            && self.enabled == other.enabled
            && self.current_binding == other.current_binding
    }
}

impl Eq for ShortcutState {}

/// One row of the settings table: enabled checkbox, description, binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutRow<'a> {
    pub name: ShortcutName,
    pub enabled: bool,
    pub description: &'static str,
    pub shortcut: &'a str,
}

impl<'a> From<&'a ShortcutState> for ShortcutRow<'a> {
    fn from(state: &'a ShortcutState) -> Self {
        Self {
            name: state.name(),
            enabled: state.enabled,
            description: state.description(),
            shortcut: &state.current_binding,
        }
    }
}

/// What changed on a shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// Enabled flag set to the contained value
    Enabled(bool),
    /// Binding replaced by the contained text
    Binding(String),
}

/// A change applied to the live state, returned to the caller so a UI
/// binding layer can update only what moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutChange {
    pub name: ShortcutName,
    pub kind: ChangeKind,
}

impl ShortcutChange {
    pub fn enabled(name: ShortcutName, enabled: bool) -> Self {
        Self {
            name,
            kind: ChangeKind::Enabled(enabled),
        }
    }

    pub fn binding(name: ShortcutName, binding: impl Into<String>) -> Self {
        Self {
            name,
            kind: ChangeKind::Binding(binding.into()),
        }
    }
}
