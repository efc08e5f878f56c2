//! Tooltip text for the enable checkboxes.

pub const TURN_ON_ALL_SHORTCUTS: &str = "Check to turn on all shortcuts";
pub const TURN_OFF_ALL_SHORTCUTS: &str = "Uncheck to turn off all shortcuts";
pub const TURN_ON_SHORTCUT: &str = "Check to turn on this shortcut";
pub const TURN_OFF_SHORTCUT: &str = "Uncheck to turn off this shortcut";

/// Hint for a single row's checkbox given its current state.
pub fn toggle_tooltip(enabled: bool) -> &'static str {
    if enabled {
        TURN_OFF_SHORTCUT
    } else {
        TURN_ON_SHORTCUT
    }
}

/// Hint for the select-all checkbox given whether every row is enabled.
pub fn toggle_all_tooltip(all_enabled: bool) -> &'static str {
    if all_enabled {
        TURN_OFF_ALL_SHORTCUTS
    } else {
        TURN_ON_ALL_SHORTCUTS
    }
}
