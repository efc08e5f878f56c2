//! `ShortcutSettings`: live state behind the shortcut settings dialog.
//!
//! Seeded once from the registry plus saved overrides, edited in place by
//! checkbox callbacks, and either saved or dropped when the dialog closes.
//! Every aggregate query reads the live map; nothing is cached.

use crate::aggregate::{self, SelectAllState};
use crate::error::SettingsError;
use crate::state::{ShortcutChange, ShortcutRow, ShortcutState};
use crate::tooltips;
use crate::traits::ShortcutStore;
use a11y_help_config::{
    Platform, SavedShortcut, ShortcutMap, ShortcutName, ShortcutOverrides, ShortcutRegistry,
};
use a11y_help_keybindings::{default_binding, validate_binding};

/// Enabled flags and bindings for every shortcut in one dialog session.
///
/// Equality compares the platform and the live states only.
#[derive(Debug, Clone)]
pub struct ShortcutSettings {
    platform: Platform,
    shortcuts: ShortcutMap<ShortcutState>,
    /// Saved entries as loaded, written back verbatim while untouched
    saved: ShortcutOverrides,
    /// States right after loading
    loaded: ShortcutMap<ShortcutState>,
}

impl PartialEq for ShortcutSettings {
    fn eq(&self, other: &Self) -> bool {
        self.platform == other.platform && self.shortcuts == other.shortcuts
    }
}

impl Eq for ShortcutSettings {}

impl ShortcutSettings {
    /// Build state for every shortcut from registry defaults for `platform`,
    /// then apply `overrides` where present.
    ///
    /// A saved binding that no longer parses is ignored in favour of the
    /// default.
    pub fn new(platform: Platform, overrides: Option<&ShortcutOverrides>) -> Self {
        let mut applied = 0;
        let shortcuts = ShortcutMap::from_fn(|name| {
            let mut state = default_state(name, platform);
            if let Some(saved) = overrides.and_then(|o| o.get(&name)) {
                apply_override(&mut state, saved, platform);
                applied += 1;
            }
            state
        });

        log::info!(
            "Shortcut settings initialized for {} shortcuts on {} ({} override(s) applied)",
            shortcuts.len(),
            platform,
            applied
        );

        Self {
            platform,
            loaded: shortcuts.clone(),
            shortcuts,
            saved: overrides.cloned().unwrap_or_default(),
        }
    }

    /// Build state from the overrides held by `store`.
    pub fn load(platform: Platform, store: &dyn ShortcutStore) -> anyhow::Result<Self> {
        let overrides = store.load()?;
        Ok(Self::new(platform, Some(&overrides)))
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn get(&self, name: ShortcutName) -> &ShortcutState {
        self.shortcuts.get(name)
    }

    /// States in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ShortcutState> + Clone {
        self.shortcuts.values()
    }

    /// Table rows in display order.
    pub fn rows(&self) -> Vec<ShortcutRow<'_>> {
        self.iter().map(ShortcutRow::from).collect()
    }

    // ========================================================================
    // Toggles
    // ========================================================================

    /// Set one shortcut's enabled flag. Returns the change if the flag moved.
    pub fn set_enabled(&mut self, name: ShortcutName, enabled: bool) -> Option<ShortcutChange> {
        let state = self.shortcuts.get_mut(name);
        if state.enabled == enabled {
            return None;
        }
        state.enabled = enabled;
        log::debug!("Shortcut {} enabled={}", name, enabled);
        Some(ShortcutChange::enabled(name, enabled))
    }

    /// Set a shortcut's enabled flag by its string identifier, as a UI form
    /// key would carry it. An unknown identifier changes nothing.
    pub fn set_enabled_by_id(&mut self, id: &str, enabled: bool) -> Option<ShortcutChange> {
        match ShortcutName::from_id(id) {
            Some(name) => self.set_enabled(name, enabled),
            None => {
                log::debug!("Ignoring toggle for unknown shortcut '{}'", id);
                None
            }
        }
    }

    /// Flip one shortcut's enabled flag.
    pub fn toggle(&mut self, name: ShortcutName) -> ShortcutChange {
        let enabled = !self.get(name).enabled;
        self.shortcuts.get_mut(name).enabled = enabled;
        log::debug!("Shortcut {} toggled to enabled={}", name, enabled);
        ShortcutChange::enabled(name, enabled)
    }

    /// Set every shortcut's enabled flag. Returns the shortcuts that moved.
    pub fn set_all_enabled(&mut self, enabled: bool) -> Vec<ShortcutChange> {
        let changes: Vec<_> = self
            .shortcuts
            .iter_mut()
            .filter(|(_, state)| state.enabled != enabled)
            .map(|(name, state)| {
                state.enabled = enabled;
                ShortcutChange::enabled(name, enabled)
            })
            .collect();
        log::debug!(
            "Set all shortcuts enabled={} ({} changed)",
            enabled,
            changes.len()
        );
        changes
    }

    // ========================================================================
    // Aggregate queries
    // ========================================================================

    fn enabled_flags(&self) -> impl Iterator<Item = bool> + Clone + '_ {
        self.shortcuts.values().map(|state| state.enabled)
    }

    pub fn is_all_enabled(&self) -> bool {
        aggregate::all_enabled(self.enabled_flags())
    }

    pub fn is_any_enabled(&self) -> bool {
        aggregate::any_enabled(self.enabled_flags())
    }

    /// Some but not all shortcuts enabled; drives the indeterminate look of
    /// the select-all checkbox.
    pub fn is_partially_enabled(&self) -> bool {
        aggregate::partially_enabled(self.enabled_flags())
    }

    pub fn select_all_state(&self) -> SelectAllState {
        SelectAllState::from_flags(self.enabled_flags())
    }

    // ========================================================================
    // Tooltips
    // ========================================================================

    /// What clicking this shortcut's checkbox will do.
    pub fn toggle_tooltip(&self, name: ShortcutName) -> &'static str {
        tooltips::toggle_tooltip(self.get(name).enabled)
    }

    /// What clicking the select-all checkbox will do.
    pub fn toggle_all_tooltip(&self) -> &'static str {
        tooltips::toggle_all_tooltip(self.is_all_enabled())
    }

    // ========================================================================
    // Bindings, defaults and persistence
    // ========================================================================

    /// Rebind a shortcut. The text is validated and stored in canonical form;
    /// invalid text leaves the state untouched.
    pub fn set_binding(
        &mut self,
        name: ShortcutName,
        text: &str,
    ) -> Result<Option<ShortcutChange>, SettingsError> {
        let binding =
            validate_binding(text, self.platform).map_err(|source| SettingsError::InvalidBinding {
                name,
                text: text.to_string(),
                source,
            })?;

        let state = self.shortcuts.get_mut(name);
        if state.current_binding == binding {
            return Ok(None);
        }
        log::info!(
            "Rebinding {}: {} -> {}",
            name,
            state.current_binding,
            binding
        );
        state.current_binding = binding.clone();
        Ok(Some(ShortcutChange::binding(name, binding)))
    }

    /// Put every shortcut back to enabled with its default binding.
    /// Returns every individual change made.
    ///
    /// Saved entries are discarded too, including fields that matched this
    /// platform's defaults.
    pub fn restore_defaults(&mut self) -> Vec<ShortcutChange> {
        let platform = self.platform;
        self.saved.clear();
        self.loaded = ShortcutMap::from_fn(|name| default_state(name, platform));
        let mut changes = Vec::new();
        for (name, state) in self.shortcuts.iter_mut() {
            let default = default_state(name, platform);
            if state.enabled != default.enabled {
                state.enabled = default.enabled;
                changes.push(ShortcutChange::enabled(name, default.enabled));
            }
            if state.current_binding != default.current_binding {
                changes.push(ShortcutChange::binding(name, &default.current_binding));
                state.current_binding = default.current_binding;
            }
        }
        log::info!("Restored shortcut defaults ({} change(s))", changes.len());
        changes
    }

    /// Entries to persist.
    ///
    /// A field not edited this session keeps its saved value, which may be
    /// another platform's customization that equals this platform's
    /// default. An edited field is saved only when it differs from this
    /// platform's default.
    pub fn overrides(&self) -> ShortcutOverrides {
        self.shortcuts
            .iter()
            .filter_map(|(name, state)| {
                let loaded = self.loaded.get(name);
                let saved = self.saved.get(&name);
                let default = default_state(name, self.platform);
                let entry = SavedShortcut {
                    enabled: if state.enabled == loaded.enabled {
                        saved.and_then(|s| s.enabled)
                    } else {
                        (state.enabled != default.enabled).then_some(state.enabled)
                    },
                    shortcut: if state.current_binding == loaded.current_binding {
                        saved.and_then(|s| s.shortcut.clone())
                    } else {
                        (state.current_binding != default.current_binding)
                            .then(|| state.current_binding.clone())
                    },
                };
                (!entry.is_empty()).then_some((name, entry))
            })
            .collect()
    }

    /// True when any shortcut differs from its default.
    pub fn is_modified(&self) -> bool {
        self.shortcuts
            .iter()
            .any(|(name, state)| *state != default_state(name, self.platform))
    }

    /// Persist [`Self::overrides`] to `store`.
    pub fn save(&self, store: &mut dyn ShortcutStore) -> anyhow::Result<()> {
        let overrides = self.overrides();
        store.save(&overrides)?;
        log::info!("Saved {} shortcut override(s)", overrides.len());
        Ok(())
    }

    /// Run a shortcut's action if it has one and is enabled.
    pub fn invoke(&self, name: ShortcutName) -> bool {
        self.get(name).invoke()
    }
}

fn default_state(name: ShortcutName, platform: Platform) -> ShortcutState {
    ShortcutState {
        definition: ShortcutRegistry::get(name),
        enabled: true,
        current_binding: default_binding(name, platform).to_string(),
    }
}

fn apply_override(state: &mut ShortcutState, saved: &SavedShortcut, platform: Platform) {
    if let Some(enabled) = saved.enabled {
        state.enabled = enabled;
    }
    if let Some(text) = &saved.shortcut {
        match validate_binding(text, platform) {
            Ok(binding) => state.current_binding = binding,
            Err(e) => log::warn!(
                "Ignoring saved binding '{}' for {}: {}",
                text,
                state.name(),
                e
            ),
        }
    }
}
