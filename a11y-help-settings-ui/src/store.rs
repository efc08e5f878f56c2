//! [`ShortcutStore`] implementations.

use crate::traits::ShortcutStore;
use a11y_help_config::{ShortcutOverrides, config};
use std::path::{Path, PathBuf};

/// Overrides kept in a YAML file.
#[derive(Debug, Clone)]
pub struct YamlShortcutStore {
    path: PathBuf,
}

impl YamlShortcutStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location, `~/.config/a11y-help/shortcuts.yaml`.
    pub fn default_location() -> Self {
        Self::new(config::overrides_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ShortcutStore for YamlShortcutStore {
    fn load(&self) -> anyhow::Result<ShortcutOverrides> {
        Ok(config::load_overrides(&self.path)?)
    }

    fn save(&mut self, overrides: &ShortcutOverrides) -> anyhow::Result<()> {
        Ok(config::save_overrides(&self.path, overrides)?)
    }
}

/// Overrides kept in memory, for hosts without a filesystem and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryShortcutStore {
    overrides: ShortcutOverrides,
    save_count: usize,
}

impl MemoryShortcutStore {
    pub fn new(overrides: ShortcutOverrides) -> Self {
        Self {
            overrides,
            save_count: 0,
        }
    }

    pub fn overrides(&self) -> &ShortcutOverrides {
        &self.overrides
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl ShortcutStore for MemoryShortcutStore {
    fn load(&self) -> anyhow::Result<ShortcutOverrides> {
        Ok(self.overrides.clone())
    }

    fn save(&mut self, overrides: &ShortcutOverrides) -> anyhow::Result<()> {
        self.overrides = overrides.clone();
        self.save_count += 1;
        Ok(())
    }
}
