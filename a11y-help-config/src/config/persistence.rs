//! Override persistence and path resolution.
//!
//! Covers:
//! - `load_overrides` / `save_overrides` (YAML file I/O with atomic write)
//! - XDG-style path helpers (`config_dir`, `overrides_path`)
//! - Dropping entries for shortcuts that no longer exist

use super::{SavedShortcut, ShortcutOverrides};
use crate::error::ConfigError;
use crate::types::ShortcutName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout as read. Keys stay strings so retired names can be skipped.
#[derive(Debug, Default, Deserialize)]
struct OverridesFileIn {
    #[serde(default)]
    shortcuts: BTreeMap<String, SavedShortcut>,
}

/// On-disk layout as written.
#[derive(Debug, Serialize)]
struct OverridesFileOut<'a> {
    shortcuts: &'a ShortcutOverrides,
}

/// Get the configuration directory (using XDG convention)
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("a11y-help")
        } else {
            PathBuf::from(".")
        }
    }
    #[cfg(not(target_os = "windows"))]
    {
        // ~/.config/a11y-help on all Unix-like platforms, including macOS
        if let Some(home_dir) = dirs::home_dir() {
            home_dir.join(".config").join("a11y-help")
        } else {
            PathBuf::from(".")
        }
    }
}

/// Default location of the saved overrides file.
pub fn overrides_path() -> PathBuf {
    config_dir().join("shortcuts.yaml")
}

/// Parse overrides from YAML text.
///
/// Entries whose name is not a current shortcut are dropped. Entries with no
/// fields set are dropped as well.
pub fn parse_overrides(yaml: &str) -> Result<ShortcutOverrides, ConfigError> {
    if yaml.trim().is_empty() {
        return Ok(ShortcutOverrides::new());
    }

    let file: OverridesFileIn = serde_yaml_ng::from_str(yaml)?;
    let mut overrides = ShortcutOverrides::new();
    for (id, saved) in file.shortcuts {
        match ShortcutName::from_id(&id) {
            Some(name) if !saved.is_empty() => {
                overrides.insert(name, saved);
            }
            Some(name) => log::debug!("Ignoring empty override for {}", name),
            None => log::warn!("Dropping saved override for unknown shortcut '{}'", id),
        }
    }
    Ok(overrides)
}

/// Render overrides as YAML text.
pub fn serialize_overrides(overrides: &ShortcutOverrides) -> Result<String, ConfigError> {
    Ok(serde_yaml_ng::to_string(&OverridesFileOut {
        shortcuts: overrides,
    })?)
}

/// Load overrides from `path`. A missing file yields no overrides.
pub fn load_overrides(path: &Path) -> Result<ShortcutOverrides, ConfigError> {
    if !path.exists() {
        log::info!("No saved shortcut overrides at {:?}", path);
        return Ok(ShortcutOverrides::new());
    }

    log::info!("Loading shortcut overrides from {:?}", path);
    let contents = fs::read_to_string(path)?;
    let overrides = parse_overrides(&contents)?;
    log::info!("Loaded {} shortcut override(s)", overrides.len());
    Ok(overrides)
}

/// Save overrides to `path`, creating the parent directory if needed.
pub fn save_overrides(path: &Path, overrides: &ShortcutOverrides) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let yaml = serialize_overrides(overrides)?;

    // Atomic save: write to temp file then rename to prevent corruption on crash
    let temp_path = path.with_extension("yaml.tmp");
    fs::write(&temp_path, &yaml)?;
    fs::rename(&temp_path, path)?;

    log::info!(
        "Saved {} shortcut override(s) to {:?}",
        overrides.len(),
        path
    );
    Ok(())
}
