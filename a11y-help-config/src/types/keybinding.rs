//! Default key binding and platform types.

use std::fmt;
use std::str::FromStr;

// ============================================================================
// Platform
// ============================================================================

/// Platform whose default binding should be shown and used.
///
/// `Master` is the platform-neutral binding every shortcut defines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Platform {
    #[default]
    Master,
    Mac,
    Windows,
    Linux,
}

impl Platform {
    /// All platforms, `Master` first.
    pub const ALL: [Platform; 4] = [
        Platform::Master,
        Platform::Mac,
        Platform::Windows,
        Platform::Linux,
    ];

    /// Lowercase identifier accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Master => "master",
            Platform::Mac => "mac",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "master" | "default" => Ok(Platform::Master),
            "mac" | "macos" => Ok(Platform::Mac),
            "windows" | "win" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            other => {
                let expected: Vec<_> = Platform::ALL.iter().map(|p| p.as_str()).collect();
                Err(format!(
                    "unknown platform '{other}' (expected one of: {})",
                    expected.join(", ")
                ))
            }
        }
    }
}

// ============================================================================
// KeyBinding
// ============================================================================

/// Default key bindings for one shortcut.
///
/// `master` is always present. A missing platform override means the master
/// binding applies on that platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Platform-neutral binding, e.g. `"Ctrl-ArrowRight"`
    pub master: &'static str,
    /// macOS override, e.g. `"Cmd-ArrowRight"`
    pub mac: Option<&'static str>,
    /// Windows override
    pub windows: Option<&'static str>,
    /// Linux override
    pub linux: Option<&'static str>,
}

impl KeyBinding {
    /// Binding with a master key and an optional macOS override.
    pub const fn new(master: &'static str, mac: Option<&'static str>) -> Self {
        Self {
            master,
            mac,
            windows: None,
            linux: None,
        }
    }

    /// The override declared for `platform`, without falling back to master.
    ///
    /// `Platform::Master` has no override slot and always yields `None`.
    pub fn platform_override(&self, platform: Platform) -> Option<&'static str> {
        match platform {
            Platform::Master => None,
            Platform::Mac => self.mac,
            Platform::Windows => self.windows,
            Platform::Linux => self.linux,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_str() {
        assert_eq!("mac".parse::<Platform>(), Ok(Platform::Mac));
        assert_eq!("MacOS".parse::<Platform>(), Ok(Platform::Mac));
        assert_eq!("linux".parse::<Platform>(), Ok(Platform::Linux));
        assert_eq!("win".parse::<Platform>(), Ok(Platform::Windows));
        assert_eq!("master".parse::<Platform>(), Ok(Platform::Master));
        assert!("beos".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_from_str_lists_choices() {
        let err = "beos".parse::<Platform>().unwrap_err();
        assert_eq!(
            err,
            "unknown platform 'beos' (expected one of: master, mac, windows, linux)"
        );
    }

    #[test]
    fn test_platform_display_round_trips() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string().parse::<Platform>(), Ok(platform));
        }
    }

    #[test]
    fn test_platform_override_master_is_none() {
        let binding = KeyBinding::new("Ctrl-H", Some("Cmd-H"));
        assert_eq!(binding.platform_override(Platform::Master), None);
        assert_eq!(binding.platform_override(Platform::Mac), Some("Cmd-H"));
        assert_eq!(binding.platform_override(Platform::Linux), None);
    }
}
