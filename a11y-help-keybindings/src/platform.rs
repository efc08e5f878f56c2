//! Platform-specific binding resolution.
//!
//! Contains:
//! - Compile-target platform detection
//! - master/mac/windows/linux fallback for default bindings
//! - `CmdOrCtrl` expansion for a given platform

use crate::parser::KeyCombo;
use a11y_help_config::{KeyBinding, Platform};

/// The platform this binary was built for.
///
/// Targets other than macOS, Windows and Linux use the master bindings.
pub fn current_platform() -> Platform {
    #[cfg(target_os = "macos")]
    {
        Platform::Mac
    }
    #[cfg(target_os = "windows")]
    {
        Platform::Windows
    }
    #[cfg(target_os = "linux")]
    {
        Platform::Linux
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        Platform::Master
    }
}

/// Resolve the default binding text for `platform`.
///
/// Uses the platform override when one is declared, the master binding
/// otherwise.
#[inline]
pub fn resolve_binding(binding: &KeyBinding, platform: Platform) -> &'static str {
    binding.platform_override(platform).unwrap_or(binding.master)
}

/// Expand `CmdOrCtrl` in `combo` for `platform`.
///
/// - macOS: `CmdOrCtrl` maps to Cmd.
/// - All other platforms: `CmdOrCtrl` maps to Ctrl.
pub fn resolve_combo(combo: KeyCombo, platform: Platform) -> KeyCombo {
    combo.resolve_cmd_or_ctrl(platform == Platform::Mac)
}
