//! Unified logging for a11y-help.
//!
//! Routes every `log::info!()` etc. to a debug log file in the system temp
//! directory (`a11y_help_debug.log`) so CLI output on stdout stays clean.
//! When `RUST_LOG` is set, records are mirrored to stderr as well.
//!
//! Level precedence: `--log-level`, then `RUST_LOG`, then `warn`.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

struct LogBridge {
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Location of the debug log file.
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("a11y_help_debug.log")
}

/// Pick the effective level from the CLI flag and the `RUST_LOG` value.
///
/// `RUST_LOG` values that are not a plain level (e.g. `a11y_help=debug`)
/// are ignored.
pub fn resolve_level(cli_level: Option<LevelFilter>, rust_log: Option<&str>) -> LevelFilter {
    cli_level
        .or_else(|| rust_log.and_then(|v| v.trim().parse().ok()))
        .unwrap_or(LevelFilter::Warn)
}

/// Install the log bridge. Later calls keep the first bridge.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = resolve_level(cli_level, rust_log.as_deref());

    let bridge = BRIDGE.get_or_init(|| LogBridge {
        file: Mutex::new(open_log_file()),
        mirror_stderr: rust_log.is_some(),
    });

    if log::set_logger(bridge).is_ok() {
        log::set_max_level(level);
        log::info!(
            "a11y-help log session started at {} (level={})",
            timestamp(),
            level
        );
    }
}

fn open_log_file() -> Option<File> {
    // A log file that cannot be opened just disables file logging.
    OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(log_path())
        .ok()
}

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_wins() {
        assert_eq!(
            resolve_level(Some(LevelFilter::Debug), Some("error")),
            LevelFilter::Debug
        );
    }

    #[test]
    fn test_rust_log_level() {
        assert_eq!(resolve_level(None, Some("info")), LevelFilter::Info);
        assert_eq!(resolve_level(None, Some(" TRACE ")), LevelFilter::Trace);
    }

    #[test]
    fn test_module_filter_falls_back_to_default() {
        assert_eq!(
            resolve_level(None, Some("a11y_help=debug")),
            LevelFilter::Warn
        );
        assert_eq!(resolve_level(None, None), LevelFilter::Warn);
    }
}
