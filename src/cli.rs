//! Command-line interface for a11y-help.
//!
//! Each subcommand opens a settings session against the saved overrides,
//! applies one edit, and saves when something changed.

use a11y_help_keybindings::current_platform;
use a11y_help_settings_ui::{
    ChangeKind, Platform, SelectAllState, ShortcutChange, ShortcutName, ShortcutSettings,
    ShortcutStore, YamlShortcutStore,
};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// a11y-help - Keyboard shortcut accessibility settings
#[derive(Parser, Debug)]
#[command(name = "a11y-help")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Saved overrides file (default: ~/.config/a11y-help/shortcuts.yaml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Platform whose default bindings apply: master, mac, windows or linux
    /// (default: the current platform)
    #[arg(long, value_name = "PLATFORM", global = true)]
    pub platform: Option<Platform>,

    /// Set debug log level (overrides RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevelArg>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List shortcuts with their enabled state and binding (default)
    List,

    /// Turn on one shortcut
    Enable {
        /// Shortcut identifier, e.g. CANVAS_UP
        name: ShortcutName,
    },

    /// Turn off one shortcut
    Disable {
        /// Shortcut identifier, e.g. CANVAS_UP
        name: ShortcutName,
    },

    /// Turn on every shortcut
    EnableAll,

    /// Turn off every shortcut
    DisableAll,

    /// Assign a new binding to a shortcut
    Bind {
        /// Shortcut identifier, e.g. CANVAS_UP
        name: ShortcutName,
        /// Binding text, e.g. Ctrl-Shift-ArrowUp
        binding: String,
    },

    /// Put every shortcut back to enabled with its default binding
    RestoreDefaults,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Cli {
    fn store(&self) -> YamlShortcutStore {
        match &self.config {
            Some(path) => YamlShortcutStore::new(path),
            None => YamlShortcutStore::default_location(),
        }
    }

    fn resolved_platform(&self) -> Platform {
        self.platform.unwrap_or_else(current_platform)
    }
}

/// Run the parsed command, writing user-facing output to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut store = cli.store();
    let platform = cli.resolved_platform();
    log::info!(
        "Opening shortcut settings from {:?} for {}",
        store.path(),
        platform
    );
    let mut settings = ShortcutSettings::load(platform, &store)?;

    let changes = match cli.command.as_ref().unwrap_or(&Commands::List) {
        Commands::List => {
            write_table(&settings, out)?;
            return Ok(());
        }
        Commands::Enable { name } => settings.set_enabled(*name, true).into_iter().collect(),
        Commands::Disable { name } => settings.set_enabled(*name, false).into_iter().collect(),
        Commands::EnableAll => settings.set_all_enabled(true),
        Commands::DisableAll => settings.set_all_enabled(false),
        Commands::Bind { name, binding } => {
            settings.set_binding(*name, binding)?.into_iter().collect()
        }
        Commands::RestoreDefaults => settings.restore_defaults(),
    };

    apply_changes(&settings, &changes, &mut store, out)
}

fn apply_changes(
    settings: &ShortcutSettings,
    changes: &[ShortcutChange],
    store: &mut dyn ShortcutStore,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if changes.is_empty() {
        writeln!(out, "No changes.")?;
        return Ok(());
    }
    for change in changes {
        writeln!(out, "{}", describe_change(change))?;
    }
    settings.save(store)?;
    Ok(())
}

/// One-line description of a change, e.g. `CANVAS_UP disabled`.
pub fn describe_change(change: &ShortcutChange) -> String {
    match &change.kind {
        ChangeKind::Enabled(true) => format!("{} enabled", change.name),
        ChangeKind::Enabled(false) => format!("{} disabled", change.name),
        ChangeKind::Binding(binding) => format!("{} bound to {}", change.name, binding),
    }
}

fn checkbox(enabled: bool) -> &'static str {
    if enabled { "[x]" } else { "[ ]" }
}

fn write_table(settings: &ShortcutSettings, out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(out, "Shortcuts (platform: {})", settings.platform())?;
    for row in settings.rows() {
        writeln!(
            out,
            "  {} {:<18} {:<36} {}",
            checkbox(row.enabled),
            row.name.as_str(),
            row.description,
            row.shortcut
        )?;
    }
    let select_all = match settings.select_all_state() {
        SelectAllState::Checked => "[x]",
        SelectAllState::Unchecked => "[ ]",
        SelectAllState::Indeterminate => "[-]",
    };
    writeln!(
        out,
        "Select all: {} ({})",
        select_all,
        settings.toggle_all_tooltip()
    )?;
    Ok(())
}
