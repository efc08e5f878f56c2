//! End-to-end tests for the a11y-help command flow against a YAML store.

use a11y_help::cli::{Cli, run};
use a11y_help::config::{ShortcutName, config::load_overrides};
use clap::Parser;
use std::path::Path;
use tempfile::TempDir;

fn run_cmd(config: &Path, args: &[&str]) -> String {
    let mut argv = vec![
        "a11y-help",
        "--config",
        config.to_str().unwrap(),
        "--platform",
        "linux",
    ];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    run(&cli, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_list_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.yaml");

    let output = run_cmd(&path, &[]);
    assert!(output.starts_with("Shortcuts (platform: linux)"));
    assert!(output.contains("Open the Accessibility Help Center"));
    assert!(output.contains("Ctrl-ArrowRight"));
    assert!(output.contains("Select all: [x] (Uncheck to turn off all shortcuts)"));
    assert!(!path.exists(), "listing must not write the store");
}

#[test]
fn test_disable_persists_and_shows_partial() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.yaml");

    let output = run_cmd(&path, &["disable", "MOVE_UP"]);
    assert_eq!(output.trim(), "MOVE_UP disabled");

    let saved = load_overrides(&path).unwrap();
    assert_eq!(saved[&ShortcutName::MoveUp].enabled, Some(false));

    let output = run_cmd(&path, &["list"]);
    assert!(output.contains("Select all: [-] (Check to turn on all shortcuts)"));
}

#[test]
fn test_repeat_disable_is_no_change() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.yaml");

    run_cmd(&path, &["disable", "CANVAS_LEFT"]);
    let output = run_cmd(&path, &["disable", "CANVAS_LEFT"]);
    assert_eq!(output.trim(), "No changes.");
}

#[test]
fn test_disable_all_then_restore_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.yaml");

    let output = run_cmd(&path, &["disable-all"]);
    assert_eq!(output.lines().count(), ShortcutName::COUNT);
    assert!(run_cmd(&path, &["list"]).contains("Select all: [ ]"));

    run_cmd(&path, &["restore-defaults"]);
    assert!(load_overrides(&path).unwrap().is_empty());
}

#[test]
fn test_bind_normalizes_and_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.yaml");

    let output = run_cmd(&path, &["bind", "A11Y_HELP_CENTER", "ctrl+shift+h"]);
    assert_eq!(output.trim(), "A11Y_HELP_CENTER bound to Ctrl-Shift-H");

    let saved = load_overrides(&path).unwrap();
    assert_eq!(
        saved[&ShortcutName::A11yHelpCenter].shortcut.as_deref(),
        Some("Ctrl-Shift-H")
    );
}

#[test]
fn test_bind_invalid_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.yaml");

    let cli = Cli::try_parse_from([
        "a11y-help",
        "--config",
        path.to_str().unwrap(),
        "bind",
        "MOVE_UP",
        "Shift-",
    ])
    .unwrap();
    let mut out = Vec::new();
    let err = run(&cli, &mut out).unwrap_err();
    assert!(err.to_string().contains("Invalid binding"));
    assert!(!path.exists());
}
