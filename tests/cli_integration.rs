//! Integration tests for the `getdone` binary.
//!
//! The TUI needs a real terminal, so these only cover paths that exit
//! before it starts: help/version output and startup errors.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Run `getdone` with the given args in the given directory, returning (stdout, stderr, success).
fn run_getdone(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_getdone"))
        .args(args)
        .current_dir(dir)
        .env_remove("GETDONE_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run getdone");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

#[test]
fn test_help() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (stdout, _, success) = run_getdone(tmp.path(), &["--help"]);
    assert!(success);
    assert!(stdout.contains("--filter"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn test_version() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (stdout, _, success) = run_getdone(tmp.path(), &["--version"]);
    assert!(success);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_filter_rejected() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_getdone(tmp.path(), &["--filter", "done"]);
    assert!(!success);
    assert!(stderr.contains("unknown filter mode"));
}

#[test]
fn test_missing_config_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_getdone(tmp.path(), &["--config", "missing.toml"]);
    assert!(!success);
    assert!(stderr.contains("error: could not read missing.toml"));
}

#[test]
fn test_malformed_config_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "default_filter = [\n").unwrap();
    let (_, stderr, success) = run_getdone(tmp.path(), &["--config", "config.toml"]);
    assert!(!success);
    assert!(stderr.contains("could not parse config.toml"));
}

#[test]
fn test_config_from_environment() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("env.toml"), "[ui.colors]\ntext = \"blue\"\n").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_getdone"))
        .current_dir(tmp.path())
        .env("GETDONE_CONFIG", "env.toml")
        .output()
        .expect("failed to run getdone");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid color for ui.colors.text"));
}

#[test]
fn test_unwritable_log_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_getdone(
        tmp.path(),
        &["--log-file", "no-such-dir/getdone.log"],
    );
    assert!(!success);
    assert!(stderr.contains("could not open log file"));
}
