//! Tests for CLI argument parsing, run against the built binary.

use std::process::Command;

fn shopterm_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shopterm"))
}

#[test]
fn test_help_lists_options() {
    let output = shopterm_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in [
        "--config",
        "--base-url",
        "--session-dir",
        "--no-persist",
        "--log-file",
    ] {
        assert!(stdout.contains(flag), "help is missing {}", flag);
    }
}

#[test]
fn test_version_flag() {
    let output = shopterm_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_base_url_fails_before_ui() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = shopterm_cmd()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .arg("--base-url")
        .arg("not a url")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("api.base_url"), "stderr: {}", stderr);
}
