//! Shared test fixtures for end-to-end CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the storestyle binary
pub fn storestyle_bin() -> String {
    std::env::var("CARGO_BIN_EXE_storestyle")
        .unwrap_or_else(|_| "target/release/storestyle".to_string())
}

/// Creates a Command with an isolated config directory.
///
/// Share `config_dir` between commands of the same test to observe writes.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(storestyle_bin());
    cmd.env("STORESTYLE_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs `args` against a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Writes `json` as a snapshot file inside `dir`.
pub fn write_snapshot_file(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, json).expect("Failed to write snapshot");
    path
}

/// Snapshot with every field set to a non-default value.
pub fn full_snapshot_json() -> &'static str {
    r##"{
  "cardOpacity": 0.8,
  "cardRadius": "pill",
  "cardShadow": true,
  "avatarShape": "square",
  "titleColor": "#112233",
  "priceColor": "#445566",
  "themeColor": "#778899",
  "cardBackground": "#F0F0F0"
}"##
}

/// Parses stdout as JSON, failing with stderr in the message.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}): {stdout}\nstderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// Asserts the process exited with `code`, printing stderr otherwise.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
