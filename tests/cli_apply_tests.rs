//! End-to-end tests for `storestyle apply`.

mod fixtures;
use fixtures::*;

use std::fs;
use tempfile::TempDir;

#[test]
fn test_apply_five_decrements() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_snapshot_file(temp_dir.path(), "style.json", "{}");

    let output = run(&["apply", path.to_str().unwrap(), "--decrement", "5"]);
    assert_exit(&output, 0);
    assert_eq!(stdout_json(&output)["cardOpacity"], 0.5);
}

#[test]
fn test_apply_decrement_clamps_at_zero() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_snapshot_file(temp_dir.path(), "style.json", r#"{"cardOpacity": 0.2}"#);

    let output = run(&["apply", path.to_str().unwrap(), "--decrement", "7"]);
    assert_exit(&output, 0);
    assert_eq!(stdout_json(&output)["cardOpacity"], 0.0);
}

#[test]
fn test_apply_every_control() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_snapshot_file(temp_dir.path(), "style.json", "{}");

    let output = run(&[
        "apply",
        path.to_str().unwrap(),
        "--radius",
        "rounded",
        "--avatar",
        "square",
        "--toggle-shadow",
        "--color",
        "title=#ff0000",
        "--color",
        "card-background=#101010",
    ]);
    assert_exit(&output, 0);

    let result = stdout_json(&output);
    assert_eq!(result["cardRadius"], "rounded");
    assert_eq!(result["avatarShape"], "square");
    assert_eq!(result["cardShadow"], true);
    assert_eq!(result["titleColor"], "#FF0000");
    assert_eq!(result["cardBackground"], "#101010");
    // Untouched fields keep their defaults
    assert_eq!(result["priceColor"], "#000000");
}

#[test]
fn test_apply_toggle_twice_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_snapshot_file(temp_dir.path(), "style.json", "{}");
    let out = temp_dir.path().join("once.json");

    let output = run(&[
        "apply",
        path.to_str().unwrap(),
        "--toggle-shadow",
        "-o",
        out.to_str().unwrap(),
    ]);
    assert_exit(&output, 0);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Snapshot written to"));

    let output = run(&["apply", out.to_str().unwrap(), "--toggle-shadow"]);
    assert_exit(&output, 0);
    assert_eq!(stdout_json(&output)["cardShadow"], false);
}

#[test]
fn test_apply_writes_reloadable_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_snapshot_file(temp_dir.path(), "style.json", full_snapshot_json());
    let out = temp_dir.path().join("next.json");

    let output = run(&[
        "apply",
        path.to_str().unwrap(),
        "--increment",
        "1",
        "-o",
        out.to_str().unwrap(),
    ]);
    assert_exit(&output, 0);

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written["cardOpacity"], 0.9);
    assert_eq!(written["themeColor"], "#778899");
    assert!(!out.with_extension("json.tmp").exists());
}

#[test]
fn test_apply_invalid_radius_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_snapshot_file(temp_dir.path(), "style.json", "{}");

    let output = run(&["apply", path.to_str().unwrap(), "--radius", "huge"]);
    assert_exit(&output, 1);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_apply_invalid_color_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_snapshot_file(temp_dir.path(), "style.json", "{}");
    let out = temp_dir.path().join("never.json");

    let output = run(&[
        "apply",
        path.to_str().unwrap(),
        "--color",
        "price=#GG0000",
        "-o",
        out.to_str().unwrap(),
    ]);
    assert_exit(&output, 1);
    assert!(!out.exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("priceColor"), "stderr: {stderr}");
}

#[test]
fn test_apply_unknown_color_field_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_snapshot_file(temp_dir.path(), "style.json", "{}");

    let output = run(&["apply", path.to_str().unwrap(), "--color", "border=#000000"]);
    assert_exit(&output, 1);
}

#[test]
fn test_apply_uses_configured_step() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    let path = write_snapshot_file(temp_dir.path(), "style.json", "{}");

    let output = isolated_command(&["config", "set", "--opacity-step", "0.25"], &config_dir)
        .output()
        .unwrap();
    assert_exit(&output, 0);

    let output = isolated_command(
        &["apply", path.to_str().unwrap(), "--decrement", "2"],
        &config_dir,
    )
    .output()
    .unwrap();
    assert_exit(&output, 0);
    assert_eq!(stdout_json(&output)["cardOpacity"], 0.5);
}

#[test]
fn test_apply_color_channels() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_snapshot_file(temp_dir.path(), "style.json", "{}");

    let output = run(&["apply", path.to_str().unwrap(), "--color", "theme=51,102,153"]);
    assert_exit(&output, 0);
    assert_eq!(stdout_json(&output)["themeColor"], "#336699");
}

#[test]
fn test_apply_out_of_range_channel_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_snapshot_file(temp_dir.path(), "style.json", "{}");

    let output = run(&["apply", path.to_str().unwrap(), "--color", "title=0,0,300"]);
    assert_exit(&output, 1);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("titleColor"), "stderr: {stderr}");
}

#[test]
fn test_apply_signed_hex_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_snapshot_file(temp_dir.path(), "style.json", "{}");

    let output = run(&["apply", path.to_str().unwrap(), "--color", "theme=#+F+F+F"]);
    assert_exit(&output, 1);
}
