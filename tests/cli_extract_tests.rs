//! End-to-end tests for `grannygrid extract`.

use std::process::Command;

mod fixtures;
use fixtures::*;

#[test]
fn test_extract_solid_image_returns_one_color() {
    let dir = tempfile::tempdir().unwrap();
    let image = write_solid_png(&dir, "cover.png", 10, 200, 40);

    let output = Command::new(grannygrid_bin())
        .args(["extract", image.to_str().unwrap(), "-k", "5"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#0ac828"));
    assert!(stdout.contains("1 dominant color"));
}

#[test]
fn test_extract_two_tone_image_returns_both() {
    let dir = tempfile::tempdir().unwrap();
    let image = write_two_tone_png(&dir, "cover.png");

    let output = Command::new(grannygrid_bin())
        .args(["extract", image.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("JSON output expected");
    let colors = payload["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 2);
    assert!(colors.iter().any(|c| c == "#ff0000"));
    assert!(colors.iter().any(|c| c == "#0000ff"));
}

#[test]
fn test_extract_rejects_zero_count() {
    let dir = tempfile::tempdir().unwrap();
    let image = write_solid_png(&dir, "cover.png", 1, 2, 3);

    let output = Command::new(grannygrid_bin())
        .args(["extract", image.to_str().unwrap(), "-k", "0"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2), "validation exit code");
    assert!(String::from_utf8_lossy(&output.stderr).contains("at least 1"));
}

#[test]
fn test_extract_missing_image_fails() {
    let output = Command::new(grannygrid_bin())
        .args(["extract", "/nonexistent/cover.png"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(4), "parse exit code");
}

#[test]
fn test_extract_undecodable_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not-an-image.png");
    std::fs::write(&path, "plain text").unwrap();

    let output = Command::new(grannygrid_bin())
        .args(["extract", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(4));
}
