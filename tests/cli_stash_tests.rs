//! End-to-end tests for `grannygrid stash`.

use std::process::Command;

mod fixtures;
use fixtures::*;

#[test]
fn test_stash_lists_records_with_categories() {
    let dir = tempfile::tempdir().unwrap();
    let stash = write_sample_stash(&dir);

    let output = Command::new(grannygrid_bin())
        .args(["stash", stash.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("3 yarn(s)"));
    assert!(stdout.contains("Reds:"));
    assert!(stdout.contains("Greens:"));
    assert!(stdout.contains("Cherry #ff0000 - 2 skein(s), Worsted Weight, size 4"));
}

#[test]
fn test_stash_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let stash = write_sample_stash(&dir);

    let output = Command::new(grannygrid_bin())
        .args(["stash", stash.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("JSON output expected");
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["name"], "Cherry");
    assert_eq!(records[0]["category"], "Reds");
    assert_eq!(records[0]["color"], "#ff0000");
    assert_eq!(records[0]["quantity"], 2);
}

#[test]
fn test_stash_missing_file_fails() {
    let output = Command::new(grannygrid_bin())
        .args(["stash", "/nonexistent/stash.csv"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_stash_empty_file_reports_zero() {
    let dir = tempfile::tempdir().unwrap();
    let stash = write_empty_stash(&dir);

    let output = Command::new(grannygrid_bin())
        .args(["stash", stash.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("0 yarn(s)"));
}
