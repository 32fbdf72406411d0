//! End-to-end tests for `grannygrid match`.

use std::process::Command;

mod fixtures;
use fixtures::*;

#[test]
fn test_match_pairs_colors_with_nearest_yarns() {
    let dir = tempfile::tempdir().unwrap();
    let stash = write_sample_stash(&dir);
    let image = write_two_tone_png(&dir, "cover.png");

    let output = Command::new(grannygrid_bin())
        .args([
            "match",
            image.to_str().unwrap(),
            "--stash",
            stash.to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let matches: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("JSON output expected");
    let matches = matches.as_array().unwrap();
    assert_eq!(matches.len(), 2);

    // Pure red matches Cherry exactly (distance 0) and sorts first
    assert_eq!(matches[0]["source"], "#ff0000");
    assert_eq!(matches[0]["yarn"]["name"], "Cherry");
    assert_eq!(matches[0]["distance"], 0.0);

    // Blue has no close stash entry but still gets its nearest yarn
    assert_eq!(matches[1]["source"], "#0000ff");

    // Ascending distance across all matches
    let d0 = matches[0]["distance"].as_f64().unwrap();
    let d1 = matches[1]["distance"].as_f64().unwrap();
    assert!(d0 <= d1);
}

#[test]
fn test_match_empty_stash_is_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let stash = write_empty_stash(&dir);
    let image = write_solid_png(&dir, "cover.png", 10, 20, 30);

    let output = Command::new(grannygrid_bin())
        .args([
            "match",
            image.to_str().unwrap(),
            "--stash",
            stash.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No yarn records"));
}

#[test]
fn test_match_human_output_best_first() {
    let dir = tempfile::tempdir().unwrap();
    let stash = write_sample_stash(&dir);
    let image = write_solid_png(&dir, "cover.png", 255, 0, 0);

    let output = Command::new(grannygrid_bin())
        .args([
            "match",
            image.to_str().unwrap(),
            "--stash",
            stash.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#ff0000 -> Cherry"));
    assert!(stdout.contains("distance 0.0"));
}
