//! End-to-end tests for `grannygrid tropes`.

use std::process::Command;

mod fixtures;
use fixtures::*;

#[test]
fn test_tropes_lists_catalog() {
    let output = Command::new(grannygrid_bin())
        .args(["tropes", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let tropes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tropes = tropes.as_array().unwrap();
    assert_eq!(tropes.len(), 29);
    assert!(tropes
        .iter()
        .any(|t| t["name"] == "Enemies to Lovers" && t["color"] == "#fa1338"));
}

#[test]
fn test_tropes_query_filters() {
    let output = Command::new(grannygrid_bin())
        .args(["tropes", "whimsical"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fairy Tale Retelling"));
    assert!(!stdout.contains("Mafia Romance"));
}

#[test]
fn test_tropes_no_match_message() {
    let output = Command::new(grannygrid_bin())
        .args(["tropes", "zzzznothing"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("No tropes match"));
}
