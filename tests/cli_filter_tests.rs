//! End-to-end tests for `vrclife filter`.

use std::process::Command;

use serde::Deserialize;

mod fixtures;
use fixtures::*;

#[derive(Debug, Deserialize)]
struct FilterResponse {
    section: String,
    total: usize,
    matched: usize,
    entries: Vec<serde_json::Value>,
}

/// Path to the vrclife binary (set by cargo at compile time)
fn vrclife_bin() -> &'static str {
    env!("CARGO_BIN_EXE_vrclife")
}

#[test]
fn test_filter_category_json_output() {
    let dir = full_data_dir();
    let catalog = dir.path().join("items.json");

    let output = Command::new(vrclife_bin())
        .args([
            "filter",
            "--catalog",
            catalog.to_str().unwrap(),
            "--category",
            "mens",
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

    let response: FilterResponse =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(response.section, "items");
    assert_eq!(response.total, 3);
    assert_eq!(response.matched, 1);
    assert_eq!(response.entries[0]["name"], "Boy Hoodie");
}

#[test]
fn test_filter_query_is_case_insensitive() {
    let dir = full_data_dir();
    let catalog = dir.path().join("items.json");

    let output = Command::new(vrclife_bin())
        .args([
            "filter",
            "--catalog",
            catalog.to_str().unwrap(),
            "--query",
            "WA DRESS",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let response: FilterResponse = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response.matched, 1);
    assert_eq!(response.entries[0]["id"], "2");
}

#[test]
fn test_filter_conjunctive_dimensions() {
    let dir = full_data_dir();
    let catalog = dir.path().join("items.json");

    let output = Command::new(vrclife_bin())
        .args([
            "filter",
            "--catalog",
            catalog.to_str().unwrap(),
            "--category",
            "womens",
            "--taste",
            "cyber",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    let response: FilterResponse = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response.matched, 1);
    assert_eq!(response.entries[0]["name"], "Cyber Suit");
}

#[test]
fn test_filter_worlds_sorted_newest_pins_invalid_dates_last() {
    let dir = full_data_dir();
    let catalog = dir.path().join("worlds.json");

    let output = Command::new(vrclife_bin())
        .args([
            "filter",
            "--catalog",
            catalog.to_str().unwrap(),
            "--section",
            "worlds",
            "--sort",
            "newest",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let response: FilterResponse = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = response
        .entries
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Maze Runner", "Pancake House", "Mystery Attic"]);
}

#[test]
fn test_filter_limit_applies_after_sorting() {
    let dir = full_data_dir();
    let catalog = dir.path().join("worlds.json");

    let output = Command::new(vrclife_bin())
        .args([
            "filter",
            "--catalog",
            catalog.to_str().unwrap(),
            "--section",
            "worlds",
            "--sort",
            "newest",
            "--limit",
            "1",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    let response: FilterResponse = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response.matched, 1);
    assert_eq!(response.total, 3);
    assert_eq!(response.entries[0]["name"], "Maze Runner");
}

#[test]
fn test_filter_no_matches_prints_empty_state() {
    let dir = full_data_dir();
    let catalog = dir.path().join("items.json");

    let output = Command::new(vrclife_bin())
        .args([
            "filter",
            "--catalog",
            catalog.to_str().unwrap(),
            "--query",
            "no-such-entry",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No entries match."));
}

#[test]
fn test_filter_missing_catalog_exits_nonzero() {
    let output = Command::new(vrclife_bin())
        .args(["filter", "--catalog", "/nonexistent/items.json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load catalog"));
}

#[test]
fn test_filter_unknown_sort_order_is_usage_error() {
    let dir = full_data_dir();
    let catalog = dir.path().join("items.json");

    let output = Command::new(vrclife_bin())
        .args([
            "filter",
            "--catalog",
            catalog.to_str().unwrap(),
            "--sort",
            "sideways",
        ])
        .output()
        .expect("Failed to execute command");

    // clap rejects the value before the command runs
    assert_ne!(output.status.code(), Some(0));
}
