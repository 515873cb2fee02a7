//! Shared test utilities for questboard integration tests

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Local, TimeZone};
use tempfile::TempDir;

/// Fixed wall clock so generated quest IDs are predictable
pub fn fixed_clock() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 1, 20, 12, 0, 0)
        .single()
        .expect("Unambiguous local time")
}

/// Writes an action script into a fresh temp dir and returns both
pub fn write_script(json: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("actions.json");
    fs::write(&path, json).expect("Failed to write action script");
    (temp_dir, path)
}

/// Writes a config file into a fresh temp dir and returns both
pub fn write_config(toml: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, toml).expect("Failed to write config");
    (temp_dir, path)
}
