//! Shared helpers for the CLI end-to-end tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Writes `source` to `<dir>/<name>.jack` inside a fresh temp
/// directory and returns both, so the directory outlives the test
/// (dropping it deletes the files).
pub fn write_jack_file(name: &str, source: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join(format!("{name}.jack"));
    fs::write(&path, source).expect("failed to write fixture source");
    (dir, path)
}
