//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

const PREFIX: &str =
    "[INFO] [2024-05-02 14:03:11] [ src/analysis/mrc/trace_runner.c:212 ] [errno 0: Success]";

/// A trace read time record
pub fn trace_line(secs: &str) -> String {
    format!("{} Trace Read Time: {} sec", PREFIX, secs)
}

/// A compute time record with the given total
pub fn compute_line(algo: &str, total: &str) -> String {
    format!(
        "{} {} -- Histogram Time: 1.000 | Post-Process Time: 0.500 | MRC Time: 0.500 | Total Time: {}",
        PREFIX, algo, total
    )
}

/// An accuracy record
pub fn accuracy_line(algo: &str, mae: &str, mse: &str) -> String {
    format!(
        "{} {} -- Mean Absolute Error (MAE): {} | Mean Squared Error (MSE): {}",
        PREFIX, algo, mae, mse
    )
}

/// Write `lines` to `root/rel`, creating parent directories
pub fn write_log(root: &Path, rel: &str, lines: &[String]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create log dir");
    }
    fs::write(&path, lines.join("\n")).expect("Failed to write log");
    path
}

/// Lossy string form of a path, as used for aggregate keys
pub fn key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
