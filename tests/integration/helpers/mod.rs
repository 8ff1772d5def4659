//! Shared helpers for end-to-end CLI tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// mrclog with its config lookup isolated in `home`
pub fn mrclog(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mrclog").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Write a config file into `dir` and return its path
pub fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("mrclog.toml");
    fs::write(&path, body).unwrap();
    path
}
