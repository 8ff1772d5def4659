//! End-to-end runs of the mrclog CLI

use super::helpers::{fixtures_dir, mrclog, write_config};

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn help_lists_chart_flags() {
    let temp = TempDir::new().unwrap();
    mrclog(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--olken-time"))
        .stdout(predicate::str::contains("--accuracy"));
}

#[test]
fn runtime_aggregate_of_two_runs() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "[charts]\nruntime_algorithms = [\"Evicting-Map\"]\n");
    let out = temp.path().join("time.svg");

    let assert = mrclog(temp.path())
        .current_dir(fixtures_dir().join("runs"))
        .args(["-i", "a/trace1.log", "b/trace1.log", "--json", "--config"])
        .arg(&config)
        .arg("--time")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("log b/trace1.log has no trace read time"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["chart"], "runtime");
    assert_eq!(
        doc["series"],
        serde_json::json!([{
            "algorithm": "Evicting-Map",
            "points": { "a/trace1.log": 12.0, "b/trace1.log": 9.0 }
        }])
    );

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("Runtimes by Trace"));
    assert!(svg.contains("Evicting Map"));
}

#[test]
fn bare_accuracy_flag_writes_default_file() {
    let temp = TempDir::new().unwrap();

    mrclog(temp.path())
        .current_dir(temp.path())
        .arg("-i")
        .arg(fixtures_dir().join("accuracy"))
        .arg("--accuracy")
        .assert()
        .success();

    let svg = fs::read_to_string(temp.path().join("accuracy.svg")).unwrap();
    assert!(svg.contains("Mean Absolute Error (MAE) by Trace"));
    assert!(svg.contains("Fixed-Size SHARDS"));
}

#[test]
fn same_output_for_two_charts_fails_before_drawing() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("shared.svg");

    mrclog(temp.path())
        .arg("-i")
        .arg(fixtures_dir().join("runs"))
        .arg("--time")
        .arg(&out)
        .arg("--olken-time")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than once"));

    assert!(!out.exists());
}

#[test]
fn no_chart_requested_is_an_error() {
    let temp = TempDir::new().unwrap();
    mrclog(temp.path())
        .arg("-i")
        .arg(fixtures_dir().join("runs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to do"));
}

#[test]
fn ambiguous_trace_time_names_file_and_record() {
    let temp = TempDir::new().unwrap();
    let line = "[INFO] [2024-05-02 14:03:11] [ trace_runner.c:204 ] [errno 0: Success] Trace Read Time: 1.000 sec";
    let log = temp.path().join("twice.log");
    fs::write(&log, format!("{}\n{}\n", line, line)).unwrap();
    let out = temp.path().join("t.svg");

    mrclog(temp.path())
        .arg("-i")
        .arg(&log)
        .arg("--time")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("twice.log"))
        .stderr(predicate::str::contains("trace read time"));

    assert!(!out.exists());
}

#[test]
fn olken_chart_with_custom_extension() {
    let temp = TempDir::new().unwrap();
    let logs = temp.path().join("logs");
    fs::create_dir_all(&logs).unwrap();
    fs::copy(
        fixtures_dir().join("runs/a/trace1.log"),
        logs.join("trace1.txt"),
    )
    .unwrap();
    let out = temp.path().join("olken.svg");

    let assert = mrclog(temp.path())
        .arg("-i")
        .arg(&logs)
        .args(["--extensions", ".txt", "--json", "--jobs", "2", "--olken-time"])
        .arg(&out)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["chart"], "olken runtime");
    assert_eq!(doc["series"][0]["algorithm"], "Olken");
    let points = doc["series"][0]["points"].as_object().unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points.values().next().unwrap(), 10.0);
    assert!(out.exists());
}

#[test]
fn dot_prefixed_output_clashes_with_plain_name() {
    let temp = TempDir::new().unwrap();

    mrclog(temp.path())
        .current_dir(temp.path())
        .arg("-i")
        .arg(fixtures_dir().join("runs"))
        .args(["--time", "out.svg", "--olken-time", "./out.svg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than once"));

    assert!(!temp.path().join("out.svg").exists());
}

#[test]
fn both_runtime_charts_warn_once_per_log() {
    let temp = TempDir::new().unwrap();

    let assert = mrclog(temp.path())
        .current_dir(fixtures_dir().join("runs"))
        .args(["-i", "b/trace1.log", "--time"])
        .arg(temp.path().join("t.svg"))
        .arg("--olken-time")
        .arg(temp.path().join("o.svg"))
        .assert()
        .success();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert_eq!(
        stderr.matches("log b/trace1.log has no trace read time").count(),
        1
    );
}
