//! End-to-end CLI tests.
//!
//! Everything here runs without a network: dry runs are gated before any
//! dial and validation never leaves the process.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const VALID_REPORT: &str = r#"{
    "project": "perf",
    "version": "abc123",
    "variant": "linux-standalone",
    "task_name": "insert_vectored",
    "task_id": "task-1",
    "execution": 2,
    "bucket": {"name": "perf-results", "prefix": "run-1", "region": "us-east-1"},
    "tests": [{
        "name": "load",
        "metrics": [
            {"name": "mean", "version": 1, "value": 1.5, "type": "MEAN"},
            {"name": "mean", "version": 2, "value": 1.6, "type": "MEAN"}
        ]
    }]
}"#;

const DUPLICATE_METRIC_REPORT: &str = r#"{
    "task_id": "task-1",
    "bucket": {"name": "perf-results"},
    "tests": [{
        "name": "load",
        "metrics": [
            {"name": "mean", "version": 1, "value": 1.5, "type": "MEAN"},
            {"name": "mean", "version": 1, "value": 1.6, "type": "MEAN"}
        ]
    }]
}"#;

#[test]
fn validate_accepts_a_wellformed_report() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("report.json"), VALID_REPORT).unwrap();

    let mut cmd = Command::cargo_bin("uplink").unwrap();
    cmd.current_dir(dir.path())
        .arg("validate")
        .arg("--report")
        .arg("report.json")
        .assert()
        .success()
        .stderr(predicate::str::contains("report ok"));
}

#[test]
fn validate_rejects_duplicate_metrics() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("report.json"), DUPLICATE_METRIC_REPORT).unwrap();

    let mut cmd = Command::cargo_bin("uplink").unwrap();
    cmd.current_dir(dir.path())
        .arg("validate")
        .arg("--report")
        .arg("report.json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("duplicate metric 'mean'"));
}

#[test]
fn missing_report_file_is_a_config_error() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("uplink").unwrap();
    cmd.current_dir(dir.path())
        .arg("validate")
        .arg("--report")
        .arg("absent.json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("fatal"));
}

#[test]
fn dry_run_upload_converts_artifacts_without_a_network() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("samples.json"),
        r#"[{"time": "2018-07-04T12:00:00Z", "values": {"ops": 100.0}}]"#,
    )
    .unwrap();
    fs::write(dir.path().join("raw.log"), b"line one\nline two\n").unwrap();
    fs::write(
        dir.path().join("report.yaml"),
        "
project: perf
task_id: task-1
bucket:
  name: perf-results
  prefix: run-1
  region: us-east-1
tests:
  - name: load
    artifacts:
      - local_file: samples.json
        conversion: json_to_series
      - local_file: raw.log
        conversion: gzip
    metrics:
      - name: mean
        version: 1
        value: 1.5
        type: MEAN
",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("uplink").unwrap();
    cmd.current_dir(dir.path())
        .arg("upload")
        .arg("--report")
        .arg("report.yaml")
        .arg("--dry-run")
        .assert()
        .success()
        .stderr(predicate::str::contains("report uploaded"));

    // Conversion leaves the converted files next to their sources.
    assert!(dir.path().join("samples.series").exists());
    assert!(dir.path().join("raw.log.gz").exists());
}

#[test]
fn dry_run_relay_upload_needs_no_relay_configuration() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("report.json"), VALID_REPORT).unwrap();

    let mut cmd = Command::cargo_bin("uplink").unwrap();
    cmd.current_dir(dir.path())
        .arg("upload")
        .arg("--report")
        .arg("report.json")
        .arg("--dry-run")
        .arg("--relay-host")
        .arg("http://relay.invalid")
        .assert()
        .success();
}

#[test]
fn upload_rejects_an_invalid_report_before_any_stage() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("report.json"), DUPLICATE_METRIC_REPORT).unwrap();

    let mut cmd = Command::cargo_bin("uplink").unwrap();
    cmd.current_dir(dir.path())
        .arg("upload")
        .arg("--report")
        .arg("report.json")
        .arg("--dry-run")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("upload failed"));
}
