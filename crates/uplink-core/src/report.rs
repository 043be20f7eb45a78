//! Report data model.
//!
//! A report is the caller-assembled record of one task execution: identifying
//! fields, a storage bucket configuration, and a tree of tests. The pipeline
//! treats every type here as read-only input; defaulting and conversion are
//! computed into separate resolved views, never written back.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level report covering one task execution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
    pub project: String,
    pub version: String,
    pub order: i32,
    pub variant: String,
    pub task_name: String,
    pub task_id: String,
    pub mainline: bool,
    pub execution: i32,
    /// Who requested the task (patch, mainline tracker, ...). Carried in the
    /// relay body but not part of the per-series identity.
    pub requester: String,
    pub bucket: BucketConfiguration,
    pub tests: Vec<Test>,
}

/// Storage bucket configuration shared by the report's artifacts.
///
/// Artifacts that leave their own bucket or prefix empty inherit these
/// values at resolution time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketConfiguration {
    pub name: String,
    pub prefix: String,
    pub region: String,
}

/// One test node. Tests nest arbitrarily deep and every node, at every
/// depth, is its own upload unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Test {
    pub name: String,
    pub trial: i32,
    pub tags: Vec<String>,
    /// Named integer arguments for the run (e.g. thread level).
    pub arguments: BTreeMap<String, i32>,
    pub artifacts: Vec<Artifact>,
    pub metrics: Vec<Metric>,
    /// `None` means unset and is never transmitted.
    pub created_at: Option<DateTime<Utc>>,
    /// `None` means unset and is never transmitted.
    pub completed_at: Option<DateTime<Utc>>,
    pub sub_tests: Vec<Test>,
}

/// A file produced by a test, destined for object storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Artifact {
    /// Target bucket; inherits the report's bucket configuration when empty.
    pub bucket: String,
    /// Key prefix; inherits the report's bucket configuration when empty.
    pub prefix: String,
    /// Storage key. Derived from the local file name when empty.
    pub path: String,
    /// Source file on local disk.
    pub local_file: PathBuf,
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub conversion: Conversion,
}

/// How an artifact payload is converted before upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conversion {
    /// Upload the source file as-is.
    #[default]
    None,
    /// Parse the source as a JSON sample stream and pack it into a series
    /// chunk.
    JsonToSeries,
    /// Parse the source as a YAML sample stream and pack it into a series
    /// chunk.
    YamlToSeries,
    /// Gzip the source bytes.
    Gzip,
}

/// A single rollup value computed by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    #[serde(default)]
    pub version: i32,
    pub value: f64,
    /// Rollup type tag, e.g. "MEAN" or "SUM".
    #[serde(rename = "type")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_parses_from_json() {
        let raw = r#"{
            "project": "perf",
            "version": "abc123",
            "order": 2,
            "variant": "linux-standalone",
            "task_name": "insert_vectored",
            "task_id": "task-1",
            "mainline": true,
            "execution": 2,
            "requester": "mainline-tracker",
            "bucket": {"name": "perf-results", "prefix": "run-1", "region": "us-east-1"},
            "tests": [{
                "name": "load",
                "trial": 1,
                "tags": ["warmup"],
                "arguments": {"thread_level": 4},
                "created_at": "2018-07-04T12:00:00Z",
                "artifacts": [{
                    "prefix": "run-1",
                    "local_file": "samples.json",
                    "conversion": "json_to_series"
                }],
                "sub_tests": [{
                    "name": "load.phase0",
                    "metrics": [{"name": "mean", "version": 1, "value": 1.5, "type": "MEAN"}]
                }]
            }]
        }"#;

        let report: Report = serde_json::from_str(raw).expect("report should parse");
        assert_eq!(report.project, "perf");
        assert_eq!(report.execution, 2);
        assert_eq!(report.bucket.region, "us-east-1");

        let test = &report.tests[0];
        assert_eq!(test.arguments["thread_level"], 4);
        assert!(test.created_at.is_some());
        assert!(test.completed_at.is_none());
        assert_eq!(test.artifacts[0].conversion, Conversion::JsonToSeries);
        assert_eq!(test.artifacts[0].bucket, "");

        let sub = &test.sub_tests[0];
        assert_eq!(sub.metrics[0].kind, "MEAN");
        assert_eq!(sub.metrics[0].version, 1);
    }

    #[test]
    fn report_parses_from_yaml() {
        let raw = "
project: perf
version: abc123
variant: linux-standalone
task_name: insert_vectored
task_id: task-1
tests:
  - name: load
    artifacts:
      - local_file: raw.log
        conversion: gzip
";
        let report: Report = serde_yaml::from_str(raw).expect("report should parse");
        assert_eq!(report.tests[0].artifacts[0].conversion, Conversion::Gzip);
        assert!(!report.mainline);
        assert_eq!(report.order, 0);
    }

    #[test]
    fn metric_type_round_trips_through_rename() {
        let metric = Metric {
            name: "sum".to_string(),
            version: 1,
            value: 10.0,
            kind: "SUM".to_string(),
        };
        let json = serde_json::to_value(&metric).expect("serializes");
        assert_eq!(json["type"], "SUM");
        assert!(json.get("kind").is_none());
    }
}
