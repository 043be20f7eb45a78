//! Structural validation, run strictly before any conversion or network I/O.

use std::collections::HashSet;

use crate::error::ReportError;
use crate::flatten::flatten;
use crate::report::Report;

impl Report {
    /// Rejects reports in which any test, at any depth, carries two metrics
    /// with the same (name, version) pair. The first offender found in
    /// document order is reported.
    pub fn validate(&self) -> Result<(), ReportError> {
        for flat in flatten(self) {
            let mut seen = HashSet::new();
            for metric in &flat.test.metrics {
                if !seen.insert((metric.name.as_str(), metric.version)) {
                    return Err(ReportError::DuplicateMetric {
                        test: flat.test.name.clone(),
                        name: metric.name.clone(),
                        version: metric.version,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::report::{Metric, Report, Test};
    use crate::ReportError;

    fn metric(name: &str, version: i32) -> Metric {
        Metric {
            name: name.to_string(),
            version,
            value: 1.0,
            kind: "MEAN".to_string(),
        }
    }

    fn leaf(name: &str, metrics: Vec<Metric>) -> Test {
        Test {
            name: name.to_string(),
            metrics,
            ..Test::default()
        }
    }

    #[test]
    fn unique_metrics_pass() {
        let report = Report {
            tests: vec![leaf(
                "t0",
                vec![metric("mean", 1), metric("sum", 1), metric("mean", 2)],
            )],
            ..Report::default()
        };
        assert!(report.validate().is_ok());
    }

    #[test]
    fn duplicate_pair_in_nested_subtest_is_rejected() {
        let mut report = Report {
            tests: vec![Test {
                name: "t0".to_string(),
                sub_tests: vec![leaf("t00", vec![metric("mean", 1), metric("mean", 1)])],
                ..Test::default()
            }],
            ..Report::default()
        };

        let err = report.validate().expect_err("duplicate should fail");
        match err {
            ReportError::DuplicateMetric {
                test,
                name,
                version,
            } => {
                assert_eq!(test, "t00");
                assert_eq!(name, "mean");
                assert_eq!(version, 1);
            }
        }

        // Same name under a different version is a distinct identity.
        report.tests[0].sub_tests[0].metrics[1].version = 2;
        assert!(report.validate().is_ok());
    }

    #[test]
    fn duplicates_across_sibling_tests_are_allowed() {
        let report = Report {
            tests: vec![
                leaf("t0", vec![metric("mean", 1)]),
                leaf("t1", vec![metric("mean", 1)]),
            ],
            ..Report::default()
        };
        assert!(report.validate().is_ok());
    }
}
