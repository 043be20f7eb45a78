//! Error types for report validation.

use thiserror::Error;

/// Errors from structural report validation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// Two metrics in one test share a (name, version) identity.
    #[error("duplicate metric '{name}' (version {version}) in test '{test}'")]
    DuplicateMetric {
        test: String,
        name: String,
        version: i32,
    },
}
