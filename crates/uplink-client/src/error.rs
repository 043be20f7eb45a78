//! Error types for report uploads.

use thiserror::Error;
use uplink_artifact::ArtifactError;
use uplink_core::ReportError;

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

/// Errors that can occur during one report upload invocation.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Report failed structural validation.
    #[error("validating report: {0}")]
    Validation(#[from] ReportError),

    /// Artifact conversion or storage failed.
    #[error("processing artifacts: {0}")]
    Artifacts(#[from] ArtifactError),

    /// Metrics service endpoint could not be dialed.
    #[error("connecting to metrics service: {message}")]
    Connect { message: String },

    /// An RPC failed with a transport or server error.
    #[error("{method} for test '{test}': {status}")]
    Rpc {
        method: &'static str,
        test: String,
        status: tonic::Status,
    },

    /// The service answered but flagged the call unsuccessful.
    #[error("{method} for test '{test}' was rejected by the service")]
    Rejected { method: &'static str, test: String },

    /// Relay path selected without its mandatory configuration.
    #[error("relay upload requires a configured {field}")]
    MissingRelayConfig { field: &'static str },

    /// Relay HTTP request failed outright.
    #[error("relay request: {message}")]
    Relay { message: String },

    /// Relay endpoint answered with a non-success status.
    #[error("relay {context} returned HTTP {status}")]
    RelayStatus { status: u16, context: &'static str },

    /// Report body could not be serialized for the relay.
    #[error("serializing report body: {0}")]
    Body(#[from] serde_json::Error),

    /// A concurrent upload task failed to complete.
    #[error("upload task failed: {message}")]
    TaskJoin { message: String },
}
