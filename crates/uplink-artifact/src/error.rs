//! Error types for artifact conversion and storage.

use thiserror::Error;

/// Result type for artifact operations.
pub type ArtifactResult<T> = Result<T, ArtifactError>;

/// Errors that can occur while converting or uploading artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Local source file could not be read.
    #[error("reading artifact source {path}: {message}")]
    Source { path: String, message: String },

    /// Source payload could not be decoded as the directive's input format.
    #[error("decoding artifact {path}: {message}")]
    Decode { path: String, message: String },

    /// Converted payload could not be written next to the source.
    #[error("writing converted artifact {path}: {message}")]
    Write { path: String, message: String },

    /// Neither the artifact nor the report names a target bucket.
    #[error("artifact {file}: no bucket configured")]
    MissingBucket { file: String },

    /// No storage key was given and none can be derived from the source path.
    #[error("artifact {file}: no storage key and no file name to derive one from")]
    MissingKey { file: String },

    /// Storage backend could not be constructed.
    #[error("store not configured: {message}")]
    NotConfigured { message: String },

    /// Network or I/O error from the storage backend.
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Generic error from the underlying object store.
    #[error("object store error: {0}")]
    ObjectStore(#[from] object_store::Error),
}
