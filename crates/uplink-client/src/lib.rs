//! Upload pipeline for performance test reports.
//!
//! One upload invocation validates the report, converts and uploads its
//! artifacts, then transmits metric records either per test node against
//! the gRPC metrics service ([`MetricsService`]) or as one serialized body
//! through the presigned-URL relay ([`RelayClient`]). [`Uploader`] sequences
//! the stages; [`UploadOptions`] selects dry-run and serialized modes.

pub mod error;
pub mod export;
pub mod relay;
pub mod service;
pub mod transmit;
pub mod upload;

pub use error::{UploadError, UploadResult};
pub use export::{export_units, UploadUnit};
pub use relay::{RelayClient, RelayOptions};
pub use service::{GrpcMetricsService, MetricsService};
pub use upload::{UploadOptions, UploadTarget, Uploader};
