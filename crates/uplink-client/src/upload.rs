//! Top-level orchestration of one report upload.

use std::sync::Arc;

use tracing::{debug, info};
use uplink_artifact::{upload_report_artifacts, ArtifactStore};
use uplink_core::Report;

use crate::error::UploadResult;
use crate::export::export_units;
use crate::relay::RelayClient;
use crate::service::MetricsService;
use crate::transmit::{transmit_concurrent, transmit_serialized};

/// Where the report's metric records go after artifact processing.
///
/// The two paths are mutually exclusive for one invocation; callers pick
/// exactly one when constructing the [`Uploader`].
pub enum UploadTarget {
    /// Per-unit series lifecycle against the metrics service.
    Metrics(Arc<dyn MetricsService>),
    /// Whole-report hand-off through the presigned-URL relay.
    Relay(RelayClient),
}

/// Per-invocation knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UploadOptions {
    /// Process upload units one at a time instead of concurrently.
    pub serialize_upload: bool,
    /// Validate and convert locally but make no network call.
    pub dry_run: bool,
}

/// Drives one report upload end to end.
pub struct Uploader {
    store: Arc<dyn ArtifactStore>,
    target: UploadTarget,
}

impl Uploader {
    pub fn new(store: Arc<dyn ArtifactStore>, target: UploadTarget) -> Self {
        Self { store, target }
    }

    /// Validates the report, processes its artifacts, then transmits via
    /// the configured target.
    ///
    /// Stages run in a fixed order and the first error wins. Artifact
    /// uploads completed earlier in the walk are not rolled back, but no
    /// metric record is transmitted once any stage has failed.
    pub async fn upload(&self, report: &Report, options: UploadOptions) -> UploadResult<()> {
        report.validate()?;
        debug!(task_id = %report.task_id, tests = report.tests.len(), "report validated");

        upload_report_artifacts(report, self.store.as_ref(), options.dry_run).await?;

        match &self.target {
            UploadTarget::Relay(relay) => {
                relay.upload_report(report, options.dry_run).await?;
            }
            UploadTarget::Metrics(service) => {
                if options.dry_run {
                    debug!(task_id = %report.task_id, "dry run, skipping metrics transmission");
                } else {
                    let units = export_units(report)?;
                    if options.serialize_upload {
                        transmit_serialized(service.as_ref(), &units).await?;
                    } else {
                        transmit_concurrent(service.clone(), units).await?;
                    }
                }
            }
        }

        info!(task_id = %report.task_id, "report upload complete");
        Ok(())
    }
}
