//! Conversion and upload of a report's artifacts.

use bytes::Bytes;
use tracing::debug;
use uplink_core::{flatten, Report};

use crate::convert::{convert_artifact, resolve};
use crate::error::ArtifactResult;
use crate::store::ArtifactStore;

/// Converts and uploads every artifact in the report's test tree.
///
/// Artifacts are processed in document order and the first failure aborts
/// the walk; earlier uploads are not undone. Under dry run conversion still
/// runs (converted files land on disk) but no storage call is made.
pub async fn upload_report_artifacts(
    report: &Report,
    store: &dyn ArtifactStore,
    dry_run: bool,
) -> ArtifactResult<()> {
    for flat in flatten(report) {
        for artifact in &flat.test.artifacts {
            let resolved = resolve(artifact, &report.bucket)?;
            let bytes = convert_artifact(artifact, &resolved)?;
            if dry_run {
                debug!(
                    test = %flat.test.name,
                    key = %resolved.storage_key(),
                    "dry run, skipping artifact upload"
                );
                continue;
            }
            store
                .put_object(&resolved.storage_key(), Bytes::from(bytes))
                .await?;
        }
    }
    Ok(())
}
