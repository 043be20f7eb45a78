//! Flattened upload units and their exported RPC records.

use chrono::{DateTime, Utc};
use uplink_artifact::{resolve, ArtifactResult};
use uplink_core::{flatten, Report};
use uplink_proto::time;
use uplink_proto::v1::{ArtifactRecord, RollupRecord, SeriesId, StorageLocation};

/// One test node's worth of RPC payloads, ready to transmit.
#[derive(Debug, Clone)]
pub struct UploadUnit {
    pub id: SeriesId,
    pub artifacts: Vec<ArtifactRecord>,
    pub rollups: Vec<RollupRecord>,
    /// Converted to a wire timestamp at close time; `None` stays unset.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Flattens the report and exports every test node into an [`UploadUnit`].
///
/// Units come out in document order. Artifact records carry the same
/// resolved storage target the uploader used, so the receiver can locate
/// the payloads without re-deriving keys.
pub fn export_units(report: &Report) -> ArtifactResult<Vec<UploadUnit>> {
    let mut units = Vec::new();
    for flat in flatten(report) {
        let test = flat.test;

        let mut artifacts = Vec::with_capacity(test.artifacts.len());
        for artifact in &test.artifacts {
            let resolved = resolve(artifact, &report.bucket)?;
            artifacts.push(ArtifactRecord {
                location: StorageLocation::S3 as i32,
                bucket: resolved.bucket,
                prefix: resolved.prefix,
                key: resolved.key,
                format: resolved.format as i32,
                compression: resolved.compression as i32,
                tags: artifact.tags.clone(),
                created_at: time::from_optional(artifact.created_at),
            });
        }

        let rollups = test
            .metrics
            .iter()
            .map(|metric| RollupRecord {
                name: metric.name.clone(),
                version: metric.version,
                value: metric.value,
                r#type: metric.kind.clone(),
                user_submitted: true,
            })
            .collect();

        units.push(UploadUnit {
            id: SeriesId {
                project: report.project.clone(),
                version: report.version.clone(),
                order: report.order,
                variant: report.variant.clone(),
                task_name: report.task_name.clone(),
                task_id: report.task_id.clone(),
                mainline: report.mainline,
                execution: report.execution,
                test_name: test.name.clone(),
                trial: test.trial,
                parent: flat.parent.to_string(),
                tags: test.tags.clone(),
                arguments: test
                    .arguments
                    .iter()
                    .map(|(name, value)| (name.clone(), *value))
                    .collect(),
                created_at: time::from_optional(test.created_at),
            },
            artifacts,
            rollups,
            completed_at: test.completed_at,
        });
    }
    Ok(units)
}
