//! Per-unit series lifecycle against the metrics service.
//!
//! Every unit goes through create, attach, close in that order. A transport
//! error or a response with `success = false` stops the unit and fails the
//! whole upload.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::debug;
use uplink_proto::time;
use uplink_proto::v1::{ArtifactBatch, RollupBatch, SeriesEnd, SeriesResponse};

use crate::error::{UploadError, UploadResult};
use crate::export::UploadUnit;
use crate::service::MetricsService;

/// Cap on in-flight units when uploads are not serialized.
const MAX_IN_FLIGHT: usize = 8;

fn check(
    method: &'static str,
    test: &str,
    result: Result<SeriesResponse, tonic::Status>,
) -> UploadResult<SeriesResponse> {
    let response = result.map_err(|status| UploadError::Rpc {
        method,
        test: test.to_string(),
        status,
    })?;
    if !response.success {
        return Err(UploadError::Rejected {
            method,
            test: test.to_string(),
        });
    }
    Ok(response)
}

/// Runs the create/attach/close lifecycle for one unit.
///
/// Attach calls with nothing to send are skipped; close always runs so the
/// series is marked complete.
pub async fn transmit_unit(service: &dyn MetricsService, unit: &UploadUnit) -> UploadResult<()> {
    let test = unit.id.test_name.clone();

    let created = check(
        "create series",
        &test,
        service.create_series(unit.id.clone()).await,
    )?;
    let series_id = created.series_id;
    debug!(test = %test, series = %series_id, "series created");

    if !unit.artifacts.is_empty() {
        check(
            "attach artifacts",
            &test,
            service
                .attach_artifacts(ArtifactBatch {
                    series_id: series_id.clone(),
                    artifacts: unit.artifacts.clone(),
                })
                .await,
        )?;
    }

    if !unit.rollups.is_empty() {
        check(
            "attach rollups",
            &test,
            service
                .attach_rollups(RollupBatch {
                    series_id: series_id.clone(),
                    rollups: unit.rollups.clone(),
                })
                .await,
        )?;
    }

    check(
        "close series",
        &test,
        service
            .close_series(SeriesEnd {
                series_id,
                completed_at: time::from_optional(unit.completed_at),
            })
            .await,
    )?;
    debug!(test = %test, "series closed");
    Ok(())
}

/// Transmits units one at a time, stopping at the first failure.
pub async fn transmit_serialized(
    service: &dyn MetricsService,
    units: &[UploadUnit],
) -> UploadResult<()> {
    for unit in units {
        transmit_unit(service, unit).await?;
    }
    Ok(())
}

/// Transmits units concurrently, bounded by [`MAX_IN_FLIGHT`].
///
/// Phase order within a unit is preserved; cross-unit ordering is not. The
/// first failure aborts the remaining in-flight units and is returned.
pub async fn transmit_concurrent(
    service: Arc<dyn MetricsService>,
    units: Vec<UploadUnit>,
) -> UploadResult<()> {
    let sem = Arc::new(Semaphore::new(MAX_IN_FLIGHT));
    let mut join_set = JoinSet::new();

    for unit in units {
        let permit = sem
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| UploadError::TaskJoin {
                message: e.to_string(),
            })?;
        let service = service.clone();
        join_set.spawn(async move {
            let _permit = permit;
            transmit_unit(service.as_ref(), &unit).await
        });
    }

    while let Some(res) = join_set.join_next().await {
        let failure = match res {
            Ok(Ok(())) => continue,
            Ok(Err(e)) => e,
            Err(e) => UploadError::TaskJoin {
                message: e.to_string(),
            },
        };
        join_set.abort_all();
        while join_set.join_next().await.is_some() {}
        return Err(failure);
    }
    Ok(())
}
