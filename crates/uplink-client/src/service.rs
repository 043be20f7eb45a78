//! Client seam for the metrics ingestion service.
//!
//! The transmitter drives the four lifecycle calls through [`MetricsService`]
//! so tests can substitute an in-process double for the gRPC transport.

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use uplink_proto::v1::perf_metrics_client::PerfMetricsClient;
use uplink_proto::v1::{ArtifactBatch, RollupBatch, SeriesEnd, SeriesId, SeriesResponse};

use crate::error::{UploadError, UploadResult};

/// The four unary calls the transmitter drives, in lifecycle order.
#[async_trait]
pub trait MetricsService: Send + Sync {
    async fn create_series(&self, id: SeriesId) -> Result<SeriesResponse, tonic::Status>;
    async fn attach_artifacts(&self, batch: ArtifactBatch)
        -> Result<SeriesResponse, tonic::Status>;
    async fn attach_rollups(&self, batch: RollupBatch) -> Result<SeriesResponse, tonic::Status>;
    async fn close_series(&self, end: SeriesEnd) -> Result<SeriesResponse, tonic::Status>;
}

/// gRPC-backed implementation over a shared channel.
///
/// Channels multiplex, so each call clones the generated client instead of
/// locking a shared one.
#[derive(Debug, Clone)]
pub struct GrpcMetricsService {
    client: PerfMetricsClient<Channel>,
}

impl GrpcMetricsService {
    /// Dials eagerly and fails fast when the endpoint is unreachable.
    pub async fn connect(addr: String) -> UploadResult<Self> {
        let channel = Endpoint::from_shared(addr)
            .map_err(|e| UploadError::Connect {
                message: e.to_string(),
            })?
            .connect()
            .await
            .map_err(|e| UploadError::Connect {
                message: e.to_string(),
            })?;
        Ok(Self {
            client: PerfMetricsClient::new(channel),
        })
    }

    /// Builds the client without dialing; the first RPC establishes the
    /// connection.
    pub fn connect_lazy(addr: String) -> UploadResult<Self> {
        let channel = Endpoint::from_shared(addr)
            .map_err(|e| UploadError::Connect {
                message: e.to_string(),
            })?
            .connect_lazy();
        Ok(Self {
            client: PerfMetricsClient::new(channel),
        })
    }
}

#[async_trait]
impl MetricsService for GrpcMetricsService {
    async fn create_series(&self, id: SeriesId) -> Result<SeriesResponse, tonic::Status> {
        let mut client = self.client.clone();
        Ok(client.create_series(id).await?.into_inner())
    }

    async fn attach_artifacts(
        &self,
        batch: ArtifactBatch,
    ) -> Result<SeriesResponse, tonic::Status> {
        let mut client = self.client.clone();
        Ok(client.attach_artifacts(batch).await?.into_inner())
    }

    async fn attach_rollups(&self, batch: RollupBatch) -> Result<SeriesResponse, tonic::Status> {
        let mut client = self.client.clone();
        Ok(client.attach_rollups(batch).await?.into_inner())
    }

    async fn close_series(&self, end: SeriesEnd) -> Result<SeriesResponse, tonic::Status> {
        let mut client = self.client.clone();
        Ok(client.close_series(end).await?.into_inner())
    }
}
