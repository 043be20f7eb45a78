//! Presigned-URL relay path for whole-report hand-off.
//!
//! The relay control plane issues a presigned upload URL for a resource
//! path derived from the report; the serialized report body is then PUT
//! directly to that URL. This path replaces per-test metrics RPCs for the
//! invocation that selects it.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tracing::debug;
use uplink_core::Report;
use uuid::Uuid;

use crate::error::{UploadError, UploadResult};

const USER_AGENT_VALUE: &str = concat!("uplink/", env!("CARGO_PKG_VERSION"));

/// Report type segment in the relay resource path.
const REPORT_TYPE: &str = "perf-report";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Relay configuration. Host and region are mandatory for wet runs.
#[derive(Debug, Clone, Default)]
pub struct RelayOptions {
    pub host: String,
    pub region: String,
}

/// Presign response from the relay control plane.
#[derive(Debug, Deserialize)]
struct PresignedUpload {
    url: String,
    #[serde(default)]
    expiration_secs: u64,
}

/// HTTP client for the relay control plane.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    options: RelayOptions,
}

impl RelayClient {
    pub fn new(options: RelayOptions) -> UploadResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .default_headers(default_headers)
            .build()
            .map_err(|e| UploadError::Relay {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, options })
    }

    /// Serializes the whole report and hands it to the relay.
    ///
    /// The dry-run gate comes before configuration checks, so a dry run
    /// succeeds even with no host configured. A wet run without host and
    /// region fails before any request is made.
    pub async fn upload_report(&self, report: &Report, dry_run: bool) -> UploadResult<()> {
        if dry_run {
            debug!(task_id = %report.task_id, "dry run, skipping relay upload");
            return Ok(());
        }
        if self.options.host.is_empty() {
            return Err(UploadError::MissingRelayConfig { field: "host" });
        }
        if self.options.region.is_empty() {
            return Err(UploadError::MissingRelayConfig { field: "region" });
        }

        let body = serde_json::to_vec(report)?;
        let name = Uuid::new_v4().to_string();
        let presign_url = format!(
            "{}/results/{}/task/{}/execution/{}/type/{}/name/{}",
            self.options.host.trim_end_matches('/'),
            report.project,
            report.task_id,
            report.execution,
            REPORT_TYPE,
            name,
        );
        debug!(url = %presign_url, region = %self.options.region, "requesting presigned upload url");

        let response = self
            .client
            .put(&presign_url)
            .send()
            .await
            .map_err(|e| UploadError::Relay {
                message: format!("presign request: {}", e),
            })?;
        ensure_success(response.status(), "presign")?;

        let presigned: PresignedUpload =
            response.json().await.map_err(|e| UploadError::Relay {
                message: format!("parsing presign response: {}", e),
            })?;
        debug!(
            url = %presigned.url,
            expiration_secs = presigned.expiration_secs,
            size = body.len(),
            "uploading report body"
        );

        let response = self
            .client
            .put(&presigned.url)
            .body(body)
            .send()
            .await
            .map_err(|e| UploadError::Relay {
                message: format!("body upload: {}", e),
            })?;
        ensure_success(response.status(), "body upload")?;

        Ok(())
    }
}

/// Single point of status interpretation for both relay calls.
fn ensure_success(status: reqwest::StatusCode, context: &'static str) -> UploadResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(UploadError::RelayStatus {
            status: status.as_u16(),
            context,
        })
    }
}
