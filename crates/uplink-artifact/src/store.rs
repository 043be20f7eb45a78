//! Object storage backends for artifact payloads.
//!
//! Production uploads target S3 via the `object_store` crate; tests use the
//! in-memory backend through the same trait.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as ObjectPath;
use object_store::{ObjectStore, ObjectStoreExt, PutPayload};
use tracing::debug;
use uplink_core::BucketConfiguration;

use crate::error::{ArtifactError, ArtifactResult};

/// Explicit AWS credentials. When `None` is passed to [`ObjectArtifactStore::s3`]
/// the backend falls back to the process environment.
#[derive(Debug, Clone, Default)]
pub struct AwsCredentials {
    pub access_key: String,
    pub secret_key: String,
    pub session_token: Option<String>,
}

/// Storage operations the upload pipeline needs from a bucket.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn put_object(&self, key: &str, bytes: Bytes) -> ArtifactResult<()>;
    async fn get_object(&self, key: &str) -> ArtifactResult<Bytes>;
    async fn remove_object(&self, key: &str) -> ArtifactResult<()>;
}

/// Artifact store backed by `object_store`.
pub struct ObjectArtifactStore {
    inner: Arc<dyn ObjectStore>,
    bucket: String,
}

impl ObjectArtifactStore {
    /// Create an S3-backed store for the report's bucket configuration.
    ///
    /// Explicit credentials win over the environment; region is optional and
    /// falls back to the SDK's resolution order when empty.
    pub fn s3(
        conf: &BucketConfiguration,
        credentials: Option<&AwsCredentials>,
    ) -> ArtifactResult<Self> {
        if conf.name.is_empty() {
            return Err(ArtifactError::NotConfigured {
                message: "bucket name is required".to_string(),
            });
        }

        let mut builder = AmazonS3Builder::from_env()
            .with_bucket_name(&conf.name)
            .with_allow_http(false);
        if !conf.region.is_empty() {
            builder = builder.with_region(&conf.region);
        }
        if let Some(creds) = credentials {
            builder = builder
                .with_access_key_id(&creds.access_key)
                .with_secret_access_key(&creds.secret_key);
            if let Some(token) = &creds.session_token {
                builder = builder.with_token(token);
            }
        }

        let inner = builder.build().map_err(|e| ArtifactError::NotConfigured {
            message: format!("failed to create S3 client: {}", e),
        })?;

        Ok(Self {
            inner: Arc::new(inner),
            bucket: conf.name.clone(),
        })
    }

    /// Create an in-memory store for testing.
    pub fn memory() -> Self {
        Self {
            inner: Arc::new(object_store::memory::InMemory::new()),
            bucket: "memory".to_string(),
        }
    }
}

#[async_trait]
impl ArtifactStore for ObjectArtifactStore {
    async fn put_object(&self, key: &str, bytes: Bytes) -> ArtifactResult<()> {
        let path = ObjectPath::from(key);
        debug!(bucket = %self.bucket, key = %path, size = bytes.len(), "uploading artifact");
        self.inner
            .put(&path, PutPayload::from_bytes(bytes))
            .await
            .map_err(|e| ArtifactError::Io {
                message: format!("failed to put {}: {}", path, e),
            })?;
        Ok(())
    }

    async fn get_object(&self, key: &str) -> ArtifactResult<Bytes> {
        let path = ObjectPath::from(key);
        let result = self.inner.get(&path).await.map_err(|e| ArtifactError::Io {
            message: format!("failed to get {}: {}", path, e),
        })?;
        result.bytes().await.map_err(|e| ArtifactError::Io {
            message: format!("failed to read {}: {}", path, e),
        })
    }

    async fn remove_object(&self, key: &str) -> ArtifactResult<()> {
        let path = ObjectPath::from(key);
        self.inner
            .delete(&path)
            .await
            .map_err(|e| ArtifactError::Io {
                message: format!("failed to delete {}: {}", path, e),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_round_trips() {
        let store = ObjectArtifactStore::memory();
        let content = Bytes::from("artifact payload");

        store
            .put_object("run-1/raw.log", content.clone())
            .await
            .expect("put failed");

        let retrieved = store.get_object("run-1/raw.log").await.expect("get failed");
        assert_eq!(retrieved, content);
    }

    #[tokio::test]
    async fn get_missing_object_fails() {
        let store = ObjectArtifactStore::memory();
        let result = store.get_object("run-1/missing").await;
        assert!(matches!(result, Err(ArtifactError::Io { .. })));
    }

    #[tokio::test]
    async fn remove_makes_object_unreachable() {
        let store = ObjectArtifactStore::memory();
        store
            .put_object("run-1/raw.log", Bytes::from("x"))
            .await
            .unwrap();

        store.remove_object("run-1/raw.log").await.unwrap();
        assert!(store.get_object("run-1/raw.log").await.is_err());
    }
}
