use crate::keys::validate_key;
use crate::traits::{StorageError, StorageResult, VideoStore};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use object_store::memory::InMemory;
use object_store::path::Path;
use object_store::{Attribute, Attributes, GetOptions, ObjectStore, PutOptions, PutPayload};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use vidup_core::constants::{metadata_keys, VIDEO_CONTENT_TYPE};
use vidup_core::models::{rfc3339_now, StoredVideo};

#[cfg(feature = "storage-s3")]
use object_store::aws::AmazonS3Builder;

/// Video storage on top of an `object_store` backend
#[derive(Clone)]
pub struct ObjectVideoStore {
    store: Arc<dyn ObjectStore>,
    bucket: String,
    backend: StorageBackend,
}

impl ObjectVideoStore {
    /// Create an S3-backed store
    ///
    /// Credentials come from the environment (`AWS_ACCESS_KEY_ID`,
    /// `AWS_SECRET_ACCESS_KEY`, ...).
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    #[cfg(feature = "storage-s3")]
    pub fn s3(bucket: String, region: String, endpoint_url: Option<String>) -> StorageResult<Self> {
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region)
            .with_bucket_name(bucket.clone());

        if let Some(endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder.with_endpoint(endpoint).with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(Self {
            store: Arc::new(store),
            bucket,
            backend: StorageBackend::S3,
        })
    }

    /// Create a store that keeps objects in process memory
    pub fn in_memory(bucket: impl Into<String>) -> Self {
        Self {
            store: Arc::new(InMemory::new()),
            bucket: bucket.into(),
            backend: StorageBackend::Memory,
        }
    }

    fn put_attributes(original_filename: &str, file_size: u64) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, VIDEO_CONTENT_TYPE.into());
        attributes.insert(
            Attribute::Metadata(metadata_keys::ORIGINAL_FILENAME.into()),
            original_filename.to_string().into(),
        );
        attributes.insert(
            Attribute::Metadata(metadata_keys::UPLOAD_TIME.into()),
            rfc3339_now().into(),
        );
        attributes.insert(
            Attribute::Metadata(metadata_keys::FILE_SIZE.into()),
            file_size.to_string().into(),
        );
        attributes
    }
}

#[async_trait]
impl VideoStore for ObjectVideoStore {
    async fn put_video(
        &self,
        storage_key: &str,
        data: Bytes,
        original_filename: &str,
        file_size: u64,
    ) -> StorageResult<()> {
        validate_key(storage_key)?;

        let location = Path::from(storage_key);
        let size_bytes = data.len() as u64;
        let opts = PutOptions {
            attributes: Self::put_attributes(original_filename, file_size),
            ..Default::default()
        };

        let start = Instant::now();
        self.store
            .put_opts(&location, PutPayload::from(data), opts)
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;

        tracing::info!(
            backend = %self.backend,
            bucket = %self.bucket,
            key = %storage_key,
            size_bytes,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Video upload successful"
        );

        Ok(())
    }

    async fn stat(&self, storage_key: &str) -> StorageResult<StoredVideo> {
        validate_key(storage_key)?;
        let location = Path::from(storage_key);

        let result = self
            .store
            .get_opts(&location, GetOptions::default())
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { .. } => {
                    StorageError::NotFound(storage_key.to_string())
                }
                other => StorageError::BackendError(other.to_string()),
            })?;

        let mut content_type = None;
        let mut metadata = HashMap::new();
        for (attribute, value) in result.attributes.iter() {
            match attribute {
                Attribute::ContentType => content_type = Some(value.to_string()),
                Attribute::Metadata(key) => {
                    metadata.insert(key.to_string(), value.to_string());
                }
                _ => {}
            }
        }

        Ok(StoredVideo {
            key: storage_key.to_string(),
            size: result.meta.size as u64,
            content_type,
            metadata,
        })
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn backend_type(&self) -> StorageBackend {
        self.backend
    }
}
