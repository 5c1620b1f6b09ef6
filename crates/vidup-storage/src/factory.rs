use crate::{ObjectVideoStore, StorageBackend, StorageResult, VideoStore};
use std::sync::Arc;
use vidup_core::Config;

/// Create a storage backend based on configuration
pub fn create_storage(config: &Config) -> StorageResult<Arc<dyn VideoStore>> {
    match config.storage_backend {
        #[cfg(feature = "storage-s3")]
        StorageBackend::S3 => {
            let storage = ObjectVideoStore::s3(
                config.upload_bucket.clone(),
                config.aws_region.clone(),
                config.s3_endpoint.clone(),
            )?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-s3"))]
        StorageBackend::S3 => Err(crate::StorageError::ConfigError(
            "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
        )),

        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; uploaded videos are lost on restart");
            Ok(Arc::new(ObjectVideoStore::in_memory(
                config.upload_bucket.clone(),
            )))
        }
    }
}
