//! Storage abstraction trait
//!
//! This module defines the VideoStore trait that every storage backend implements.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use vidup_core::models::StoredVideo;
use vidup_core::AppError;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(msg) => AppError::NotFound(msg),
            StorageError::ConfigError(msg) => AppError::Internal(msg),
            other => AppError::Storage(other.to_string()),
        }
    }
}

/// Storage abstraction trait
///
/// The upload service only depends on this trait, so tests can swap in an
/// in-memory store or a store that always fails.
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Write one video object.
    ///
    /// Issues a single write with content type `video/mp4` and three metadata
    /// fields: the original filename, the upload time captured at call time,
    /// and `file_size` formatted as a decimal string. Errors are returned as
    /// reported by the backend; nothing is retried.
    async fn put_video(
        &self,
        storage_key: &str,
        data: Bytes,
        original_filename: &str,
        file_size: u64,
    ) -> StorageResult<()>;

    /// Read back the size, content type and metadata of a stored video
    async fn stat(&self, storage_key: &str) -> StorageResult<StoredVideo>;

    /// Bucket (or logical container) the store writes to
    fn bucket(&self) -> &str;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
