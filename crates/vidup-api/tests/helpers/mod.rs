//! Shared setup for API integration tests.

#![allow(dead_code)]

pub mod fixtures;

use async_trait::async_trait;
use axum_test::TestServer;
use bytes::Bytes;
use std::sync::Arc;
use vidup_api::{build_router, AppState};
use vidup_core::models::StoredVideo;
use vidup_core::{Config, StorageBackend};
use vidup_storage::{ObjectVideoStore, StorageError, StorageResult, VideoStore};

/// Test application backed by an in-memory object store
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<ObjectVideoStore>,
}

impl TestApp {
    /// Get the HTTP test client
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn test_config(max_upload_size: usize) -> Config {
    Config {
        storage_backend: StorageBackend::Memory,
        upload_bucket: "test-bucket".to_string(),
        max_upload_size,
        ..Config::default()
    }
}

fn server_for(config: Config, storage: Arc<dyn VideoStore>) -> TestServer {
    let router = build_router(AppState::new(config, storage));
    TestServer::new(router.into_make_service()).expect("Failed to create test server")
}

/// Setup a test application with the default upload ceiling
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_limit(vidup_core::constants::MAX_UPLOAD_SIZE).await
}

/// Setup a test application with a custom upload ceiling in bytes
pub async fn setup_test_app_with_limit(max_upload_size: usize) -> TestApp {
    let store = Arc::new(ObjectVideoStore::in_memory("test-bucket"));
    let server = server_for(test_config(max_upload_size), store.clone());
    TestApp { server, store }
}

/// Setup a server whose store rejects every write
pub async fn setup_failing_app() -> TestServer {
    let config = test_config(vidup_core::constants::MAX_UPLOAD_SIZE);
    server_for(config, Arc::new(FailingStore))
}

/// Store that fails every operation, for exercising the 500 path.
pub struct FailingStore;

#[async_trait]
impl VideoStore for FailingStore {
    async fn put_video(
        &self,
        _storage_key: &str,
        _data: Bytes,
        _original_filename: &str,
        _file_size: u64,
    ) -> StorageResult<()> {
        Err(StorageError::UploadFailed(
            "AccessDenied: simulated backend failure".to_string(),
        ))
    }

    async fn stat(&self, storage_key: &str) -> StorageResult<StoredVideo> {
        Err(StorageError::NotFound(storage_key.to_string()))
    }

    fn bucket(&self) -> &str {
        "failing-bucket"
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}
