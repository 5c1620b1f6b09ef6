//! Storage setup

use anyhow::{Context, Result};
use std::sync::Arc;
use vidup_core::Config;
use vidup_storage::{create_storage, VideoStore};

/// Build the configured storage backend.
pub fn setup_storage(config: &Config) -> Result<Arc<dyn VideoStore>> {
    let storage = create_storage(config).context("Failed to initialize storage backend")?;

    tracing::info!(
        backend = %storage.backend_type(),
        bucket = %storage.bucket(),
        region = %config.aws_region,
        endpoint = config.s3_endpoint.as_deref().unwrap_or("default"),
        "Storage initialized"
    );

    Ok(storage)
}
