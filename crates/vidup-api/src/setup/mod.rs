//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use vidup_core::Config;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(AppState, axum::Router)> {
    // Initialize telemetry first
    crate::telemetry::init_telemetry(config.log_json, &config.environment)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    match &config.env_file {
        Some(path) => tracing::info!(path = %path.display(), "Loaded .env file"),
        None => tracing::info!("No .env file found, using environment variables"),
    }

    config.validate().context("Configuration validation failed")?;
    tracing::info!("Configuration loaded and validated successfully");

    // Setup storage
    let storage = storage::setup_storage(&config)?;

    let state = AppState::new(config, storage);
    let router = routes::build_router(state.clone());

    Ok((state, router))
}
