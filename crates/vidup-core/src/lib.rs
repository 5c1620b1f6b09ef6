//! Vidup Core Library
//!
//! This crate provides the configuration, error taxonomy, upload models and
//! upload validation shared by the storage and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;
pub mod validator;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{UploadResponse, UploadStatus};
pub use storage_types::StorageBackend;
pub use validator::{UploadValidator, ValidationError};
