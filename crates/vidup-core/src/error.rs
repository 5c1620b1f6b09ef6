//! Error types module
//!
//! All request failures are unified under [`AppError`]. Each variant describes
//! how it is presented over HTTP through [`ErrorMetadata`]: the status code, the
//! short client-facing body, and the level it is logged at. Server-side
//! variants never expose their internal detail to the client.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like routing misses
    Debug,
    /// Warning level - for rejected client input
    Warn,
    /// Error level - for dependency and server failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether the internal detail must stay out of the response
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to parse multipart form: {0}")]
    MultipartParse(String),

    #[error("Invalid file format: {filename}")]
    InvalidFileType { filename: String },

    #[error("File size exceeds the limit: {size} bytes (max: {max} bytes)")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed: {method} {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Encoding(err.to_string())
    }
}

/// Static metadata for each variant: (http_status, error_code, sensitive, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::MultipartParse(_) => (400, "BAD_REQUEST", false, LogLevel::Warn),
        AppError::InvalidFileType { .. } => (400, "INVALID_FILE_TYPE", false, LogLevel::Warn),
        AppError::PayloadTooLarge { .. } => (413, "PAYLOAD_TOO_LARGE", false, LogLevel::Warn),
        AppError::NotFound(_) => (404, "NOT_FOUND", false, LogLevel::Debug),
        AppError::MethodNotAllowed { .. } => (405, "METHOD_NOT_ALLOWED", false, LogLevel::Debug),
        AppError::Storage(_) => (500, "STORAGE_ERROR", true, LogLevel::Error),
        AppError::Encoding(_) => (500, "ENCODING_ERROR", true, LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", true, LogLevel::Error),
        AppError::InternalWithSource { .. } => (500, "INTERNAL_ERROR", true, LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for logging
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::MultipartParse(_) => "MultipartParse",
            AppError::InvalidFileType { .. } => "InvalidFileType",
            AppError::PayloadTooLarge { .. } => "PayloadTooLarge",
            AppError::NotFound(_) => "NotFound",
            AppError::MethodNotAllowed { .. } => "MethodNotAllowed",
            AppError::Storage(_) => "Storage",
            AppError::Encoding(_) => "Encoding",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MultipartParse(_) => "Failed to get file".to_string(),
            AppError::InvalidFileType { .. } => "Only MP4 files are allowed".to_string(),
            AppError::PayloadTooLarge { .. } => "File size exceeds the limit".to_string(),
            AppError::NotFound(_) => "Page not found!".to_string(),
            AppError::MethodNotAllowed { .. } => "Method not allowed!".to_string(),
            AppError::Storage(_) => "Upload failed".to_string(),
            AppError::Encoding(_) => "Error encoding JSON".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::InternalWithSource { .. } => "Internal server error".to_string(),
        }
    }
}
