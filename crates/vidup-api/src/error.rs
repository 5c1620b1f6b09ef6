//! HTTP error response conversion
//!
//! This module provides HTTP-specific error response conversion for AppError.
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. Every error
//! renders the same way: the variant's status code and a short `text/plain`
//! body carrying the client message. Rendering does not log; the handler that
//! rejects a request emits exactly one [`RequestLog`] built by
//! [`HttpAppError::record`], so internal detail reaches the logs once.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use vidup_core::{AppError, ErrorMetadata, LogLevel};

use crate::telemetry::{RecordLevel, RequestLog};

/// Header carrying the machine-readable error code next to the plain-text body.
pub const ERROR_CODE_HEADER: &str = "x-error-code";

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from vidup-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<serde_json::Error> for HttpAppError {
    fn from(err: serde_json::Error) -> Self {
        HttpAppError(err.into())
    }
}

impl HttpAppError {
    /// Request record describing this error, at the error's log level.
    ///
    /// Server-side errors also carry the full source chain under `details`.
    pub fn record(&self, message: &str) -> RequestLog {
        let error = &self.0;
        let level = match error.log_level() {
            LogLevel::Debug => RecordLevel::Info,
            LogLevel::Warn => RecordLevel::Warn,
            LogLevel::Error => RecordLevel::Error,
        };

        let record = RequestLog::new(level, message)
            .with("error", error.to_string())
            .with("error_type", error.error_type())
            .with("error_code", error.error_code());

        if error.is_sensitive() {
            record.with("details", error.detailed_message())
        } else {
            record
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = format!("{}\n", app_error.client_message());
        let mut response = (status, body).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        response.headers_mut().insert(
            ERROR_CODE_HEADER,
            HeaderValue::from_static(app_error.error_code()),
        );
        response
    }
}
