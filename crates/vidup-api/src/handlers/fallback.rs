use axum::http::{Method, Uri};
use vidup_core::AppError;

use crate::error::HttpAppError;

/// No route matched the path.
pub async fn not_found(method: Method, uri: Uri) -> HttpAppError {
    let error = HttpAppError(AppError::NotFound(uri.path().to_string()));
    error
        .record("not found endpoint accessed")
        .with_request(&method, uri.path())
        .emit();
    error
}

/// The path exists but not for this method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> HttpAppError {
    let error = HttpAppError(AppError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    });
    error
        .record("method not allowed endpoint accessed")
        .with_request(&method, uri.path())
        .emit();
    error
}
