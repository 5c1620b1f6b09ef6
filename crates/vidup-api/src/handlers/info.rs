//! Informational endpoints: `/hello`, `/about`, `/health`, `/version`.

use axum::{
    extract::{rejection::QueryRejection, Query},
    http::{Method, Uri},
    Json,
};
use serde::{Deserialize, Serialize};
use vidup_core::constants::APP_VERSION;
use vidup_core::models::rfc3339_now;

use crate::telemetry::RequestLog;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
    pub status: String,
    pub timestamp: String,
}

/// Greets `name`, or `stranger` when the parameter is missing or empty.
///
/// Only the first `name` pair counts. An unparseable query string is treated
/// as having no `name`.
pub async fn hello(
    method: Method,
    uri: Uri,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> String {
    let name_param = query
        .map(|Query(pairs)| first_value(pairs, "name"))
        .unwrap_or_default();
    RequestLog::info("hello endpoint accessed")
        .with_request(&method, uri.path())
        .with("name_param", name_param.as_str())
        .emit();

    let name = if name_param.is_empty() {
        "stranger"
    } else {
        name_param.as_str()
    };
    format!("Hello, {}!\n", name)
}

fn first_value(pairs: Vec<(String, String)>, key: &str) -> String {
    pairs
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
        .unwrap_or_default()
}

pub async fn about(method: Method, uri: Uri) -> &'static str {
    RequestLog::info("about endpoint accessed")
        .with_request(&method, uri.path())
        .emit();

    "This is the about page.\n"
}

/// Liveness probe. Not logged.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: rfc3339_now(),
    })
}

pub async fn version(method: Method, uri: Uri) -> Json<VersionResponse> {
    RequestLog::info("version endpoint accessed")
        .with_request(&method, uri.path())
        .emit();

    Json(VersionResponse {
        version: APP_VERSION.to_string(),
        status: "running".to_string(),
        timestamp: rfc3339_now(),
    })
}
