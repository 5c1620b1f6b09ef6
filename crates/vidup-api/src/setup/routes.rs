//! Route configuration and setup

use crate::handlers::{fallback, info, upload};
use crate::middleware::{get_request_id, request_id_middleware};
use crate::state::AppState;
use axum::{
    extract::{DefaultBodyLimit, Request},
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use vidup_core::constants::MULTIPART_OVERHEAD;

/// Build the application router.
///
/// Each route carries its own method fallback so a known path with the wrong
/// method answers 405, while unknown paths fall through to the router-level 404.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_size + MULTIPART_OVERHEAD;

    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        let request_id = get_request_id(request).unwrap_or_default();
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
            request_id = %request_id,
        )
    });

    Router::new()
        .route(
            "/hello",
            get(info::hello).fallback(fallback::method_not_allowed),
        )
        .route(
            "/about",
            get(info::about).fallback(fallback::method_not_allowed),
        )
        .route(
            "/health",
            get(info::health).fallback(fallback::method_not_allowed),
        )
        .route(
            "/version",
            get(info::version).fallback(fallback::method_not_allowed),
        )
        .route(
            "/upload",
            post(upload::upload_video)
                .fallback(fallback::method_not_allowed)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .fallback(fallback::not_found)
        .with_state(state)
        .layer(trace_layer)
        .layer(axum::middleware::from_fn(request_id_middleware))
}
