//! Vidup API Library
//!
//! This crate provides the HTTP handlers, middleware, request logging and
//! application setup for the video upload service.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::HttpAppError;
pub use setup::routes::build_router;
pub use state::AppState;
pub use telemetry::request_log::RequestLog;
