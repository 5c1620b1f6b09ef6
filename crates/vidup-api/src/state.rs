//! Application state shared by every handler.

use std::sync::Arc;
use vidup_core::Config;
use vidup_storage::VideoStore;

/// Read-only state cloned into each request.
///
/// Holds no mutable data: the configuration is fixed at startup and the
/// storage client is safe to share across tasks.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub storage: Arc<dyn VideoStore>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn VideoStore>) -> Self {
        Self {
            config: Arc::new(config),
            storage,
        }
    }
}
