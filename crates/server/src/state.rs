//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::db::PropertyRepository;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// listing repository and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    properties: Arc<dyn PropertyRepository>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `properties` - Listing repository backing the API
    #[must_use]
    pub fn new(config: ServerConfig, properties: Arc<dyn PropertyRepository>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, properties }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the listing repository.
    #[must_use]
    pub fn properties(&self) -> &dyn PropertyRepository {
        self.inner.properties.as_ref()
    }
}
