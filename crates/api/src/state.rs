//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::db::SalesStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and hands each request its
/// data-access capability. Handlers only ever see the [`SalesStore`] trait,
/// so tests can swap the `PostgreSQL` store for an in-memory one.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    store: Arc<dyn SalesStore>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ApiConfig, store: Arc<dyn SalesStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the sales store.
    #[must_use]
    pub fn store(&self) -> &dyn SalesStore {
        self.inner.store.as_ref()
    }
}
