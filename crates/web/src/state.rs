//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::ReportsClient;
use crate::config::WebConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the reporting API client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    reports: ReportsClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: WebConfig) -> Self {
        let reports = ReportsClient::new(&config.api_base_url);

        Self {
            inner: Arc::new(AppStateInner { config, reports }),
        }
    }

    /// Get a reference to the web configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the reporting API client.
    #[must_use]
    pub fn reports(&self) -> &ReportsClient {
        &self.inner.reports
    }
}
