//! HTTP client for the reporting API.
//!
//! The report view is a pure consumer: one GET per page load, no retry, no
//! caching. Failures are reported as [`ApiClientError`] and collapsed into a
//! single fixed message at the rendering boundary.

use reqwest::StatusCode;
use thiserror::Error;

use salescope_core::SalesRecord;

/// Errors from the reporting API client.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// Transport-level failure (connect, timeout, decode).
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("unexpected status: {0}")]
    UnexpectedStatus(StatusCode),
}

/// Client for the sales reporting API.
#[derive(Debug, Clone)]
pub struct ReportsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ReportsClient {
    /// Create a client for the API at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch every sales record.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError` on transport failure or any non-2xx response;
    /// the caller decides how to surface it.
    pub async fn sales_data(&self) -> Result<Vec<SalesRecord>, ApiClientError> {
        let response = self
            .http
            .get(format!("{}/reports/sales/sales-data", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiClientError::UnexpectedStatus(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Probe the API's liveness endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError` if the API is unreachable or unhealthy.
    pub async fn health(&self) -> Result<(), ApiClientError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiClientError::UnexpectedStatus(response.status()));
        }

        Ok(())
    }
}
