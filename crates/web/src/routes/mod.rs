//! HTTP route handlers for the report views.
//!
//! # Route Structure
//!
//! ```text
//! GET /              - Sales data tabular view
//! GET /health        - Liveness check
//! GET /health/ready  - Readiness check (reporting API probe)
//! ```

pub mod sales_data;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the report views.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(sales_data::sales_data))
}
