//! HTTP route handlers for the reporting API.
//!
//! # Route Structure
//!
//! ```text
//! GET /health                                            - Liveness check
//! GET /health/ready                                      - Readiness check (store ping)
//!
//! # Sales reports
//! GET /reports/sales/regions                             - Distinct sales regions
//! GET /reports/sales/regions/{region}                    - Totals per salesperson for a region
//! GET /reports/sales/sales-data                          - All sales records
//! GET /reports/sales/sales-data/{region}/{start}/{end}   - Records for a region and date range
//! ```
//!
//! Every other path falls through to the fixed 404 JSON envelope.

pub mod sales;

use axum::{Json, Router, http::StatusCode, routing::get};

use crate::error::ErrorBody;
use crate::state::AppState;

/// Create the sales report routes router.
pub fn sales_report_routes() -> Router<AppState> {
    Router::new()
        .route("/regions", get(sales::regions))
        .route("/regions/{region}", get(sales::region_summary))
        .route("/sales-data", get(sales::sales_data))
        .route(
            "/sales-data/{region}/{start_date}/{end_date}",
            get(sales::sales_data_in_range),
        )
}

/// Create all routes for the reporting API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/reports/sales", sales_report_routes())
        .fallback(not_found)
}

/// Fallback handler: the fixed envelope for unmatched routes.
async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::not_found()))
}
