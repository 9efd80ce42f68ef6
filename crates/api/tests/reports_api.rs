//! Router-level tests for the sales reporting contract.
//!
//! These drive the real router through `tower::ServiceExt::oneshot` with the
//! in-memory store substituted for `PostgreSQL`, so they exercise routing,
//! extraction, and response shaping without external services.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use salescope_api::config::ApiConfig;
use salescope_api::db::{MemorySalesStore, SalesStore, StoreError};
use salescope_api::routes;
use salescope_api::state::AppState;

use salescope_core::{RegionSalesSummary, SalesRecord};

fn test_config() -> ApiConfig {
    ApiConfig {
        database_url: secrecy::SecretString::from("postgres://localhost/unused"),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

fn app_with_store(store: Arc<dyn SalesStore>) -> Router {
    routes::routes().with_state(AppState::new(test_config(), store))
}

fn app_with_records(records: Vec<SalesRecord>) -> Router {
    app_with_store(Arc::new(MemorySalesStore::with_records(records)))
}

fn record(
    region: &str,
    salesperson: &str,
    product: &str,
    amount: i64,
    date: &str,
) -> SalesRecord {
    SalesRecord {
        id: Uuid::new_v4(),
        region: region.to_string(),
        salesperson: salesperson.to_string(),
        product: product.to_string(),
        channel: "Online".to_string(),
        amount: Decimal::from(amount),
        date: date.parse().unwrap(),
    }
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

// ============================================================================
// Regions
// ============================================================================

#[tokio::test]
async fn test_regions_returns_distinct_values() {
    let app = app_with_records(vec![
        record("North", "John Doe", "Widget", 600, "2023-01-15T00:00:00Z"),
        record("South", "Jane Roe", "Widget", 200, "2023-01-16T00:00:00Z"),
        record("North", "Jane Roe", "Gadget", 400, "2023-01-17T00:00:00Z"),
    ]);

    let (status, body) = get(app, "/reports/sales/regions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["North", "South"]));
}

#[tokio::test]
async fn test_regions_empty_store_is_empty_array() {
    let app = app_with_records(vec![]);

    let (status, body) = get(app, "/reports/sales/regions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// ============================================================================
// Region summary
// ============================================================================

#[tokio::test]
async fn test_region_summary_groups_sums_and_sorts() {
    let app = app_with_records(vec![
        record("North", "Zoe Quinn", "Widget", 50, "2023-01-01T00:00:00Z"),
        record("North", "John Doe", "Widget", 600, "2023-01-15T00:00:00Z"),
        record("North", "John Doe", "Gadget", 400, "2023-02-15T00:00:00Z"),
        record("South", "John Doe", "Widget", 999, "2023-01-15T00:00:00Z"),
    ]);

    let (status, body) = get(app, "/reports/sales/regions/North").await;
    assert_eq!(status, StatusCode::OK);

    let summaries: Vec<RegionSalesSummary> = serde_json::from_value(body).unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].salesperson, "John Doe");
    assert_eq!(summaries[0].total_sales, Decimal::from(1000));
    assert_eq!(summaries[1].salesperson, "Zoe Quinn");
    assert_eq!(summaries[1].total_sales, Decimal::from(50));
}

#[tokio::test]
async fn test_region_summary_projects_total_sales_key() {
    let app = app_with_records(vec![record(
        "North",
        "John Doe",
        "Widget",
        600,
        "2023-01-15T00:00:00Z",
    )]);

    let (_, body) = get(app, "/reports/sales/regions/North").await;
    let first = body.as_array().unwrap().first().unwrap();
    assert!(first["totalSales"].is_number());
    // The grouping key is dropped from the projection.
    assert!(first.get("region").is_none());
}

#[tokio::test]
async fn test_region_summary_unknown_region_is_empty_array() {
    let app = app_with_records(vec![record(
        "North",
        "John Doe",
        "Widget",
        600,
        "2023-01-15T00:00:00Z",
    )]);

    let (status, body) = get(app, "/reports/sales/regions/Atlantis").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// ============================================================================
// All sales data
// ============================================================================

#[tokio::test]
async fn test_sales_data_returns_records_as_stored() {
    let records = vec![
        record("North", "John Doe", "Widget", 600, "2023-01-15T00:00:00Z"),
        record("South", "Jane Roe", "Gadget", 200, "2023-01-16T00:00:00Z"),
    ];
    let app = app_with_records(records.clone());

    let (status, body) = get(app, "/reports/sales/sales-data").await;
    assert_eq!(status, StatusCode::OK);

    let fetched: Vec<SalesRecord> = serde_json::from_value(body).unwrap();
    assert_eq!(fetched, records);
}

#[tokio::test]
async fn test_sales_data_empty_store_is_200_not_error() {
    let app = app_with_records(vec![]);

    let (status, body) = get(app, "/reports/sales/sales-data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// ============================================================================
// Sales data by region and date range
// ============================================================================

#[tokio::test]
async fn test_range_filters_by_region_and_inclusive_dates() {
    let app = app_with_records(vec![
        record("North", "John Doe", "Widget", 1, "2023-01-01T00:00:00Z"),
        record("North", "John Doe", "Widget", 2, "2023-01-31T00:00:00Z"),
        record("North", "John Doe", "Widget", 3, "2023-02-01T00:00:00Z"),
        record("South", "Jane Roe", "Widget", 4, "2023-01-15T00:00:00Z"),
    ]);

    let (status, body) =
        get(app, "/reports/sales/sales-data/North/2023-01-01/2023-01-31").await;
    assert_eq!(status, StatusCode::OK);

    let fetched: Vec<SalesRecord> = serde_json::from_value(body).unwrap();
    let amounts: Vec<Decimal> = fetched.iter().map(|r| r.amount).collect();
    assert_eq!(amounts, vec![Decimal::from(1), Decimal::from(2)]);
}

#[tokio::test]
async fn test_range_accepts_rfc3339_bounds() {
    let app = app_with_records(vec![record(
        "North",
        "John Doe",
        "Widget",
        1,
        "2023-01-15T12:00:00Z",
    )]);

    let (status, body) = get(
        app,
        "/reports/sales/sales-data/North/2023-01-15T00:00:00Z/2023-01-15T23:59:59Z",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_range_unmatched_region_is_empty_array() {
    let app = app_with_records(vec![record(
        "North",
        "John Doe",
        "Widget",
        1,
        "2023-01-15T00:00:00Z",
    )]);

    let (status, body) =
        get(app, "/reports/sales/sales-data/Atlantis/2023-01-01/2023-12-31").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_range_inverted_bounds_is_empty_array_not_error() {
    let app = app_with_records(vec![record(
        "North",
        "John Doe",
        "Widget",
        1,
        "2023-01-15T00:00:00Z",
    )]);

    let (status, body) =
        get(app, "/reports/sales/sales-data/North/2023-12-31/2023-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_range_malformed_date_is_400_envelope() {
    let app = app_with_records(vec![]);

    let (status, body) =
        get(app, "/reports/sales/sales-data/North/not-a-date/2023-01-31").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["type"], "error");
}

// ============================================================================
// Error envelope
// ============================================================================

#[tokio::test]
async fn test_unmatched_route_returns_fixed_404_envelope() {
    let app = app_with_records(vec![]);

    let (status, body) = get(app, "/reports/sales/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"message": "Not Found", "status": 404, "type": "error"})
    );
}

/// Store stub whose every operation fails, for the propagation contract.
struct FailingStore;

#[async_trait]
impl SalesStore for FailingStore {
    async fn distinct_regions(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::DataCorruption("store offline".to_string()))
    }

    async fn summary_by_region(
        &self,
        _region: &str,
    ) -> Result<Vec<RegionSalesSummary>, StoreError> {
        Err(StoreError::DataCorruption("store offline".to_string()))
    }

    async fn all_records(&self) -> Result<Vec<SalesRecord>, StoreError> {
        Err(StoreError::DataCorruption("store offline".to_string()))
    }

    async fn records_in_range(
        &self,
        _region: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Vec<SalesRecord>, StoreError> {
        Err(StoreError::DataCorruption("store offline".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::DataCorruption("store offline".to_string()))
    }
}

#[tokio::test]
async fn test_store_failure_surfaces_as_opaque_500_envelope() {
    let app = app_with_store(Arc::new(FailingStore));

    let (status, body) = get(app, "/reports/sales/sales-data").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], 500);
    assert_eq!(body["type"], "error");
    // Internal detail is logged, never exposed.
    assert_eq!(body["message"], "Internal server error");
}

// ============================================================================
// Worked example from the reporting contract
// ============================================================================

#[tokio::test]
async fn test_north_region_example_totals_to_one_thousand() {
    let app = app_with_records(vec![
        record("North", "John Doe", "Widget", 600, "2023-01-15T00:00:00Z"),
        record("North", "John Doe", "Gadget", 400, "2023-02-20T00:00:00Z"),
    ]);

    let (status, body) = get(app, "/reports/sales/regions/North").await;
    assert_eq!(status, StatusCode::OK);

    let summaries: Vec<RegionSalesSummary> = serde_json::from_value(body).unwrap();
    assert_eq!(
        summaries,
        vec![RegionSalesSummary {
            salesperson: "John Doe".to_string(),
            total_sales: Decimal::from(1000),
        }]
    );
}
