//! Sales report handlers.
//!
//! Each handler is a direct pass-through to one store operation: route
//! parameters in, JSON array out. Empty result sets are 200 responses with
//! `[]`, never errors; that is how "no data" is kept distinct from "not
//! found".

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::instrument;

use salescope_core::{RegionSalesSummary, SalesRecord};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List distinct sales regions.
///
/// Order is whatever the store yields; the contract leaves it unspecified.
#[instrument(skip(state))]
pub async fn regions(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let regions = state.store().distinct_regions().await?;
    Ok(Json(regions))
}

/// Sales totals per salesperson for one region, sorted ascending by
/// salesperson.
///
/// The region value is taken as-is; an unknown region is an empty array,
/// not a 404.
#[instrument(skip(state))]
pub async fn region_summary(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<Vec<RegionSalesSummary>>> {
    let summaries = state.store().summary_by_region(&region).await?;
    Ok(Json(summaries))
}

/// All sales records, unfiltered.
#[instrument(skip(state))]
pub async fn sales_data(State(state): State<AppState>) -> Result<Json<Vec<SalesRecord>>> {
    let records = state.store().all_records().await?;
    Ok(Json(records))
}

/// Sales records for a region within an inclusive date range.
///
/// No `start <= end` validation: an inverted range simply matches nothing.
#[instrument(skip(state))]
pub async fn sales_data_in_range(
    State(state): State<AppState>,
    Path((region, start_date, end_date)): Path<(String, String, String)>,
) -> Result<Json<Vec<SalesRecord>>> {
    let start = parse_report_date(&start_date)?;
    let end = parse_report_date(&end_date)?;

    let records = state.store().records_in_range(&region, start, end).await?;
    Ok(Json(records))
}

/// Parse a date path segment.
///
/// Accepts an RFC 3339 datetime or a plain `YYYY-MM-DD` date, which is read
/// as midnight UTC (so a date-only upper bound excludes later moments of that
/// day, matching the range semantics consumers already rely on).
fn parse_report_date(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AppError::BadRequest(format!("invalid date: {value}")))
}
