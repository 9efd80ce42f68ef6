//! Sales record and aggregation result types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single sales record as stored in the `sales` table.
///
/// Records are produced by an upstream system (or the seeding CLI) and are
/// strictly read-only from the reporting API's point of view. The reporting
/// surface never creates, updates, or deletes them.
///
/// `amount` uses [`Decimal`] with float-based serde so it round-trips as a
/// JSON number, matching what the table widget and API consumers expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct SalesRecord {
    /// Stable record identifier.
    pub id: Uuid,
    /// Named sales territory, the primary filter dimension.
    pub region: String,
    /// Grouping key for aggregated totals within a region.
    pub salesperson: String,
    /// Product sold. Informational, displayed not processed.
    pub product: String,
    /// Sales channel. Informational, displayed not processed.
    pub channel: String,
    /// Sale amount, summed during aggregation.
    pub amount: Decimal,
    /// Point in time of the sale, used as an inclusive range-filter bound.
    pub date: DateTime<Utc>,
}

/// Aggregated sales for one salesperson within a region.
///
/// Computed per request by the region summary query and never persisted;
/// its lifetime is one response. The grouping key (`region`) is dropped from
/// the projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct RegionSalesSummary {
    /// The salesperson the total belongs to.
    pub salesperson: String,
    /// Sum of `amount` over all matching records for this salesperson.
    #[serde(rename = "totalSales")]
    pub total_sales: Decimal,
}
