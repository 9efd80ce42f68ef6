//! Data access for the `sales` table.
//!
//! # Tables
//!
//! - `sales` - Sales records, written by upstream producers and read here
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p salescope-cli -- migrate
//! ```
//!
//! The store handle is an injected capability: handlers receive a
//! [`SalesStore`] trait object through application state rather than reaching
//! for a module-level pool, so tests can substitute [`MemorySalesStore`].

pub mod memory;
pub mod postgres;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use salescope_core::{RegionSalesSummary, SalesRecord};

pub use memory::MemorySalesStore;
pub use postgres::PgSalesStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Read-only access to sales records.
///
/// Every operation maps to exactly one query; failures propagate unchanged
/// as [`StoreError`] with no retry or partial-result handling. Empty result
/// sets are ordinary `Ok` values, never errors.
#[async_trait]
pub trait SalesStore: Send + Sync {
    /// Distinct `region` values in natural store order.
    async fn distinct_regions(&self) -> Result<Vec<String>, StoreError>;

    /// Per-salesperson totals for one region, sorted ascending by
    /// salesperson. Unknown regions produce an empty vector.
    async fn summary_by_region(
        &self,
        region: &str,
    ) -> Result<Vec<RegionSalesSummary>, StoreError>;

    /// Every sales record, unfiltered, as stored.
    async fn all_records(&self) -> Result<Vec<SalesRecord>, StoreError>;

    /// Records matching `region` exactly whose `date` lies within
    /// `[start, end]`, inclusive on both bounds. An inverted range yields an
    /// empty vector through ordinary range semantics.
    async fn records_in_range(
        &self,
        region: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<SalesRecord>, StoreError>;

    /// Cheap connectivity probe for the readiness endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
