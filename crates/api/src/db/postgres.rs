//! `PostgreSQL`-backed sales store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use salescope_core::{RegionSalesSummary, SalesRecord};

use super::{SalesStore, StoreError};

/// Sales store backed by the `sales` table.
#[derive(Debug, Clone)]
pub struct PgSalesStore {
    pool: PgPool,
}

impl PgSalesStore {
    /// Create a new store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SalesStore for PgSalesStore {
    async fn distinct_regions(&self) -> Result<Vec<String>, StoreError> {
        let regions = sqlx::query_scalar::<_, String>("SELECT DISTINCT region FROM sales")
            .fetch_all(&self.pool)
            .await?;

        Ok(regions)
    }

    async fn summary_by_region(
        &self,
        region: &str,
    ) -> Result<Vec<RegionSalesSummary>, StoreError> {
        let summaries = sqlx::query_as::<_, RegionSalesSummary>(
            r"
            SELECT salesperson, SUM(amount) AS total_sales
            FROM sales
            WHERE region = $1
            GROUP BY salesperson
            ORDER BY salesperson ASC
            ",
        )
        .bind(region)
        .fetch_all(&self.pool)
        .await?;

        Ok(summaries)
    }

    async fn all_records(&self) -> Result<Vec<SalesRecord>, StoreError> {
        let records = sqlx::query_as::<_, SalesRecord>(
            "SELECT id, region, salesperson, product, channel, amount, date FROM sales",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn records_in_range(
        &self,
        region: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<SalesRecord>, StoreError> {
        let records = sqlx::query_as::<_, SalesRecord>(
            r"
            SELECT id, region, salesperson, product, channel, amount, date
            FROM sales
            WHERE region = $1 AND date >= $2 AND date <= $3
            ",
        )
        .bind(region)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
