//! In-memory sales store.
//!
//! Backs the router tests and local demos with the same query semantics the
//! `PostgreSQL` store provides, without needing a database.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use salescope_core::{RegionSalesSummary, SalesRecord};

use super::{SalesStore, StoreError};

/// Sales store holding records in process memory.
///
/// Natural store order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySalesStore {
    records: Arc<RwLock<Vec<SalesRecord>>>,
}

impl MemorySalesStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`.
    #[must_use]
    pub fn with_records(records: Vec<SalesRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    fn read(&self) -> Result<Vec<SalesRecord>, StoreError> {
        self.records
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| StoreError::DataCorruption("records lock poisoned".to_string()))
    }
}

#[async_trait]
impl SalesStore for MemorySalesStore {
    async fn distinct_regions(&self) -> Result<Vec<String>, StoreError> {
        let records = self.read()?;

        let mut regions: Vec<String> = Vec::new();
        for record in &records {
            if !regions.contains(&record.region) {
                regions.push(record.region.clone());
            }
        }

        Ok(regions)
    }

    async fn summary_by_region(
        &self,
        region: &str,
    ) -> Result<Vec<RegionSalesSummary>, StoreError> {
        let records = self.read()?;

        // BTreeMap keeps the grouping keys in ascending order.
        let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
        for record in records.iter().filter(|r| r.region == region) {
            *totals
                .entry(record.salesperson.clone())
                .or_insert(Decimal::ZERO) += record.amount;
        }

        Ok(totals
            .into_iter()
            .map(|(salesperson, total_sales)| RegionSalesSummary {
                salesperson,
                total_sales,
            })
            .collect())
    }

    async fn all_records(&self) -> Result<Vec<SalesRecord>, StoreError> {
        self.read()
    }

    async fn records_in_range(
        &self,
        region: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<SalesRecord>, StoreError> {
        let records = self.read()?;

        Ok(records
            .into_iter()
            .filter(|r| r.region == region && r.date >= start && r.date <= end)
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
