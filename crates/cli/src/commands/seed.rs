//! Seed the `sales` table from a YAML file.
//!
//! The reporting API is strictly read-only; this command plays the role of
//! the upstream data producer for local development and demos.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use salescope_api::db;

/// One sales record as declared in the seed file.
#[derive(Debug, Deserialize)]
pub struct SeedRecord {
    pub region: String,
    pub salesperson: String,
    pub product: String,
    pub channel: String,
    pub amount: Decimal,
    /// RFC 3339 datetime or plain `YYYY-MM-DD` date (read as midnight UTC).
    pub date: String,
}

/// Seed sales records from a YAML file.
///
/// # Errors
///
/// Returns an error if environment variables are missing, the file cannot be
/// read or parsed, or database operations fail.
pub async fn sales(file_path: &str, clear_existing: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let database_url = super::database_url()?;

    // Verify file exists
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading sales records from file");

    // Read and parse YAML before connecting to the database
    let content = tokio::fs::read_to_string(path).await?;
    let records: Vec<SeedRecord> = serde_yaml::from_str(&content)?;

    info!(records = records.len(), "Parsed seed file");

    // Resolve dates up front so a bad row fails before any insert
    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        let date = parse_seed_date(&record.date)
            .ok_or_else(|| format!("invalid date in seed file: {}", record.date))?;
        rows.push((record, date));
    }

    // Connect to database
    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    if clear_existing {
        let deleted = sqlx::query("DELETE FROM sales").execute(&pool).await?;
        info!(deleted = deleted.rows_affected(), "Cleared existing sales records");
    }

    let mut inserted = 0_u64;
    for (record, date) in rows {
        sqlx::query(
            r"
            INSERT INTO sales (region, salesperson, product, channel, amount, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&record.region)
        .bind(&record.salesperson)
        .bind(&record.product)
        .bind(&record.channel)
        .bind(record.amount)
        .bind(date)
        .execute(&pool)
        .await?;
        inserted += 1;
    }

    info!("Seeding complete!");
    info!("  Records inserted: {inserted}");

    Ok(())
}

/// Parse a seed date: RFC 3339 datetime or plain date at midnight UTC.
fn parse_seed_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_file_parses() {
        let yaml = r"
- region: North
  salesperson: John Doe
  product: Widget
  channel: Online
  amount: 600.0
  date: 2023-01-15
- region: South
  salesperson: Jane Roe
  product: Gadget
  channel: Retail
  amount: 250.5
  date: 2023-02-01T09:30:00Z
";
        let records: Vec<SeedRecord> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].region, "North");
        assert_eq!(records[1].amount, Decimal::new(2505, 1));
    }

    #[test]
    fn test_parse_seed_date_variants() {
        assert!(parse_seed_date("2023-01-15").is_some());
        assert!(parse_seed_date("2023-01-15T09:30:00Z").is_some());
        assert!(parse_seed_date("January 15").is_none());
    }
}
