//! CLI command implementations.

pub mod migrate;
pub mod seed;

use secrecy::SecretString;

/// Get the database URL with fallback to generic `DATABASE_URL`.
pub(crate) fn database_url() -> Result<SecretString, &'static str> {
    if let Ok(value) = std::env::var("REPORTS_DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err("REPORTS_DATABASE_URL not set")
}
