//! Sales data tabular view.
//!
//! One GET against the reporting API per page load, bound to a generic
//! table. Any transport or server failure collapses into a single fixed
//! message; the detail is logged, never displayed.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use rust_decimal::Decimal;
use tracing::instrument;

use salescope_core::SalesRecord;

use crate::filters;
use crate::state::AppState;

/// Fixed page size handed to the client-side table widget.
const RECORDS_PER_PAGE: usize = 50;

/// The one user-facing message for any fetch failure.
const FETCH_ERROR_MESSAGE: &str = "Error fetching data from the server.";

/// A sales record row for the table.
#[derive(Debug, Clone)]
pub struct SalesRowView {
    pub region: String,
    pub product: String,
    pub channel: String,
    pub amount: String,
}

/// Format a sale amount as a price string.
fn format_amount(amount: Decimal) -> String {
    format!("${amount:.2}")
}

impl From<&SalesRecord> for SalesRowView {
    fn from(record: &SalesRecord) -> Self {
        Self {
            region: record.region.clone(),
            product: record.product.clone(),
            channel: record.channel.clone(),
            amount: format_amount(record.amount),
        }
    }
}

/// Sales data page template.
#[derive(Template, WebTemplate)]
#[template(path = "sales_data.html")]
pub struct SalesDataTemplate {
    /// Rows bound to the table, possibly empty.
    pub rows: Vec<SalesRowView>,
    /// Fixed error banner text, present only on fetch failure.
    pub error_message: Option<String>,
    /// Page size delegated to the table widget.
    pub records_per_page: usize,
}

/// Display the sales data table.
#[instrument(skip(state))]
pub async fn sales_data(State(state): State<AppState>) -> SalesDataTemplate {
    match state.reports().sales_data().await {
        Ok(records) => SalesDataTemplate {
            rows: records.iter().map(SalesRowView::from).collect(),
            error_message: None,
            records_per_page: RECORDS_PER_PAGE,
        },
        Err(e) => {
            tracing::error!("Failed to fetch sales data: {e}");
            SalesDataTemplate {
                rows: Vec::new(),
                error_message: Some(FETCH_ERROR_MESSAGE.to_string()),
                records_per_page: RECORDS_PER_PAGE,
            }
        }
    }
}
