//! Shared record types for the sales reporting surface.

pub mod sales;

pub use sales::{RegionSalesSummary, SalesRecord};
