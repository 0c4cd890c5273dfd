//! HTTP API module for the T&M billing engine.
//!
//! This module provides the REST API endpoints for pricing entry
//! submissions and generating invoices, daily reports, and per-union
//! fringe reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DailyReportRequest, InvoiceRequest, UnionReportRequest};
pub use response::{ApiError, PricedEntryResponse};
pub use state::AppState;
