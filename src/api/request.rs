//! Request types for the T&M billing engine API.
//!
//! This module defines the JSON request structures for the billing
//! endpoints. Daily entries travel in the request body: storage is an
//! external collaborator and the engine only ever sees the snapshot it is
//! asked to price or aggregate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::DailyEntry;

/// Request body for the `POST /invoices` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRequest {
    /// The job number to bill.
    pub job_number: String,
    /// Optional inclusive start of the billing period.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Optional inclusive end of the billing period.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// The invoice date stamped into the invoice number.
    pub invoice_date: NaiveDate,
    /// The stored daily entries to aggregate over.
    pub entries: Vec<DailyEntry>,
}

/// Request body for the `POST /reports/daily` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReportRequest {
    /// The priced daily entry to break down.
    pub entry: DailyEntry,
}

/// Request body for the `POST /reports/union` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnionReportRequest {
    /// The union local to report on (e.g., "DC11").
    pub union_code: String,
    /// The stored daily entries to aggregate over.
    pub entries: Vec<DailyEntry>,
}
