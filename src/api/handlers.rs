//! HTTP request handlers for the T&M billing engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{EntrySubmission, Invoice};
use crate::pricing::{
    MarkupPolicy, build_daily_report, build_union_fringe_summary, generate_invoice, price_entry,
};

use super::request::{DailyReportRequest, InvoiceRequest, UnionReportRequest};
use super::response::{ApiError, ApiErrorResponse, PricedEntryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entries/price", post(price_entry_handler))
        .route("/invoices", post(invoice_handler))
        .route("/reports/daily", post(daily_report_handler))
        .route("/reports/union", post(union_report_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an error response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for `POST /entries/price`.
///
/// Prices a raw submission against the catalogs and returns the fully
/// priced entry with its subtotals. Any unresolved reference rejects the
/// whole submission.
async fn price_entry_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntrySubmission>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Pricing entry submission");

    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match price_entry(state.catalog(), submission) {
        Ok(entry) => {
            let response = PricedEntryResponse::from_entry(entry);
            info!(
                correlation_id = %correlation_id,
                job_number = %response.entry.job_number,
                grand_total = %response.grand_total,
                "Entry priced successfully"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Entry pricing failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for `POST /invoices`.
///
/// Aggregates the submitted entries for the requested job and date range
/// into an invoice, applying the job's configured cost markup policy.
async fn invoice_handler(
    State(state): State<AppState>,
    payload: Result<Json<InvoiceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Generating invoice");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let range = match (request.start_date, request.end_date) {
        (Some(start), Some(end)) => Some((start, end)),
        _ => None,
    };
    let cost_policy = MarkupPolicy::from(state.catalog().cost_markup_for(&request.job_number));

    match generate_invoice(
        &request.job_number,
        range,
        request.invoice_date,
        &request.entries,
        cost_policy,
    ) {
        Ok(invoice) => {
            log_invoice(correlation_id, &invoice);
            (StatusCode::OK, Json(invoice)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invoice generation failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

fn log_invoice(correlation_id: Uuid, invoice: &Invoice) {
    info!(
        correlation_id = %correlation_id,
        invoice_number = %invoice.invoice_number,
        line_items = invoice.line_items.len(),
        grand_total = %invoice.grand_total,
        "Invoice generated successfully"
    );
}

/// Handler for `POST /reports/daily`.
///
/// Computes the per-category markup breakdown for one priced entry.
async fn daily_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<DailyReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Building daily report");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let cost_policy = MarkupPolicy::from(
        state
            .catalog()
            .cost_markup_for(&request.entry.job_number),
    );
    let report = build_daily_report(&request.entry, cost_policy);

    info!(
        correlation_id = %correlation_id,
        job_number = %report.job_number,
        grand_total = %report.grand_total,
        "Daily report built successfully"
    );
    (StatusCode::OK, Json(report)).into_response()
}

/// Handler for `POST /reports/union`.
///
/// Computes the fringe benefit summary for one union local across the
/// submitted entries.
async fn union_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<UnionReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Building union fringe report");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match build_union_fringe_summary(state.catalog(), &request.union_code, &request.entries) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                union_code = %summary.union_code,
                contractor_total = %summary.contractor_total,
                "Union fringe report built successfully"
            );
            (StatusCode::OK, Json(summary)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Union fringe report failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
