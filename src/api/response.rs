//! Response types for the T&M billing engine API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP statuses, plus the priced-entry response body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::DailyEntry;
use crate::pricing::round_money;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::CatalogNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATALOG_ERROR",
                    "Catalog error",
                    format!("Catalog file not found: {}", path),
                ),
            },
            EngineError::CatalogParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATALOG_ERROR",
                    "Catalog parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::RoleNotFound { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "ROLE_NOT_FOUND",
                    format!("Labor role not found: {}", name),
                    "The submission references a labor role that is not in the catalog",
                ),
            },
            EngineError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    format!("Employee not found or inactive: {}", id),
                    "The submission references an employee that is not active in the catalog",
                ),
            },
            EngineError::MaterialNotFound { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MATERIAL_NOT_FOUND",
                    format!("Material not found: {}", name),
                    "The submission references a material that is not in the catalog",
                ),
            },
            EngineError::EquipmentNotFound { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "EQUIPMENT_NOT_FOUND",
                    format!("Equipment not found or inactive: {}", name),
                    "The submission references equipment that is not active in the catalog",
                ),
            },
            EngineError::UnionNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNION_NOT_FOUND",
                    format!("Union not found: {}", code),
                    "No benefit rates are configured for the requested union",
                ),
            },
            EngineError::InvalidRatePeriod { equipment, period } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RATE_PERIOD",
                    format!("Equipment '{}' has no {} rate", equipment, period),
                    "The catalog row does not define a rate for the requested period",
                ),
            },
            EngineError::InvalidLine {
                description,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_LINE",
                    format!("Invalid line '{}': {}", description, message),
                    "The submission contains an invalid line",
                ),
            },
            EngineError::NothingToBill { job_number } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "NOTHING_TO_BILL",
                    format!("No billable entries found for job '{}'", job_number),
                    "No daily entries matched the requested job and date range",
                ),
            },
        }
    }
}

/// Response body for a successfully priced entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricedEntryResponse {
    /// The fully priced entry.
    pub entry: DailyEntry,
    /// Labor subtotal for the day.
    pub labor_total: Decimal,
    /// Materials subtotal for the day.
    pub materials_total: Decimal,
    /// Equipment subtotal for the day.
    pub equipment_total: Decimal,
    /// Vendor expense subtotal for the day.
    pub expenses_total: Decimal,
    /// Grand total of all subtotals.
    pub grand_total: Decimal,
}

impl PricedEntryResponse {
    /// Builds the response from a priced entry, computing the subtotals.
    pub fn from_entry(entry: DailyEntry) -> Self {
        let labor_total: Decimal = entry.labor.iter().map(|l| l.amount()).sum();
        let materials_total: Decimal = entry.materials.iter().map(|m| m.amount()).sum();
        let equipment_total: Decimal = entry.equipment.iter().map(|e| e.amount()).sum();
        let expenses_total: Decimal = entry.expenses.iter().map(|e| e.amount).sum();
        let grand_total = labor_total + materials_total + equipment_total + expenses_total;

        Self {
            entry,
            labor_total: round_money(labor_total),
            materials_total: round_money(materials_total),
            equipment_total: round_money(equipment_total),
            expenses_total: round_money(expenses_total),
            grand_total: round_money(grand_total),
        }
    }
}
