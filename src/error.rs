//! Error types for the T&M billing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during entry pricing and
//! invoice generation.

use thiserror::Error;

use crate::models::RatePeriod;

/// The main error type for the T&M billing engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use tm_engine::error::EngineError;
///
/// let error = EngineError::CatalogNotFound {
///     path: "/missing/labor.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Catalog file not found: /missing/labor.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A catalog file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A labor role was not found in the labor catalog.
    #[error("Labor role not found: {name}")]
    RoleNotFound {
        /// The role name that was not found.
        name: String,
    },

    /// An employee was not found in the employee catalog, or is inactive.
    #[error("Employee not found or inactive: {id}")]
    EmployeeNotFound {
        /// The employee number that was not found.
        id: String,
    },

    /// A material was not found in the materials catalog.
    #[error("Material not found: {name}")]
    MaterialNotFound {
        /// The material name that was not found.
        name: String,
    },

    /// An equipment rental rate was not found in the catalog, or is inactive.
    #[error("Equipment not found or inactive: {name}")]
    EquipmentNotFound {
        /// The equipment name that was not found.
        name: String,
    },

    /// A union code was not found in the union rates catalog.
    #[error("Union not found: {code}")]
    UnionNotFound {
        /// The union code that was not found.
        code: String,
    },

    /// An equipment rate was requested for a rate period the catalog row
    /// does not define. The engine never substitutes another period.
    #[error("Equipment '{equipment}' has no {period} rate")]
    InvalidRatePeriod {
        /// The equipment name whose rate was requested.
        equipment: String,
        /// The rate period that has no catalog rate.
        period: RatePeriod,
    },

    /// A daily entry line contained invalid data.
    #[error("Invalid line '{description}': {message}")]
    InvalidLine {
        /// A short description identifying the offending line.
        description: String,
        /// A description of what made the line invalid.
        message: String,
    },

    /// Invoice or report generation found no entries to bill.
    #[error("No billable entries found for job '{job_number}'")]
    NothingToBill {
        /// The job number the generation was requested for.
        job_number: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
