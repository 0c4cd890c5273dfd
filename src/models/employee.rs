//! Employee model for union payroll billing.
//!
//! Employees overlay the generic labor-role rates with personal rates from
//! the payroll sheet. The union affiliation drives the fringe benefit rates
//! used by the per-union report.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A union worker with personal billing rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Payroll employee number (unique key).
    pub employee_number: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Union local code (e.g., "DC9", "DC11", "DC35").
    #[serde(rename = "union")]
    pub union_code: String,
    /// Personal straight-time hourly rate.
    pub regular_rate: Decimal,
    /// Personal overtime hourly rate.
    pub overtime_rate: Decimal,
    /// Health & welfare contribution rate per hour.
    pub health_welfare: Decimal,
    /// Pension contribution rate per hour.
    pub pension: Decimal,
    /// Whether the employee is active for new entries.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Employee {
    /// Returns the employee's display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
