//! Unpriced entry submission types.
//!
//! A submission references catalog entries by name and carries quantities
//! only; the pricing pass resolves every reference against the catalogs and
//! produces a fully priced [`DailyEntry`](super::DailyEntry). Any unresolved
//! reference rejects the whole submission.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PassThroughExpense, RatePeriod};

/// One day's raw field data, as captured from the timesheet form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntrySubmission {
    /// The job number to bill against.
    pub job_number: String,
    /// The date of the work.
    pub entry_date: NaiveDate,
    /// Unpriced labor inputs.
    #[serde(default)]
    pub labor: Vec<LaborInput>,
    /// Unpriced material inputs.
    #[serde(default)]
    pub materials: Vec<MaterialInput>,
    /// Unpriced equipment inputs.
    #[serde(default)]
    pub equipment: Vec<EquipmentInput>,
    /// Vendor expenses, carried through verbatim.
    #[serde(default)]
    pub expenses: Vec<PassThroughExpense>,
}

/// An unpriced labor input referencing a role and optionally an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborInput {
    /// Labor role name (must exist in the labor catalog).
    pub role: String,
    /// Employee number, when the worker is on the payroll sheet. When set,
    /// the employee's personal rates override the role rates.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Worker name for display, used when no employee link exists.
    #[serde(default)]
    pub employee_name: Option<String>,
    /// Straight-time hours worked.
    pub regular_hours: Decimal,
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// Whether the night-shift differential applies.
    #[serde(default)]
    pub night_shift: bool,
}

/// An unpriced material input referencing a catalog material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInput {
    /// Material name (must exist in the materials catalog).
    pub material: String,
    /// Quantity consumed.
    pub quantity: Decimal,
    /// Optional per-entry price override; the catalog default applies
    /// when absent.
    #[serde(default)]
    pub unit_price: Option<Decimal>,
}

/// An unpriced equipment input referencing a catalog rental rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentInput {
    /// Equipment name (must exist in the equipment rate catalog and be
    /// active).
    pub equipment: String,
    /// Number of billing units.
    pub quantity: Decimal,
    /// The rate period to bill at.
    pub rate_period: RatePeriod,
}
