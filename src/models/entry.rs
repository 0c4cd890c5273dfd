//! Daily entry model and its priced line types.
//!
//! A [`DailyEntry`] captures one day of activity on one job: labor hours,
//! consumed materials, rented equipment, and vendor pass-through expenses.
//! Lines are stored fully priced, with the descriptive fields denormalized
//! so reports can be built without re-joining to the catalogs.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The billing granularity selected for a rented item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatePeriod {
    /// Bill per day against the daily rate.
    Daily,
    /// Bill per week against the weekly rate.
    Weekly,
    /// Bill per month against the monthly rate.
    Monthly,
}

impl RatePeriod {
    /// Returns the billing unit printed on reports for this period.
    pub fn billing_unit(&self) -> &'static str {
        match self {
            RatePeriod::Daily => "Day",
            RatePeriod::Weekly => "Week",
            RatePeriod::Monthly => "Month",
        }
    }
}

impl fmt::Display for RatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RatePeriod::Daily => "daily",
            RatePeriod::Weekly => "weekly",
            RatePeriod::Monthly => "monthly",
        };
        f.write_str(s)
    }
}

/// A priced labor line for one worker on one day.
///
/// The stored rates are the effective billing rates: when `night_shift` is
/// set, the night-shift differential has already been added to both the
/// straight and overtime rate during entry pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborLine {
    /// The labor role billed (e.g., "Painter").
    pub role_name: String,
    /// Employee number, when the line is linked to a specific worker.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Worker name for display on reports.
    #[serde(default)]
    pub employee_name: Option<String>,
    /// Straight-time hours worked.
    pub regular_hours: Decimal,
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// Whether the night-shift differential applies to this line.
    #[serde(default)]
    pub night_shift: bool,
    /// Effective straight-time hourly rate.
    pub straight_rate: Decimal,
    /// Effective overtime hourly rate.
    pub overtime_rate: Decimal,
}

impl LaborLine {
    /// Returns the extended amount for this line.
    pub fn amount(&self) -> Decimal {
        self.regular_hours * self.straight_rate + self.overtime_hours * self.overtime_rate
    }

    /// Returns the total hours (straight plus overtime) on this line.
    pub fn total_hours(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }
}

/// A priced material consumption line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLine {
    /// Catalog material name.
    pub material_name: String,
    /// Catalog category (e.g., "CONSUMABLES", "PPE").
    pub category: String,
    /// Billing unit (e.g., "Gallon", "Box").
    pub unit: String,
    /// Quantity consumed.
    pub quantity: Decimal,
    /// Unit price billed (catalog default or per-entry override).
    pub unit_price: Decimal,
}

impl MaterialLine {
    /// Returns the extended amount for this line.
    pub fn amount(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// A priced equipment rental line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentLine {
    /// Catalog equipment name.
    pub equipment_name: String,
    /// Catalog category (e.g., "TRUCKS", "COMPRESSORS").
    pub category: String,
    /// Billing unit derived from the rate period ("Day", "Week", "Month").
    pub unit: String,
    /// Number of billing units.
    pub quantity: Decimal,
    /// The rate period the unit rate was resolved from.
    pub rate_period: RatePeriod,
    /// The resolved unit rate for the selected period.
    pub unit_rate: Decimal,
}

impl EquipmentLine {
    /// Returns the extended amount for this line.
    pub fn amount(&self) -> Decimal {
        self.quantity * self.unit_rate
    }
}

/// A vendor cost re-billed to the client at the contractor's exact cost.
///
/// The amount is taken verbatim from the vendor invoice; no rate resolution
/// or markup ever applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassThroughExpense {
    /// The vendor the cost was incurred with.
    pub vendor: String,
    /// The vendor's invoice number.
    #[serde(default)]
    pub invoice_number: Option<String>,
    /// Description of the expense.
    pub description: String,
    /// The exact amount from the vendor invoice.
    pub amount: Decimal,
    /// The date the expense applies to.
    #[serde(default)]
    pub expense_date: Option<NaiveDate>,
    /// Expense category for reporting.
    #[serde(default)]
    pub category: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// One day's activity for one job.
///
/// At most one entry exists per (job number, entry date) pair; re-submitting
/// a day replaces all child lines wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// The job number this entry bills against.
    pub job_number: String,
    /// The date of the work.
    pub entry_date: NaiveDate,
    /// Labor lines for the day.
    #[serde(default)]
    pub labor: Vec<LaborLine>,
    /// Material lines for the day.
    #[serde(default)]
    pub materials: Vec<MaterialLine>,
    /// Equipment rental lines for the day.
    #[serde(default)]
    pub equipment: Vec<EquipmentLine>,
    /// Vendor pass-through expenses for the day.
    #[serde(default)]
    pub expenses: Vec<PassThroughExpense>,
}
