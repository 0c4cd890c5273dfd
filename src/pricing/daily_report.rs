//! Daily report breakdown for a single entry.
//!
//! The daily report shows the itemized lines for one day plus the markup
//! math per category: base, exempt pass-through portion, overhead, profit,
//! and billed total. Labor and vendor expenses are shown at cost. This is
//! the single-day, non-aggregated counterpart of the invoice path.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::DailyEntry;

use super::exemption::is_rental_pass_through;
use super::invoice::round_money;
use super::markup::MarkupPolicy;

/// The markup decomposition for one category on a daily report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Sum of line amounts subject to markup.
    pub base: Decimal,
    /// Sum of exempt rental line amounts, billed at cost.
    pub pass_through: Decimal,
    /// Overhead component on the base.
    pub overhead: Decimal,
    /// Profit component on the base.
    pub profit: Decimal,
    /// Billed category total: base + overhead + profit + pass-through.
    pub total: Decimal,
}

/// The computed daily report for one entry.
///
/// The itemized lines stay on the entry itself; this struct carries the
/// category subtotals and markup math the renderer prints beneath each
/// section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    /// The job number of the reported entry.
    pub job_number: String,
    /// The entry date.
    pub entry_date: NaiveDate,
    /// Materials breakdown; absent when the day has no material lines.
    pub materials: Option<CategoryBreakdown>,
    /// Equipment breakdown; absent when the day has no equipment lines.
    pub equipment: Option<CategoryBreakdown>,
    /// Labor total, billed at cost.
    pub labor_total: Decimal,
    /// Vendor expense total, billed at cost.
    pub expenses_total: Decimal,
    /// Billed total for the day.
    pub grand_total: Decimal,
}

fn breakdown(base: Decimal, pass_through: Decimal, policy: MarkupPolicy) -> CategoryBreakdown {
    let components = policy.components(base);
    CategoryBreakdown {
        base: round_money(base),
        pass_through: round_money(pass_through),
        overhead: round_money(components.overhead),
        profit: round_money(components.profit),
        total: round_money(base + components.overhead + components.profit + pass_through),
    }
}

/// Builds the daily report breakdown for one entry.
///
/// Material and equipment lines matching the rental exemption are carried
/// in their category's `pass_through` component instead of the markup base.
/// Categories with no lines are omitted rather than reported as zero.
pub fn build_daily_report(entry: &DailyEntry, cost_policy: MarkupPolicy) -> DailyReport {
    let mut materials_base = Decimal::ZERO;
    let mut materials_exempt = Decimal::ZERO;
    for line in &entry.materials {
        if is_rental_pass_through(&line.material_name) {
            materials_exempt += line.amount();
        } else {
            materials_base += line.amount();
        }
    }

    let mut equipment_base = Decimal::ZERO;
    let mut equipment_exempt = Decimal::ZERO;
    for line in &entry.equipment {
        if is_rental_pass_through(&line.equipment_name) {
            equipment_exempt += line.amount();
        } else {
            equipment_base += line.amount();
        }
    }

    let labor_total: Decimal = entry.labor.iter().map(|l| l.amount()).sum();
    let expenses_total: Decimal = entry.expenses.iter().map(|e| e.amount).sum();

    let materials = (!entry.materials.is_empty())
        .then(|| breakdown(materials_base, materials_exempt, cost_policy));
    let equipment = (!entry.equipment.is_empty())
        .then(|| breakdown(equipment_base, equipment_exempt, cost_policy));

    let grand_total = materials.as_ref().map(|b| b.total).unwrap_or_default()
        + equipment.as_ref().map(|b| b.total).unwrap_or_default()
        + round_money(labor_total)
        + round_money(expenses_total);

    DailyReport {
        job_number: entry.job_number.clone(),
        entry_date: entry.entry_date,
        materials,
        equipment,
        labor_total: round_money(labor_total),
        expenses_total: round_money(expenses_total),
        grand_total,
    }
}
