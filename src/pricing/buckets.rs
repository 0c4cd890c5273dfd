//! Billing category partition.
//!
//! Every line across the selected entries lands in exactly one of five
//! buckets: materials, equipment, rental pass-through (the markup
//! exemption), labor, and vendor expenses. The partition is a pure function
//! over the entries so aggregation stays independent of any rendering or
//! storage concern.

use rust_decimal::Decimal;

use crate::models::{BillingCategory, DailyEntry};

use super::exemption::is_rental_pass_through;

/// Summed base amounts per billing category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryTotals {
    /// Material base, exempt rentals excluded.
    pub materials: Decimal,
    /// Equipment base, exempt rentals excluded.
    pub equipment: Decimal,
    /// Exempt rental base from both materials and equipment.
    pub rental_pass_through: Decimal,
    /// Labor base.
    pub labor: Decimal,
    /// Vendor pass-through expense total.
    pub expenses: Decimal,
}

impl CategoryTotals {
    /// Returns the base amount for a billing category.
    pub fn base(&self, category: BillingCategory) -> Decimal {
        match category {
            BillingCategory::Materials => self.materials,
            BillingCategory::Equipment => self.equipment,
            BillingCategory::RentalPassThrough => self.rental_pass_through,
            BillingCategory::Labor => self.labor,
            BillingCategory::Expenses => self.expenses,
        }
    }
}

/// Partitions every line across the given entries into category totals.
///
/// Material and equipment lines matching the rental exemption are routed to
/// the rental pass-through bucket instead of their own category, so they
/// never enter a markup base.
pub fn partition_entries<'a, I>(entries: I) -> CategoryTotals
where
    I: IntoIterator<Item = &'a DailyEntry>,
{
    let mut totals = CategoryTotals::default();

    for entry in entries {
        for line in &entry.materials {
            if is_rental_pass_through(&line.material_name) {
                totals.rental_pass_through += line.amount();
            } else {
                totals.materials += line.amount();
            }
        }

        for line in &entry.equipment {
            if is_rental_pass_through(&line.equipment_name) {
                totals.rental_pass_through += line.amount();
            } else {
                totals.equipment += line.amount();
            }
        }

        for line in &entry.labor {
            totals.labor += line.amount();
        }

        for expense in &entry.expenses {
            totals.expenses += expense.amount;
        }
    }

    totals
}
