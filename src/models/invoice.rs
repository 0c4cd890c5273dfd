//! Invoice output models.
//!
//! The invoice generator collapses each billing category into one lump-sum
//! line item per invoice rather than itemizing every material or equipment
//! row, because the target invoice format bills by category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The billing category a line item is aggregated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCategory {
    /// Consumed materials, marked up per the job's cost policy.
    Materials,
    /// Equipment rentals, marked up per the job's cost policy.
    Equipment,
    /// Rental items exempt from markup, re-billed at cost.
    RentalPassThrough,
    /// Labor, billed at cost.
    Labor,
    /// Vendor pass-through expenses, billed at cost.
    Expenses,
}

impl BillingCategory {
    /// The fixed order categories are emitted in on an invoice.
    ///
    /// The order mirrors conventional invoice presentation (materials before
    /// labor) and is asserted by tests for output stability.
    pub const EMISSION_ORDER: [BillingCategory; 5] = [
        BillingCategory::Materials,
        BillingCategory::Equipment,
        BillingCategory::RentalPassThrough,
        BillingCategory::Labor,
        BillingCategory::Expenses,
    ];

    /// Returns the line-item description used for this category.
    pub fn label(&self) -> &'static str {
        match self {
            BillingCategory::Materials => "Materials",
            BillingCategory::Equipment => "Equipment",
            BillingCategory::RentalPassThrough => "Dehumidifier Rental",
            BillingCategory::Labor => "Labor",
            BillingCategory::Expenses => "Vendor Pass-Through Expenses",
        }
    }
}

/// A single lump-sum invoice line item.
///
/// Quantity is always 1 and the unit price equals the computed amount; the
/// line represents a whole category's billed total for the period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    /// The billing category this line aggregates.
    pub category: BillingCategory,
    /// Human-readable description.
    pub description: String,
    /// Billed quantity (always 1 for lump-sum lines).
    pub quantity: Decimal,
    /// Billing unit (always "Ea" for lump-sum lines).
    pub unit: String,
    /// Unit price (equals the amount for lump-sum lines).
    pub unit_price: Decimal,
    /// The billed amount for this category.
    pub amount: Decimal,
}

/// A generated invoice for a job over a billing period.
///
/// Invoices are computed on demand from the stored daily entries and are
/// never persisted; regenerating after a correction reflects the corrected
/// data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// The job number billed.
    pub job_number: String,
    /// Invoice number in `{job_number}-{MMDDYY}` form.
    pub invoice_number: String,
    /// The billing period as `{start} - {end}` (MM/DD/YYYY).
    pub period: String,
    /// Ordered line items, one per non-empty billing category.
    pub line_items: Vec<InvoiceLineItem>,
    /// Sum of all line-item amounts.
    pub grand_total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_emission_order_is_materials_first_expenses_last() {
        assert_eq!(
            BillingCategory::EMISSION_ORDER[0],
            BillingCategory::Materials
        );
        assert_eq!(
            BillingCategory::EMISSION_ORDER[2],
            BillingCategory::RentalPassThrough
        );
        assert_eq!(BillingCategory::EMISSION_ORDER[4], BillingCategory::Expenses);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(BillingCategory::Materials.label(), "Materials");
        assert_eq!(
            BillingCategory::RentalPassThrough.label(),
            "Dehumidifier Rental"
        );
        assert_eq!(
            BillingCategory::Expenses.label(),
            "Vendor Pass-Through Expenses"
        );
    }

    #[test]
    fn test_billing_category_serialization() {
        assert_eq!(
            serde_json::to_string(&BillingCategory::RentalPassThrough).unwrap(),
            "\"rental_pass_through\""
        );
        let category: BillingCategory = serde_json::from_str("\"materials\"").unwrap();
        assert_eq!(category, BillingCategory::Materials);
    }

    #[test]
    fn test_invoice_round_trip() {
        let invoice = Invoice {
            job_number: "2507".to_string(),
            invoice_number: "2507-121025".to_string(),
            period: "11/18/2025 - 12/10/2025".to_string(),
            line_items: vec![InvoiceLineItem {
                category: BillingCategory::Labor,
                description: "Labor".to_string(),
                quantity: Decimal::ONE,
                unit: "Ea".to_string(),
                unit_price: dec("2000.00"),
                amount: dec("2000.00"),
            }],
            grand_total: dec("2000.00"),
        };

        let json = serde_json::to_string(&invoice).unwrap();
        let deserialized: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(invoice, deserialized);
    }
}
