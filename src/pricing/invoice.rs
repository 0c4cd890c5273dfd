//! Invoice generation across a job's date range.
//!
//! The generator selects entries for a job and optional date range, sums
//! each billing category's base, applies the category's markup policy, and
//! emits one lump-sum line item per non-empty category in a fixed order.
//! Invoices are recomputed from source entries every time; nothing is
//! snapshotted.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{BillingCategory, DailyEntry, Invoice, InvoiceLineItem};

use super::buckets::partition_entries;
use super::markup::MarkupPolicy;

/// Rounds a computed amount to cents for presentation.
///
/// All arithmetic upstream stays at full decimal precision; rounding happens
/// once, here, when a line item is emitted. The result always carries
/// exactly two decimal places so serialized amounts print as money.
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Returns the markup policy for a billing category.
///
/// Materials and equipment bill under the job's configured cost policy;
/// labor, exempt rentals, and vendor expenses are always pass-through.
fn policy_for(category: BillingCategory, cost_policy: MarkupPolicy) -> MarkupPolicy {
    match category {
        BillingCategory::Materials | BillingCategory::Equipment => cost_policy,
        BillingCategory::RentalPassThrough
        | BillingCategory::Labor
        | BillingCategory::Expenses => MarkupPolicy::PassThrough,
    }
}

/// Generates an invoice for a job over an optional date range.
///
/// # Arguments
///
/// * `job_number` - The job to bill
/// * `range` - Optional inclusive `(start, end)` date range; all entries for
///   the job are billed when absent
/// * `invoice_date` - The date stamped into the invoice number
/// * `entries` - The stored daily entries to aggregate over
/// * `cost_policy` - The markup policy the job's contract applies to
///   materials and equipment
///
/// # Errors
///
/// Returns `NothingToBill` when no entries match the job and range; an
/// empty invoice is never emitted.
pub fn generate_invoice(
    job_number: &str,
    range: Option<(NaiveDate, NaiveDate)>,
    invoice_date: NaiveDate,
    entries: &[DailyEntry],
    cost_policy: MarkupPolicy,
) -> EngineResult<Invoice> {
    let selected: Vec<&DailyEntry> = entries
        .iter()
        .filter(|e| e.job_number == job_number)
        .filter(|e| match range {
            Some((start, end)) => e.entry_date >= start && e.entry_date <= end,
            None => true,
        })
        .collect();

    if selected.is_empty() {
        return Err(EngineError::NothingToBill {
            job_number: job_number.to_string(),
        });
    }

    let totals = partition_entries(selected.iter().copied());

    let mut line_items = Vec::new();
    for category in BillingCategory::EMISSION_ORDER {
        let base = totals.base(category);
        // Categories with no activity are omitted, not zero-billed
        if base.is_zero() {
            continue;
        }

        let billed = round_money(policy_for(category, cost_policy).apply(base));
        line_items.push(InvoiceLineItem {
            category,
            description: category.label().to_string(),
            quantity: Decimal::ONE,
            unit: "Ea".to_string(),
            unit_price: billed,
            amount: billed,
        });
    }

    let grand_total = line_items.iter().map(|li| li.amount).sum();

    let (period_start, period_end) = match range {
        Some((start, end)) => (start, end),
        None => {
            // Derive the period from the entries actually billed
            let mut dates: Vec<NaiveDate> = selected.iter().map(|e| e.entry_date).collect();
            dates.sort();
            (dates[0], dates[dates.len() - 1])
        }
    };

    Ok(Invoice {
        job_number: job_number.to_string(),
        invoice_number: format!("{}-{}", job_number, invoice_date.format("%m%d%y")),
        period: format!(
            "{} - {}",
            period_start.format("%m/%d/%Y"),
            period_end.format("%m/%d/%Y")
        ),
        line_items,
        grand_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EquipmentLine, LaborLine, MaterialLine, PassThroughExpense, RatePeriod};
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn labor_line(amount_per_hour: &str, hours: &str) -> LaborLine {
        LaborLine {
            role_name: "Painter".to_string(),
            employee_id: None,
            employee_name: None,
            regular_hours: dec(hours),
            overtime_hours: dec("0"),
            night_shift: false,
            straight_rate: dec(amount_per_hour),
            overtime_rate: dec("0"),
        }
    }

    fn material_line(name: &str, quantity: &str, price: &str) -> MaterialLine {
        MaterialLine {
            material_name: name.to_string(),
            category: "MATERIALS".to_string(),
            unit: "Each".to_string(),
            quantity: dec(quantity),
            unit_price: dec(price),
        }
    }

    fn equipment_line(name: &str, quantity: &str, rate: &str) -> EquipmentLine {
        EquipmentLine {
            equipment_name: name.to_string(),
            category: "EQUIPMENT".to_string(),
            unit: "Day".to_string(),
            quantity: dec(quantity),
            rate_period: RatePeriod::Daily,
            unit_rate: dec(rate),
        }
    }

    /// One entry with materials $1,000, equipment $500, labor $2,000.
    fn scenario_entry() -> DailyEntry {
        DailyEntry {
            job_number: "2317".to_string(),
            entry_date: date(2025, 11, 18),
            labor: vec![labor_line("200", "10")],
            materials: vec![material_line("Acrolon Paint", "10", "100")],
            equipment: vec![equipment_line("Scaffolding", "1", "500")],
            expenses: vec![],
        }
    }

    /// IN-001: OH+Profit invoice lines and grand total
    #[test]
    fn test_oh_profit_invoice_totals() {
        let entries = vec![scenario_entry()];
        let invoice = generate_invoice(
            "2317",
            None,
            date(2025, 12, 10),
            &entries,
            MarkupPolicy::OverheadAndProfit,
        )
        .unwrap();

        assert_eq!(invoice.line_items.len(), 3);
        assert_eq!(invoice.line_items[0].description, "Materials");
        assert_eq!(invoice.line_items[0].amount, dec("1200.00"));
        assert_eq!(invoice.line_items[1].description, "Equipment");
        assert_eq!(invoice.line_items[1].amount, dec("600.00"));
        assert_eq!(invoice.line_items[2].description, "Labor");
        assert_eq!(invoice.line_items[2].amount, dec("2000.00"));
        assert_eq!(invoice.grand_total, dec("3800.00"));
    }

    /// IN-002: lump-sum lines have quantity 1, unit "Ea", unit price = amount
    #[test]
    fn test_lines_are_lump_sum() {
        let entries = vec![scenario_entry()];
        let invoice = generate_invoice(
            "2317",
            None,
            date(2025, 12, 10),
            &entries,
            MarkupPolicy::OverheadAndProfit,
        )
        .unwrap();

        for line in &invoice.line_items {
            assert_eq!(line.quantity, Decimal::ONE);
            assert_eq!(line.unit, "Ea");
            assert_eq!(line.unit_price, line.amount);
        }
    }

    /// IN-003: exempt rental is billed at cost on its own line
    #[test]
    fn test_exempt_rental_bills_at_cost_on_own_line() {
        let mut entry = scenario_entry();
        entry
            .equipment
            .push(equipment_line("Dehumidifier Rental", "1", "4244.27"));
        let entries = vec![entry];

        let invoice = generate_invoice(
            "2317",
            None,
            date(2025, 12, 10),
            &entries,
            MarkupPolicy::OverheadAndProfit,
        )
        .unwrap();

        assert_eq!(invoice.line_items.len(), 4);
        assert_eq!(invoice.line_items[1].description, "Equipment");
        assert_eq!(invoice.line_items[1].amount, dec("600.00"));
        assert_eq!(invoice.line_items[2].description, "Dehumidifier Rental");
        assert_eq!(invoice.line_items[2].amount, dec("4244.27"));
        assert_eq!(invoice.grand_total, dec("8044.27"));
    }

    /// IN-004: Ten-and-Ten jobs bill costs at x1.21
    #[test]
    fn test_ten_and_ten_invoice() {
        let entries = vec![scenario_entry()];
        let invoice = generate_invoice(
            "2317",
            None,
            date(2025, 12, 10),
            &entries,
            MarkupPolicy::TenAndTen,
        )
        .unwrap();

        assert_eq!(invoice.line_items[0].amount, dec("1210.00"));
        assert_eq!(invoice.line_items[1].amount, dec("605.00"));
        // Labor is never marked up regardless of the cost policy
        assert_eq!(invoice.line_items[2].amount, dec("2000.00"));
        assert_eq!(invoice.grand_total, dec("3815.00"));
    }

    /// IN-005: empty categories are omitted entirely
    #[test]
    fn test_empty_categories_are_omitted() {
        let entry = DailyEntry {
            job_number: "2317".to_string(),
            entry_date: date(2025, 11, 18),
            labor: vec![labor_line("200", "10")],
            materials: vec![],
            equipment: vec![],
            expenses: vec![],
        };
        let entries = vec![entry];

        let invoice = generate_invoice(
            "2317",
            None,
            date(2025, 12, 10),
            &entries,
            MarkupPolicy::OverheadAndProfit,
        )
        .unwrap();

        assert_eq!(invoice.line_items.len(), 1);
        assert_eq!(invoice.line_items[0].description, "Labor");
    }

    /// IN-006: no matching entries is NothingToBill, not an empty invoice
    #[test]
    fn test_no_entries_is_nothing_to_bill() {
        let entries = vec![scenario_entry()];

        let result = generate_invoice(
            "9999",
            None,
            date(2025, 12, 10),
            &entries,
            MarkupPolicy::OverheadAndProfit,
        );
        assert!(matches!(result, Err(EngineError::NothingToBill { .. })));

        // A range that excludes every entry behaves the same
        let result = generate_invoice(
            "2317",
            Some((date(2026, 1, 1), date(2026, 1, 31))),
            date(2026, 2, 1),
            &entries,
            MarkupPolicy::OverheadAndProfit,
        );
        assert!(matches!(result, Err(EngineError::NothingToBill { .. })));
    }

    /// IN-007: the date range filter is inclusive on both ends
    #[test]
    fn test_range_filter_is_inclusive() {
        let mut inside = scenario_entry();
        inside.entry_date = date(2025, 11, 20);
        let mut boundary = scenario_entry();
        boundary.entry_date = date(2025, 11, 30);
        let mut outside = scenario_entry();
        outside.entry_date = date(2025, 12, 1);
        let entries = vec![inside, boundary, outside];

        let invoice = generate_invoice(
            "2317",
            Some((date(2025, 11, 20), date(2025, 11, 30))),
            date(2025, 12, 10),
            &entries,
            MarkupPolicy::OverheadAndProfit,
        )
        .unwrap();

        // Two of the three entries are in range
        assert_eq!(invoice.line_items[0].amount, dec("2400.00"));
        assert_eq!(invoice.period, "11/20/2025 - 11/30/2025");
    }

    /// IN-008: the period derives from entry dates when no range is given
    #[test]
    fn test_period_derived_from_entries_without_range() {
        let mut first = scenario_entry();
        first.entry_date = date(2025, 11, 18);
        let mut last = scenario_entry();
        last.entry_date = date(2025, 12, 10);
        let entries = vec![last.clone(), first.clone()];

        let invoice = generate_invoice(
            "2317",
            None,
            date(2025, 12, 10),
            &entries,
            MarkupPolicy::OverheadAndProfit,
        )
        .unwrap();

        assert_eq!(invoice.period, "11/18/2025 - 12/10/2025");
        assert_eq!(invoice.invoice_number, "2317-121025");
    }

    /// IN-009: grand total equals the sum of emitted line amounts exactly
    #[test]
    fn test_grand_total_sums_lines_exactly() {
        let mut entry = scenario_entry();
        entry.expenses.push(PassThroughExpense {
            vendor: "Vendor".to_string(),
            invoice_number: None,
            description: "Disposal".to_string(),
            amount: dec("123.45"),
            expense_date: None,
            category: None,
            notes: None,
        });
        let entries = vec![entry];

        let invoice = generate_invoice(
            "2317",
            None,
            date(2025, 12, 10),
            &entries,
            MarkupPolicy::OverheadAndProfit,
        )
        .unwrap();

        let sum: Decimal = invoice.line_items.iter().map(|li| li.amount).sum();
        assert_eq!(invoice.grand_total, sum);
    }

    proptest! {
        /// Re-running the generator over unchanged entries yields an
        /// identical invoice.
        #[test]
        fn prop_generation_is_idempotent(
            material_cents in 0u32..10_000_000u32,
            labor_cents in 1u32..10_000_000u32,
        ) {
            let entry = DailyEntry {
                job_number: "2317".to_string(),
                entry_date: date(2025, 11, 18),
                labor: vec![labor_line(&Decimal::new(i64::from(labor_cents), 2).to_string(), "1")],
                materials: vec![material_line(
                    "Acrolon Paint",
                    "1",
                    &Decimal::new(i64::from(material_cents), 2).to_string(),
                )],
                equipment: vec![],
                expenses: vec![],
            };
            let entries = vec![entry];

            let first = generate_invoice(
                "2317",
                None,
                date(2025, 12, 10),
                &entries,
                MarkupPolicy::OverheadAndProfit,
            )
            .unwrap();
            let second = generate_invoice(
                "2317",
                None,
                date(2025, 12, 10),
                &entries,
                MarkupPolicy::OverheadAndProfit,
            )
            .unwrap();

            prop_assert_eq!(first, second);
        }
    }
}
