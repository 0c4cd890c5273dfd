//! Per-union fringe benefit aggregation.
//!
//! Certain prime contracts require fringe benefits broken out per union
//! local. For a given union, labor amounts are computed from each linked
//! employee's personal rates, Health & Welfare and Pension accrue per total
//! hour at the union's rates, and a flat 20% markup applies to the sum of
//! labor and fringe. This is a separate computation path from the invoice
//! aggregator and must not be conflated with it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::EngineResult;
use crate::models::DailyEntry;

use super::invoice::round_money;
use super::labor_rate::night_shift_differential;
use super::markup::MarkupPolicy;

/// Returns the flat markup percentage applied to labor plus fringe (20%).
pub fn fringe_markup_percent() -> Decimal {
    Decimal::from(20)
}

/// The fringe summary for one union local over a set of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnionFringeSummary {
    /// The union local code.
    pub union_code: String,
    /// Labor total at employee rates (night differential included).
    pub labor_total: Decimal,
    /// Total hours (straight plus overtime) for the union's workers.
    pub total_hours: Decimal,
    /// The union's Health & Welfare rate per hour.
    pub health_welfare_rate: Decimal,
    /// Health & Welfare total: hours x rate.
    pub health_welfare: Decimal,
    /// The union's pension rate per hour.
    pub pension_rate: Decimal,
    /// Pension total: hours x rate.
    pub pension: Decimal,
    /// The 20% markup on labor plus fringe.
    pub markup: Decimal,
    /// Contractor total: labor + fringe + markup.
    pub contractor_total: Decimal,
}

/// Builds the fringe summary for one union across the given entries.
///
/// Only labor lines linked to an employee of the requested union are
/// counted; unlinked lines carry no union affiliation and are skipped.
/// Rates come from the employee record, with the night-shift differential
/// added per line flag. Inactive employees still resolve so historical
/// reports survive roster changes.
///
/// # Errors
///
/// Returns `UnionNotFound` when the union code has no benefit rates in the
/// catalog.
pub fn build_union_fringe_summary(
    catalog: &Catalog,
    union_code: &str,
    entries: &[DailyEntry],
) -> EngineResult<UnionFringeSummary> {
    let rates = catalog.union_rates(union_code)?;

    let mut labor_total = Decimal::ZERO;
    let mut total_hours = Decimal::ZERO;

    for entry in entries {
        for line in &entry.labor {
            let Some(employee_id) = line.employee_id.as_deref() else {
                continue;
            };
            let Some(employee) = catalog.find_employee_any(employee_id) else {
                continue;
            };
            if employee.union_code != union_code {
                continue;
            }

            let (mut straight, mut overtime) = (employee.regular_rate, employee.overtime_rate);
            if line.night_shift {
                straight += night_shift_differential();
                overtime += night_shift_differential();
            }

            labor_total += line.regular_hours * straight + line.overtime_hours * overtime;
            total_hours += line.total_hours();
        }
    }

    let health_welfare = total_hours * rates.health_welfare;
    let pension = total_hours * rates.pension;

    let subtotal = labor_total + health_welfare + pension;
    let markup = MarkupPolicy::Flat(fringe_markup_percent()).markup_amount(subtotal);

    Ok(UnionFringeSummary {
        union_code: union_code.to_string(),
        labor_total: round_money(labor_total),
        total_hours,
        health_welfare_rate: rates.health_welfare,
        health_welfare: round_money(health_welfare),
        pension_rate: rates.pension,
        pension: round_money(pension),
        markup: round_money(markup),
        contractor_total: round_money(subtotal + markup),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EquipmentRate, JobConfig, LaborRole, MaterialItem, UnionRates};
    use crate::error::EngineError;
    use crate::models::{Employee, LaborLine};
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employee(number: &str, union: &str, regular: &str, overtime: &str) -> Employee {
        Employee {
            employee_number: number.to_string(),
            first_name: "Test".to_string(),
            last_name: format!("Worker {}", number),
            union_code: union.to_string(),
            regular_rate: dec(regular),
            overtime_rate: dec(overtime),
            health_welfare: dec("10.80"),
            pension: dec("13.90"),
            active: true,
            notes: None,
        }
    }

    fn create_test_catalog() -> Catalog {
        let mut unions = HashMap::new();
        unions.insert(
            "DC11".to_string(),
            UnionRates {
                health_welfare: dec("10.80"),
                pension: dec("13.90"),
            },
        );
        unions.insert(
            "DC9".to_string(),
            UnionRates {
                health_welfare: dec("12.75"),
                pension: dec("13.33"),
            },
        );

        Catalog::new(
            Vec::<LaborRole>::new(),
            Vec::<MaterialItem>::new(),
            Vec::<EquipmentRate>::new(),
            vec![
                employee("10001", "DC11", "70.00", "105.00"),
                employee("10002", "DC11", "65.00", "97.50"),
                employee("10003", "DC11", "65.00", "97.50"),
                employee("10551", "DC9", "104.75", "157.13"),
            ],
            unions,
            Vec::<JobConfig>::new(),
        )
    }

    fn labor_line(employee_id: &str, regular_hours: &str, night_shift: bool) -> LaborLine {
        LaborLine {
            role_name: "Painter".to_string(),
            employee_id: Some(employee_id.to_string()),
            employee_name: None,
            regular_hours: dec(regular_hours),
            overtime_hours: dec("0"),
            night_shift,
            straight_rate: dec("0"),
            overtime_rate: dec("0"),
        }
    }

    fn entry_with_lines(lines: Vec<LaborLine>) -> DailyEntry {
        DailyEntry {
            job_number: "2507".to_string(),
            entry_date: NaiveDate::from_ymd_opt(2025, 12, 2).unwrap(),
            labor: lines,
            materials: vec![],
            equipment: vec![],
            expenses: vec![],
        }
    }

    /// UF-001: three DC11 workers, 30 hours, $2,000 labor subtotal
    #[test]
    fn test_dc11_fringe_summary() {
        let catalog = create_test_catalog();
        let entries = vec![entry_with_lines(vec![
            labor_line("10001", "10", false),
            labor_line("10002", "10", false),
            labor_line("10003", "10", false),
        ])];

        let summary = build_union_fringe_summary(&catalog, "DC11", &entries).unwrap();

        assert_eq!(summary.labor_total, dec("2000.00"));
        assert_eq!(summary.total_hours, dec("30"));
        assert_eq!(summary.health_welfare, dec("324.00"));
        assert_eq!(summary.pension, dec("417.00"));
        // (2000 + 324 + 417) * 0.20 = 548.20
        assert_eq!(summary.markup, dec("548.20"));
        assert_eq!(summary.contractor_total, dec("3289.20"));
    }

    /// UF-002: other unions' workers and unlinked lines are excluded
    #[test]
    fn test_other_unions_and_unlinked_lines_excluded() {
        let catalog = create_test_catalog();
        let mut unlinked = labor_line("10001", "10", false);
        unlinked.employee_id = None;
        let entries = vec![entry_with_lines(vec![
            labor_line("10001", "10", false),
            labor_line("10551", "8", false),
            unlinked,
        ])];

        let summary = build_union_fringe_summary(&catalog, "DC11", &entries).unwrap();

        assert_eq!(summary.total_hours, dec("10"));
        assert_eq!(summary.labor_total, dec("700.00"));
    }

    /// UF-003: night differential applies to employee rates
    #[test]
    fn test_night_differential_on_employee_rates() {
        let catalog = create_test_catalog();
        let entries = vec![entry_with_lines(vec![labor_line("10001", "10", true)])];

        let summary = build_union_fringe_summary(&catalog, "DC11", &entries).unwrap();

        // (70 + 2) * 10
        assert_eq!(summary.labor_total, dec("720.00"));
    }

    /// UF-004: overtime hours bill at the employee overtime rate
    #[test]
    fn test_overtime_at_employee_rate() {
        let catalog = create_test_catalog();
        let mut line = labor_line("10001", "8", false);
        line.overtime_hours = dec("2");
        let entries = vec![entry_with_lines(vec![line])];

        let summary = build_union_fringe_summary(&catalog, "DC11", &entries).unwrap();

        // 8 * 70 + 2 * 105 = 770; 10 hours of fringe
        assert_eq!(summary.labor_total, dec("770.00"));
        assert_eq!(summary.total_hours, dec("10"));
        assert_eq!(summary.health_welfare, dec("108.00"));
    }

    /// UF-005: unknown union code is rejected
    #[test]
    fn test_unknown_union_rejected() {
        let catalog = create_test_catalog();
        let result = build_union_fringe_summary(&catalog, "DC99", &[]);

        match result {
            Err(EngineError::UnionNotFound { code }) => assert_eq!(code, "DC99"),
            other => panic!("Expected UnionNotFound, got {:?}", other),
        }
    }

    /// UF-006: a union with no matching labor reports zeros
    #[test]
    fn test_union_with_no_labor_reports_zeros() {
        let catalog = create_test_catalog();
        let summary = build_union_fringe_summary(&catalog, "DC9", &[]).unwrap();

        assert_eq!(summary.labor_total, Decimal::ZERO);
        assert_eq!(summary.contractor_total, dec("0.00"));
    }

    #[test]
    fn test_fringe_markup_is_twenty_percent() {
        assert_eq!(fringe_markup_percent(), dec("20"));
    }
}
