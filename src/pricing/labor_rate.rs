//! Labor rate resolution.
//!
//! This module determines the effective hourly rate for a labor line:
//! employee personal rates override the generic role rates, the overtime
//! flag selects between the straight and overtime rate, and the night-shift
//! differential is added on top of the selected rate.

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::error::EngineResult;

/// Returns the night-shift differential added to both the straight and
/// overtime rate when a line is flagged as night work (+$2.00/hr).
pub fn night_shift_differential() -> Decimal {
    Decimal::new(200, 2)
}

/// Resolves the effective hourly rate for a labor line.
///
/// The rate is selected with the following priority:
/// 1. If `employee_id` is supplied, the employee's personal regular or
///    overtime rate is used
/// 2. Otherwise the role's catalog straight or overtime rate is used
///
/// When `night_shift` is true, [`night_shift_differential`] is added to the
/// selected rate.
///
/// # Arguments
///
/// * `catalog` - The loaded catalogs
/// * `role_name` - The labor role to bill
/// * `employee_id` - Optional employee number whose personal rates override
///   the role rates
/// * `is_overtime` - Selects the overtime rate instead of the straight rate
/// * `night_shift` - Adds the night-shift differential to the selected rate
///
/// # Errors
///
/// Returns `RoleNotFound` if the role does not exist, or `EmployeeNotFound`
/// if an employee reference does not exist or is inactive. Callers reject
/// the whole submission on either error.
pub fn resolve_labor_rate(
    catalog: &Catalog,
    role_name: &str,
    employee_id: Option<&str>,
    is_overtime: bool,
    night_shift: bool,
) -> EngineResult<Decimal> {
    // The role must exist even when an employee override is supplied, so a
    // typo'd role name cannot slip through an employee-linked line.
    let role = catalog.labor_role(role_name)?;

    let base = match employee_id {
        Some(id) => {
            let employee = catalog.employee(id)?;
            if is_overtime {
                employee.overtime_rate
            } else {
                employee.regular_rate
            }
        }
        None => {
            if is_overtime {
                role.overtime_rate
            } else {
                role.straight_rate
            }
        }
    };

    if night_shift {
        Ok(base + night_shift_differential())
    } else {
        Ok(base)
    }
}
