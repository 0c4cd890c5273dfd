//! Entry submission pricing.
//!
//! A raw submission references catalog entries by name; this pass resolves
//! every reference and produces a fully priced [`DailyEntry`]. Pricing is
//! all-or-nothing: any unresolved reference or invalid line aborts the whole
//! submission so nothing is partially persisted, matching the
//! replace-on-resubmit semantics of daily entries.

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DailyEntry, EntrySubmission, EquipmentLine, LaborLine, MaterialLine,
};

use super::equipment_rate::resolve_equipment_rate;
use super::labor_rate::resolve_labor_rate;
use super::material_price::resolve_material_price;

fn require_non_negative(value: Decimal, description: &str, field: &str) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidLine {
            description: description.to_string(),
            message: format!("{} cannot be negative", field),
        });
    }
    Ok(())
}

/// Prices a submission into a complete daily entry.
///
/// Labor rates are resolved per line (employee override, overtime selection,
/// night differential), material prices honor per-entry overrides, and
/// equipment rates are selected strictly by the requested period. Material
/// lines with zero quantity are dropped, matching the entry form behavior.
/// Vendor expenses are carried through verbatim.
///
/// # Errors
///
/// Any NotFound, InvalidRatePeriod, or InvalidLine error rejects the whole
/// submission; no partially priced entry is ever returned.
pub fn price_entry(catalog: &Catalog, submission: EntrySubmission) -> EngineResult<DailyEntry> {
    let mut labor = Vec::with_capacity(submission.labor.len());
    for input in &submission.labor {
        let description = format!("labor: {}", input.role);
        require_non_negative(input.regular_hours, &description, "regular hours")?;
        require_non_negative(input.overtime_hours, &description, "overtime hours")?;

        let straight_rate = resolve_labor_rate(
            catalog,
            &input.role,
            input.employee_id.as_deref(),
            false,
            input.night_shift,
        )?;
        let overtime_rate = resolve_labor_rate(
            catalog,
            &input.role,
            input.employee_id.as_deref(),
            true,
            input.night_shift,
        )?;

        // Prefer the payroll name when the line is employee-linked
        let employee_name = match input.employee_id.as_deref() {
            Some(id) => Some(catalog.employee(id)?.full_name()),
            None => input.employee_name.clone(),
        };

        labor.push(LaborLine {
            role_name: input.role.clone(),
            employee_id: input.employee_id.clone(),
            employee_name,
            regular_hours: input.regular_hours,
            overtime_hours: input.overtime_hours,
            night_shift: input.night_shift,
            straight_rate,
            overtime_rate,
        });
    }

    let mut materials = Vec::with_capacity(submission.materials.len());
    for input in &submission.materials {
        let description = format!("material: {}", input.material);
        require_non_negative(input.quantity, &description, "quantity")?;
        if input.quantity.is_zero() {
            continue;
        }

        let item = catalog.material(&input.material)?;
        let unit_price = resolve_material_price(catalog, &input.material, input.unit_price)?;

        materials.push(MaterialLine {
            material_name: item.name.clone(),
            category: item.category.clone(),
            unit: item.unit.clone(),
            quantity: input.quantity,
            unit_price,
        });
    }

    let mut equipment = Vec::with_capacity(submission.equipment.len());
    for input in &submission.equipment {
        let description = format!("equipment: {}", input.equipment);
        require_non_negative(input.quantity, &description, "quantity")?;

        let row = catalog.equipment_rate(&input.equipment)?;
        let unit_rate = resolve_equipment_rate(catalog, &input.equipment, input.rate_period)?;

        equipment.push(EquipmentLine {
            equipment_name: row.name.clone(),
            category: row.category.clone(),
            unit: input.rate_period.billing_unit().to_string(),
            quantity: input.quantity,
            rate_period: input.rate_period,
            unit_rate,
        });
    }

    Ok(DailyEntry {
        job_number: submission.job_number,
        entry_date: submission.entry_date,
        labor,
        materials,
        equipment,
        expenses: submission.expenses,
    })
}
