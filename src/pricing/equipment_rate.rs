//! Equipment rental rate resolution.
//!
//! An equipment line bills at the catalog rate matching its selected rate
//! period. A period whose catalog rate is absent is an error: silently
//! billing a daily rate when a weekly rate was requested would misstate the
//! cost, so no fallback between periods is ever performed.

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::error::{EngineError, EngineResult};
use crate::models::RatePeriod;

/// Resolves the unit rate for an equipment rental line.
///
/// # Arguments
///
/// * `catalog` - The loaded catalogs
/// * `equipment_name` - The equipment to bill
/// * `rate_period` - The billing period (daily/weekly/monthly)
///
/// # Errors
///
/// Returns `EquipmentNotFound` if the equipment does not exist or is
/// inactive, and `InvalidRatePeriod` if the catalog row has no rate for the
/// requested period.
pub fn resolve_equipment_rate(
    catalog: &Catalog,
    equipment_name: &str,
    rate_period: RatePeriod,
) -> EngineResult<Decimal> {
    let row = catalog.equipment_rate(equipment_name)?;

    let rate = match rate_period {
        RatePeriod::Daily => row.daily_rate,
        RatePeriod::Weekly => row.weekly_rate,
        RatePeriod::Monthly => row.monthly_rate,
    };

    rate.ok_or_else(|| EngineError::InvalidRatePeriod {
        equipment: equipment_name.to_string(),
        period: rate_period,
    })
}
