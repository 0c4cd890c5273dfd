//! Material price resolution.
//!
//! Materials bill at the catalog default unless the entry carries a
//! per-entry price override. The material must exist in the catalog either
//! way; an override never creates a price for an unknown material.

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::error::EngineResult;

/// Resolves the unit price for a material line.
///
/// # Arguments
///
/// * `catalog` - The loaded catalogs
/// * `material_name` - The material to price
/// * `override_price` - Optional per-entry unit price that replaces the
///   catalog default
///
/// # Errors
///
/// Returns `MaterialNotFound` if the material does not exist in the catalog.
pub fn resolve_material_price(
    catalog: &Catalog,
    material_name: &str,
    override_price: Option<Decimal>,
) -> EngineResult<Decimal> {
    let material = catalog.material(material_name)?;
    Ok(override_price.unwrap_or(material.unit_price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EquipmentRate, JobConfig, LaborRole, MaterialItem, UnionRates};
    use crate::error::EngineError;
    use crate::models::Employee;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_catalog() -> Catalog {
        Catalog::new(
            Vec::<LaborRole>::new(),
            vec![MaterialItem {
                name: "Acrolon Paint".to_string(),
                category: "MATERIALS".to_string(),
                unit: "Gallon".to_string(),
                unit_price: dec("101.50"),
            }],
            Vec::<EquipmentRate>::new(),
            Vec::<Employee>::new(),
            HashMap::<String, UnionRates>::new(),
            Vec::<JobConfig>::new(),
        )
    }

    /// MPR-001: catalog default applies without an override
    #[test]
    fn test_catalog_default_applies() {
        let catalog = create_test_catalog();
        let price = resolve_material_price(&catalog, "Acrolon Paint", None).unwrap();
        assert_eq!(price, dec("101.50"));
    }

    /// MPR-002: an override replaces the catalog default
    #[test]
    fn test_override_replaces_default() {
        let catalog = create_test_catalog();
        let price = resolve_material_price(&catalog, "Acrolon Paint", Some(dec("95.00"))).unwrap();
        assert_eq!(price, dec("95.00"));
    }

    /// MPR-003: an override does not rescue an unknown material
    #[test]
    fn test_override_does_not_rescue_unknown_material() {
        let catalog = create_test_catalog();
        let result = resolve_material_price(&catalog, "Unobtainium", Some(dec("1.00")));

        match result {
            Err(EngineError::MaterialNotFound { name }) => assert_eq!(name, "Unobtainium"),
            other => panic!("Expected MaterialNotFound, got {:?}", other),
        }
    }
}
