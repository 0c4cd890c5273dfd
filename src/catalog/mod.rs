//! Catalog loading and lookup for the T&M billing engine.
//!
//! This module provides the reference data the rate resolver consumes:
//! labor roles, materials, equipment rental rates, payroll employees,
//! union benefit rates, and per-job contract configuration. Catalogs are
//! long-lived reference data maintained by administrative imports; entry
//! submission never creates catalog rows implicitly.
//!
//! # Example
//!
//! ```no_run
//! use tm_engine::catalog::CatalogLoader;
//!
//! let loader = CatalogLoader::load("./config/catalog").unwrap();
//! println!("Loaded {} catalog", "T&M");
//! ```

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{Catalog, CostMarkup, EquipmentRate, JobConfig, LaborRole, MaterialItem, UnionRates};
