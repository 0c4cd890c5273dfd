//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading the rate
//! catalogs from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::types::{Catalog, EquipmentRate, JobConfig, LaborRole, MaterialItem, UnionRates};

/// File structure for `labor.yaml`.
#[derive(Debug, Deserialize)]
struct LaborFile {
    roles: Vec<LaborRole>,
}

/// File structure for `materials.yaml`.
#[derive(Debug, Deserialize)]
struct MaterialsFile {
    materials: Vec<MaterialItem>,
}

/// File structure for `equipment.yaml`.
#[derive(Debug, Deserialize)]
struct EquipmentFile {
    equipment: Vec<EquipmentRate>,
}

/// File structure for `employees.yaml`.
#[derive(Debug, Deserialize)]
struct EmployeesFile {
    employees: Vec<Employee>,
}

/// File structure for `unions.yaml`.
#[derive(Debug, Deserialize)]
struct UnionsFile {
    unions: HashMap<String, UnionRates>,
}

/// File structure for `jobs.yaml`.
#[derive(Debug, Deserialize)]
struct JobsFile {
    jobs: Vec<JobConfig>,
}

/// Loads and provides access to the rate catalogs.
///
/// The `CatalogLoader` reads YAML catalog files from a directory and exposes
/// the combined [`Catalog`] for rate resolution.
///
/// # Directory Structure
///
/// ```text
/// config/catalog/
/// ├── labor.yaml      # Labor roles and contract hourly rates
/// ├── materials.yaml  # Master materials catalog with default prices
/// ├── equipment.yaml  # Equipment rental rates (daily/weekly/monthly)
/// ├── employees.yaml  # Payroll employees with personal and fringe rates
/// ├── unions.yaml     # Per-union health & welfare and pension rates
/// └── jobs.yaml       # Per-job contract configuration (markup policy)
/// ```
///
/// # Example
///
/// ```no_run
/// use tm_engine::catalog::CatalogLoader;
///
/// let loader = CatalogLoader::load("./config/catalog").unwrap();
/// let role = loader.catalog().labor_role("Painter").unwrap();
/// println!("Painter bills at ${}/hr", role.straight_rate);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: Catalog,
}

impl CatalogLoader {
    /// Loads the catalogs from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the catalog directory (e.g., "./config/catalog")
    ///
    /// # Returns
    ///
    /// Returns a `CatalogLoader` instance on success, or an error if:
    /// - Any required file is missing (`CatalogNotFound`)
    /// - Any file contains invalid YAML (`CatalogParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let labor: LaborFile = Self::load_yaml(&path.join("labor.yaml"))?;
        let materials: MaterialsFile = Self::load_yaml(&path.join("materials.yaml"))?;
        let equipment: EquipmentFile = Self::load_yaml(&path.join("equipment.yaml"))?;
        let employees: EmployeesFile = Self::load_yaml(&path.join("employees.yaml"))?;
        let unions: UnionsFile = Self::load_yaml(&path.join("unions.yaml"))?;
        let jobs: JobsFile = Self::load_yaml(&path.join("jobs.yaml"))?;

        let catalog = Catalog::new(
            labor.roles,
            materials.materials,
            equipment.equipment,
            employees.employees,
            unions.unions,
            jobs.jobs,
        );

        Ok(Self { catalog })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::CatalogParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
