//! Catalog types for rate and pricing lookups.
//!
//! This module contains the strongly-typed catalog structures that are
//! deserialized from YAML catalog files: labor roles, materials, equipment
//! rental rates, employees, union benefit rates, and per-job contract
//! configuration.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// A billable labor role from the contract rate sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct LaborRole {
    /// The role name (unique key, e.g., "Painter").
    pub name: String,
    /// Catalog category.
    pub category: String,
    /// Billing unit (e.g., "Hour", "Day").
    pub unit: String,
    /// Straight-time rate.
    pub straight_rate: Decimal,
    /// Overtime rate. Independent of the straight rate; the contract sets
    /// both explicitly, with no fixed multiplier.
    pub overtime_rate: Decimal,
}

/// A material from the master materials catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct MaterialItem {
    /// The material name (unique key).
    pub name: String,
    /// Catalog category (e.g., "MATERIALS", "PPE", "CONSUMABLES", "FUEL").
    pub category: String,
    /// Billing unit (e.g., "Gallon", "Box", "Each").
    pub unit: String,
    /// Default unit price, overridable per entry.
    pub unit_price: Decimal,
}

/// An equipment rental rate row from the contract rate sheet.
///
/// Any of the three period rates may be absent; requesting an absent period
/// is an error, never a substitution.
#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentRate {
    /// The equipment name (unique key).
    pub name: String,
    /// Catalog category (e.g., "TRUCKS", "COMPRESSORS", "DEHUMIDIFIERS").
    pub category: String,
    /// Daily rate, if the contract defines one.
    #[serde(default)]
    pub daily_rate: Option<Decimal>,
    /// Weekly rate, if the contract defines one.
    #[serde(default)]
    pub weekly_rate: Option<Decimal>,
    /// Monthly rate, if the contract defines one.
    #[serde(default)]
    pub monthly_rate: Option<Decimal>,
    /// The rate-sheet year the row is effective for.
    pub year: String,
    /// Whether the row is available for new entries.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Per-hour fringe benefit rates for one union local.
#[derive(Debug, Clone, Deserialize)]
pub struct UnionRates {
    /// Health & welfare contribution rate per hour.
    pub health_welfare: Decimal,
    /// Pension contribution rate per hour.
    pub pension: Decimal,
}

/// The markup formula a job's contract applies to materials and equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostMarkup {
    /// 10% overhead plus 10% profit, each computed off the base (x1.20).
    #[default]
    OhProfit,
    /// 10% then another 10% on the result, compounding (x1.21).
    TenAndTen,
}

/// Contract-specific configuration for one job.
#[derive(Debug, Clone, Deserialize)]
pub struct JobConfig {
    /// The job number (unique key).
    pub job_number: String,
    /// Human-readable job name.
    pub job_name: String,
    /// The client being billed.
    #[serde(default)]
    pub client_name: Option<String>,
    /// Contract type label.
    #[serde(default = "default_contract_type")]
    pub contract_type: String,
    /// The markup formula the contract specifies for costs.
    #[serde(default)]
    pub cost_markup: CostMarkup,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_contract_type() -> String {
    "T&M".to_string()
}

/// The complete set of loaded catalogs with keyed lookup accessors.
///
/// All accessors return at most one result or a distinguishable NotFound
/// error, so callers can reject a whole submission rather than partially
/// persist it.
#[derive(Debug, Clone)]
pub struct Catalog {
    labor_roles: HashMap<String, LaborRole>,
    materials: HashMap<String, MaterialItem>,
    equipment: HashMap<String, EquipmentRate>,
    employees: HashMap<String, Employee>,
    unions: HashMap<String, UnionRates>,
    jobs: HashMap<String, JobConfig>,
}

impl Catalog {
    /// Builds a catalog from already-keyed collections.
    pub fn new(
        labor_roles: Vec<LaborRole>,
        materials: Vec<MaterialItem>,
        equipment: Vec<EquipmentRate>,
        employees: Vec<Employee>,
        unions: HashMap<String, UnionRates>,
        jobs: Vec<JobConfig>,
    ) -> Self {
        Self {
            labor_roles: labor_roles.into_iter().map(|r| (r.name.clone(), r)).collect(),
            materials: materials.into_iter().map(|m| (m.name.clone(), m)).collect(),
            equipment: equipment.into_iter().map(|e| (e.name.clone(), e)).collect(),
            employees: employees
                .into_iter()
                .map(|e| (e.employee_number.clone(), e))
                .collect(),
            unions,
            jobs: jobs.into_iter().map(|j| (j.job_number.clone(), j)).collect(),
        }
    }

    /// Looks up a labor role by name.
    pub fn labor_role(&self, name: &str) -> EngineResult<&LaborRole> {
        self.labor_roles
            .get(name)
            .ok_or_else(|| EngineError::RoleNotFound {
                name: name.to_string(),
            })
    }

    /// Looks up a material by name.
    pub fn material(&self, name: &str) -> EngineResult<&MaterialItem> {
        self.materials
            .get(name)
            .ok_or_else(|| EngineError::MaterialNotFound {
                name: name.to_string(),
            })
    }

    /// Looks up an active equipment rate row by name.
    ///
    /// Inactive rows are treated the same as missing rows: callers must not
    /// price new entries against retired rates.
    pub fn equipment_rate(&self, name: &str) -> EngineResult<&EquipmentRate> {
        self.equipment
            .get(name)
            .filter(|e| e.active)
            .ok_or_else(|| EngineError::EquipmentNotFound {
                name: name.to_string(),
            })
    }

    /// Looks up an active employee by employee number.
    ///
    /// Inactive employees cannot be referenced by new submissions.
    pub fn employee(&self, id: &str) -> EngineResult<&Employee> {
        self.employees
            .get(id)
            .filter(|e| e.active)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Looks up an employee regardless of active status.
    ///
    /// Reports over historical entries must not fail because a worker was
    /// later deactivated.
    pub fn find_employee_any(&self, id: &str) -> Option<&Employee> {
        self.employees.get(id)
    }

    /// Looks up the fringe benefit rates for a union local.
    pub fn union_rates(&self, code: &str) -> EngineResult<&UnionRates> {
        self.unions
            .get(code)
            .ok_or_else(|| EngineError::UnionNotFound {
                code: code.to_string(),
            })
    }

    /// Looks up the configuration for a job, if one exists.
    pub fn job_config(&self, job_number: &str) -> Option<&JobConfig> {
        self.jobs.get(job_number)
    }

    /// Returns the cost markup formula configured for a job.
    ///
    /// Jobs without an explicit configuration bill at the OH+Profit default.
    pub fn cost_markup_for(&self, job_number: &str) -> CostMarkup {
        self.jobs
            .get(job_number)
            .map(|j| j.cost_markup)
            .unwrap_or_default()
    }
}
