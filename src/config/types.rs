//! Configuration types for payroll packages.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{CompensationPlan, DEFAULT_PAYMENT_METHOD};

fn default_payment_method() -> String {
    DEFAULT_PAYMENT_METHOD.to_string()
}

/// Metadata about the company running payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyMetadata {
    /// Short company code.
    pub code: String,
    /// The human-readable company name.
    pub name: String,
    /// Currency label shown next to amounts.
    pub currency: String,
    /// Payment method assigned to newly prepared rows.
    #[serde(default = "default_payment_method")]
    pub default_payment_method: String,
}

/// A named compensation package that employees are assigned to.
///
/// # Example
///
/// ```
/// use payroll_engine::config::Package;
/// use payroll_engine::models::WorkType;
///
/// let yaml = r#"
/// id: riders_target
/// group_name: Riders (target)
/// plan:
///   work_type: target
///   monthly_target: 450
///   bonus_after_target: 6
/// "#;
/// let package: Package = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(package.plan.work_type, WorkType::Target);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Unique package identifier.
    pub id: String,
    /// Display name of the employee group.
    pub group_name: String,
    /// The compensation plan applied to the group.
    pub plan: CompensationPlan,
}

/// The complete payroll configuration.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    company: CompanyMetadata,
    packages: BTreeMap<String, Package>,
}

impl PayrollConfig {
    /// Creates a new payroll configuration keyed by package id.
    pub fn new(company: CompanyMetadata, packages: Vec<Package>) -> Self {
        let packages = packages
            .into_iter()
            .map(|package| (package.id.clone(), package))
            .collect();
        Self { company, packages }
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        &self.company
    }

    /// Returns the packages keyed by id.
    pub fn packages(&self) -> &BTreeMap<String, Package> {
        &self.packages
    }
}
