//! Request types for the Payroll Engine API.
//!
//! This module defines the JSON bodies and query strings accepted by the
//! import, preparation, and calculation endpoints.

use serde::{Deserialize, Serialize};

use crate::import::FileKind;
use crate::models::{DebtRecord, EmployeeRecord, PayrollRow, RowEdit, WorkType};

/// Query string for `POST /employees/import`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportQuery {
    /// The uploaded file's format.
    pub kind: FileKind,
    /// The work type the roster is being imported for.
    #[serde(default)]
    pub work_type: WorkType,
}

/// Query string for `GET /employees/template`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateQuery {
    /// Selects the template's column set.
    #[serde(default)]
    pub work_type: WorkType,
}

/// Request body for `POST /payroll/prepare`.
///
/// Projects a roster into payroll rows for a package, applying any
/// carried-over debts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareRequest {
    /// The package the employees belong to.
    pub package_id: String,
    /// The employees to project.
    pub employees: Vec<EmployeeRecord>,
    /// Outstanding debts, matched by iqama number.
    #[serde(default)]
    pub debts: Vec<DebtRecord>,
    /// Whether tiers packages use the fixed progressive table.
    #[serde(default)]
    pub tier_system_active: bool,
}

/// Request body for `POST /payroll/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// The package the rows are paid under.
    pub package_id: String,
    /// The payroll month, `YYYY-MM`.
    pub month: String,
    /// Whether tiers packages use the fixed progressive table.
    #[serde(default)]
    pub tier_system_active: bool,
    /// The rows to recompute.
    pub rows: Vec<PayrollRow>,
}

/// Request body for `POST /payroll/edit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRequest {
    /// The package the row is paid under.
    pub package_id: String,
    /// Whether tiers packages use the fixed progressive table.
    #[serde(default)]
    pub tier_system_active: bool,
    /// The row being edited.
    pub row: PayrollRow,
    /// The field change to apply.
    pub edit: RowEdit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_calculate_request() {
        let json = r#"{
            "package_id": "riders_target",
            "month": "2026-03",
            "rows": [
                {"employee": {"name": "Ali", "basic_salary": "4500"}, "successful_orders": 420}
            ]
        }"#;

        let request: CalculateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.package_id, "riders_target");
        assert!(!request.tier_system_active);
        assert_eq!(request.rows[0].successful_orders, 420);
    }

    #[test]
    fn test_prepare_request_defaults_debts() {
        let json = r#"{"package_id": "office_salary", "employees": []}"#;
        let request: PrepareRequest = serde_json::from_str(json).unwrap();
        assert!(request.debts.is_empty());
    }

    #[test]
    fn test_edit_request_carries_tagged_edit() {
        let json = r#"{
            "package_id": "riders_commission",
            "row": {"employee": {"name": "Ali"}},
            "edit": {"field": "internal_bonus", "value": "250"}
        }"#;
        let request: EditRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.edit,
            RowEdit::InternalBonus(rust_decimal::Decimal::from(250))
        );
    }

    #[test]
    fn test_missing_package_id_fails() {
        let json = r#"{"month": "2026-03", "rows": []}"#;
        let result: Result<CalculateRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
