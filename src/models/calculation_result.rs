//! Payroll run result models.
//!
//! This module contains the [`PayrollRunResult`] type and its associated structures
//! that capture all outputs of a payroll run, including recomputed rows, totals,
//! warnings, and audit traces.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayrollMonth, PayrollRow, WorkType};

/// Summary figures over the selected rows of a payroll run.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollTotals;
/// use rust_decimal::Decimal;
///
/// let totals = PayrollTotals::default();
/// assert_eq!(totals.total_salary, Decimal::ZERO);
/// assert_eq!(totals.selected_count, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of non-negative net salaries.
    pub total_salary: Decimal,
    /// Sum of orders fulfilled.
    pub total_orders: u64,
    /// Sum of deductions (internal only for salary packages).
    pub total_deductions: Decimal,
    /// Number of rows included in the run.
    pub selected_count: usize,
    /// Number of included rows carrying a prior debt.
    pub employees_with_debts: usize,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag rows that calculate fine but need attention before saving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a payroll run.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a payroll run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRunResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The package the rows were calculated under.
    pub package_id: String,
    /// The work type of that package.
    pub work_type: WorkType,
    /// The month covered by the run.
    pub month: PayrollMonth,
    /// Whether the fixed progressive tier table was active.
    pub tier_system_active: bool,
    /// Recomputed rows, in input order.
    pub rows: Vec<PayrollRow>,
    /// Totals over the selected rows.
    pub totals: PayrollTotals,
    /// The audit trace of the run.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "salary_pay".to_string(),
            rule_name: "Fixed Salary".to_string(),
            input: serde_json::json!({"basic_salary": "3000"}),
            output: serde_json::json!({"net_salary": "3000"}),
            reasoning: "$3000 + $0 + $0 - $0 = $3000".to_string(),
        };

        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["rule_id"], "salary_pay");
        assert_eq!(json["input"]["basic_salary"], "3000");

        let back: AuditStep = serde_json::from_value(json).unwrap();
        assert_eq!(back, step);
    }

    #[test]
    fn test_totals_serialize_decimals_as_strings() {
        let totals = PayrollTotals {
            total_salary: Decimal::new(1050050, 2),
            total_orders: 900,
            total_deductions: Decimal::new(1500, 1),
            selected_count: 3,
            employees_with_debts: 1,
        };

        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["total_salary"], "10500.50");
        assert_eq!(json["total_orders"], 900);
        assert_eq!(json["total_deductions"], "150.0");
    }
}
