//! Fixed salary calculation.
//!
//! Salary packages pay the basic salary and housing allowance regardless of
//! orders. Only the internal deduction applies; operator and wallet
//! deductions are order-platform charges and do not touch salaried staff.

use rust_decimal::Decimal;

use crate::models::{AuditStep, PayrollRow};

/// The result of a fixed salary calculation.
#[derive(Debug, Clone)]
pub struct SalaryPayResult {
    /// Net pay for the month.
    pub net_salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates pay for a salary package.
///
/// `net = basic + housing + reward − internal`
///
/// # Arguments
///
/// * `row` - The payroll row holding the employee's salary and the month's inputs
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_salary_pay;
/// use payroll_engine::models::{EmployeeRecord, PayrollRow};
/// use rust_decimal::Decimal;
///
/// let mut row = PayrollRow::new(EmployeeRecord::default());
/// row.employee.basic_salary = Decimal::from(4000);
/// row.employee.housing_allowance = Decimal::from(1000);
/// row.operator_deduction = Decimal::from(300);
///
/// let result = calculate_salary_pay(&row, 1);
/// assert_eq!(result.net_salary, Decimal::from(5000));
/// ```
pub fn calculate_salary_pay(row: &PayrollRow, step_number: u32) -> SalaryPayResult {
    let basic = row.employee.basic_salary;
    let housing = row.employee.housing_allowance;
    let reward = row.internal_bonus;
    let internal = row.internal_deduction;
    let net_salary = basic
        .saturating_add(housing)
        .saturating_add(reward)
        .saturating_sub(internal);

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_pay".to_string(),
        rule_name: "Fixed Salary".to_string(),
        input: serde_json::json!({
            "basic_salary": basic.normalize().to_string(),
            "housing_allowance": housing.normalize().to_string(),
            "internal_bonus": reward.normalize().to_string(),
            "internal_deduction": internal.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_salary": net_salary.normalize().to_string()
        }),
        reasoning: format!(
            "${} basic + ${} housing + ${} reward - ${} internal = ${}",
            basic.normalize(),
            housing.normalize(),
            reward.normalize(),
            internal.normalize(),
            net_salary.normalize()
        ),
    };

    SalaryPayResult {
        net_salary,
        audit_step,
    }
}
