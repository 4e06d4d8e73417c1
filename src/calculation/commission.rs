//! Per-order commission calculation.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CompensationPlan, PayrollRow};

/// The result of a commission calculation.
#[derive(Debug, Clone)]
pub struct CommissionPayResult {
    /// The commission earned from orders.
    pub commission: Decimal,
    /// Net pay for the month.
    pub net_salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates pay for a commission package.
///
/// The plan's `bonus_after_target` is a percentage:
/// `commission = orders × bonus_after_target / 100` and
/// `net = basic + commission + reward − (operator + internal + wallet)`.
///
/// # Arguments
///
/// * `row` - The payroll row holding orders, salary, and deductions
/// * `plan` - The package plan supplying the commission percentage
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_commission_pay(
    row: &PayrollRow,
    plan: &CompensationPlan,
    step_number: u32,
) -> CommissionPayResult {
    let orders = row.successful_orders;
    let rate = plan.commission_rate();
    let basic = row.employee.basic_salary;
    let reward = row.internal_bonus;
    let deductions = row.total_deductions();

    let commission = Decimal::from(orders).saturating_mul(rate);
    let net_salary = basic
        .saturating_add(commission)
        .saturating_add(reward)
        .saturating_sub(deductions);

    let audit_step = AuditStep {
        step_number,
        rule_id: "commission_pay".to_string(),
        rule_name: "Order Commission".to_string(),
        input: serde_json::json!({
            "successful_orders": orders,
            "commission_percentage": plan.bonus_after_target.normalize().to_string(),
            "basic_salary": basic.normalize().to_string(),
            "internal_bonus": reward.normalize().to_string(),
            "total_deductions": deductions.normalize().to_string()
        }),
        output: serde_json::json!({
            "commission": commission.normalize().to_string(),
            "net_salary": net_salary.normalize().to_string()
        }),
        reasoning: format!(
            "{} orders x {} = ${} commission; ${} + ${} + ${} reward - ${} deductions = ${}",
            orders,
            rate.normalize(),
            commission.normalize(),
            basic.normalize(),
            commission.normalize(),
            reward.normalize(),
            deductions.normalize(),
            net_salary.normalize()
        ),
    };

    CommissionPayResult {
        commission,
        net_salary,
        audit_step,
    }
}
