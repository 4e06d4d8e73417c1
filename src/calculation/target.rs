//! Monthly order target calculation.
//!
//! A target package pays the basic salary, reduced proportionally for every
//! order short of the monthly target, or topped up per order beyond it.
//!
//! ## Shortfall
//!
//! `target_deduction = (target − orders) × (basic / target)`
//!
//! A zero target never produces a shortfall deduction.
//!
//! ## Over-target
//!
//! `monthly_bonus = (orders − target) × bonus_after_target`
//!
//! Hitting the target exactly yields neither a deduction nor a bonus.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CompensationPlan, PayrollRow};

/// The result of a target calculation.
#[derive(Debug, Clone)]
pub struct TargetPayResult {
    /// Deduction for orders short of the target.
    pub target_deduction: Decimal,
    /// Bonus for orders above the target.
    pub monthly_bonus: Decimal,
    /// Net pay for the month.
    pub net_salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates pay for a target package.
///
/// `net = basic + monthly_bonus + reward − target_deduction − operator − internal − wallet`
///
/// # Arguments
///
/// * `row` - The payroll row holding orders, salary, and deductions
/// * `plan` - The package plan supplying `monthly_target` and `bonus_after_target`
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_target_pay;
/// use payroll_engine::models::{CompensationPlan, EmployeeRecord, PayrollRow};
/// use rust_decimal::Decimal;
///
/// let plan = CompensationPlan::target(400, Decimal::from(5));
/// let mut row = PayrollRow::new(EmployeeRecord::default());
/// row.employee.basic_salary = Decimal::from(4000);
/// row.successful_orders = 300;
///
/// let result = calculate_target_pay(&row, &plan, 1);
/// assert_eq!(result.target_deduction, Decimal::from(1000));
/// assert_eq!(result.net_salary, Decimal::from(3000));
/// ```
pub fn calculate_target_pay(
    row: &PayrollRow,
    plan: &CompensationPlan,
    step_number: u32,
) -> TargetPayResult {
    let orders = row.successful_orders;
    let target = plan.monthly_target;
    let bonus_rate = plan.bonus_after_target;
    let basic = row.employee.basic_salary;
    let reward = row.internal_bonus;
    let deductions = row.total_deductions();

    let (target_deduction, monthly_bonus, detail) = if orders < target {
        let shortfall = target - orders;
        let per_order = basic / Decimal::from(target);
        let deduction = Decimal::from(shortfall).saturating_mul(per_order);
        (
            deduction,
            Decimal::ZERO,
            format!(
                "{} orders short of {}: {} x (${} / {}) = ${} deduction",
                shortfall,
                target,
                shortfall,
                basic.normalize(),
                target,
                deduction.normalize()
            ),
        )
    } else {
        let surplus = orders - target;
        let bonus = Decimal::from(surplus).saturating_mul(bonus_rate);
        (
            Decimal::ZERO,
            bonus,
            format!(
                "{} orders over {}: {} x ${} = ${} bonus",
                surplus,
                target,
                surplus,
                bonus_rate.normalize(),
                bonus.normalize()
            ),
        )
    };

    let net_salary = basic
        .saturating_add(monthly_bonus)
        .saturating_add(reward)
        .saturating_sub(target_deduction)
        .saturating_sub(deductions);

    let audit_step = AuditStep {
        step_number,
        rule_id: "target_pay".to_string(),
        rule_name: "Monthly Order Target".to_string(),
        input: serde_json::json!({
            "successful_orders": orders,
            "monthly_target": target,
            "bonus_after_target": bonus_rate.normalize().to_string(),
            "basic_salary": basic.normalize().to_string(),
            "internal_bonus": reward.normalize().to_string(),
            "total_deductions": deductions.normalize().to_string()
        }),
        output: serde_json::json!({
            "target_deduction": target_deduction.normalize().to_string(),
            "monthly_bonus": monthly_bonus.normalize().to_string(),
            "net_salary": net_salary.normalize().to_string()
        }),
        reasoning: format!(
            "{}; ${} + ${} + ${} reward - ${} - ${} deductions = ${}",
            detail,
            basic.normalize(),
            monthly_bonus.normalize(),
            reward.normalize(),
            target_deduction.normalize(),
            deductions.normalize(),
            net_salary.normalize()
        ),
    };

    TargetPayResult {
        target_deduction,
        monthly_bonus,
        net_salary,
        audit_step,
    }
}
