//! Row-level calculation entry points.
//!
//! [`calculate`] is the single public contract of the engine: it takes a row,
//! a plan, and the tier system toggle, and returns the row with every
//! computed field replaced. Input fields are never touched, so calling it on
//! its own output is a no-op.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    AchievedTier, AuditStep, CompensationPlan, DebtRecord, EmployeeRecord, PayrollRow, RowEdit,
    WorkType, DEFAULT_PAYMENT_METHOD,
};

use super::commission::calculate_commission_pay;
use super::fixed_tier_table::calculate_fixed_tier_pay;
use super::plan_tiers::calculate_plan_tier_pay;
use super::salary::calculate_salary_pay;
use super::target::calculate_target_pay;

/// A recomputed row together with the audit step explaining it.
#[derive(Debug, Clone)]
pub struct RowCalculation {
    /// The row with its computed fields replaced.
    pub row: PayrollRow,
    /// The audit step for the branch that produced the pay.
    pub audit_step: AuditStep,
}

/// Recomputes a row, returning the audit step for the branch taken.
///
/// # Arguments
///
/// * `row` - The current row; only its input fields are read
/// * `plan` - The package plan
/// * `tier_system_active` - Whether tiers packages use the fixed progressive table
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_with_audit(
    row: &PayrollRow,
    plan: &CompensationPlan,
    tier_system_active: bool,
    step_number: u32,
) -> RowCalculation {
    let mut out = row.clone();
    out.target_deduction = Decimal::ZERO;
    out.monthly_bonus = Decimal::ZERO;
    out.tier_bonus = Decimal::ZERO;
    out.extra_amount = Decimal::ZERO;
    out.achieved_tier = AchievedTier::NotApplicable;

    let audit_step = match plan.work_type {
        WorkType::Salary => {
            let result = calculate_salary_pay(row, step_number);
            out.net_salary = result.net_salary;
            result.audit_step
        }
        WorkType::Target => {
            let result = calculate_target_pay(row, plan, step_number);
            out.target_deduction = result.target_deduction;
            out.monthly_bonus = result.monthly_bonus;
            out.net_salary = result.net_salary;
            result.audit_step
        }
        WorkType::Tiers if tier_system_active => {
            let result = calculate_fixed_tier_pay(row, step_number);
            out.achieved_tier = AchievedTier::FixedBand { band: result.band };
            out.net_salary = result.net_salary;
            result.audit_step
        }
        WorkType::Tiers => {
            let result = calculate_plan_tier_pay(row, &plan.tiers, &plan.slabs, step_number);
            out.achieved_tier = result.achieved_tier;
            out.extra_amount = result.extra_amount;
            out.tier_bonus = result.tier_bonus;
            out.net_salary = result.net_salary;
            result.audit_step
        }
        WorkType::Commission => {
            let result = calculate_commission_pay(row, plan, step_number);
            out.net_salary = result.net_salary;
            result.audit_step
        }
    };

    RowCalculation {
        row: out,
        audit_step,
    }
}

/// Recomputes a row's derived fields from its inputs.
///
/// Pure and deterministic: the result depends only on the row's input
/// fields, the plan, and the toggle. Numeric edge cases (zero target,
/// unmatched tiers, negative nets) degrade to defined values, and amounts
/// beyond the decimal range saturate at `Decimal::MAX`/`Decimal::MIN`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate;
/// use payroll_engine::models::{CompensationPlan, EmployeeRecord, PayrollRow};
/// use rust_decimal::Decimal;
///
/// let plan = CompensationPlan::target(400, Decimal::from(5));
/// let mut row = PayrollRow::new(EmployeeRecord::default());
/// row.employee.basic_salary = Decimal::from(4000);
/// row.successful_orders = 420;
///
/// let once = calculate(&row, &plan, false);
/// assert_eq!(once.monthly_bonus, Decimal::from(100));
/// assert_eq!(once.net_salary, Decimal::from(4100));
/// assert_eq!(calculate(&once, &plan, false), once);
/// ```
pub fn calculate(row: &PayrollRow, plan: &CompensationPlan, tier_system_active: bool) -> PayrollRow {
    calculate_with_audit(row, plan, tier_system_active, 1).row
}

/// Recomputes every row in place.
///
/// Used after the plan or the tier system toggle changes.
pub fn recalculate_all(rows: &mut [PayrollRow], plan: &CompensationPlan, tier_system_active: bool) {
    for row in rows.iter_mut() {
        *row = calculate(row, plan, tier_system_active);
    }
    debug!(
        rows = rows.len(),
        work_type = plan.work_type.as_str(),
        tier_system_active,
        "Recalculated all rows"
    );
}

/// Applies a single-field edit to a row, recomputing only when the edit
/// changes a calculation input.
///
/// Toggling `selected` or changing the payment method leaves computed
/// fields as they are.
pub fn apply_edit(
    row: &mut PayrollRow,
    edit: RowEdit,
    plan: &CompensationPlan,
    tier_system_active: bool,
) {
    let recompute = edit.affects_pay();
    edit.apply_to(row);
    if recompute {
        *row = calculate(row, plan, tier_system_active);
    }
}

/// Projects an employee into a fresh, calculated payroll row.
///
/// When a debt matches the employee's iqama number, its absolute amount is
/// seeded into the internal deduction and the row is flagged.
pub fn project_row(
    employee: EmployeeRecord,
    debts: &[DebtRecord],
    plan: &CompensationPlan,
    tier_system_active: bool,
) -> PayrollRow {
    let mut row = PayrollRow::new(employee);
    row.payment_method = DEFAULT_PAYMENT_METHOD.to_string();

    let iqama = row.employee.iqama_number.trim().to_string();
    let matched = debts
        .iter()
        .find(|d| !iqama.is_empty() && d.iqama_number.trim() == iqama);
    if let Some(debt) = matched {
        let amount = debt.amount.abs();
        row.internal_deduction = amount;
        row.has_debt = true;
        row.debt_amount = amount;
    }

    calculate(&row, plan, tier_system_active)
}

/// Projects a roster into calculated payroll rows, preserving order.
pub fn project_rows(
    employees: Vec<EmployeeRecord>,
    debts: &[DebtRecord],
    plan: &CompensationPlan,
    tier_system_active: bool,
) -> Vec<PayrollRow> {
    let rows: Vec<PayrollRow> = employees
        .into_iter()
        .map(|employee| project_row(employee, debts, plan, tier_system_active))
        .collect();
    debug!(
        rows = rows.len(),
        debts_applied = rows.iter().filter(|r| r.has_debt).count(),
        "Projected payroll rows"
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FixedTierBand, Slab, Tier};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employee(name: &str, iqama: &str, basic: &str) -> EmployeeRecord {
        EmployeeRecord {
            name: name.to_string(),
            iqama_number: iqama.to_string(),
            nationality: "Saudi".to_string(),
            basic_salary: dec(basic),
            ..Default::default()
        }
    }

    fn tier_plan() -> CompensationPlan {
        CompensationPlan::tiers(
            vec![
                Tier {
                    min_orders: 0,
                    base_salary: dec("1000"),
                    increment_per_order: dec("2"),
                    bonus: Decimal::ZERO,
                },
                Tier {
                    min_orders: 300,
                    base_salary: dec("2000"),
                    increment_per_order: dec("4"),
                    bonus: dec("150"),
                },
            ],
            vec![],
        )
    }

    /// EN-001: salary branch leaves order-driven fields at zero
    #[test]
    fn test_salary_branch_clears_order_fields() {
        let mut row = PayrollRow::new(employee("Sara", "1", "3000"));
        row.employee.housing_allowance = dec("750");
        row.successful_orders = 500;
        row.monthly_bonus = dec("999");
        row.achieved_tier = AchievedTier::PlanTier { min_orders: 300 };

        let out = calculate(&row, &CompensationPlan::new(WorkType::Salary), true);
        assert_eq!(out.net_salary, dec("3750"));
        assert_eq!(out.monthly_bonus, Decimal::ZERO);
        assert_eq!(out.achieved_tier, AchievedTier::NotApplicable);
    }

    /// EN-002: tier toggle selects between fixed table and plan tiers
    #[test]
    fn test_tier_toggle_switches_mode() {
        let mut row = PayrollRow::new(employee("Omar", "2", "0"));
        row.successful_orders = 450;
        let plan = tier_plan();

        let fixed = calculate(&row, &plan, true);
        assert_eq!(fixed.net_salary, dec("2450"));
        assert_eq!(
            fixed.achieved_tier,
            AchievedTier::FixedBand {
                band: FixedTierBand::Level1
            }
        );
        assert_eq!(fixed.tier_bonus, Decimal::ZERO);

        let planned = calculate(&row, &plan, false);
        assert_eq!(planned.extra_amount, dec("600"));
        assert_eq!(planned.tier_bonus, dec("150"));
        assert_eq!(planned.net_salary, dec("2750"));
        assert_eq!(
            planned.achieved_tier,
            AchievedTier::PlanTier { min_orders: 300 }
        );
    }

    /// EN-003: stale computed fields from a previous mode are replaced
    #[test]
    fn test_switching_plan_replaces_all_computed_fields() {
        let mut row = PayrollRow::new(employee("Ali", "3", "3000"));
        row.successful_orders = 500;
        let tiered = calculate(&row, &tier_plan(), false);
        assert!(tiered.tier_bonus > Decimal::ZERO);

        let commission = calculate(&tiered, &CompensationPlan::commission(dec("10")), false);
        assert_eq!(commission.tier_bonus, Decimal::ZERO);
        assert_eq!(commission.extra_amount, Decimal::ZERO);
        assert_eq!(commission.achieved_tier, AchievedTier::NotApplicable);
        assert_eq!(commission.net_salary, dec("3050"));
    }

    /// EN-004: recalculating its own output changes nothing
    #[test]
    fn test_idempotent_across_work_types() {
        let mut row = PayrollRow::new(employee("Huda", "4", "2800"));
        row.successful_orders = 333;
        row.internal_bonus = dec("45");
        row.wallet_deduction = dec("12");

        let plans = [
            CompensationPlan::new(WorkType::Salary),
            CompensationPlan::target(400, dec("3")),
            tier_plan(),
            CompensationPlan::tiers(
                vec![],
                vec![Slab {
                    from_orders: 0,
                    to_orders: None,
                    value_per_order: dec("7"),
                }],
            ),
            CompensationPlan::commission(dec("20")),
        ];

        for plan in &plans {
            for toggle in [true, false] {
                let once = calculate(&row, plan, toggle);
                assert_eq!(calculate(&once, plan, toggle), once);
            }
        }
    }

    #[test]
    fn test_extreme_amounts_never_panic() {
        let max = "79228162514264337593543950335";
        let json = format!(
            r#"{{
                "employee": {{"name": "Ali", "basic_salary": "{max}", "housing_allowance": "{max}"}},
                "successful_orders": 4000000000,
                "operator_deduction": "{max}",
                "internal_deduction": "-{max}",
                "wallet_deduction": "{max}",
                "internal_bonus": "{max}"
            }}"#
        );
        let row: PayrollRow = serde_json::from_str(&json).unwrap();
        assert_eq!(row.employee.basic_salary, Decimal::MAX);

        let plans = [
            CompensationPlan::new(WorkType::Salary),
            CompensationPlan::target(450, Decimal::MAX),
            CompensationPlan::target(u32::MAX, Decimal::ONE),
            CompensationPlan::commission(Decimal::MAX),
            tier_plan(),
            CompensationPlan::tiers(
                Vec::new(),
                vec![Slab {
                    from_orders: 0,
                    to_orders: None,
                    value_per_order: Decimal::MAX,
                }],
            ),
        ];
        for plan in &plans {
            for toggle in [false, true] {
                let once = calculate(&row, plan, toggle);
                assert_eq!(calculate(&once, plan, toggle), once);
            }
        }

        let salary = calculate(&row, &plans[0], false);
        assert_eq!(salary.net_salary, Decimal::MAX);
    }

    #[test]
    fn test_recalculate_all_updates_every_row() {
        let mut rows: Vec<PayrollRow> = (0..3)
            .map(|i| {
                let mut row = PayrollRow::new(employee("R", &i.to_string(), "0"));
                row.successful_orders = 100 * (i + 1);
                row
            })
            .collect();

        recalculate_all(&mut rows, &tier_plan(), true);
        let nets: Vec<Decimal> = rows.iter().map(|r| r.net_salary).collect();
        assert_eq!(nets, vec![dec("200"), dec("400"), dec("600")]);
    }

    /// EN-005: pay-affecting edits recompute, selection edits do not
    #[test]
    fn test_apply_edit_recomputes_only_pay_inputs() {
        let plan = CompensationPlan::commission(dec("50"));
        let mut row = calculate(&PayrollRow::new(employee("Y", "5", "1000")), &plan, false);
        assert_eq!(row.net_salary, dec("1000"));

        apply_edit(&mut row, RowEdit::SuccessfulOrders(100), &plan, false);
        assert_eq!(row.net_salary, dec("1050"));

        row.net_salary = dec("1");
        apply_edit(&mut row, RowEdit::Selected(false), &plan, false);
        assert!(!row.selected);
        assert_eq!(row.net_salary, dec("1"));
    }

    /// EN-006: debt projection uses the absolute amount
    #[test]
    fn test_project_row_applies_matching_debt() {
        let debts = vec![DebtRecord {
            employee_name: "Faisal".to_string(),
            iqama_number: "2400000001".to_string(),
            month_reference: "2026-02".to_string(),
            amount: dec("-350"),
        }];
        let plan = CompensationPlan::new(WorkType::Salary);

        let row = project_row(employee("Faisal", "2400000001", "3000"), &debts, &plan, false);
        assert!(row.has_debt);
        assert!(row.selected);
        assert_eq!(row.debt_amount, dec("350"));
        assert_eq!(row.internal_deduction, dec("350"));
        assert_eq!(row.net_salary, dec("2650"));
        assert_eq!(row.payment_method, DEFAULT_PAYMENT_METHOD);
    }

    #[test]
    fn test_project_rows_ignores_unmatched_and_blank_iqama() {
        let debts = vec![DebtRecord {
            employee_name: String::new(),
            iqama_number: String::new(),
            month_reference: String::new(),
            amount: dec("100"),
        }];
        let employees = vec![employee("A", "", "1000"), employee("B", "77", "1200")];

        let rows = project_rows(employees, &debts, &CompensationPlan::default(), false);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| !r.has_debt));
        assert_eq!(rows[1].net_salary, dec("1200"));
    }
}
