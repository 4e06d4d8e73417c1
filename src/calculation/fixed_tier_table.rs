//! Fixed progressive tier table.
//!
//! When the tier system toggle is active, tiered packages ignore their own
//! tier and slab tables and pay from this hardcoded seven-band table instead.
//!
//! ## Band Structure
//!
//! | Orders   | Base salary                     |
//! |----------|---------------------------------|
//! | 0        | 0                               |
//! | 1-300    | orders × 2                      |
//! | 301-400  | orders × 3                      |
//! | 401-449  | orders × 4                      |
//! | 450-519  | 2450 + (orders − 450) × 7       |
//! | 520-559  | 3000 + (orders − 520) × 8       |
//! | 560+     | 3450 + (orders − 560) × 10      |
//!
//! The breakpoints are organization-specific and are kept as literals.

use rust_decimal::Decimal;

use crate::models::{AuditStep, FixedTierBand, PayrollRow};

/// Upper bound (exclusive) of the 2-per-order band.
pub const FIXED_TIER_BAND_1_END: u32 = 301;
/// Upper bound (exclusive) of the 3-per-order band.
pub const FIXED_TIER_BAND_2_END: u32 = 401;
/// Upper bound (exclusive) of the 4-per-order band; Level 1 starts here.
pub const FIXED_TIER_LEVEL_1_START: u32 = 450;
/// Level 2 threshold.
pub const FIXED_TIER_LEVEL_2_START: u32 = 520;
/// Level 3 threshold.
pub const FIXED_TIER_LEVEL_3_START: u32 = 560;

const LEVEL_1_BASE: i64 = 2450;
const LEVEL_2_BASE: i64 = 3000;
const LEVEL_3_BASE: i64 = 3450;

/// The result of a fixed table calculation.
#[derive(Debug, Clone)]
pub struct FixedTierPayResult {
    /// The band the order count fell into.
    pub band: FixedTierBand,
    /// The base salary produced by the band.
    pub base_salary: Decimal,
    /// Net pay after reward and deductions.
    pub net_salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Looks up the band and base salary for an order count.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::fixed_tier_base_salary;
/// use payroll_engine::models::FixedTierBand;
/// use rust_decimal::Decimal;
///
/// assert_eq!(fixed_tier_base_salary(300), (FixedTierBand::Orders1To300, Decimal::from(600)));
/// assert_eq!(fixed_tier_base_salary(301), (FixedTierBand::Orders301To400, Decimal::from(903)));
/// assert_eq!(fixed_tier_base_salary(450), (FixedTierBand::Level1, Decimal::from(2450)));
/// ```
pub fn fixed_tier_base_salary(orders: u32) -> (FixedTierBand, Decimal) {
    let n = Decimal::from(orders);
    let over = |start: u32| Decimal::from(orders - start);

    if orders < 1 {
        (FixedTierBand::NoOrders, Decimal::ZERO)
    } else if orders < FIXED_TIER_BAND_1_END {
        (FixedTierBand::Orders1To300, n * Decimal::from(2))
    } else if orders < FIXED_TIER_BAND_2_END {
        (FixedTierBand::Orders301To400, n * Decimal::from(3))
    } else if orders < FIXED_TIER_LEVEL_1_START {
        (FixedTierBand::Orders401To449, n * Decimal::from(4))
    } else if orders < FIXED_TIER_LEVEL_2_START {
        (
            FixedTierBand::Level1,
            Decimal::from(LEVEL_1_BASE) + over(FIXED_TIER_LEVEL_1_START) * Decimal::from(7),
        )
    } else if orders < FIXED_TIER_LEVEL_3_START {
        (
            FixedTierBand::Level2,
            Decimal::from(LEVEL_2_BASE) + over(FIXED_TIER_LEVEL_2_START) * Decimal::from(8),
        )
    } else {
        (
            FixedTierBand::Level3,
            Decimal::from(LEVEL_3_BASE) + over(FIXED_TIER_LEVEL_3_START) * Decimal::from(10),
        )
    }
}

/// Calculates pay from the fixed progressive table.
///
/// `net = base_salary + reward − (operator + internal + wallet)`
///
/// # Arguments
///
/// * `row` - The payroll row holding orders, reward, and deductions
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_fixed_tier_pay(row: &PayrollRow, step_number: u32) -> FixedTierPayResult {
    let orders = row.successful_orders;
    let (band, base_salary) = fixed_tier_base_salary(orders);
    let deductions = row.total_deductions();
    let net_salary = base_salary
        .saturating_add(row.internal_bonus)
        .saturating_sub(deductions);

    let audit_step = AuditStep {
        step_number,
        rule_id: "fixed_tier_table".to_string(),
        rule_name: "Fixed Progressive Tier Table".to_string(),
        input: serde_json::json!({
            "successful_orders": orders,
            "internal_bonus": row.internal_bonus.normalize().to_string(),
            "total_deductions": deductions.normalize().to_string()
        }),
        output: serde_json::json!({
            "band": band,
            "base_salary": base_salary.normalize().to_string(),
            "net_salary": net_salary.normalize().to_string()
        }),
        reasoning: format!(
            "{} orders fall in '{}': ${} + ${} reward - ${} deductions = ${}",
            orders,
            band.label(),
            base_salary.normalize(),
            row.internal_bonus.normalize(),
            deductions.normalize(),
            net_salary.normalize()
        ),
    };

    FixedTierPayResult {
        band,
        base_salary,
        net_salary,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeRecord;

    fn row_with_orders(orders: u32) -> PayrollRow {
        let mut row = PayrollRow::new(EmployeeRecord::default());
        row.successful_orders = orders;
        row
    }

    /// FT-001: zero orders pays nothing
    #[test]
    fn test_zero_orders_no_orders_band() {
        assert_eq!(
            fixed_tier_base_salary(0),
            (FixedTierBand::NoOrders, Decimal::ZERO)
        );
    }

    /// FT-002: every band boundary
    #[test]
    fn test_exact_breakpoints() {
        let cases = [
            (1, FixedTierBand::Orders1To300, 2),
            (300, FixedTierBand::Orders1To300, 600),
            (301, FixedTierBand::Orders301To400, 903),
            (400, FixedTierBand::Orders301To400, 1200),
            (401, FixedTierBand::Orders401To449, 1604),
            (449, FixedTierBand::Orders401To449, 1796),
            (450, FixedTierBand::Level1, 2450),
            (519, FixedTierBand::Level1, 2933),
            (520, FixedTierBand::Level2, 3000),
            (559, FixedTierBand::Level2, 3312),
            (560, FixedTierBand::Level3, 3450),
            (600, FixedTierBand::Level3, 3850),
        ];

        for (orders, band, expected) in cases {
            assert_eq!(
                fixed_tier_base_salary(orders),
                (band, Decimal::from(expected)),
                "orders = {}",
                orders
            );
        }
    }

    /// FT-003: reward and deductions applied on top of the base
    #[test]
    fn test_net_applies_reward_and_deductions() {
        let mut row = row_with_orders(300);
        row.internal_bonus = Decimal::from(100);
        row.operator_deduction = Decimal::from(20);
        row.internal_deduction = Decimal::from(30);
        row.wallet_deduction = Decimal::from(50);

        let result = calculate_fixed_tier_pay(&row, 1);
        assert_eq!(result.base_salary, Decimal::from(600));
        assert_eq!(result.net_salary, Decimal::from(600));
    }

    /// FT-004: zero orders nets reward minus deductions
    #[test]
    fn test_zero_orders_net_is_reward_minus_deductions() {
        let mut row = row_with_orders(0);
        row.internal_bonus = Decimal::from(50);
        row.wallet_deduction = Decimal::from(80);

        let result = calculate_fixed_tier_pay(&row, 1);
        assert_eq!(result.band, FixedTierBand::NoOrders);
        assert_eq!(result.net_salary, Decimal::from(-30));
    }

    #[test]
    fn test_audit_step_records_band() {
        let result = calculate_fixed_tier_pay(&row_with_orders(520), 4);
        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "fixed_tier_table");
        assert_eq!(result.audit_step.output["band"], "level2");
        assert_eq!(result.audit_step.output["base_salary"], "3000");
        assert!(result.audit_step.reasoning.contains("Level 2"));
    }
}
