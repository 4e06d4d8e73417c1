//! Package-defined tier and slab calculation.
//!
//! Tiers are scanned in ascending `min_orders` order and the highest
//! qualifying tier wins. Slabs are only consulted when no tier qualifies,
//! and the first slab containing the order count wins. Because the lowest
//! tier usually starts at zero orders, slabs only take effect when the
//! package has no tiers at all.

use rust_decimal::Decimal;

use crate::models::{AchievedTier, AuditStep, PayrollRow, Slab, Tier};

/// The result of a package tier/slab calculation.
#[derive(Debug, Clone)]
pub struct PlanTierPayResult {
    /// Which tier or slab produced the pay.
    pub achieved_tier: AchievedTier,
    /// Increment earned above the matched tier's threshold.
    pub extra_amount: Decimal,
    /// Flat bonus of the matched tier.
    pub tier_bonus: Decimal,
    /// Net pay after reward and deductions.
    pub net_salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Finds the highest tier whose `min_orders` does not exceed `orders`.
///
/// Tiers are evaluated in ascending `min_orders` order regardless of list
/// order; among tiers sharing a threshold the later one wins.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::match_tier;
/// use payroll_engine::models::Tier;
///
/// let tiers: Vec<Tier> = [0, 100, 200]
///     .into_iter()
///     .map(|min_orders| Tier { min_orders, ..Default::default() })
///     .collect();
///
/// assert_eq!(match_tier(&tiers, 150).map(|t| t.min_orders), Some(100));
/// assert_eq!(match_tier(&tiers, 200).map(|t| t.min_orders), Some(200));
/// ```
pub fn match_tier(tiers: &[Tier], orders: u32) -> Option<&Tier> {
    let mut ascending: Vec<&Tier> = tiers.iter().collect();
    ascending.sort_by_key(|tier| tier.min_orders);
    ascending
        .into_iter()
        .rev()
        .find(|tier| tier.min_orders <= orders)
}

/// Finds the first slab, in list order, containing `orders`.
pub fn match_slab(slabs: &[Slab], orders: u32) -> Option<&Slab> {
    slabs.iter().find(|slab| slab.contains(orders))
}

/// Calculates pay from the package's tier and slab tables.
///
/// - Tier match: `net = base_salary + extra_amount + tier_bonus + reward − deductions`
/// - Slab match: `net = orders × value_per_order + reward − deductions`
/// - No match: `net = reward − deductions`
///
/// # Arguments
///
/// * `row` - The payroll row holding orders, reward, and deductions
/// * `tiers` - The package's tier table
/// * `slabs` - The package's slab table
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_plan_tier_pay(
    row: &PayrollRow,
    tiers: &[Tier],
    slabs: &[Slab],
    step_number: u32,
) -> PlanTierPayResult {
    let orders = row.successful_orders;
    let reward = row.internal_bonus;
    let deductions = row.total_deductions();

    let input = serde_json::json!({
        "successful_orders": orders,
        "internal_bonus": reward.normalize().to_string(),
        "total_deductions": deductions.normalize().to_string(),
        "tier_count": tiers.len(),
        "slab_count": slabs.len()
    });

    if let Some(tier) = match_tier(tiers, orders) {
        let extra_amount =
            Decimal::from(orders - tier.min_orders).saturating_mul(tier.increment_per_order);
        let tier_bonus = tier.bonus;
        let net_salary = tier
            .base_salary
            .saturating_add(extra_amount)
            .saturating_add(tier_bonus)
            .saturating_add(reward)
            .saturating_sub(deductions);

        let audit_step = AuditStep {
            step_number,
            rule_id: "plan_tier".to_string(),
            rule_name: "Package Tier".to_string(),
            input,
            output: serde_json::json!({
                "min_orders": tier.min_orders,
                "base_salary": tier.base_salary.normalize().to_string(),
                "extra_amount": extra_amount.normalize().to_string(),
                "tier_bonus": tier_bonus.normalize().to_string(),
                "net_salary": net_salary.normalize().to_string()
            }),
            reasoning: format!(
                "Tier from {} orders: ${} base + ({} - {}) x ${} + ${} bonus + ${} reward - ${} deductions = ${}",
                tier.min_orders,
                tier.base_salary.normalize(),
                orders,
                tier.min_orders,
                tier.increment_per_order.normalize(),
                tier_bonus.normalize(),
                reward.normalize(),
                deductions.normalize(),
                net_salary.normalize()
            ),
        };

        return PlanTierPayResult {
            achieved_tier: AchievedTier::PlanTier {
                min_orders: tier.min_orders,
            },
            extra_amount,
            tier_bonus,
            net_salary,
            audit_step,
        };
    }

    if let Some(slab) = match_slab(slabs, orders) {
        let slab_pay = Decimal::from(orders).saturating_mul(slab.value_per_order);
        let net_salary = slab_pay.saturating_add(reward).saturating_sub(deductions);
        let to_orders = if slab.is_open_ended() {
            None
        } else {
            slab.to_orders
        };

        let audit_step = AuditStep {
            step_number,
            rule_id: "plan_slab".to_string(),
            rule_name: "Package Slab".to_string(),
            input,
            output: serde_json::json!({
                "from_orders": slab.from_orders,
                "to_orders": to_orders,
                "slab_pay": slab_pay.normalize().to_string(),
                "net_salary": net_salary.normalize().to_string()
            }),
            reasoning: format!(
                "No tier qualified; slab from {} orders: {} x ${} + ${} reward - ${} deductions = ${}",
                slab.from_orders,
                orders,
                slab.value_per_order.normalize(),
                reward.normalize(),
                deductions.normalize(),
                net_salary.normalize()
            ),
        };

        return PlanTierPayResult {
            achieved_tier: AchievedTier::Slab {
                from_orders: slab.from_orders,
                to_orders,
            },
            extra_amount: Decimal::ZERO,
            tier_bonus: Decimal::ZERO,
            net_salary,
            audit_step,
        };
    }

    let net_salary = reward.saturating_sub(deductions);
    let audit_step = AuditStep {
        step_number,
        rule_id: "plan_no_bracket".to_string(),
        rule_name: "No Matching Bracket".to_string(),
        input,
        output: serde_json::json!({
            "net_salary": net_salary.normalize().to_string()
        }),
        reasoning: format!(
            "No tier or slab covers {} orders: ${} reward - ${} deductions = ${}",
            orders,
            reward.normalize(),
            deductions.normalize(),
            net_salary.normalize()
        ),
    };

    PlanTierPayResult {
        achieved_tier: AchievedTier::NoMatchingBracket,
        extra_amount: Decimal::ZERO,
        tier_bonus: Decimal::ZERO,
        net_salary,
        audit_step,
    }
}
