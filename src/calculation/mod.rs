//! Calculation logic for the Payroll Engine.
//!
//! This module contains one calculation per compensation model (fixed salary,
//! monthly order target, the fixed progressive tier table, package tiers and
//! slabs, per-order commission), the row-level engine that dispatches between
//! them, and run-level totals and warnings.

mod commission;
mod engine;
mod fixed_tier_table;
mod plan_tiers;
mod salary;
mod target;
mod totals;

pub use commission::{CommissionPayResult, calculate_commission_pay};
pub use engine::{
    RowCalculation, apply_edit, calculate, calculate_with_audit, project_row, project_rows,
    recalculate_all,
};
pub use fixed_tier_table::{
    FIXED_TIER_BAND_1_END, FIXED_TIER_BAND_2_END, FIXED_TIER_LEVEL_1_START,
    FIXED_TIER_LEVEL_2_START, FIXED_TIER_LEVEL_3_START, FixedTierPayResult,
    calculate_fixed_tier_pay, fixed_tier_base_salary,
};
pub use plan_tiers::{PlanTierPayResult, calculate_plan_tier_pay, match_slab, match_tier};
pub use salary::{SalaryPayResult, calculate_salary_pay};
pub use target::{TargetPayResult, calculate_target_pay};
pub use totals::{collect_warnings, retain_selected, set_all_selected, summarize};
