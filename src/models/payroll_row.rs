//! Payroll row model: one employee's inputs and computed pay for a month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AchievedTier, EmployeeRecord, lenient};

/// Payment method assigned to freshly projected rows.
pub const DEFAULT_PAYMENT_METHOD: &str = "unspecified";

fn default_selected() -> bool {
    true
}

fn default_payment_method() -> String {
    DEFAULT_PAYMENT_METHOD.to_string()
}

/// An outstanding debt carried into a payroll month.
///
/// Debts are matched to employees by iqama number; the absolute amount is
/// seeded into the row's internal deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtRecord {
    /// Name of the indebted employee.
    #[serde(default, deserialize_with = "lenient::text")]
    pub employee_name: String,
    /// Iqama number used to match the debt to a row.
    #[serde(deserialize_with = "lenient::text")]
    pub iqama_number: String,
    /// The month the debt was recorded in.
    #[serde(default, deserialize_with = "lenient::text")]
    pub month_reference: String,
    /// The debt amount. Sign is ignored.
    #[serde(deserialize_with = "lenient::decimal")]
    pub amount: Decimal,
}

/// One employee's payroll state for a month.
///
/// Input fields are edited by the caller; computed fields are owned by the
/// calculation engine and replaced wholesale on every recomputation, so
/// `net_salary` always equals the live result for the current inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRow {
    /// The employee's roster data.
    #[serde(default)]
    pub employee: EmployeeRecord,

    /// Orders fulfilled this month.
    #[serde(default, deserialize_with = "lenient::orders")]
    pub successful_orders: u32,
    /// Deduction imposed by the delivery operator.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub operator_deduction: Decimal,
    /// Internal deduction, including carried-over debt.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub internal_deduction: Decimal,
    /// Wallet deduction.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub wallet_deduction: Decimal,
    /// Internal bonus (reward).
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub internal_bonus: Decimal,
    /// How the salary is paid out.
    #[serde(default = "default_payment_method")]
    pub payment_method: String,

    /// Deduction for falling short of the monthly target.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub target_deduction: Decimal,
    /// Bonus for orders above the monthly target.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub monthly_bonus: Decimal,
    /// Flat bonus of the matched plan tier.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub tier_bonus: Decimal,
    /// Per-order increment earned above the matched tier's threshold.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub extra_amount: Decimal,
    /// Which band, tier, or slab produced the pay.
    #[serde(default)]
    pub achieved_tier: AchievedTier,
    /// Net pay for the month. May be negative.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub net_salary: Decimal,

    /// Whether the row is included in the payroll run.
    #[serde(default = "default_selected")]
    pub selected: bool,
    /// Whether a carried-over debt was applied.
    #[serde(default)]
    pub has_debt: bool,
    /// The carried-over debt amount.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub debt_amount: Decimal,
}

impl PayrollRow {
    /// Creates a selected row with zeroed inputs and outputs.
    ///
    /// The computed fields are not yet calculated; use
    /// [`crate::calculation::project_row`] to get a row with a live net salary.
    pub fn new(employee: EmployeeRecord) -> Self {
        Self {
            employee,
            successful_orders: 0,
            operator_deduction: Decimal::ZERO,
            internal_deduction: Decimal::ZERO,
            wallet_deduction: Decimal::ZERO,
            internal_bonus: Decimal::ZERO,
            payment_method: default_payment_method(),
            target_deduction: Decimal::ZERO,
            monthly_bonus: Decimal::ZERO,
            tier_bonus: Decimal::ZERO,
            extra_amount: Decimal::ZERO,
            achieved_tier: AchievedTier::NotApplicable,
            net_salary: Decimal::ZERO,
            selected: true,
            has_debt: false,
            debt_amount: Decimal::ZERO,
        }
    }

    /// Sum of operator, internal, and wallet deductions.
    pub fn total_deductions(&self) -> Decimal {
        self.operator_deduction
            .saturating_add(self.internal_deduction)
            .saturating_add(self.wallet_deduction)
    }

    /// Returns true when the computed net salary is below zero.
    pub fn is_negative(&self) -> bool {
        self.net_salary < Decimal::ZERO
    }
}

/// A single-field edit applied to one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum RowEdit {
    /// Set the month's order count.
    #[serde(deserialize_with = "lenient::orders")]
    SuccessfulOrders(u32),
    /// Set the operator deduction.
    #[serde(deserialize_with = "lenient::decimal")]
    OperatorDeduction(Decimal),
    /// Set the internal deduction.
    #[serde(deserialize_with = "lenient::decimal")]
    InternalDeduction(Decimal),
    /// Set the wallet deduction.
    #[serde(deserialize_with = "lenient::decimal")]
    WalletDeduction(Decimal),
    /// Set the internal bonus.
    #[serde(deserialize_with = "lenient::decimal")]
    InternalBonus(Decimal),
    /// Set the basic salary.
    #[serde(deserialize_with = "lenient::decimal")]
    BasicSalary(Decimal),
    /// Set the housing allowance.
    #[serde(deserialize_with = "lenient::decimal")]
    HousingAllowance(Decimal),
    /// Set the payment method.
    #[serde(deserialize_with = "lenient::text")]
    PaymentMethod(String),
    /// Include or exclude the row from the run.
    Selected(bool),
}

impl RowEdit {
    /// Returns true when the edit changes a calculation input.
    pub fn affects_pay(&self) -> bool {
        !matches!(self, RowEdit::PaymentMethod(_) | RowEdit::Selected(_))
    }

    /// Writes the edited value into `row` without recomputing.
    pub fn apply_to(self, row: &mut PayrollRow) {
        match self {
            RowEdit::SuccessfulOrders(v) => row.successful_orders = v,
            RowEdit::OperatorDeduction(v) => row.operator_deduction = v,
            RowEdit::InternalDeduction(v) => row.internal_deduction = v,
            RowEdit::WalletDeduction(v) => row.wallet_deduction = v,
            RowEdit::InternalBonus(v) => row.internal_bonus = v,
            RowEdit::BasicSalary(v) => row.employee.basic_salary = v,
            RowEdit::HousingAllowance(v) => row.employee.housing_allowance = v,
            RowEdit::PaymentMethod(v) => row.payment_method = v,
            RowEdit::Selected(v) => row.selected = v,
        }
    }
}
