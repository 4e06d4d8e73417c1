//! Compensation plan (package) definitions.
//!
//! A [`CompensationPlan`] names the work type of a package and carries the
//! parameters that work type needs: a monthly target and bonus rate, a
//! commission percentage, or tier and slab tables.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// The compensation model governing a package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    /// Fixed monthly salary plus housing.
    #[default]
    Salary,
    /// Salary reduced below a monthly order target, bonused above it.
    Target,
    /// Tier and slab tables keyed on orders.
    Tiers,
    /// Salary plus a percentage commission per order.
    Commission,
}

impl WorkType {
    /// Returns the snake_case name of the work type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Salary => "salary",
            WorkType::Target => "target",
            WorkType::Tiers => "tiers",
            WorkType::Commission => "commission",
        }
    }

    /// Returns true for the fixed salary model.
    pub fn is_salary(&self) -> bool {
        *self == WorkType::Salary
    }
}

/// A qualification threshold granting a base salary, per-order increment, and flat bonus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tier {
    /// Minimum orders needed to qualify.
    #[serde(deserialize_with = "lenient::orders")]
    pub min_orders: u32,
    /// Base salary paid at this tier.
    #[serde(deserialize_with = "lenient::decimal")]
    pub base_salary: Decimal,
    /// Amount paid per order above `min_orders`.
    #[serde(deserialize_with = "lenient::decimal")]
    pub increment_per_order: Decimal,
    /// Flat bonus paid at this tier.
    #[serde(deserialize_with = "lenient::decimal")]
    pub bonus: Decimal,
}

/// An order-count range paid at a flat per-order rate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slab {
    /// First order count in the range (inclusive).
    #[serde(deserialize_with = "lenient::orders")]
    pub from_orders: u32,
    /// Last order count in the range (inclusive). `None` or zero is open-ended.
    #[serde(deserialize_with = "lenient::optional_orders")]
    pub to_orders: Option<u32>,
    /// Amount paid per order.
    #[serde(deserialize_with = "lenient::decimal")]
    pub value_per_order: Decimal,
}

impl Slab {
    /// Returns true when the slab has no upper bound.
    pub fn is_open_ended(&self) -> bool {
        matches!(self.to_orders, None | Some(0))
    }

    /// Returns true when `orders` falls inside the slab.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Slab;
    /// use rust_decimal::Decimal;
    ///
    /// let slab = Slab {
    ///     from_orders: 100,
    ///     to_orders: Some(200),
    ///     value_per_order: Decimal::from(5),
    /// };
    /// assert!(slab.contains(100));
    /// assert!(slab.contains(200));
    /// assert!(!slab.contains(201));
    /// ```
    pub fn contains(&self, orders: u32) -> bool {
        orders >= self.from_orders
            && match self.to_orders {
                None | Some(0) => true,
                Some(upper) => orders <= upper,
            }
    }
}

/// The parameters of a compensation package.
///
/// Plans are immutable during a calculation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompensationPlan {
    /// The compensation model.
    pub work_type: WorkType,
    /// Monthly order target (target plans).
    #[serde(deserialize_with = "lenient::orders")]
    pub monthly_target: u32,
    /// Bonus per order above target, or the commission percentage for commission plans.
    #[serde(deserialize_with = "lenient::decimal")]
    pub bonus_after_target: Decimal,
    /// Tier table (tiers plans).
    pub tiers: Vec<Tier>,
    /// Slab table (tiers plans), consulted only when no tier qualifies.
    pub slabs: Vec<Slab>,
}

impl CompensationPlan {
    /// Creates an empty plan of the given work type.
    pub fn new(work_type: WorkType) -> Self {
        Self {
            work_type,
            ..Default::default()
        }
    }

    /// Creates a target plan.
    pub fn target(monthly_target: u32, bonus_after_target: Decimal) -> Self {
        Self {
            work_type: WorkType::Target,
            monthly_target,
            bonus_after_target,
            ..Default::default()
        }
    }

    /// Creates a commission plan paying `percentage` percent per order.
    pub fn commission(percentage: Decimal) -> Self {
        Self {
            work_type: WorkType::Commission,
            bonus_after_target: percentage,
            ..Default::default()
        }
    }

    /// Creates a tiers plan from tier and slab tables.
    pub fn tiers(tiers: Vec<Tier>, slabs: Vec<Slab>) -> Self {
        Self {
            work_type: WorkType::Tiers,
            tiers,
            slabs,
            ..Default::default()
        }
    }

    /// Returns the commission multiplier (`bonus_after_target / 100`).
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::CompensationPlan;
    /// use rust_decimal::Decimal;
    ///
    /// let plan = CompensationPlan::commission(Decimal::from(15));
    /// assert_eq!(plan.commission_rate(), Decimal::new(15, 2));
    /// ```
    pub fn commission_rate(&self) -> Decimal {
        self.bonus_after_target / Decimal::ONE_HUNDRED
    }
}
