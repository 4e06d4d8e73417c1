//! Achieved tier labels for computed payroll rows.
//!
//! The label records which band, tier, or slab produced an employee's pay
//! for the month.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A band of the fixed progressive order table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixedTierBand {
    /// Zero orders.
    NoOrders,
    /// 1 to 300 orders at 2 per order.
    Orders1To300,
    /// 301 to 400 orders at 3 per order.
    Orders301To400,
    /// 401 to 449 orders at 4 per order.
    Orders401To449,
    /// 450 to 519 orders.
    Level1,
    /// 520 to 559 orders.
    Level2,
    /// 560 orders and above.
    Level3,
}

impl FixedTierBand {
    /// Returns the human-readable band description.
    pub fn label(&self) -> &'static str {
        match self {
            FixedTierBand::NoOrders => "No orders",
            FixedTierBand::Orders1To300 => "1-300 orders (2 per order)",
            FixedTierBand::Orders301To400 => "301-400 orders (3 per order)",
            FixedTierBand::Orders401To449 => "401-449 orders (4 per order)",
            FixedTierBand::Level1 => "Level 1 (450-519 orders)",
            FixedTierBand::Level2 => "Level 2 (520-559 orders)",
            FixedTierBand::Level3 => "Level 3 (560+ orders)",
        }
    }
}

/// Which bracket produced a row's pay.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AchievedTier;
///
/// let tier = AchievedTier::PlanTier { min_orders: 400 };
/// assert_eq!(tier.to_string(), "From 400 orders");
/// assert_eq!(AchievedTier::NoMatchingBracket.to_string(), "No matching bracket");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AchievedTier {
    /// The work type does not use tiers.
    #[default]
    NotApplicable,
    /// A band of the fixed progressive table.
    FixedBand {
        /// The matched band.
        band: FixedTierBand,
    },
    /// A tier from the package's tier table.
    PlanTier {
        /// The tier's qualification threshold.
        min_orders: u32,
    },
    /// A slab from the package's slab table.
    Slab {
        /// First order count in the slab.
        from_orders: u32,
        /// Last order count in the slab, `None` when open-ended.
        to_orders: Option<u32>,
    },
    /// Neither a tier nor a slab matched. A valid outcome, not an error.
    NoMatchingBracket,
}

impl AchievedTier {
    /// Returns true when no tier or slab matched.
    pub fn is_no_match(&self) -> bool {
        *self == AchievedTier::NoMatchingBracket
    }
}

impl fmt::Display for AchievedTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AchievedTier::NotApplicable => Ok(()),
            AchievedTier::FixedBand { band } => f.write_str(band.label()),
            AchievedTier::PlanTier { min_orders } => write!(f, "From {} orders", min_orders),
            AchievedTier::Slab {
                from_orders,
                to_orders: Some(upper),
            } if *upper > 0 => write!(f, "Slab ({}-{})", from_orders, upper),
            AchievedTier::Slab { from_orders, .. } => write!(f, "Slab ({}-above)", from_orders),
            AchievedTier::NoMatchingBracket => f.write_str("No matching bracket"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_applicable_has_empty_label() {
        assert_eq!(AchievedTier::NotApplicable.to_string(), "");
    }

    #[test]
    fn test_slab_labels() {
        let closed = AchievedTier::Slab {
            from_orders: 0,
            to_orders: Some(100),
        };
        let open = AchievedTier::Slab {
            from_orders: 101,
            to_orders: None,
        };
        assert_eq!(closed.to_string(), "Slab (0-100)");
        assert_eq!(open.to_string(), "Slab (101-above)");
    }

    #[test]
    fn test_fixed_band_label() {
        let tier = AchievedTier::FixedBand {
            band: FixedTierBand::Level2,
        };
        assert_eq!(tier.to_string(), "Level 2 (520-559 orders)");
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(AchievedTier::PlanTier { min_orders: 200 }).unwrap();
        assert_eq!(json["kind"], "plan_tier");
        assert_eq!(json["min_orders"], 200);

        let json = serde_json::to_value(AchievedTier::FixedBand {
            band: FixedTierBand::NoOrders,
        })
        .unwrap();
        assert_eq!(json["kind"], "fixed_band");
        assert_eq!(json["band"], "no_orders");
    }

    #[test]
    fn test_no_match_detection() {
        assert!(AchievedTier::NoMatchingBracket.is_no_match());
        assert!(!AchievedTier::NotApplicable.is_no_match());
    }
}
