//! Pay-summary output model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The tiered pay breakdown produced by the engine.
///
/// Hour buckets (`base_hours`, `ot_hours`, `penalty_ot_hours`) partition the
/// closed worked time; `night_diff_hours` and `sunday_hours` overlay the same
/// time and never reduce the buckets. Pay fields are the hour fields priced
/// with the rate configuration.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::PaySummary;
/// use rust_decimal::Decimal;
///
/// let summary = PaySummary::zero();
/// assert_eq!(summary.estimated_pay, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySummary {
    /// Total closed hours across all tiers.
    pub total_hours: Decimal,
    /// Hours paid at the base rate.
    pub base_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub ot_hours: Decimal,
    /// Hours paid at the penalty-overtime rate.
    pub penalty_ot_hours: Decimal,
    /// Hours worked inside the night-differential window.
    pub night_diff_hours: Decimal,
    /// Hours worked on local Sundays.
    pub sunday_hours: Decimal,
    /// Pay for base hours.
    pub base_pay: Decimal,
    /// Pay for overtime hours.
    pub ot_pay: Decimal,
    /// Pay for penalty-overtime hours.
    pub penalty_ot_pay: Decimal,
    /// Flat night-differential addition.
    pub night_diff_pay: Decimal,
    /// Sunday premium addition.
    pub sunday_premium_pay: Decimal,
    /// Sum of all pay components.
    pub estimated_pay: Decimal,
}

impl PaySummary {
    /// Returns an all-zero summary, the result for an empty entry set.
    pub fn zero() -> Self {
        Self {
            total_hours: Decimal::ZERO,
            base_hours: Decimal::ZERO,
            ot_hours: Decimal::ZERO,
            penalty_ot_hours: Decimal::ZERO,
            night_diff_hours: Decimal::ZERO,
            sunday_hours: Decimal::ZERO,
            base_pay: Decimal::ZERO,
            ot_pay: Decimal::ZERO,
            penalty_ot_pay: Decimal::ZERO,
            night_diff_pay: Decimal::ZERO,
            sunday_premium_pay: Decimal::ZERO,
            estimated_pay: Decimal::ZERO,
        }
    }
}
