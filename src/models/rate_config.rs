//! Pay-rate configuration.
//!
//! This module defines the [`PayRateConfig`] struct supplied by the caller
//! (or loaded from a YAML file via [`crate::config::RateConfigLoader`]).
//! Every field carries a default so a partial configuration file is
//! completed rather than rejected.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Serde helper for `HH:MM` time-of-day fields.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT)
            .map_err(|_| D::Error::custom(format!("invalid HH:MM time: {raw}")))
    }
}

fn default_base_hourly_rate() -> Decimal {
    Decimal::new(2500, 2) // 25.00
}

fn default_overtime_multiplier() -> Decimal {
    Decimal::new(15, 1) // 1.5
}

fn default_penalty_overtime_multiplier() -> Decimal {
    Decimal::new(20, 1) // 2.0
}

fn default_night_differential_rate() -> Decimal {
    Decimal::new(250, 2) // 2.50 per hour
}

fn default_sunday_premium_percent() -> Decimal {
    Decimal::new(25, 0)
}

fn default_daily_overtime_threshold() -> Decimal {
    Decimal::new(8, 0)
}

fn default_daily_penalty_ot_threshold() -> Decimal {
    Decimal::new(10, 0)
}

fn default_weekly_overtime_threshold() -> Decimal {
    Decimal::new(40, 0)
}

fn default_weekly_penalty_ot_threshold() -> Decimal {
    Decimal::new(56, 0)
}

fn default_night_diff_start() -> NaiveTime {
    NaiveTime::from_hms_opt(18, 0, 0).expect("valid time of day")
}

fn default_night_diff_end() -> NaiveTime {
    NaiveTime::from_hms_opt(6, 0, 0).expect("valid time of day")
}

/// The rate table and thresholds used for pay computation.
///
/// Read-only to the engine. The night-differential window is a pair of local
/// times of day and may wrap past midnight (start later than end), in which
/// case each calendar day contributes an evening and a morning segment.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::PayRateConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayRateConfig::default();
/// assert_eq!(config.daily_overtime_threshold_hours, Decimal::new(8, 0));
/// assert!(config.night_diff_start > config.night_diff_end); // wraps midnight
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRateConfig {
    /// The base hourly rate.
    #[serde(default = "default_base_hourly_rate")]
    pub base_hourly_rate: Decimal,
    /// Multiplier applied to overtime hours.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
    /// Multiplier applied to penalty-overtime hours.
    #[serde(default = "default_penalty_overtime_multiplier")]
    pub penalty_overtime_multiplier: Decimal,
    /// Flat amount added per hour worked inside the night window.
    #[serde(default = "default_night_differential_rate")]
    pub night_differential_rate: Decimal,
    /// Premium for Sunday hours, as a percentage of the base rate.
    #[serde(default = "default_sunday_premium_percent")]
    pub sunday_premium_percent: Decimal,
    /// Daily hours beyond which overtime starts.
    #[serde(default = "default_daily_overtime_threshold")]
    pub daily_overtime_threshold_hours: Decimal,
    /// Daily hours beyond which penalty overtime starts.
    #[serde(default = "default_daily_penalty_ot_threshold")]
    pub daily_penalty_ot_threshold_hours: Decimal,
    /// Weekly hours beyond which base hours spill into overtime.
    #[serde(default = "default_weekly_overtime_threshold")]
    pub weekly_overtime_threshold_hours: Decimal,
    /// Weekly hours beyond which overtime hours spill into penalty overtime.
    #[serde(default = "default_weekly_penalty_ot_threshold")]
    pub weekly_penalty_ot_threshold_hours: Decimal,
    /// Start of the nightly differential window (local time of day).
    #[serde(default = "default_night_diff_start", with = "hhmm")]
    pub night_diff_start: NaiveTime,
    /// End of the nightly differential window (local time of day).
    #[serde(default = "default_night_diff_end", with = "hhmm")]
    pub night_diff_end: NaiveTime,
}

impl Default for PayRateConfig {
    fn default() -> Self {
        Self {
            base_hourly_rate: default_base_hourly_rate(),
            overtime_multiplier: default_overtime_multiplier(),
            penalty_overtime_multiplier: default_penalty_overtime_multiplier(),
            night_differential_rate: default_night_differential_rate(),
            sunday_premium_percent: default_sunday_premium_percent(),
            daily_overtime_threshold_hours: default_daily_overtime_threshold(),
            daily_penalty_ot_threshold_hours: default_daily_penalty_ot_threshold(),
            weekly_overtime_threshold_hours: default_weekly_overtime_threshold(),
            weekly_penalty_ot_threshold_hours: default_weekly_penalty_ot_threshold(),
            night_diff_start: default_night_diff_start(),
            night_diff_end: default_night_diff_end(),
        }
    }
}
