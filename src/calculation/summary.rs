//! Pay-summary engine.
//!
//! Groups a collection of entries by local calendar day, applies the daily
//! and weekly overtime/penalty-overtime tiers with spillover, and combines
//! the result with night and Sunday hours and the rate table.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{PayRateConfig, PaySummary, TimeEntry};

use super::night_differential::calculate_night_diff_hours;
use super::shift_hours::calculate_shift_hours;
use super::sunday_hours::calculate_sunday_hours;

/// Calculates the tiered pay breakdown for a collection of entries.
///
/// The caller is responsible for pre-filtering `entries` to the desired
/// accounting period (typically one calendar week); the weekly thresholds
/// apply to whatever set is passed. Open entries are excluded entirely.
///
/// Tier arithmetic, in order:
/// 1. per-day split at the daily overtime and penalty-overtime thresholds,
/// 2. weekly overtime spillover out of base hours,
/// 3. weekly penalty-overtime spillover out of overtime hours,
///
/// then pay lines from the rate table. The night differential is a flat
/// per-hour amount; the Sunday premium is a percentage of the base rate.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::calculate_pay_summary;
/// use timeclock_engine::models::{EntryRecord, PayRateConfig};
/// use rust_decimal::Decimal;
///
/// let entries = vec![
///     EntryRecord {
///         id: "entry_001".to_string(),
///         clock_in: "2026-01-13T08:00:00".to_string(),
///         clock_out: Some("2026-01-13T17:00:00".to_string()),
///         notes: None,
///     }
///     .parse()
///     .unwrap(),
/// ];
///
/// // A single 9-hour day: 8 base + 1 overtime under the default thresholds.
/// let summary = calculate_pay_summary(&entries, &PayRateConfig::default());
/// assert_eq!(summary.base_hours, Decimal::new(8, 0));
/// assert_eq!(summary.ot_hours, Decimal::new(1, 0));
/// ```
pub fn calculate_pay_summary(entries: &[TimeEntry], config: &PayRateConfig) -> PaySummary {
    let mut by_day: BTreeMap<NaiveDate, Vec<&TimeEntry>> = BTreeMap::new();
    for entry in entries.iter().filter(|e| !e.is_open()) {
        by_day.entry(entry.clock_in.date()).or_default().push(entry);
    }

    let mut summary = PaySummary::zero();

    for day_entries in by_day.values() {
        let day_total: Decimal = day_entries
            .iter()
            .map(|entry| calculate_shift_hours(entry))
            .sum();

        summary.base_hours += day_total.min(config.daily_overtime_threshold_hours);
        summary.ot_hours += (day_total.min(config.daily_penalty_ot_threshold_hours)
            - config.daily_overtime_threshold_hours)
            .max(Decimal::ZERO);
        summary.penalty_ot_hours +=
            (day_total - config.daily_penalty_ot_threshold_hours).max(Decimal::ZERO);

        for entry in day_entries {
            summary.night_diff_hours += calculate_night_diff_hours(entry, config);
            summary.sunday_hours += calculate_sunday_hours(entry);
        }
    }

    // Weekly overtime spillover must run before the penalty spillover.
    if summary.base_hours > config.weekly_overtime_threshold_hours {
        let excess = summary.base_hours - config.weekly_overtime_threshold_hours;
        summary.base_hours -= excess;
        summary.ot_hours += excess;
    }
    if summary.base_hours + summary.ot_hours > config.weekly_penalty_ot_threshold_hours {
        let excess =
            summary.base_hours + summary.ot_hours - config.weekly_penalty_ot_threshold_hours;
        summary.ot_hours -= excess;
        summary.penalty_ot_hours += excess;
    }

    summary.total_hours = summary.base_hours + summary.ot_hours + summary.penalty_ot_hours;

    let rate = config.base_hourly_rate;
    summary.base_pay = summary.base_hours * rate;
    summary.ot_pay = summary.ot_hours * rate * config.overtime_multiplier;
    summary.penalty_ot_pay =
        summary.penalty_ot_hours * rate * config.penalty_overtime_multiplier;
    summary.night_diff_pay = summary.night_diff_hours * config.night_differential_rate;
    summary.sunday_premium_pay =
        summary.sunday_hours * rate * (config.sunday_premium_percent / Decimal::new(100, 0));
    summary.estimated_pay = summary.base_pay
        + summary.ot_pay
        + summary.penalty_ot_pay
        + summary.night_diff_pay
        + summary.sunday_premium_pay;

    summary
}
