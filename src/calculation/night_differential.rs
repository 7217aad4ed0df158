//! Night-differential hours calculation.
//!
//! Measures the portion of a shift that falls inside the configured nightly
//! window. The window is a pair of local times of day and may wrap past
//! midnight, in which case every calendar day the shift touches contributes
//! two candidate segments: an evening segment running to the next midnight
//! and a morning segment starting at midnight.

use chrono::{Duration, NaiveTime};
use rust_decimal::Decimal;

use crate::models::{PayRateConfig, TimeEntry};

use super::day_span::{days_touched, hours_from_duration, overlap_duration};

/// Calculates the hours of a completed entry inside the night window.
///
/// An open entry contributes zero. Walks every local calendar day the shift
/// touches and accumulates the overlap between the shift and each day's
/// candidate night segment(s), so an overnight shift's pre-midnight and
/// post-midnight portions are attributed exactly once.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::calculate_night_diff_hours;
/// use timeclock_engine::models::{EntryRecord, PayRateConfig};
/// use rust_decimal::Decimal;
///
/// // Default window wraps: 18:00 -> 06:00.
/// let config = PayRateConfig::default();
/// let entry = EntryRecord {
///     id: "entry_001".to_string(),
///     clock_in: "2026-01-15T18:00:00".to_string(),
///     clock_out: Some("2026-01-16T06:00:00".to_string()),
///     notes: None,
/// }
/// .parse()
/// .unwrap();
///
/// assert_eq!(calculate_night_diff_hours(&entry, &config), Decimal::new(12, 0));
/// ```
pub fn calculate_night_diff_hours(entry: &TimeEntry, config: &PayRateConfig) -> Decimal {
    let clock_out = match entry.clock_out {
        Some(clock_out) => clock_out,
        None => return Decimal::ZERO,
    };
    let clock_in = entry.clock_in;

    let window_start = config.night_diff_start;
    let window_end = config.night_diff_end;
    let wraps = window_start > window_end;

    let mut total = Duration::zero();
    for day in days_touched(clock_in, clock_out) {
        let midnight = day.and_time(NaiveTime::MIN);
        let next_midnight = midnight + Duration::days(1);

        if wraps {
            // Evening segment: window start to the following midnight.
            total += overlap_duration(clock_in, clock_out, day.and_time(window_start), next_midnight);
            // Morning segment: midnight to window end.
            total += overlap_duration(clock_in, clock_out, midnight, day.and_time(window_end));
        } else {
            total += overlap_duration(
                clock_in,
                clock_out,
                day.and_time(window_start),
                day.and_time(window_end),
            );
        }
    }

    hours_from_duration(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_timestamp;

    fn make_entry(clock_in: &str, clock_out: Option<&str>) -> TimeEntry {
        TimeEntry {
            id: "entry_001".to_string(),
            clock_in: parse_timestamp(clock_in).unwrap(),
            clock_out: clock_out.map(|s| parse_timestamp(s).unwrap()),
            notes: None,
        }
    }

    fn window(start: (u32, u32), end: (u32, u32)) -> PayRateConfig {
        let mut config = PayRateConfig::default();
        config.night_diff_start = NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap();
        config.night_diff_end = NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap();
        config
    }

    /// ND-001: open entry contributes zero
    #[test]
    fn test_nd_001_open_entry_is_zero() {
        let entry = make_entry("2026-01-15T22:00:00", None);
        let config = PayRateConfig::default();
        assert_eq!(calculate_night_diff_hours(&entry, &config), Decimal::ZERO);
    }

    /// ND-002: non-wrapping window, shift covers it fully
    #[test]
    fn test_nd_002_non_wrapping_window_full_cover() {
        // Window 02:00-10:00, shift 00:00-12:00 -> exactly 8 night hours.
        let config = window((2, 0), (10, 0));
        let entry = make_entry("2026-01-15T00:00:00", Some("2026-01-15T12:00:00"));
        assert_eq!(
            calculate_night_diff_hours(&entry, &config),
            Decimal::new(8, 0)
        );
    }

    /// ND-003: wrapping window, full-window overnight shift
    #[test]
    fn test_nd_003_wrapping_window_overnight_shift() {
        // Window 18:00-06:00, shift 18:00 -> 06:00 next day -> 12 hours,
        // evening + morning segments with no double count and no gap.
        let config = window((18, 0), (6, 0));
        let entry = make_entry("2026-01-15T18:00:00", Some("2026-01-16T06:00:00"));
        assert_eq!(
            calculate_night_diff_hours(&entry, &config),
            Decimal::new(12, 0)
        );
    }

    /// ND-004: partial evening overlap against a wrapping window
    #[test]
    fn test_nd_004_partial_evening_overlap() {
        // Window 18:00-06:00, shift 17:00-19:00 -> exactly 1 hour.
        let config = window((18, 0), (6, 0));
        let entry = make_entry("2026-01-15T17:00:00", Some("2026-01-15T19:00:00"));
        assert_eq!(
            calculate_night_diff_hours(&entry, &config),
            Decimal::new(1, 0)
        );
    }

    /// ND-005: partial morning overlap against a wrapping window
    #[test]
    fn test_nd_005_partial_morning_overlap() {
        // Window 18:00-06:00, shift 05:00-09:00 -> exactly 1 hour.
        let config = window((18, 0), (6, 0));
        let entry = make_entry("2026-01-15T05:00:00", Some("2026-01-15T09:00:00"));
        assert_eq!(
            calculate_night_diff_hours(&entry, &config),
            Decimal::new(1, 0)
        );
    }

    /// ND-006: daytime shift entirely outside a wrapping window
    #[test]
    fn test_nd_006_daytime_shift_is_zero() {
        let config = window((18, 0), (6, 0));
        let entry = make_entry("2026-01-15T09:00:00", Some("2026-01-15T17:00:00"));
        assert_eq!(calculate_night_diff_hours(&entry, &config), Decimal::ZERO);
    }

    /// ND-007: multi-day shift accumulates one window per day
    #[test]
    fn test_nd_007_multi_day_shift() {
        // Window 18:00-06:00 (12h per day). Shift spans two full nights:
        // 2026-01-15 12:00 -> 2026-01-17 12:00 covers the 15th evening +
        // 16th morning (12h) and the 16th evening + 17th morning (12h).
        let config = window((18, 0), (6, 0));
        let entry = make_entry("2026-01-15T12:00:00", Some("2026-01-17T12:00:00"));
        assert_eq!(
            calculate_night_diff_hours(&entry, &config),
            Decimal::new(24, 0)
        );
    }

    /// ND-008: additivity over a partition of the interval
    #[test]
    fn test_nd_008_split_additivity() {
        let config = window((18, 0), (6, 0));
        let whole = make_entry("2026-01-15T17:00:00", Some("2026-01-16T07:00:00"));
        let first = make_entry("2026-01-15T17:00:00", Some("2026-01-15T23:30:00"));
        let second = make_entry("2026-01-15T23:30:00", Some("2026-01-16T07:00:00"));

        assert_eq!(
            calculate_night_diff_hours(&whole, &config),
            calculate_night_diff_hours(&first, &config)
                + calculate_night_diff_hours(&second, &config)
        );
    }

    /// ND-009: shift ending exactly at the window start is zero
    #[test]
    fn test_nd_009_ends_at_window_start() {
        let config = window((18, 0), (6, 0));
        let entry = make_entry("2026-01-15T12:00:00", Some("2026-01-15T18:00:00"));
        assert_eq!(calculate_night_diff_hours(&entry, &config), Decimal::ZERO);
    }

    /// ND-010: minute-granular window bounds
    #[test]
    fn test_nd_010_minute_granular_window() {
        // Window 22:30-05:45, shift 22:00 -> 06:00 next day.
        // Evening 22:30-24:00 = 1.5h, morning 00:00-05:45 = 5.75h.
        let config = window((22, 30), (5, 45));
        let entry = make_entry("2026-01-15T22:00:00", Some("2026-01-16T06:00:00"));
        assert_eq!(
            calculate_night_diff_hours(&entry, &config),
            Decimal::new(725, 2)
        );
    }
}
