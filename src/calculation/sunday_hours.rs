//! Sunday hours calculation.
//!
//! Measures the portion of a shift that falls on a local Sunday. Uses the
//! same day walk as the night-differential calculator, with the whole day
//! as the candidate segment.

use chrono::{Datelike, Duration, NaiveTime, Weekday};
use rust_decimal::Decimal;

use crate::models::TimeEntry;

use super::day_span::{days_touched, hours_from_duration, overlap_duration};

/// Calculates the hours of a completed entry that fall on local Sundays.
///
/// An open entry contributes zero. For every local calendar day the shift
/// touches, the whole day `[midnight, next midnight)` is the candidate
/// segment, included only when the day is a Sunday.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::calculate_sunday_hours;
/// use timeclock_engine::models::EntryRecord;
/// use rust_decimal::Decimal;
///
/// // 2026-01-17 is a Saturday; the shift runs into Sunday the 18th.
/// let entry = EntryRecord {
///     id: "entry_001".to_string(),
///     clock_in: "2026-01-17T22:00:00".to_string(),
///     clock_out: Some("2026-01-18T06:00:00".to_string()),
///     notes: None,
/// }
/// .parse()
/// .unwrap();
///
/// assert_eq!(calculate_sunday_hours(&entry), Decimal::new(6, 0));
/// ```
pub fn calculate_sunday_hours(entry: &TimeEntry) -> Decimal {
    let clock_out = match entry.clock_out {
        Some(clock_out) => clock_out,
        None => return Decimal::ZERO,
    };
    let clock_in = entry.clock_in;

    let mut total = Duration::zero();
    for day in days_touched(clock_in, clock_out) {
        if day.weekday() != Weekday::Sun {
            continue;
        }
        let midnight = day.and_time(NaiveTime::MIN);
        total += overlap_duration(clock_in, clock_out, midnight, midnight + Duration::days(1));
    }

    hours_from_duration(total)
}
