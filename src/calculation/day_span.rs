//! Local-calendar day walking and interval intersection.
//!
//! The night-differential and Sunday calculators both attribute portions of
//! a shift to candidate segments anchored to local calendar days. This
//! module provides the shared walk over the days a shift touches and the
//! half-open interval intersection used to measure each portion.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

/// Returns the local calendar days touched by the half-open interval
/// `[start, end)`, in chronological order.
///
/// The walk begins on the day containing `start` and steps one day at a
/// time until past `end`, so a shift that crosses midnight yields both the
/// day it began on and the day it ended on.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::days_touched;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let start = NaiveDateTime::parse_from_str("2026-01-17 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-18 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let days: Vec<NaiveDate> = days_touched(start, end).collect();
/// assert_eq!(days.len(), 2);
/// assert_eq!(days[0], NaiveDate::from_ymd_opt(2026, 1, 17).unwrap());
/// assert_eq!(days[1], NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
/// ```
pub fn days_touched(start: NaiveDateTime, end: NaiveDateTime) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start.date()), |day| Some(*day + Duration::days(1)))
        .take_while(move |day| day.and_time(NaiveTime::MIN) < end)
}

/// Returns the overlap between two half-open intervals as a duration.
///
/// Never negative: disjoint or merely touching intervals yield zero.
pub fn overlap_duration(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> Duration {
    let start = a_start.max(b_start);
    let end = a_end.min(b_end);
    if end > start {
        end - start
    } else {
        Duration::zero()
    }
}

/// Converts a duration to decimal hours.
pub fn hours_from_duration(duration: Duration) -> Decimal {
    Decimal::new(duration.num_seconds(), 0) / Decimal::new(3600, 0)
}
