//! Shift duration calculation.

use rust_decimal::Decimal;

use crate::models::TimeEntry;

use super::day_span::hours_from_duration;

/// Calculates the duration of a completed entry in decimal hours.
///
/// An open entry (no clock-out) contributes zero hours; it is not an error.
/// The result is fractional, not rounded.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::calculate_shift_hours;
/// use timeclock_engine::models::EntryRecord;
/// use rust_decimal::Decimal;
///
/// let entry = EntryRecord {
///     id: "entry_001".to_string(),
///     clock_in: "2026-01-15T09:00:00".to_string(),
///     clock_out: Some("2026-01-15T17:30:00".to_string()),
///     notes: None,
/// }
/// .parse()
/// .unwrap();
///
/// assert_eq!(calculate_shift_hours(&entry), Decimal::new(85, 1)); // 8.5
/// ```
pub fn calculate_shift_hours(entry: &TimeEntry) -> Decimal {
    match entry.clock_out {
        Some(clock_out) => hours_from_duration(clock_out - entry.clock_in),
        None => Decimal::ZERO,
    }
}
