//! Temporal-consistency checks across a collection.

use crate::models::TimeEntry;

/// Returns `true` if two entries' intervals overlap.
///
/// An entry with no clock-out is treated as extending to positive infinity.
/// Strict comparison: intervals that merely touch at a boundary are
/// adjacent, not overlapping.
fn intervals_overlap(a: &TimeEntry, b: &TimeEntry) -> bool {
    let a_starts_before_b_ends = match b.clock_out {
        Some(b_end) => a.clock_in < b_end,
        None => true,
    };
    let b_starts_before_a_ends = match a.clock_out {
        Some(a_end) => b.clock_in < a_end,
        None => true,
    };
    a_starts_before_b_ends && b_starts_before_a_ends
}

/// Returns `true` if `entry` overlaps no other entry in the collection.
///
/// `entry` itself is excluded from the comparison by identity, so the check
/// works both for a new entry and for an edited version of an existing one.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::{EntryRecord, TimeEntry};
/// use timeclock_engine::validation::has_no_overlap;
///
/// fn entry(id: &str, clock_in: &str, clock_out: Option<&str>) -> TimeEntry {
///     EntryRecord {
///         id: id.to_string(),
///         clock_in: clock_in.to_string(),
///         clock_out: clock_out.map(|s| s.to_string()),
///         notes: None,
///     }
///     .parse()
///     .unwrap()
/// }
///
/// let existing = vec![entry("a", "2026-01-15T08:00:00", Some("2026-01-15T10:00:00"))];
///
/// // Touching at 10:00 is adjacency, not overlap.
/// let adjacent = entry("b", "2026-01-15T10:00:00", Some("2026-01-15T12:00:00"));
/// assert!(has_no_overlap(&adjacent, &existing));
///
/// let clashing = entry("c", "2026-01-15T09:30:00", Some("2026-01-15T11:00:00"));
/// assert!(!has_no_overlap(&clashing, &existing));
/// ```
pub fn has_no_overlap(entry: &TimeEntry, entries: &[TimeEntry]) -> bool {
    entries
        .iter()
        .filter(|other| other.id != entry.id)
        .all(|other| !intervals_overlap(entry, other))
}

/// Returns `true` if `entry` being open is consistent with the collection.
///
/// A closed entry is trivially consistent. An open entry must be the
/// chronologically last one: the check fails if any other entry clocks in
/// strictly later.
pub fn is_single_open_consistent(entry: &TimeEntry, entries: &[TimeEntry]) -> bool {
    if entry.clock_out.is_some() {
        return true;
    }
    entries
        .iter()
        .filter(|other| other.id != entry.id)
        .all(|other| other.clock_in <= entry.clock_in)
}
