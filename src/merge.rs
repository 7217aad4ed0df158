//! Entry-collection merging.
//!
//! Used for multi-device reconciliation and bulk import: two collections are
//! deduplicated by entry identity, with the incoming side taking precedence.
//! This is a last-writer-wins policy with no conflict detection; adequate
//! for single-user, low-write-concurrency use.

use std::collections::HashMap;

use crate::models::TimeEntry;

/// Merges two entry collections by identity.
///
/// Base entries are inserted first, then incoming entries, so an incoming
/// entry replaces a base entry with the same `id`. The result is sorted
/// ascending by clock-in. No validation is performed here; validity is the
/// caller's responsibility before or after merging.
///
/// # Example
///
/// ```
/// use timeclock_engine::merge::merge_entries;
/// use timeclock_engine::models::EntryRecord;
///
/// fn entry(id: &str, clock_in: &str, notes: Option<&str>) -> timeclock_engine::models::TimeEntry {
///     EntryRecord {
///         id: id.to_string(),
///         clock_in: clock_in.to_string(),
///         clock_out: None,
///         notes: notes.map(|s| s.to_string()),
///     }
///     .parse()
///     .unwrap()
/// }
///
/// let base = vec![entry("a", "2026-01-15T09:00:00", Some("local copy"))];
/// let incoming = vec![entry("a", "2026-01-15T09:00:00", Some("synced copy"))];
///
/// let merged = merge_entries(base, incoming);
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].notes.as_deref(), Some("synced copy"));
/// ```
pub fn merge_entries(base: Vec<TimeEntry>, incoming: Vec<TimeEntry>) -> Vec<TimeEntry> {
    let mut by_id: HashMap<String, TimeEntry> = HashMap::new();
    for entry in base.into_iter().chain(incoming) {
        by_id.insert(entry.id.clone(), entry);
    }

    let mut merged: Vec<TimeEntry> = by_id.into_values().collect();
    merged.sort_by(|a, b| a.clock_in.cmp(&b.clock_in));
    merged
}
