//! Structural validity of a single entry record.

use crate::models::EntryRecord;

/// Returns `true` if the record is structurally valid.
///
/// All clauses must hold: non-empty `id`, parseable `clock_in`, and a
/// `clock_out` that, when present, parses and is strictly after `clock_in`.
/// `notes` typing is enforced by the record schema itself. There is no
/// partial success; any violation fails the whole check.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::EntryRecord;
/// use timeclock_engine::validation::is_structurally_valid;
///
/// let record = EntryRecord {
///     id: "entry_001".to_string(),
///     clock_in: "2026-01-15T09:00:00".to_string(),
///     clock_out: None,
///     notes: None,
/// };
/// assert!(is_structurally_valid(&record));
/// ```
pub fn is_structurally_valid(record: &EntryRecord) -> bool {
    record.parse().is_ok()
}
