//! Time-entry model and its raw record form.
//!
//! This module defines the [`TimeEntry`] struct used by the calculators and
//! validators, and the [`EntryRecord`] struct matching the persisted
//! representation (string timestamps, `null` clock-out for an open shift).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Timestamp formats accepted by [`parse_timestamp`], tried in order.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// Parses a timestamp string into a local wall-clock datetime.
///
/// Accepts `2026-01-15T09:00:00` (optionally with fractional seconds),
/// `2026-01-15 09:00:00`, and RFC 3339. An explicit UTC offset is dropped:
/// all calendar decisions in the engine (day grouping, Sunday detection,
/// night-window placement) are local wall-clock decisions.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::parse_timestamp;
///
/// let parsed = parse_timestamp("2026-01-15T09:00:00").unwrap();
/// assert_eq!(parsed.to_string(), "2026-01-15 09:00:00");
///
/// assert!(parse_timestamp("not-a-date").is_err());
/// ```
pub fn parse_timestamp(value: &str) -> EngineResult<NaiveDateTime> {
    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_local());
    }
    Err(EngineError::InvalidTimestamp {
        value: value.to_string(),
    })
}

/// Represents a single clock-in/clock-out record.
///
/// An entry with no `clock_out` is *open*: the shift is still in progress.
/// The engine never mutates an entry; it only reads collections of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The clock-in time (local wall clock).
    pub clock_in: NaiveDateTime,
    /// The clock-out time, or `None` while the shift is in progress.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
    /// Optional free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TimeEntry {
    /// Returns `true` if the entry has no clock-out yet.
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }
}

/// The raw persisted/wire form of a time entry.
///
/// Timestamps are strings exactly as stored; `clock_out` is `null` or absent
/// for an open shift. [`EntryRecord::parse`] converts a record into a
/// [`TimeEntry`], enforcing the structural invariants along the way.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::EntryRecord;
///
/// let record = EntryRecord {
///     id: "entry_001".to_string(),
///     clock_in: "2026-01-15T09:00:00".to_string(),
///     clock_out: Some("2026-01-15T17:00:00".to_string()),
///     notes: None,
/// };
/// let entry = record.parse().unwrap();
/// assert!(!entry.is_open());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Unique identifier for the entry.
    pub id: String,
    /// The clock-in timestamp string.
    pub clock_in: String,
    /// The clock-out timestamp string, or `None` for an open shift.
    #[serde(default)]
    pub clock_out: Option<String>,
    /// Optional free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl EntryRecord {
    /// Parses this record into a typed [`TimeEntry`].
    ///
    /// # Errors
    ///
    /// Returns an error if the `id` is empty, either timestamp fails to
    /// parse, or `clock_out` is not strictly after `clock_in`.
    pub fn parse(&self) -> EngineResult<TimeEntry> {
        if self.id.is_empty() {
            return Err(EngineError::InvalidEntry {
                entry_id: self.id.clone(),
                message: "id must be non-empty".to_string(),
            });
        }

        let clock_in = parse_timestamp(&self.clock_in)?;
        let clock_out = match &self.clock_out {
            Some(raw) => {
                let parsed = parse_timestamp(raw)?;
                if parsed <= clock_in {
                    return Err(EngineError::InvalidEntry {
                        entry_id: self.id.clone(),
                        message: "clock-out must be strictly after clock-in".to_string(),
                    });
                }
                Some(parsed)
            }
            None => None,
        };

        Ok(TimeEntry {
            id: self.id.clone(),
            clock_in,
            clock_out,
            notes: self.notes.clone(),
        })
    }
}

impl From<&TimeEntry> for EntryRecord {
    fn from(entry: &TimeEntry) -> Self {
        EntryRecord {
            id: entry.id.clone(),
            clock_in: entry.clock_in.format("%Y-%m-%dT%H:%M:%S").to_string(),
            clock_out: entry
                .clock_out
                .map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string()),
            notes: entry.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(id: &str, clock_in: &str, clock_out: Option<&str>) -> EntryRecord {
        EntryRecord {
            id: id.to_string(),
            clock_in: clock_in.to_string(),
            clock_out: clock_out.map(|s| s.to_string()),
            notes: None,
        }
    }

    /// TE-001: a closed record parses to a closed entry
    #[test]
    fn test_te_001_closed_record_parses() {
        let record = make_record("e1", "2026-01-15T09:00:00", Some("2026-01-15T17:00:00"));
        let entry = record.parse().unwrap();
        assert_eq!(entry.id, "e1");
        assert!(!entry.is_open());
    }

    /// TE-002: a record with no clock-out parses to an open entry
    #[test]
    fn test_te_002_open_record_parses() {
        let record = make_record("e1", "2026-01-15T09:00:00", None);
        let entry = record.parse().unwrap();
        assert!(entry.is_open());
    }

    /// TE-003: empty id is rejected
    #[test]
    fn test_te_003_empty_id_rejected() {
        let record = make_record("", "2026-01-15T09:00:00", None);
        assert!(matches!(
            record.parse(),
            Err(EngineError::InvalidEntry { .. })
        ));
    }

    /// TE-004: unparseable clock-in is rejected
    #[test]
    fn test_te_004_bad_clock_in_rejected() {
        let record = make_record("e1", "yesterday", None);
        assert!(matches!(
            record.parse(),
            Err(EngineError::InvalidTimestamp { .. })
        ));
    }

    /// TE-005: inverted interval is rejected
    #[test]
    fn test_te_005_inverted_interval_rejected() {
        let record = make_record("e1", "2026-01-15T17:00:00", Some("2026-01-15T09:00:00"));
        assert!(matches!(
            record.parse(),
            Err(EngineError::InvalidEntry { .. })
        ));
    }

    /// TE-006: zero-duration interval is rejected (strictly after)
    #[test]
    fn test_te_006_zero_duration_rejected() {
        let record = make_record("e1", "2026-01-15T09:00:00", Some("2026-01-15T09:00:00"));
        assert!(record.parse().is_err());
    }

    #[test]
    fn test_space_separated_format_accepted() {
        let record = make_record("e1", "2026-01-15 09:00:00", Some("2026-01-15 17:00:00"));
        assert!(record.parse().is_ok());
    }

    #[test]
    fn test_rfc3339_offset_dropped_to_wall_clock() {
        let parsed = parse_timestamp("2026-01-15T09:00:00+11:00").unwrap();
        assert_eq!(parsed.to_string(), "2026-01-15 09:00:00");
    }

    #[test]
    fn test_fractional_seconds_accepted() {
        let parsed = parse_timestamp("2026-01-15T09:00:00.500").unwrap();
        assert_eq!(parsed.and_utc().timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_entry_serialization_round_trip() {
        let entry = TimeEntry {
            id: "entry_001".to_string(),
            clock_in: parse_timestamp("2026-01-15T09:00:00").unwrap(),
            clock_out: Some(parse_timestamp("2026-01-15T17:00:00").unwrap()),
            notes: Some("till close".to_string()),
        };

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: TimeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }

    #[test]
    fn test_null_clock_out_deserializes_as_open() {
        let json = r#"{
            "id": "entry_001",
            "clock_in": "2026-01-15T09:00:00",
            "clock_out": null
        }"#;
        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_open());
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn test_absent_clock_out_deserializes_as_open() {
        let json = r#"{"id": "entry_001", "clock_in": "2026-01-15T09:00:00"}"#;
        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_open());
    }

    #[test]
    fn test_record_from_entry_round_trips() {
        let record = make_record("e1", "2026-01-15T09:00:00", Some("2026-01-16T01:30:00"));
        let entry = record.parse().unwrap();
        let back = EntryRecord::from(&entry);
        assert_eq!(back, record);
    }
}
