//! Core data models for the time-entry engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pay_summary;
mod rate_config;
mod time_entry;

pub use pay_summary::PaySummary;
pub use rate_config::PayRateConfig;
pub use time_entry::{EntryRecord, TimeEntry, parse_timestamp};
