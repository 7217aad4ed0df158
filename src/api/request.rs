//! Request types for the time-entry engine API.
//!
//! Entries arrive in their raw record form (string timestamps, `null`
//! clock-out for an open shift) exactly as the external store persists them;
//! handlers parse them through the same gate the validator uses.

use serde::{Deserialize, Serialize};

use crate::models::{EntryRecord, PayRateConfig};

/// Request body for the `/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The entries of the accounting period (pre-filtered by the caller).
    pub entries: Vec<EntryRecord>,
    /// Optional rate configuration; the server default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_config: Option<PayRateConfig>,
}

/// Request body for the `/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    /// The candidate entry (new, or an edited version of an existing one).
    pub entry: EntryRecord,
    /// The collection the candidate is validated against.
    #[serde(default)]
    pub entries: Vec<EntryRecord>,
}

/// Request body for the `/merge` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeRequest {
    /// The local collection.
    pub base: Vec<EntryRecord>,
    /// The collection whose entries win on identity collision.
    pub incoming: Vec<EntryRecord>,
}
