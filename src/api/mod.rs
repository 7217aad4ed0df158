//! HTTP API module for the time-entry engine.
//!
//! This module provides the REST endpoints for validating entries, merging
//! collections, and computing pay summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{MergeRequest, SummaryRequest, ValidateRequest};
pub use response::{ApiError, MergeResponse, ValidationVerdict};
pub use state::AppState;
