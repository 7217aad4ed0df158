//! HTTP request handlers for the time-entry engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_pay_summary;
use crate::merge::merge_entries;
use crate::models::{EntryRecord, TimeEntry};
use crate::validation::{has_no_overlap, is_single_open_consistent, is_structurally_valid};

use super::request::{MergeRequest, SummaryRequest, ValidateRequest};
use super::response::{ApiError, ApiErrorResponse, MergeResponse, ValidationVerdict};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summary", post(summary_handler))
        .route("/validate", post(validate_handler))
        .route("/merge", post(merge_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Builds the 400 response for a rejected request body.
fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Parses a batch of raw records into typed entries.
fn parse_entries(records: &[EntryRecord]) -> Result<Vec<TimeEntry>, ApiErrorResponse> {
    records
        .iter()
        .map(|record| record.parse().map_err(ApiErrorResponse::from))
        .collect()
}

/// Handler for the POST /summary endpoint.
///
/// Computes the tiered pay breakdown for the supplied accounting period.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let entries = match parse_entries(&request.entries) {
        Ok(entries) => entries,
        Err(error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %error.error.message,
                "Summary request contained an invalid entry"
            );
            return error.into_response();
        }
    };

    let config = request
        .rate_config
        .unwrap_or_else(|| state.rates().clone());
    let summary = calculate_pay_summary(&entries, &config);

    info!(
        correlation_id = %correlation_id,
        entry_count = entries.len(),
        total_hours = %summary.total_hours,
        estimated_pay = %summary.estimated_pay,
        "Summary computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(summary),
    )
        .into_response()
}

/// Handler for the POST /validate endpoint.
///
/// Runs the three validation checks on a candidate entry against a
/// collection and reports each verdict independently.
async fn validate_handler(
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let existing = match parse_entries(&request.entries) {
        Ok(entries) => entries,
        Err(error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %error.error.message,
                "Validation collection contained an invalid entry"
            );
            return error.into_response();
        }
    };

    let verdict = if is_structurally_valid(&request.entry) {
        // The structural check just passed, so the parse cannot fail.
        let candidate = match request.entry.parse() {
            Ok(candidate) => candidate,
            Err(err) => return ApiErrorResponse::from(err).into_response(),
        };
        let no_overlap = has_no_overlap(&candidate, &existing);
        let single_open = is_single_open_consistent(&candidate, &existing);
        ValidationVerdict {
            structurally_valid: true,
            no_overlap: Some(no_overlap),
            single_open_consistent: Some(single_open),
            valid: no_overlap && single_open,
        }
    } else {
        ValidationVerdict {
            structurally_valid: false,
            no_overlap: None,
            single_open_consistent: None,
            valid: false,
        }
    };

    info!(
        correlation_id = %correlation_id,
        entry_id = %request.entry.id,
        valid = verdict.valid,
        "Validation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(verdict),
    )
        .into_response()
}

/// Handler for the POST /merge endpoint.
///
/// Merges two entry collections with incoming-wins semantics and returns
/// the result sorted by clock-in.
async fn merge_handler(
    payload: Result<Json<MergeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing merge request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let base = match parse_entries(&request.base) {
        Ok(entries) => entries,
        Err(error) => return error.into_response(),
    };
    let incoming = match parse_entries(&request.incoming) {
        Ok(entries) => entries,
        Err(error) => return error.into_response(),
    };

    let base_count = base.len();
    let incoming_count = incoming.len();
    let merged = merge_entries(base, incoming);

    info!(
        correlation_id = %correlation_id,
        base_count,
        incoming_count,
        merged_count = merged.len(),
        "Merge completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(MergeResponse { entries: merged }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PayRateConfig, PaySummary};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        create_router(AppState::new(PayRateConfig::default()))
    }

    async fn post_json(router: Router, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_api_001_summary_returns_200() {
        let body = r#"{
            "entries": [
                {"id": "e1", "clock_in": "2026-01-13T08:00:00", "clock_out": "2026-01-13T17:00:00"}
            ]
        }"#;
        let (status, bytes) = post_json(create_test_router(), "/summary", body).await;

        assert_eq!(status, StatusCode::OK);
        let summary: PaySummary = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(summary.base_hours, Decimal::new(8, 0));
        assert_eq!(summary.ot_hours, Decimal::new(1, 0));
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let (status, bytes) = post_json(create_test_router(), "/summary", "{invalid json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_bad_timestamp_returns_400() {
        let body = r#"{"entries": [{"id": "e1", "clock_in": "whenever"}]}"#;
        let (status, bytes) = post_json(create_test_router(), "/summary", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_TIMESTAMP");
    }

    #[tokio::test]
    async fn test_api_004_validate_reports_independent_verdicts() {
        let body = r#"{
            "entry": {"id": "b", "clock_in": "2026-01-15T09:30:00", "clock_out": "2026-01-15T11:00:00"},
            "entries": [
                {"id": "a", "clock_in": "2026-01-15T08:00:00", "clock_out": "2026-01-15T10:00:00"}
            ]
        }"#;
        let (status, bytes) = post_json(create_test_router(), "/validate", body).await;

        assert_eq!(status, StatusCode::OK);
        let verdict: ValidationVerdict = serde_json::from_slice(&bytes).unwrap();
        assert!(verdict.structurally_valid);
        assert_eq!(verdict.no_overlap, Some(false));
        assert_eq!(verdict.single_open_consistent, Some(true));
        assert!(!verdict.valid);
    }

    #[tokio::test]
    async fn test_api_005_merge_incoming_wins() {
        let body = r#"{
            "base": [
                {"id": "a", "clock_in": "2026-01-15T09:00:00", "clock_out": "2026-01-15T17:00:00", "notes": "stale"}
            ],
            "incoming": [
                {"id": "a", "clock_in": "2026-01-15T09:00:00", "clock_out": "2026-01-15T17:30:00", "notes": "fresh"}
            ]
        }"#;
        let (status, bytes) = post_json(create_test_router(), "/merge", body).await;

        assert_eq!(status, StatusCode::OK);
        let response: MergeResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(response.entries.len(), 1);
        assert_eq!(response.entries[0].notes.as_deref(), Some("fresh"));
    }
}
