//! Submission and result retrieval handlers.
//!
//! Status mapping for result polling:
//! - `Pending` -> 428 (retry later)
//! - `Ready` with a success result -> 200 with the stored body
//! - `Ready` with a failure marker -> the carried HTTP status, or 500
//! - `Deleted` / `NotFound` -> 404, distinguished by the `Info` header

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use batchline_core::{TicketResult, TicketStatus};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for result retrieval
#[derive(Debug, Deserialize)]
pub struct ResultParams {
    #[serde(rename = "request-id")]
    pub request_id: String,
}

/// Response for a submission
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    #[serde(rename = "request-id")]
    pub request_id: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct RequestErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Submit a new request
///
/// The raw body is the preprocessed payload; the ticket id comes back
/// immediately, processing happens in the background.
pub async fn submit_request(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Json<SubmitResponse> {
    let request_id = state.dispatcher().handle_incoming(body.to_vec());
    Json(SubmitResponse { request_id })
}

/// Poll for the result of a submitted request
pub async fn get_result(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResultParams>,
) -> Response {
    let (status, result) = state.dispatcher().result(&params.request_id);

    match status {
        TicketStatus::NotFound => info_response(StatusCode::NOT_FOUND, "Id never existed."),
        TicketStatus::Deleted => info_response(StatusCode::NOT_FOUND, "Result deleted."),
        TicketStatus::Pending => info_response(
            StatusCode::PRECONDITION_REQUIRED,
            "Processing not finished yet.",
        ),
        TicketStatus::Ready => match result {
            Some(TicketResult::Ok { body }) => Json(body).into_response(),
            Some(TicketResult::Failed { error, status_code }) => {
                let code = status_code
                    .and_then(|c| StatusCode::from_u16(c).ok())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (code, Json(RequestErrorResponse { error })).into_response()
            }
            // Ready implies a stored result; a missing one is a server bug.
            None => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RequestErrorResponse {
                    error: "result missing for ready ticket".to_string(),
                }),
            )
                .into_response(),
        },
    }
}

/// Delete a stored result
pub async fn delete_result(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    if state.dispatcher().delete_result(&id) {
        return Json(SubmitResponse { request_id: id }).into_response();
    }

    match state.dispatcher().status(&id) {
        TicketStatus::NotFound => info_response(StatusCode::NOT_FOUND, "Id never existed."),
        // Known ticket without a deletable result: still pending or already
        // deleted.
        _ => (
            StatusCode::CONFLICT,
            Json(RequestErrorResponse {
                error: format!("No stored result to delete for request {}", id),
            }),
        )
            .into_response(),
    }
}

/// Build an empty response with an informational header, the way the
/// boundary reports non-200 poll outcomes.
fn info_response(code: StatusCode, info: &'static str) -> Response {
    let mut response = code.into_response();
    response
        .headers_mut()
        .insert("info", HeaderValue::from_static(info));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_response_sets_header_and_code() {
        let response = info_response(StatusCode::NOT_FOUND, "Id never existed.");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get("info").unwrap(),
            &HeaderValue::from_static("Id never existed.")
        );
    }

    #[test]
    fn test_submit_response_uses_request_id_key() {
        let response = SubmitResponse {
            request_id: "abc".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"request-id":"abc"}"#);
    }
}
