//! Worker diagnostics handler.

use axum::{extract::State, Json};
use batchline_core::WorkerStatus;
use std::sync::Arc;

use crate::state::AppState;

/// Get the current worker status
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<WorkerStatus> {
    Json(state.dispatcher().worker_status())
}
