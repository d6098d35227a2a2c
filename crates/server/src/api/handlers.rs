use axum::{extract::State, Json};
use batchline_core::Config;
use serde::Serialize;
use std::sync::Arc;

use crate::metrics;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<Config> {
    Json(state.config().clone())
}

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> String {
    metrics::collect_dynamic_metrics(&state);
    metrics::encode_metrics()
}
