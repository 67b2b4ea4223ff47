use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog_cases: usize,
    pub api_key_set: bool,
}

/// Health check endpoint. Always healthy; an empty catalog or a missing
/// credential only limits what the session can do.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_cases: state.catalog.len(),
        api_key_set: state.session.settings().has_credential(),
    })
}
