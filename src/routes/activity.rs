use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;

/// GET /activity
pub async fn list_activity(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(DataResponse::new(state.session.activity()))
}

/// GET /activity/summary
pub async fn activity_summary(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(DataResponse::new(state.session.activity_summary()))
}
