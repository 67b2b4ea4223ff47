use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::error::{ApiError, ApiResult};

/// GET /cases
pub async fn list_cases(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(DataResponse::new(state.catalog.summaries()))
}

/// POST /cases/:index/load
///
/// Bulk-load a catalog case into the session. `-1` means nothing is selected.
pub async fn load_case(
    State(state): State<Arc<AppState>>,
    Path(index): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let index = usize::try_from(index)
        .map_err(|_| ApiError::BadRequest("No case selected".to_string()))?;

    let record = state
        .catalog
        .select(index)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Case {} not found", index)))?;

    state.session.load(record.clone());
    tracing::info!(index, name = %record.name_en, "Catalog case loaded");

    Ok(Json(DataResponse::new(record)))
}
