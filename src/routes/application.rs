//! Application form routes
//!
//! Field edits, whole-record replacement, the rendered draft and the
//! JSON/CSV downloads.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::{Attachment, DataResponse};
use crate::app::AppState;
use crate::domain::application::{ApplicationError, ApplicationRecord, SetFieldRequest};
use crate::domain::choices::describe_fields;
use crate::error::{ApiError, ApiResult};
use crate::services::{draft, export};

/// GET /application
pub async fn get_application(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(DataResponse::new(state.session.application()))
}

/// GET /application/fields
///
/// Field names, kinds, documented options and current values.
pub async fn list_fields(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let record = state.session.application();
    Json(DataResponse::new(describe_fields(&record)))
}

/// PUT /application
///
/// Replace the whole record. The body must carry every field.
pub async fn replace_application(
    State(state): State<Arc<AppState>>,
    body: String,
) -> ApiResult<impl IntoResponse> {
    let record = ApplicationRecord::from_json(&body)?;
    state.session.load(record.clone());

    tracing::info!(doc_no = %record.doc_no, "Application record replaced");

    Ok(Json(DataResponse::new(record)))
}

/// PATCH /application/fields/:field
pub async fn set_field(
    State(state): State<Arc<AppState>>,
    Path(field): Path<String>,
    body: String,
) -> ApiResult<impl IntoResponse> {
    let req: SetFieldRequest = serde_json::from_str(&body).map_err(ApplicationError::from)?;
    let record = state.session.set_field(&field, req.value)?;

    tracing::debug!(field = %field, "Application field updated");

    Ok(Json(DataResponse::new(record)))
}

/// POST /application/reset
pub async fn reset_application(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let record = state.session.reset();
    tracing::info!("Application record reset to defaults");
    Json(DataResponse::new(record))
}

/// GET /application/draft
pub async fn get_draft(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let record = state.session.application();
    (
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        draft::render_draft(&record),
    )
}

/// GET /application/export/json
pub async fn export_json(State(state): State<Arc<AppState>>) -> ApiResult<Attachment> {
    let record = state.session.application();
    Ok(Attachment::new(
        export::export_file_name(&record, "json"),
        "application/json",
        export::to_json(&record)?,
    ))
}

/// GET /application/export/csv
pub async fn export_csv(State(state): State<Arc<AppState>>) -> ApiResult<Attachment> {
    let record = state.session.application();
    let body = export::to_csv_download(&record).map_err(|e| ApiError::Internal(e.into()))?;
    Ok(Attachment::new(
        export::export_file_name(&record, "csv"),
        "text/csv; charset=utf-8",
        body,
    ))
}
