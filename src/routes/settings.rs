//! Session settings routes
//!
//! Language, theme, style, model and credential preferences, plus the
//! style catalog.

use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::settings::{UpdateUserSettingsRequest, UserSettingsResponse};
use crate::domain::styles::{random_style as pick_random_style, FLOWER_STYLES};
use crate::error::ApiResult;

/// GET /settings
pub async fn get_settings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let settings = state.session.settings();
    Json(DataResponse::new(UserSettingsResponse::new(
        &settings,
        state.session.credential_locked(),
    )))
}

/// PATCH /settings
///
/// Partial update. Changing the credential while it is provided by the
/// environment is forbidden.
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateUserSettingsRequest>,
) -> ApiResult<impl IntoResponse> {
    let credential_changed = req.api_key.is_some();
    let settings = state.session.update_settings(req)?;

    tracing::info!(
        language = ?settings.language,
        theme = ?settings.theme,
        style = %settings.style_name,
        model = %settings.model,
        credential_changed,
        "Session settings updated"
    );

    Ok(Json(DataResponse::new(UserSettingsResponse::new(
        &settings,
        state.session.credential_locked(),
    ))))
}

/// POST /settings/style/random
pub async fn random_style(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let picked = pick_random_style(&mut rand::thread_rng()).name;
    let settings = state.session.set_style(picked);

    tracing::debug!(style = picked, "Random style selected");

    Json(DataResponse::new(UserSettingsResponse::new(
        &settings,
        state.session.credential_locked(),
    )))
}

/// GET /styles
pub async fn list_styles() -> impl IntoResponse {
    Json(DataResponse::new(&FLOWER_STYLES[..]))
}

/// GET /styles/current
pub async fn current_style(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let style = *state.session.settings().current_style();
    Json(DataResponse::new(style))
}
