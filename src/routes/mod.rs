pub mod activity;
pub mod agents;
pub mod application;
pub mod cases;
pub mod health;
pub mod settings;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::api::MessageResponse;
use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Application form
        .route(
            "/application",
            get(application::get_application).put(application::replace_application),
        )
        .route("/application/fields", get(application::list_fields))
        .route(
            "/application/fields/:field",
            patch(application::set_field),
        )
        .route("/application/reset", post(application::reset_application))
        .route("/application/draft", get(application::get_draft))
        .route("/application/export/json", get(application::export_json))
        .route("/application/export/csv", get(application::export_csv))
        .route("/application/review", post(agents::review_application))
        // Case catalog
        .route("/cases", get(cases::list_cases))
        .route("/cases/:index/load", post(cases::load_case))
        // Settings and styles
        .route(
            "/settings",
            get(settings::get_settings).patch(settings::update_settings),
        )
        .route("/settings/style/random", post(settings::random_style))
        .route("/styles", get(settings::list_styles))
        .route("/styles/current", get(settings::current_style))
        // Activity
        .route("/activity", get(activity::list_activity))
        .route("/activity/summary", get(activity::activity_summary))
        // Agents
        .route("/agents", get(agents::list_agents))
        .route("/agents/:tool/run", post(agents::run_tool))
        .fallback(not_found)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        MessageResponse::with_code("Route not found", "NOT_FOUND"),
    )
}
