use axum::{
    http::{HeaderName, HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::Settings;
use crate::middleware::{request_id_layer, X_REQUEST_ID};
use crate::routes;
use crate::services::{AiClient, CaseCatalog};
use crate::session::Session;

/// Shared application state
pub struct AppState {
    pub settings: Settings,
    /// Example cases, read-only after startup
    pub catalog: CaseCatalog,
    pub ai_client: AiClient,
    pub session: Session,
}

impl AppState {
    pub fn new(settings: Settings, catalog: CaseCatalog, ai_client: AiClient) -> Arc<Self> {
        let session = Session::new(&settings);
        Arc::new(Self {
            settings,
            catalog,
            ai_client,
            session,
        })
    }
}

/// Build the complete application with all middleware
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = build_cors_layer(&state.settings);

    // Build trace layer (use DEBUG for spans to reduce overhead at INFO level)
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::DEBUG));

    let (set_request_id, propagate_request_id) = request_id_layer();
    let body_limit = RequestBodyLimitLayer::new(state.settings.request_body_limit_bytes);

    Router::new()
        .merge(routes::api_router())
        // Middleware stack (applied bottom-up)
        .layer(body_limit)
        .layer(propagate_request_id)
        .layer(trace_layer)
        .layer(set_request_id)
        .layer(cors)
        .with_state(state)
}

fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors_allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    // Longer preflight cache in development
    let max_age = if settings.env.is_dev() {
        std::time::Duration::from_secs(86400)
    } else {
        std::time::Duration::from_secs(3600)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            HeaderName::from_static(X_REQUEST_ID),
        ]))
        .expose_headers([axum::http::header::CONTENT_DISPOSITION])
        .max_age(max_age)
}
