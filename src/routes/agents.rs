//! Collaborator-backed endpoints.
//!
//! The screen review and the free-text tools share one dispatch path:
//! credential check, per-tab in-flight slot, collaborator call, and an
//! activity entry on success. Collaborator failures are reported in the
//! response body with a placeholder output, never as an HTTP error.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::activity::NewLogEntry;
use crate::domain::agents::{text_tool, AgentRunResponse, RunToolRequest, DEFAULT_AGENTS};
use crate::error::{ApiError, ApiResult};
use crate::middleware::RequestIdExt;
use crate::services::ai_client::{resolve_model, GenerateParams};
use crate::services::review::{
    compose_review_prompt, estimate_exchange_tokens, REVIEW_AGENT, REVIEW_FAILED,
    REVIEW_SYSTEM_PROMPT, REVIEW_TAB, TOOL_FAILED,
};

struct Dispatch<'a> {
    tab: &'a str,
    agent: &'a str,
    system_instruction: &'a str,
    prompt: String,
    failure_output: &'a str,
}

async fn dispatch(
    state: &AppState,
    headers: &HeaderMap,
    job: Dispatch<'_>,
) -> ApiResult<AgentRunResponse> {
    let settings = state.session.settings();
    if !settings.has_credential() {
        return Err(ApiError::MissingCredential);
    }

    let _slot = state.session.begin_run(job.tab).ok_or_else(|| {
        ApiError::Conflict(format!("A request is already running for {}", job.tab))
    })?;

    let result = state
        .ai_client
        .generate_content(GenerateParams {
            api_key: &settings.api_key,
            model: &settings.model,
            system_instruction: job.system_instruction,
            prompt: &job.prompt,
            temperature: settings.temperature,
            request_id: headers.request_id(),
        })
        .await;

    match result {
        Ok(generated) => {
            let tokens_est = estimate_exchange_tokens(&job.prompt, &generated.text);
            // The log records the model the user asked for.
            let entry = state.session.record_run(NewLogEntry {
                tab: job.tab.to_string(),
                agent: job.agent.to_string(),
                model: settings.model.clone(),
                tokens_est,
            });

            tracing::info!(
                tab = job.tab,
                agent = job.agent,
                requested_model = %generated.model.requested,
                effective_model = generated.model.effective,
                tokens_est,
                "Agent run completed"
            );

            Ok(AgentRunResponse {
                tab: job.tab.to_string(),
                agent: job.agent.to_string(),
                output: generated.text,
                succeeded: true,
                requested_model: generated.model.requested,
                effective_model: generated.model.effective.to_string(),
                model_substituted: generated.model.substituted,
                tokens_est: Some(tokens_est),
                log_id: Some(entry.id),
            })
        }
        Err(ApiError::MissingCredential) => Err(ApiError::MissingCredential),
        Err(e) => {
            tracing::error!(tab = job.tab, error = ?e, "Agent run failed");

            let model = resolve_model(&settings.model);
            Ok(AgentRunResponse {
                tab: job.tab.to_string(),
                agent: job.agent.to_string(),
                output: job.failure_output.to_string(),
                succeeded: false,
                requested_model: model.requested,
                effective_model: model.effective.to_string(),
                model_substituted: model.substituted,
                tokens_est: None,
                log_id: None,
            })
        }
    }
}

/// POST /application/review
///
/// Screen review of the current application record.
pub async fn review_application(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    let record = state.session.application();
    let prompt = compose_review_prompt(&record)?;

    let response = dispatch(
        &state,
        &headers,
        Dispatch {
            tab: REVIEW_TAB,
            agent: REVIEW_AGENT,
            system_instruction: REVIEW_SYSTEM_PROMPT,
            prompt,
            failure_output: REVIEW_FAILED,
        },
    )
    .await?;

    Ok(Json(DataResponse::new(response)))
}

/// POST /agents/:tool/run
pub async fn run_tool(
    State(state): State<Arc<AppState>>,
    Path(tool_id): Path<String>,
    headers: HeaderMap,
    req: Option<Json<RunToolRequest>>,
) -> ApiResult<impl IntoResponse> {
    let tool = text_tool(&tool_id)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown tool: {}", tool_id)))?;
    let input = req.map(|Json(r)| r).unwrap_or_default().into_input(tool);

    let response = dispatch(
        &state,
        &headers,
        Dispatch {
            tab: tool.tab,
            agent: tool.agent,
            system_instruction: tool.system_prompt,
            prompt: input,
            failure_output: TOOL_FAILED,
        },
    )
    .await?;

    Ok(Json(DataResponse::new(response)))
}

/// GET /agents
pub async fn list_agents() -> impl IntoResponse {
    Json(DataResponse::new(DEFAULT_AGENTS))
}
