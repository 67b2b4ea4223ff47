//! Generative-language service client.
//!
//! Sends a system instruction and one user prompt to the Generative Language
//! REST API and returns the generated text. Requested model ids are mapped
//! onto supported backend models; unknown ids fall back to the default.

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

use crate::error::ApiError;
use crate::middleware::request_id::X_REQUEST_ID;

/// Backend model used for any id missing from [`MODEL_MAPPING`].
pub const FALLBACK_MODEL: &str = "gemini-2.5-flash";

/// Returned when the service answers without any text.
pub const EMPTY_RESPONSE: &str = "No response generated.";

/// Requested model id, backend model, and whether the backend model differs
/// from what was asked for. `-latest` aliases count as the same model.
pub const MODEL_MAPPING: &[(&str, &str, bool)] = &[
    ("gemini-2.5-flash", "gemini-2.5-flash", false),
    ("gemini-2.5-flash-lite", "gemini-2.5-flash-lite-latest", false),
    ("gpt-4o-mini", FALLBACK_MODEL, true),
    ("gpt-4.1-mini", FALLBACK_MODEL, true),
    ("claude-3-5-sonnet-2024-10", FALLBACK_MODEL, true),
];

/// Outcome of mapping a requested model id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelChoice {
    pub requested: String,
    pub effective: &'static str,
    /// The backend model is not the one that was asked for.
    pub substituted: bool,
}

pub fn resolve_model(requested: &str) -> ModelChoice {
    let (effective, substituted) = MODEL_MAPPING
        .iter()
        .find(|(id, _, _)| *id == requested)
        .map(|(_, model, substituted)| (*model, *substituted))
        .unwrap_or((FALLBACK_MODEL, true));

    ModelChoice {
        requested: requested.to_string(),
        effective,
        substituted,
    }
}

/// One generation call.
#[derive(Debug, Clone)]
pub struct GenerateParams<'a> {
    pub api_key: &'a str,
    pub model: &'a str,
    pub system_instruction: &'a str,
    pub prompt: &'a str,
    pub temperature: f64,
    pub request_id: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct Generated {
    pub text: String,
    pub model: ModelChoice,
}

/// Client for the generative-language service.
#[derive(Clone)]
pub struct AiClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Error envelope returned by the service.
#[derive(Debug, Deserialize)]
struct AiErrorResponse {
    error: AiErrorBody,
}

#[derive(Debug, Deserialize)]
struct AiErrorBody {
    message: String,
}

impl GenerateResponse {
    /// Text parts of the first candidate, concatenated.
    fn text(self) -> Option<String> {
        let parts = self.candidates.into_iter().next()?.content?.parts;
        let text: String = parts.into_iter().filter_map(|p| p.text).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl AiClient {
    /// Create a new client for the service at `base_url`.
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let parsed = Url::parse(base_url).context("AI_SERVICE_URL is not a valid URL")?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        tracing::info!(base_url = %parsed, "AI client initialized");

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Generate text. Fails with [`ApiError::MissingCredential`] before any
    /// network traffic when the key is blank.
    #[instrument(skip(self, params), fields(model = params.model))]
    pub async fn generate_content(&self, params: GenerateParams<'_>) -> Result<Generated, ApiError> {
        if params.api_key.trim().is_empty() {
            return Err(ApiError::MissingCredential);
        }

        let model = resolve_model(params.model);
        if model.substituted {
            warn!(
                requested = %model.requested,
                effective = model.effective,
                "Requested model is not supported, substituting"
            );
        }

        let url = self.generate_url(model.effective);
        let body = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: [Part {
                    text: params.system_instruction,
                }],
            },
            contents: [Content {
                role: Some("user"),
                parts: [Part {
                    text: params.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: params.temperature,
            },
        };

        let mut req = self
            .client
            .post(&url)
            .header("x-goog-api-key", params.api_key)
            .json(&body);

        if let Some(rid) = params.request_id {
            req = req.header(X_REQUEST_ID, rid);
        }

        debug!(url = %url, "AI service request");

        let response = req.send().await.map_err(|e| {
            error!(error = %e, "AI service request failed");
            ApiError::internal(format!("AI service unavailable: {}", e))
        })?;

        let status = response.status();

        if status.is_success() {
            let parsed: GenerateResponse = response.json().await.map_err(|e| {
                error!(error = %e, "Failed to parse AI service response");
                ApiError::internal(format!("Invalid AI service response: {}", e))
            })?;

            Ok(Generated {
                text: parsed.text().unwrap_or_else(|| EMPTY_RESPONSE.to_string()),
                model,
            })
        } else {
            let message = response
                .json::<AiErrorResponse>()
                .await
                .ok()
                .map(|e| e.error.message)
                .unwrap_or_else(|| format!("AI service error: {}", status));

            match status {
                StatusCode::BAD_REQUEST => Err(ApiError::BadRequest(message)),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    error!(status = %status, "AI service rejected the credential");
                    Err(ApiError::internal(format!("AI service auth error: {}", message)))
                }
                _ => {
                    error!(status = %status, message = %message, "AI service error");
                    Err(ApiError::internal(message))
                }
            }
        }
    }
}
