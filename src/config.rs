use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // CORS
    pub cors_allow_origins: Vec<String>,
    pub request_body_limit_bytes: usize,

    // Generative-language service
    pub ai_service_url: String,
    pub ai_service_timeout_seconds: u64,
    /// Credential provided by the environment. When set, the session
    /// credential is pre-populated from it and cannot be edited.
    pub env_api_key: Option<String>,
    pub default_model: String,
    pub default_temperature: f64,

    // Case catalog
    pub case_catalog_path: PathBuf,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        server_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("SERVER_ADDR is not a socket address: {}", server_addr))?;

        // CORS
        let cors_allow_origins = env::var("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_body_limit_bytes = env::var("REQUEST_BODY_LIMIT_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1024 * 1024);

        // Generative-language service
        let ai_service_url = env::var("AI_SERVICE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());
        let ai_service_timeout_seconds = env::var("AI_SERVICE_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(120); // LLM calls can be slow
        let env_api_key = env::var("API_KEY")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let default_model =
            env::var("DEFAULT_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());
        let default_temperature = env::var("DEFAULT_TEMPERATURE")
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|t| t.is_finite() && *t >= 0.0)
            .unwrap_or(0.2);

        // Case catalog
        let case_catalog_path = env::var("CASE_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/defaultdataset.json"));

        Ok(Settings {
            env,
            server_addr,
            cors_allow_origins,
            request_body_limit_bytes,
            ai_service_url,
            ai_service_timeout_seconds,
            env_api_key,
            default_model,
            default_temperature,
            case_catalog_path,
        })
    }

    /// Whether the credential comes from the environment and is read-only.
    pub fn credential_locked(&self) -> bool {
        self.env_api_key.is_some()
    }
}
