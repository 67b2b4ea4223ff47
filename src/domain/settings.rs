//! Session settings domain types
//!
//! Language, theme, style and generation preferences of the live session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::styles::{style_by_name, StyleTheme};

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("API key is provided by the environment and cannot be changed")]
    CredentialLocked,

    #[error("temperature must be a finite number >= 0, got {0}")]
    InvalidTemperature(f64),

    #[error("model must not be empty")]
    EmptyModel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    #[serde(rename = "繁體中文")]
    TraditionalChinese,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Session settings entity
#[derive(Debug, Clone, PartialEq)]
pub struct UserSettings {
    pub language: Language,
    pub theme: Theme,
    pub style_name: String,
    pub model: String,
    pub temperature: f64,
    /// Credential for the generative-language service. Never serialized.
    pub api_key: String,
}

impl UserSettings {
    pub fn new(model: impl Into<String>, temperature: f64, api_key: Option<String>) -> Self {
        Self {
            language: Language::default(),
            theme: Theme::default(),
            style_name: "Rose".to_string(),
            model: model.into(),
            temperature,
            api_key: api_key.unwrap_or_default(),
        }
    }

    pub fn current_style(&self) -> &'static StyleTheme {
        style_by_name(&self.style_name)
    }

    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Apply a partial update. Nothing changes unless the whole update is valid.
    pub fn apply(
        &mut self,
        update: UpdateUserSettingsRequest,
        credential_locked: bool,
    ) -> Result<(), SettingsError> {
        if update.api_key.is_some() && credential_locked {
            return Err(SettingsError::CredentialLocked);
        }
        if let Some(t) = update.temperature {
            if !t.is_finite() || t < 0.0 {
                return Err(SettingsError::InvalidTemperature(t));
            }
        }
        if matches!(update.model.as_deref(), Some(m) if m.trim().is_empty()) {
            return Err(SettingsError::EmptyModel);
        }

        if let Some(language) = update.language {
            self.language = language;
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(style_name) = update.style_name {
            self.style_name = style_name;
        }
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(temperature) = update.temperature {
            self.temperature = temperature;
        }
        if let Some(api_key) = update.api_key {
            self.api_key = api_key.trim().to_string();
        }
        Ok(())
    }
}

/// Request DTO for updating session settings. Absent fields are left as is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserSettingsRequest {
    pub language: Option<Language>,
    pub theme: Option<Theme>,
    pub style_name: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub api_key: Option<String>,
}

/// Response DTO for session settings
#[derive(Debug, Clone, Serialize)]
pub struct UserSettingsResponse {
    pub language: Language,
    pub theme: Theme,
    pub style_name: String,
    pub style: StyleTheme,
    pub model: String,
    pub temperature: f64,
    pub api_key_set: bool,
    pub api_key_locked: bool,
}

impl UserSettingsResponse {
    pub fn new(s: &UserSettings, api_key_locked: bool) -> Self {
        Self {
            language: s.language,
            theme: s.theme,
            style_name: s.style_name.clone(),
            style: *s.current_style(),
            model: s.model.clone(),
            temperature: s.temperature,
            api_key_set: s.has_credential(),
            api_key_locked,
        }
    }
}
