//! Live session context.
//!
//! One [`Session`] owns the application record, the session settings, the
//! activity log and the in-flight slots. It is built once at startup and
//! shared with every handler through the application state.

use parking_lot::{Mutex, RwLock};
use std::collections::HashSet;
use std::sync::Arc;

use crate::config::Settings;
use crate::domain::activity::{ActivitySummary, LogEntry, NewLogEntry};
use crate::domain::application::{ApplicationError, ApplicationRecord, FieldValue};
use crate::domain::settings::{SettingsError, UpdateUserSettingsRequest, UserSettings};
use crate::services::ActivityLog;

pub struct Session {
    application: RwLock<ApplicationRecord>,
    settings: RwLock<UserSettings>,
    activity: RwLock<ActivityLog>,
    credential_locked: bool,
    in_flight: InFlightRegistry,
}

impl Session {
    pub fn new(config: &Settings) -> Self {
        Self {
            application: RwLock::new(ApplicationRecord::new_default()),
            settings: RwLock::new(UserSettings::new(
                config.default_model.clone(),
                config.default_temperature,
                config.env_api_key.clone(),
            )),
            activity: RwLock::new(ActivityLog::new()),
            credential_locked: config.credential_locked(),
            in_flight: InFlightRegistry::default(),
        }
    }

    // ---- application record ----

    pub fn application(&self) -> ApplicationRecord {
        self.application.read().clone()
    }

    /// Update one field by serialized name and return the new record.
    pub fn set_field(
        &self,
        name: &str,
        value: FieldValue,
    ) -> Result<ApplicationRecord, ApplicationError> {
        let mut record = self.application.write();
        record.set_by_name(name, value)?;
        Ok(record.clone())
    }

    /// Replace the whole record.
    pub fn load(&self, record: ApplicationRecord) {
        *self.application.write() = record;
    }

    pub fn reset(&self) -> ApplicationRecord {
        let fresh = ApplicationRecord::new_default();
        *self.application.write() = fresh.clone();
        fresh
    }

    // ---- settings ----

    pub fn settings(&self) -> UserSettings {
        self.settings.read().clone()
    }

    pub fn credential_locked(&self) -> bool {
        self.credential_locked
    }

    pub fn update_settings(
        &self,
        update: UpdateUserSettingsRequest,
    ) -> Result<UserSettings, SettingsError> {
        let mut settings = self.settings.write();
        settings.apply(update, self.credential_locked)?;
        Ok(settings.clone())
    }

    pub fn set_style(&self, name: &str) -> UserSettings {
        let mut settings = self.settings.write();
        settings.style_name = name.to_string();
        settings.clone()
    }

    // ---- activity ----

    pub fn record_run(&self, entry: NewLogEntry) -> LogEntry {
        self.activity.write().append(entry)
    }

    pub fn activity(&self) -> Vec<LogEntry> {
        self.activity.read().entries().to_vec()
    }

    pub fn activity_summary(&self) -> ActivitySummary {
        self.activity.read().summary()
    }

    // ---- in-flight ----

    /// Claim the slot for `tab`, or `None` if a request is already running there.
    pub fn begin_run(&self, tab: &str) -> Option<InFlightGuard> {
        self.in_flight.acquire(tab)
    }

    pub fn is_running(&self, tab: &str) -> bool {
        self.in_flight.is_held(tab)
    }
}

/// One slot per tab. A slot is held from dispatch until the collaborator
/// call completes, success or failure.
#[derive(Debug, Clone, Default)]
pub struct InFlightRegistry {
    held: Arc<Mutex<HashSet<String>>>,
}

impl InFlightRegistry {
    pub fn acquire(&self, tab: &str) -> Option<InFlightGuard> {
        if !self.held.lock().insert(tab.to_string()) {
            return None;
        }
        Some(InFlightGuard {
            held: Arc::clone(&self.held),
            tab: tab.to_string(),
        })
    }

    pub fn is_held(&self, tab: &str) -> bool {
        self.held.lock().contains(tab)
    }
}

/// Releases its slot on drop.
#[derive(Debug)]
pub struct InFlightGuard {
    held: Arc<Mutex<HashSet<String>>>,
    tab: String,
}

impl InFlightGuard {
    pub fn tab(&self) -> &str {
        &self.tab
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.held.lock().remove(&self.tab);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use std::path::PathBuf;

    fn config(api_key: Option<&str>) -> Settings {
        Settings {
            env: Environment::Dev,
            server_addr: "127.0.0.1:0".to_string(),
            cors_allow_origins: vec![],
            request_body_limit_bytes: 1024,
            ai_service_url: "http://127.0.0.1:9".to_string(),
            ai_service_timeout_seconds: 1,
            env_api_key: api_key.map(String::from),
            default_model: "gemini-2.5-flash".to_string(),
            default_temperature: 0.2,
            case_catalog_path: PathBuf::from("missing.json"),
        }
    }

    #[test]
    fn starts_with_default_record_and_settings() {
        let session = Session::new(&config(None));
        assert_eq!(session.application().e_no, "MDE-");
        assert_eq!(session.settings().style_name, "Rose");
        assert!(!session.settings().has_credential());
        assert!(!session.credential_locked());
        assert!(session.activity().is_empty());
    }

    #[test]
    fn env_credential_prepopulates_and_locks() {
        let session = Session::new(&config(Some("env-key")));
        assert!(session.credential_locked());
        assert_eq!(session.settings().api_key, "env-key");

        let err = session
            .update_settings(UpdateUserSettingsRequest {
                api_key: Some("mine".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, SettingsError::CredentialLocked);
    }

    #[test]
    fn field_edits_load_and_reset() {
        let session = Session::new(&config(None));
        let record = session
            .set_field("nameZh", FieldValue::from("心臟支架"))
            .unwrap();
        assert_eq!(record.name_zh, "心臟支架");
        assert!(session.set_field("nope", FieldValue::from("x")).is_err());

        let mut other = ApplicationRecord::new_default();
        other.doc_no = "FDA-1".into();
        session.load(other.clone());
        assert_eq!(session.application(), other);

        let fresh = session.reset();
        assert_eq!(fresh.doc_no, "");
        assert_eq!(session.application(), fresh);
    }

    #[test]
    fn slots_are_per_tab_and_released_on_drop() {
        let session = Session::new(&config(None));

        let guard = session.begin_run("TW Premarket").unwrap();
        assert_eq!(guard.tab(), "TW Premarket");
        assert!(session.is_running("TW Premarket"));
        assert!(session.begin_run("TW Premarket").is_none());

        let other = session.begin_run("Note Keeper");
        assert!(other.is_some());

        drop(guard);
        assert!(!session.is_running("TW Premarket"));
        assert!(session.begin_run("TW Premarket").is_some());
    }

    #[test]
    fn runs_are_recorded_in_order() {
        let session = Session::new(&config(None));
        let entry = session.record_run(NewLogEntry {
            tab: "TW Premarket".into(),
            agent: "Screen Reviewer".into(),
            model: "gpt-4o-mini".into(),
            tokens_est: 42,
        });
        assert_eq!(session.activity(), vec![entry]);
        assert_eq!(session.activity_summary().total_tokens_est, 42);
    }
}
