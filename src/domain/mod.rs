//! Domain types and DTOs
//!
//! The application form record, its documented value sets, and the session
//! records that surround it.

pub mod activity;
pub mod agents;
pub mod application;
pub mod choices;
pub mod settings;
pub mod styles;

// Re-export commonly used types
pub use activity::{ActivitySummary, LogEntry, NewLogEntry};
pub use application::{ApplicationError, ApplicationField, ApplicationRecord, FieldKind, FieldValue};
pub use settings::{Language, SettingsError, Theme, UserSettings};
pub use styles::StyleTheme;
