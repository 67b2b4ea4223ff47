//! Activity log domain types

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One completed agent run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub tab: String,
    pub agent: String,
    pub model: String,
    pub tokens_est: u64,
}

/// Fields supplied by the caller; id and timestamp are assigned on append.
#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub tab: String,
    pub agent: String,
    pub model: String,
    pub tokens_est: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabRuns {
    pub tab: String,
    pub runs: usize,
}

/// Dashboard aggregates over the whole log.
#[derive(Debug, Clone, Serialize)]
pub struct ActivitySummary {
    pub total_runs: usize,
    pub total_tokens_est: u64,
    pub unique_tabs: usize,
    /// Run count per tab, in first-seen order.
    pub runs_by_tab: Vec<TabRuns>,
    /// Newest first.
    pub recent: Vec<LogEntry>,
}
