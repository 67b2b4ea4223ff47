//! Append-only activity log.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::activity::{ActivitySummary, LogEntry, NewLogEntry, TabRuns};

/// Number of entries shown in the dashboard's recent list.
pub const RECENT_LIMIT: usize = 5;

/// Runs in append order. Never pruned or deduplicated.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run, assigning a fresh id and the current time.
    pub fn append(&mut self, entry: NewLogEntry) -> LogEntry {
        let entry = LogEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            tab: entry.tab,
            agent: entry.agent,
            model: entry.model,
            tokens_est: entry.tokens_est,
        };
        self.entries.push(entry.clone());
        entry
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> ActivitySummary {
        let mut runs_by_tab: Vec<TabRuns> = Vec::new();
        for entry in &self.entries {
            match runs_by_tab.iter_mut().find(|t| t.tab == entry.tab) {
                Some(t) => t.runs += 1,
                None => runs_by_tab.push(TabRuns {
                    tab: entry.tab.clone(),
                    runs: 1,
                }),
            }
        }

        ActivitySummary {
            total_runs: self.entries.len(),
            total_tokens_est: self.entries.iter().map(|e| e.tokens_est).sum(),
            unique_tabs: runs_by_tab.len(),
            runs_by_tab,
            recent: self.entries.iter().rev().take(RECENT_LIMIT).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tab: &str, tokens: u64) -> NewLogEntry {
        NewLogEntry {
            tab: tab.to_string(),
            agent: "Screen Reviewer".to_string(),
            model: "gemini-2.5-flash".to_string(),
            tokens_est: tokens,
        }
    }

    #[test]
    fn append_assigns_unique_ids_and_keeps_order() {
        let mut log = ActivityLog::new();
        let a = log.append(run("TW Premarket", 10));
        let b = log.append(run("TW Premarket", 10));

        assert_ne!(a.id, b.id);
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].id, a.id);
        assert!(log.entries()[0].timestamp <= log.entries()[1].timestamp);
    }

    #[test]
    fn summary_aggregates_per_tab_in_first_seen_order() {
        let mut log = ActivityLog::new();
        log.append(run("TW Premarket", 100));
        log.append(run("Note Keeper", 20));
        log.append(run("TW Premarket", 30));

        let summary = log.summary();
        assert_eq!(summary.total_runs, 3);
        assert_eq!(summary.total_tokens_est, 150);
        assert_eq!(summary.unique_tabs, 2);
        assert_eq!(
            summary.runs_by_tab,
            vec![
                TabRuns { tab: "TW Premarket".into(), runs: 2 },
                TabRuns { tab: "Note Keeper".into(), runs: 1 },
            ]
        );
        assert_eq!(summary.recent[0].tokens_est, 30);
    }

    #[test]
    fn recent_list_is_capped() {
        let mut log = ActivityLog::new();
        for i in 0..8 {
            log.append(run("Notes", i));
        }
        let recent = log.summary().recent;
        assert_eq!(recent.len(), RECENT_LIMIT);
        assert_eq!(recent[0].tokens_est, 7);
        assert_eq!(recent[4].tokens_est, 3);
    }
}
