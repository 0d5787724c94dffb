//! Outcomes recorded during this run. Nothing is persisted.

use tracing::info;

use crate::domain::entities::CallOutcomeRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedCall {
    pub contact_name: String,
    pub call_secs: u64,
    pub outcome: CallOutcomeRecord,
}

#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    entries: Vec<LoggedCall>,
}

impl SessionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, contact_name: impl Into<String>, call_secs: u64, outcome: CallOutcomeRecord) {
        let contact_name = contact_name.into();
        match serde_json::to_string(&outcome) {
            Ok(payload) => info!(contact = %contact_name, call_secs, %payload, "Call outcome recorded"),
            Err(e) => info!(contact = %contact_name, call_secs, error = %e, "Call outcome recorded"),
        }
        self.entries.push(LoggedCall {
            contact_name,
            call_secs,
            outcome,
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[LoggedCall] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn connected_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome.is_connected())
            .count()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&LoggedCall> {
        self.entries.last()
    }
}
