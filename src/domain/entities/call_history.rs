//! Previous call entries shown alongside a contact.

use serde::{Deserialize, Serialize};

/// Direction of a past call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallDirection {
    Incoming,
    Outgoing,
    Missed,
}

impl CallDirection {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Incoming => "Incoming",
            Self::Outgoing => "Outgoing",
            Self::Missed => "Missed",
        }
    }

    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Incoming => "↙",
            Self::Outgoing => "↗",
            Self::Missed => "✗",
        }
    }
}

/// How a past call ended on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallLineStatus {
    Completed,
    NoAnswer,
    Busy,
    Cancelled,
}

impl CallLineStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::NoAnswer => "No Answer",
            Self::Busy => "Busy",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Business result recorded for a past call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PastOutcome {
    Interested,
    NotInterested,
    Callback,
    NoResponse,
}

impl PastOutcome {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Interested => "Interested",
            Self::Callback => "Callback Required",
            Self::NotInterested => "Not Interested",
            Self::NoResponse => "No Response",
        }
    }
}

/// One entry of a contact's call history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousCall {
    pub id: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub direction: CallDirection,
    pub status: CallLineStatus,
    pub notes: String,
    pub outcome: PastOutcome,
    pub follow_up_date: Option<String>,
}

impl PreviousCall {
    /// "2024-01-15 at 10:30 AM".
    #[must_use]
    pub fn when(&self) -> String {
        format!("{} at {}", self.date, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        assert_eq!(PastOutcome::Callback.label(), "Callback Required");
        assert_eq!(PastOutcome::NoResponse.label(), "No Response");
    }

    #[test]
    fn test_direction_serde_names() {
        let json = serde_json::to_string(&CallDirection::Outgoing).unwrap();
        assert_eq!(json, "\"outgoing\"");
        let status: CallLineStatus = serde_json::from_str("\"no_answer\"").unwrap();
        assert_eq!(status, CallLineStatus::NoAnswer);
    }
}
