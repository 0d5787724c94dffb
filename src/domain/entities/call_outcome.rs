//! Call outcome records produced by the call-details form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a dialled call did not connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotConnectedReason {
    #[serde(rename = "Busy in another call")]
    BusyInAnotherCall,
    #[serde(rename = "User disconnected the call")]
    UserDisconnected,
    #[serde(rename = "Switch off")]
    SwitchedOff,
    #[serde(rename = "Out of coverage/network issue")]
    OutOfCoverage,
    #[serde(rename = "Other reason")]
    Other,
    #[serde(rename = "Incorrect/invalid number")]
    InvalidNumber,
    #[serde(rename = "Incoming calls not available")]
    IncomingUnavailable,
    #[serde(rename = "Number not in use/does not exist/out of service")]
    NumberNotInUse,
}

impl NotConnectedReason {
    /// All reasons in display order.
    pub const ALL: [Self; 8] = [
        Self::BusyInAnotherCall,
        Self::UserDisconnected,
        Self::SwitchedOff,
        Self::OutOfCoverage,
        Self::Other,
        Self::InvalidNumber,
        Self::IncomingUnavailable,
        Self::NumberNotInUse,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BusyInAnotherCall => "Busy in another call",
            Self::UserDisconnected => "User disconnected the call",
            Self::SwitchedOff => "Switch off",
            Self::OutOfCoverage => "Out of coverage/network issue",
            Self::Other => "Other reason",
            Self::InvalidNumber => "Incorrect/invalid number",
            Self::IncomingUnavailable => "Incoming calls not available",
            Self::NumberNotInUse => "Number not in use/does not exist/out of service",
        }
    }
}

impl std::fmt::Display for NotConnectedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Details captured when the customer was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedDetails {
    pub customer_interested: bool,
    pub is_scheduled: bool,
    pub follow_up_date: String,
    pub donation_amount: String,
    pub call_outcome: String,
    pub remarks: String,
    pub do_not_disturb: bool,
    pub valuable_customer: bool,
    pub appointment_scheduled: bool,
}

/// Result of one call-details submission, tagged by `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum CallOutcomeRecord {
    NotConnected {
        reason: NotConnectedReason,
        timestamp: DateTime<Utc>,
    },
    Connected {
        #[serde(flatten)]
        details: ConnectedDetails,
        timestamp: DateTime<Utc>,
    },
}

impl CallOutcomeRecord {
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::NotConnected { timestamp, .. } | Self::Connected { timestamp, .. } => *timestamp,
        }
    }

    /// Short one-line description for logs and the dashboard.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::NotConnected { reason, .. } => format!("Not connected: {reason}"),
            Self::Connected { details, .. } if details.customer_interested => {
                "Connected: interested".to_string()
            }
            Self::Connected { .. } => "Connected: not interested".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_not_connected_wire_shape() {
        let record = CallOutcomeRecord::NotConnected {
            reason: NotConnectedReason::SwitchedOff,
            timestamp: at(),
        };
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["status"], "not-connected");
        assert_eq!(value["reason"], "Switch off");
        assert_eq!(value["timestamp"], "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_connected_wire_shape() {
        let record = CallOutcomeRecord::Connected {
            details: ConnectedDetails {
                customer_interested: true,
                is_scheduled: false,
                follow_up_date: String::new(),
                donation_amount: "250".to_string(),
                call_outcome: String::new(),
                remarks: "Happy to help".to_string(),
                do_not_disturb: false,
                valuable_customer: true,
                appointment_scheduled: false,
            },
            timestamp: at(),
        };
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["status"], "connected");
        assert_eq!(value["customerInterested"], true);
        assert_eq!(value["donationAmount"], "250");
        assert_eq!(value["valuableCustomer"], true);
        assert!(value.get("details").is_none());
    }

    #[test]
    fn test_reason_labels_match_serde() {
        for reason in NotConnectedReason::ALL {
            let json = serde_json::to_string(&reason).unwrap();
            assert_eq!(json, format!("\"{}\"", reason.label()));
        }
    }

    #[test]
    fn test_summary() {
        let record = CallOutcomeRecord::NotConnected {
            reason: NotConnectedReason::BusyInAnotherCall,
            timestamp: at(),
        };
        assert_eq!(record.summary(), "Not connected: Busy in another call");
        assert!(!record.is_connected());
    }
}
