use crate::domain::entities::{CallOutcomeRecord, ProfileUpdate, UserProfile};
use crate::domain::{AlertLevel, Screen};
use crate::infrastructure::SettingsState;
use crate::presentation::widgets::Dialog;

/// What a screen asks of the shell after handling a key.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOutcome {
    /// The key meant nothing here.
    Ignored,
    /// Handled locally, redraw only.
    Handled,
    Navigate(Screen),
    Alert {
        level: AlertLevel,
        title: String,
        message: String,
    },
    Dialog(Dialog),
    Dial(String),
    Email(String),
    OpenUrl(String),
    FetchProfile,
    SaveProfile {
        current: UserProfile,
        update: ProfileUpdate,
    },
    CallSubmitted {
        contact: String,
        call_secs: u64,
        record: CallOutcomeRecord,
    },
    SettingsChanged(SettingsState),
}

impl ViewOutcome {
    #[must_use]
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Alert {
            level: AlertLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }
}
