//! Inbox notification entries.

use serde::{Deserialize, Serialize};

/// Category of an inbox notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Message,
    System,
    Reminder,
    Security,
    Update,
}

impl NotificationKind {
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Message => "💬",
            Self::System => "⚙",
            Self::Reminder => "🔔",
            Self::Security => "🔒",
            Self::Update => "📱",
        }
    }
}

/// A notification shown in the notifications center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time_label: String,
    pub read: bool,
}

impl NotificationRecord {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        time_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            message: message.into(),
            time_label: time_label.into(),
            read: false,
        }
    }

    #[must_use]
    pub fn already_read(mut self) -> Self {
        self.read = true;
        self
    }
}
