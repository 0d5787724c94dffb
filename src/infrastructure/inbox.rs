//! Notifications the inbox starts with.

use crate::domain::entities::{NotificationKind, NotificationRecord};

#[must_use]
pub fn seeded_notifications() -> Vec<NotificationRecord> {
    vec![
        NotificationRecord::new(
            "1",
            NotificationKind::Message,
            "New Message",
            "You have received a new message from John Doe about the project update.",
            "2m ago",
        ),
        NotificationRecord::new(
            "2",
            NotificationKind::System,
            "System Update",
            "Your app has been updated to version 2.1.0. Check out the new features!",
            "1h ago",
        ),
        NotificationRecord::new(
            "3",
            NotificationKind::Reminder,
            "Meeting Reminder",
            "Your meeting with the design team starts in 15 minutes.",
            "2h ago",
        )
        .already_read(),
        NotificationRecord::new(
            "4",
            NotificationKind::Security,
            "Security Alert",
            "New sign-in detected from a different device. If this wasn't you, please secure your account.",
            "3h ago",
        )
        .already_read(),
        NotificationRecord::new(
            "5",
            NotificationKind::Update,
            "App Update Available",
            "A new version of the app is available for download.",
            "1d ago",
        )
        .already_read(),
        NotificationRecord::new(
            "6",
            NotificationKind::Message,
            "Team Notification",
            "The weekly team sync has been moved to Thursday at 3 PM.",
            "2d ago",
        )
        .already_read(),
    ]
}
