//! Inbox state behind the notifications screen.

use tracing::debug;

use crate::domain::entities::NotificationRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
}

impl NotificationFilter {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Unread => "Unread",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::All => Self::Unread,
            Self::Unread => Self::All,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    records: Vec<NotificationRecord>,
    filter: NotificationFilter,
}

impl NotificationCenter {
    #[must_use]
    pub fn new(records: Vec<NotificationRecord>) -> Self {
        Self {
            records,
            filter: NotificationFilter::All,
        }
    }

    #[must_use]
    pub const fn filter(&self) -> NotificationFilter {
        self.filter
    }

    pub fn toggle_filter(&mut self) {
        self.filter = self.filter.toggled();
    }

    /// Records passing the current filter, in list order.
    #[must_use]
    pub fn visible(&self) -> Vec<&NotificationRecord> {
        self.records
            .iter()
            .filter(|record| match self.filter {
                NotificationFilter::All => true,
                NotificationFilter::Unread => !record.read,
            })
            .collect()
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.records.iter().filter(|record| !record.read).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `false` when no record has that id.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for record in &mut self.records {
            record.read = true;
        }
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = self.records.len() != before;
        if removed {
            debug!(id, "Notification deleted");
        }
        removed
    }

    pub fn clear_all(&mut self) {
        debug!(count = self.records.len(), "Clearing notifications");
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NotificationKind;

    fn center() -> NotificationCenter {
        NotificationCenter::new(vec![
            NotificationRecord::new("1", NotificationKind::Message, "New Message", "hi", "2m ago"),
            NotificationRecord::new("2", NotificationKind::System, "System Update", "v2", "1h ago"),
            NotificationRecord::new("3", NotificationKind::Reminder, "Meeting", "3pm", "2h ago")
                .already_read(),
        ])
    }

    #[test]
    fn test_unread_filter_and_count() {
        let mut center = center();
        assert_eq!(center.unread_count(), 2);
        assert_eq!(center.visible().len(), 3);

        center.toggle_filter();
        assert_eq!(center.filter(), NotificationFilter::Unread);
        let ids: Vec<_> = center.visible().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_mark_read() {
        let mut center = center();
        assert!(center.mark_read("1"));
        assert!(!center.mark_read("missing"));
        assert_eq!(center.unread_count(), 1);

        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);
        assert_eq!(center.total(), 3);
    }

    #[test]
    fn test_delete_and_clear() {
        let mut center = center();
        assert!(center.delete("2"));
        assert!(!center.delete("2"));
        assert_eq!(center.total(), 2);

        center.clear_all();
        assert!(center.is_empty());
        assert_eq!(center.unread_count(), 0);
    }
}
