use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Warn,
    Error,
}

/// A transient popup message shown over the current screen.
#[derive(Debug, Clone)]
pub struct Alert {
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
    pub created_at: Instant,
    pub displayed_at: Option<Instant>,
    pub duration: Duration,
}

impl Alert {
    #[must_use]
    pub fn new(level: AlertLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            created_at: Instant::now(),
            displayed_at: None,
            duration: Duration::from_secs(4),
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.displayed_at
            .is_some_and(|start| start.elapsed() > self.duration)
    }

    pub fn mark_displayed(&mut self) {
        if self.displayed_at.is_none() {
            self.displayed_at = Some(Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_not_expired_before_display() {
        let alert =
            Alert::new(AlertLevel::Error, "Error", "boom").with_duration(Duration::from_nanos(1));
        std::thread::sleep(Duration::from_millis(1));
        assert!(!alert.is_expired());
    }

    #[test]
    fn test_alert_expiry() {
        let mut alert =
            Alert::new(AlertLevel::Info, "Title", "Message").with_duration(Duration::from_nanos(1));
        alert.mark_displayed();
        std::thread::sleep(Duration::from_millis(1));
        assert!(alert.is_expired());
    }
}
