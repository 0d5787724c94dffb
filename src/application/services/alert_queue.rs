use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::{Alert, AlertLevel};

#[derive(Debug)]
pub struct AlertQueue {
    queue: VecDeque<Alert>,
    default_duration: Duration,
}

impl Default for AlertQueue {
    fn default() -> Self {
        Self::new(Duration::from_secs(4))
    }
}

impl AlertQueue {
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            default_duration,
        }
    }

    pub fn push(&mut self, level: AlertLevel, title: impl Into<String>, message: impl Into<String>) {
        let alert = Alert::new(level, title, message).with_duration(self.default_duration);
        tracing::debug!(?level, title = %alert.title, "Queued alert");
        self.queue.push_back(alert);
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(AlertLevel::Info, title, message);
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(AlertLevel::Success, title, message);
    }

    pub fn warn(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(AlertLevel::Warn, title, message);
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(AlertLevel::Error, title, message);
    }

    pub fn tick(&mut self) {
        if let Some(front) = self.queue.front_mut() {
            front.mark_displayed();
            if front.is_expired() {
                self.queue.pop_front();
                if let Some(next) = self.queue.front_mut() {
                    next.mark_displayed();
                }
            }
        }
    }

    /// Drops the alert currently on screen.
    pub fn dismiss(&mut self) {
        self.queue.pop_front();
        if let Some(next) = self.queue.front_mut() {
            next.mark_displayed();
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Alert> {
        self.queue.front()
    }

    #[must_use]
    pub fn has_alerts(&self) -> bool {
        !self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_alert_flow() {
        let mut alerts = AlertQueue::default();

        alerts.success("Success", "Profile updated successfully");
        assert!(alerts.current().is_some());

        alerts.tick();
        assert_eq!(alerts.current().unwrap().level, AlertLevel::Success);
    }

    #[test]
    fn test_queueing() {
        let mut alerts = AlertQueue::default();
        alerts.info("1", "First");
        alerts.error("2", "Second");

        assert_eq!(alerts.current().unwrap().title, "1");

        alerts.tick();

        alerts.queue.front_mut().unwrap().displayed_at =
            Some(Instant::now().checked_sub(Duration::from_secs(10)).unwrap());

        alerts.tick();

        let second = alerts.current().unwrap();
        assert_eq!(second.title, "2");
        assert!(second.displayed_at.unwrap().elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_dismiss_shows_next() {
        let mut alerts = AlertQueue::default();
        alerts.info("1", "First");
        alerts.info("2", "Second");

        alerts.dismiss();
        assert_eq!(alerts.current().unwrap().title, "2");
        alerts.dismiss();
        assert!(!alerts.has_alerts());
    }
}
