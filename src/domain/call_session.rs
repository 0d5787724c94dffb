//! Call-session timer and status machine.
//!
//! The session itself is pure state: it never touches a clock. Whoever
//! drives it schedules [`SessionEvent`]s and feeds them back through
//! [`CallSession::apply`]. Every `start`, `end` and `reset` bumps the
//! generation, so events scheduled for an earlier run are ignored.

use std::time::Duration;

/// Delay between starting a call and the line ringing.
pub const RING_DELAY: Duration = Duration::from_secs(1);
/// Delay between ringing and the simulated answer.
pub const CONNECT_DELAY: Duration = Duration::from_secs(2);
/// Period of the elapsed-time counter.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Scripted progress of a simulated outbound call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallStatus {
    #[default]
    Idle,
    Dialing,
    Ringing,
    Connected,
}

impl CallStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Ready to call",
            Self::Dialing => "Dialing...",
            Self::Ringing => "Ringing...",
            Self::Connected => "Connected",
        }
    }

    /// The next scripted step and how long after entering `self` it fires.
    #[must_use]
    pub const fn scripted_next(self) -> Option<(Duration, Self)> {
        match self {
            Self::Dialing => Some((RING_DELAY, Self::Ringing)),
            Self::Ringing => Some((CONNECT_DELAY, Self::Connected)),
            Self::Idle | Self::Connected => None,
        }
    }
}

/// Something a scheduled task reports back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// One second of call time passed.
    Tick { generation: u64 },
    /// The scripted progression reached `status`.
    Progress { generation: u64, status: CallStatus },
}

impl SessionEvent {
    #[must_use]
    pub const fn generation(self) -> u64 {
        match self {
            Self::Tick { generation } | Self::Progress { generation, .. } => generation,
        }
    }
}

/// Timer and status of the call being placed from one calling view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallSession {
    elapsed_secs: u64,
    status: CallStatus,
    active: bool,
    generation: u64,
}

impl CallSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    #[must_use]
    pub const fn status(&self) -> CallStatus {
        self.status
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Begins dialing. Returns the generation scheduled events must carry.
    pub fn start(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.active = true;
        self.status = CallStatus::Dialing;
        self.elapsed_secs = 0;
        self.generation
    }

    /// Hangs up and returns how many seconds the call had run.
    pub fn end(&mut self) -> u64 {
        let elapsed = self.elapsed_secs;
        self.reset();
        elapsed
    }

    /// Back to the initial idle state, invalidating pending events.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.active = false;
        self.status = CallStatus::Idle;
        self.elapsed_secs = 0;
    }

    /// Applies a scheduled event. Returns `false` for stale events.
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        if !self.active || event.generation() != self.generation {
            return false;
        }

        match event {
            SessionEvent::Tick { .. } => {
                self.elapsed_secs = self.elapsed_secs.saturating_add(1);
                true
            }
            SessionEvent::Progress { status, .. } => {
                let expected = self.status.scripted_next().map(|(_, next)| next);
                if expected == Some(status) {
                    self.status = status;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// The transition the driver should schedule next, if any.
    #[must_use]
    pub const fn pending_transition(&self) -> Option<(Duration, CallStatus)> {
        if self.active {
            self.status.scripted_next()
        } else {
            None
        }
    }

    /// Elapsed time as `MM:SS`.
    #[must_use]
    pub fn formatted_elapsed(&self) -> String {
        format_clock(self.elapsed_secs)
    }
}

/// Formats seconds as `MM:SS`; minutes keep growing past 99.
#[must_use]
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = CallSession::new();
        assert_eq!(session.status(), CallStatus::Idle);
        assert_eq!(session.elapsed_secs(), 0);
        assert!(!session.is_active());
        assert_eq!(session.pending_transition(), None);
    }

    #[test]
    fn test_start_begins_dialing() {
        let mut session = CallSession::new();
        let generation = session.start();

        assert!(session.is_active());
        assert_eq!(session.status(), CallStatus::Dialing);
        assert_eq!(session.elapsed_secs(), 0);
        assert_eq!(session.generation(), generation);
        assert_eq!(
            session.pending_transition(),
            Some((RING_DELAY, CallStatus::Ringing))
        );
    }

    #[test]
    fn test_scripted_progression() {
        let mut session = CallSession::new();
        let generation = session.start();

        assert!(session.apply(SessionEvent::Progress {
            generation,
            status: CallStatus::Ringing
        }));
        assert_eq!(
            session.pending_transition(),
            Some((CONNECT_DELAY, CallStatus::Connected))
        );
        assert!(session.apply(SessionEvent::Progress {
            generation,
            status: CallStatus::Connected
        }));
        assert_eq!(session.status(), CallStatus::Connected);
        assert_eq!(session.pending_transition(), None);
    }

    #[test]
    fn test_out_of_order_progress_ignored() {
        let mut session = CallSession::new();
        let generation = session.start();

        assert!(!session.apply(SessionEvent::Progress {
            generation,
            status: CallStatus::Connected
        }));
        assert_eq!(session.status(), CallStatus::Dialing);
    }

    #[test]
    fn test_end_resets_and_reports_elapsed() {
        let mut session = CallSession::new();
        let generation = session.start();
        session.apply(SessionEvent::Tick { generation });
        session.apply(SessionEvent::Tick { generation });

        assert_eq!(session.end(), 2);
        assert!(!session.is_active());
        assert_eq!(session.status(), CallStatus::Idle);
        assert_eq!(session.elapsed_secs(), 0);
    }

    #[test]
    fn test_events_from_previous_run_are_stale() {
        let mut session = CallSession::new();
        let old = session.start();
        session.end();
        let current = session.start();

        assert!(!session.apply(SessionEvent::Tick { generation: old }));
        assert!(!session.apply(SessionEvent::Progress {
            generation: old,
            status: CallStatus::Ringing
        }));
        assert_eq!(session.elapsed_secs(), 0);
        assert_eq!(session.status(), CallStatus::Dialing);

        assert!(session.apply(SessionEvent::Tick {
            generation: current
        }));
        assert_eq!(session.elapsed_secs(), 1);
    }

    #[test]
    fn test_events_after_end_are_ignored() {
        let mut session = CallSession::new();
        let generation = session.start();
        session.end();

        assert!(!session.apply(SessionEvent::Tick { generation }));
        assert_eq!(session.elapsed_secs(), 0);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(6000), "100:00");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(CallStatus::Idle.label(), "Ready to call");
        assert_eq!(CallStatus::Ringing.label(), "Ringing...");
    }
}
