//! Drives a [`CallSession`] with tokio timers.
//!
//! The driver owns at most one ticker and one pending scripted transition.
//! Both report back through an unbounded channel that the UI loop drains
//! into [`CallSessionDriver::handle`]. Ending, resetting or dropping the
//! driver aborts both tasks.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at, sleep};
use tracing::{debug, trace};

use crate::domain::call_session::{CallSession, CallStatus, SessionEvent, TICK_PERIOD};

/// A spawned timer task that is aborted when dropped.
#[derive(Debug)]
struct ScheduledTask(JoinHandle<()>);

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.0.abort();
    }
}

#[derive(Debug)]
pub struct CallSessionDriver {
    session: CallSession,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
    ticker: Option<ScheduledTask>,
    progress: Option<ScheduledTask>,
}

impl CallSessionDriver {
    #[must_use]
    pub fn new(events_tx: mpsc::UnboundedSender<SessionEvent>) -> Self {
        Self {
            session: CallSession::new(),
            events_tx,
            ticker: None,
            progress: None,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &CallSession {
        &self.session
    }

    #[must_use]
    pub const fn status(&self) -> CallStatus {
        self.session.status()
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// Whether any timer task is still scheduled.
    #[must_use]
    pub const fn has_pending_tasks(&self) -> bool {
        self.ticker.is_some() || self.progress.is_some()
    }

    /// Starts a call. Restarting an active call begins a fresh run.
    pub fn start(&mut self) {
        self.cancel_tasks();
        let generation = self.session.start();
        debug!(generation, "Call started");

        let tx = self.events_tx.clone();
        self.ticker = Some(ScheduledTask(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            loop {
                ticker.tick().await;
                if tx.send(SessionEvent::Tick { generation }).is_err() {
                    break;
                }
            }
        })));

        self.schedule_progress();
    }

    /// Ends the call and returns the seconds it had run.
    pub fn end(&mut self) -> u64 {
        self.cancel_tasks();
        let elapsed = self.session.end();
        debug!(elapsed, "Call ended");
        elapsed
    }

    /// Returns to idle without reporting, e.g. on caller change or close.
    pub fn reset(&mut self) {
        self.cancel_tasks();
        self.session.reset();
        trace!("Call session reset");
    }

    /// Applies an event from the channel. Stale events are dropped.
    pub fn handle(&mut self, event: SessionEvent) -> bool {
        if !self.session.apply(event) {
            trace!(?event, "Ignoring stale session event");
            return false;
        }

        if let SessionEvent::Progress { status, .. } = event {
            debug!(status = status.label(), "Call progressed");
            self.progress = None;
            self.schedule_progress();
        }
        true
    }

    fn schedule_progress(&mut self) {
        let Some((delay, status)) = self.session.pending_transition() else {
            return;
        };
        let generation = self.session.generation();
        let tx = self.events_tx.clone();

        self.progress = Some(ScheduledTask(tokio::spawn(async move {
            sleep(delay).await;
            let _ = tx.send(SessionEvent::Progress { generation, status });
        })));
    }

    fn cancel_tasks(&mut self) {
        self.ticker = None;
        self.progress = None;
    }
}

impl Drop for CallSessionDriver {
    fn drop(&mut self) {
        if self.has_pending_tasks() {
            trace!("Dropping call session driver with live timers");
        }
        self.cancel_tasks();
    }
}
