//! Walks the caller directory from the calling view.

use crate::domain::entities::ContactRecord;

/// Result of asking for the next caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueMove {
    Moved,
    /// Already at the last caller; the agent picks Close or Start Over.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct CallerQueue {
    callers: Vec<ContactRecord>,
    index: usize,
}

impl CallerQueue {
    #[must_use]
    pub fn new(callers: Vec<ContactRecord>) -> Self {
        Self { callers, index: 0 }
    }

    #[must_use]
    pub fn current(&self) -> Option<&ContactRecord> {
        self.callers.get(self.index)
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.callers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callers.is_empty()
    }

    /// "Caller 3 of 8".
    #[must_use]
    pub fn position_label(&self) -> String {
        if self.is_empty() {
            return "No callers".to_string();
        }
        format!("Caller {} of {}", self.index + 1, self.len())
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn advance(&mut self) -> QueueMove {
        if self.index + 1 < self.callers.len() {
            self.index += 1;
            QueueMove::Moved
        } else {
            QueueMove::Exhausted
        }
    }

    /// Moves back one caller. Returns `false` at the first caller.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn restart(&mut self) {
        self.index = 0;
    }
}
