//! Contact directory port definition.

use crate::domain::entities::{ContactRecord, PreviousCall};

/// Read-only source of contacts and their call history.
pub trait DirectoryPort: Send + Sync {
    /// All contacts in calling order.
    fn contacts(&self) -> &[ContactRecord];

    /// Past calls with the named contact, newest first.
    fn history_for(&self, contact_name: &str) -> &[PreviousCall];
}
