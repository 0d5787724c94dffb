//! Profile save error type.

use thiserror::Error;

use super::{ApiError, FormError};

/// Why a profile save did not go through.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Invalid(#[from] FormError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SyncError {
    /// Message shown to the agent. Transport details stay in the log.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(e) => e.to_string(),
            Self::Api(ApiError::NoTokenAvailable) => ApiError::NoTokenAvailable.to_string(),
            Self::Api(_) => "Failed to update profile. Please try again.".to_string(),
        }
    }
}
