//! Form validation error types.

use thiserror::Error;

/// A required field is missing or malformed. Blocks submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please choose whether the call was connected")]
    MissingConnectionChoice,

    #[error("Please select a reason for not connected")]
    MissingReason,

    #[error("Please select if customer is interested")]
    MissingInterest,

    #[error("Full name is required")]
    MissingFullName,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Mobile number is required")]
    MissingMobile,
}
