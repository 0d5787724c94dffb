//! Candidate API and token store error types.

use thiserror::Error;

/// Failures talking to the candidate API or the token store.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("Session expired. Please login again.")]
    NoTokenAvailable,

    #[error("token rejected by server: {message}")]
    TokenRejected { message: String },

    #[error("server returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("failed to decode response: {message}")]
    Decode { message: String },

    #[error("failed to retrieve stored token: {message}")]
    TokenRetrievalFailed { message: String },

    #[error("failed to store token: {message}")]
    TokenStorageFailed { message: String },

    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl ApiError {
    /// Creates token rejected error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::TokenRejected {
            message: message.into(),
        }
    }

    /// Creates HTTP status error.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates retrieval failed error.
    #[must_use]
    pub fn retrieval_failed(message: impl Into<String>) -> Self {
        Self::TokenRetrievalFailed {
            message: message.into(),
        }
    }

    /// Creates storage failed error.
    #[must_use]
    pub fn storage_failed(message: impl Into<String>) -> Self {
        Self::TokenStorageFailed {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Whether the agent has to sign in again.
    #[must_use]
    pub const fn requires_sign_in(&self) -> bool {
        matches!(self, Self::NoTokenAvailable | Self::TokenRejected { .. })
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_message() {
        assert_eq!(
            ApiError::NoTokenAvailable.to_string(),
            "Session expired. Please login again."
        );
    }

    #[test]
    fn test_classification() {
        assert!(ApiError::rejected("expired").requires_sign_in());
        assert!(!ApiError::http(500, "boom").requires_sign_in());
        assert!(ApiError::network("refused").is_network_error());
    }
}
