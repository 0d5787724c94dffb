//! Sign-in DTOs.

use std::fmt;

use crate::domain::entities::UserProfile;

/// Where a bearer token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// `--token` or `DIALDESK_TOKEN`.
    CommandLine,
    /// The token store.
    Keyring,
    /// Pasted on the sign-in screen.
    UserInput,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CommandLine => "command line / environment",
            Self::Keyring => "system keyring",
            Self::UserInput => "sign-in screen",
        })
    }
}

/// A sign-in attempt.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub token: String,
    pub source: TokenSource,
    /// Keep the token in the token store once the server accepts it.
    pub remember: bool,
}

impl LoginRequest {
    #[must_use]
    pub const fn new(token: String, source: TokenSource) -> Self {
        Self {
            token,
            source,
            remember: true,
        }
    }

    #[must_use]
    pub const fn remember(mut self, remember: bool) -> Self {
        self.remember = remember;
        self
    }
}

/// An accepted sign-in.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    /// Profile the server returned for the token.
    pub profile: UserProfile,
    pub source: TokenSource,
    /// False when remembering was off or the token store refused the write.
    pub remembered: bool,
}
