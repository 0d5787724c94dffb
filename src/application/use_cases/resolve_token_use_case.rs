//! Finds the token to sign in with at startup.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::dto::TokenSource;
use crate::domain::entities::AuthToken;
use crate::domain::ports::TokenStoragePort;

/// A startup token and where it came from.
#[derive(Debug, Clone)]
pub struct ResolvedToken {
    pub token: AuthToken,
    pub source: TokenSource,
}

/// Picks the stored token first, then `--token` / `DIALDESK_TOKEN`.
pub struct ResolveTokenUseCase {
    storage_port: Arc<dyn TokenStoragePort>,
}

impl ResolveTokenUseCase {
    #[must_use]
    pub const fn new(storage_port: Arc<dyn TokenStoragePort>) -> Self {
        Self { storage_port }
    }

    /// A token store that cannot be read counts as empty.
    pub async fn execute(&self, cli_token: Option<String>) -> Option<ResolvedToken> {
        let resolved = match self.stored().await {
            Some(token) => Some(ResolvedToken {
                token,
                source: TokenSource::Keyring,
            }),
            None => Self::from_cli(cli_token).map(|token| ResolvedToken {
                token,
                source: TokenSource::CommandLine,
            }),
        };

        match &resolved {
            Some(found) => info!(source = %found.source, "Startup token found"),
            None => debug!("No startup token, showing sign-in"),
        }
        resolved
    }

    async fn stored(&self) -> Option<AuthToken> {
        self.storage_port
            .get_token()
            .await
            .inspect_err(|e| debug!(error = %e, "Token store unreadable"))
            .ok()
            .flatten()
    }

    fn from_cli(cli_token: Option<String>) -> Option<AuthToken> {
        let raw = cli_token?;
        let token = AuthToken::new(&raw);
        if token.is_none() && !raw.trim().is_empty() {
            debug!("Ignoring malformed command-line token");
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockTokenStorage;

    #[tokio::test]
    async fn test_keyring_priority() {
        let storage = Arc::new(MockTokenStorage::with_token(AuthToken::new_unchecked(
            "stored-token",
        )));
        let use_case = ResolveTokenUseCase::new(storage);

        let result = use_case.execute(Some("cli-token".to_string())).await;

        let resolved = result.unwrap();
        assert_eq!(resolved.source, TokenSource::Keyring);
        assert_eq!(resolved.token.as_str(), "stored-token");
    }

    #[tokio::test]
    async fn test_cli_fallback() {
        let storage = Arc::new(MockTokenStorage::new());
        let use_case = ResolveTokenUseCase::new(storage);

        let result = use_case.execute(Some("cli-token".to_string())).await;

        assert_eq!(result.unwrap().source, TokenSource::CommandLine);
    }

    #[tokio::test]
    async fn test_malformed_cli_token_ignored() {
        let storage = Arc::new(MockTokenStorage::new());
        let use_case = ResolveTokenUseCase::new(storage);

        assert!(use_case.execute(Some("two words".to_string())).await.is_none());
        assert!(use_case.execute(Some("  ".to_string())).await.is_none());
    }

    #[tokio::test]
    async fn test_no_token_found() {
        let storage = Arc::new(MockTokenStorage::new());
        let use_case = ResolveTokenUseCase::new(storage);

        assert!(use_case.execute(None).await.is_none());
    }
}
