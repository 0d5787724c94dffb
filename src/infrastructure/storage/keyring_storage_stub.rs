//! Process-local token storage for builds without keyring support.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::AuthToken;
use crate::domain::errors::ApiError;
use crate::domain::ports::TokenStoragePort;

/// Keeps the token in memory until the process exits.
/// Used when keyring feature is disabled.
#[derive(Default)]
pub struct KeyringTokenStorage {
    token: RwLock<Option<AuthToken>>,
}

impl KeyringTokenStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names are ignored without a keyring.
    #[must_use]
    pub fn with_names(_service: impl Into<String>, _user: impl Into<String>) -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStoragePort for KeyringTokenStorage {
    async fn get_token(&self) -> Result<Option<AuthToken>, ApiError> {
        Ok(self.token.read().await.clone())
    }

    async fn store_token(&self, token: &AuthToken) -> Result<(), ApiError> {
        debug!("Keyring feature disabled - token kept for this session only");
        *self.token.write().await = Some(token.clone());
        Ok(())
    }

    async fn delete_token(&self) -> Result<(), ApiError> {
        *self.token.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_only_storage() {
        let storage = KeyringTokenStorage::new();
        assert!(!storage.has_token().await.unwrap());

        storage
            .store_token(&AuthToken::new_unchecked("abc"))
            .await
            .unwrap();
        assert!(storage.has_token().await.unwrap());

        storage.delete_token().await.unwrap();
        assert!(!storage.has_token().await.unwrap());
    }
}
