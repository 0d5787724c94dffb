//! Token store layering the current sign-in over durable storage.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::AuthToken;
use crate::domain::errors::ApiError;
use crate::domain::ports::TokenStoragePort;

/// Serves the token of the running session first and falls back to the
/// durable store. A sign-in with "remember" off only lives here.
pub struct SessionTokenStore {
    session: RwLock<Option<AuthToken>>,
    durable: Arc<dyn TokenStoragePort>,
}

impl SessionTokenStore {
    #[must_use]
    pub fn new(durable: Arc<dyn TokenStoragePort>) -> Self {
        Self {
            session: RwLock::new(None),
            durable,
        }
    }

    /// Keeps `token` until sign-out or exit without persisting it.
    pub async fn hold(&self, token: AuthToken) {
        debug!("Holding token for this session only");
        *self.session.write().await = Some(token);
    }
}

#[async_trait]
impl TokenStoragePort for SessionTokenStore {
    async fn get_token(&self) -> Result<Option<AuthToken>, ApiError> {
        if let Some(token) = self.session.read().await.clone() {
            return Ok(Some(token));
        }
        self.durable.get_token().await
    }

    async fn store_token(&self, token: &AuthToken) -> Result<(), ApiError> {
        self.durable.store_token(token).await?;
        *self.session.write().await = Some(token.clone());
        Ok(())
    }

    async fn delete_token(&self) -> Result<(), ApiError> {
        *self.session.write().await = None;
        self.durable.delete_token().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockTokenStorage;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_held_token_is_not_persisted() {
        let durable = Arc::new(MockTokenStorage::new());
        let store = SessionTokenStore::new(durable.clone());

        store.hold(AuthToken::new_unchecked("session")).await;

        assert_eq!(
            store.get_token().await.unwrap().unwrap().as_str(),
            "session"
        );
        assert!(!durable.has_token().await.unwrap());
    }

    #[tokio::test]
    async fn test_falls_back_to_durable_token() {
        let durable = Arc::new(MockTokenStorage::with_token(AuthToken::new_unchecked(
            "stored",
        )));
        let store = SessionTokenStore::new(durable);

        assert_eq!(store.get_token().await.unwrap().unwrap().as_str(), "stored");
    }

    #[tokio::test]
    async fn test_delete_clears_both_layers() {
        let durable = Arc::new(MockTokenStorage::new());
        let store = SessionTokenStore::new(durable.clone());
        store
            .store_token(&AuthToken::new_unchecked("both"))
            .await
            .unwrap();
        assert!(durable.has_token().await.unwrap());

        assert_ok!(store.delete_token().await);

        assert!(!store.has_token().await.unwrap());
        assert!(!durable.has_token().await.unwrap());
    }
}
