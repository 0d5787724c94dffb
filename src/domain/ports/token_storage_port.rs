//! Token storage port definition.

use async_trait::async_trait;

use crate::domain::entities::AuthToken;
use crate::domain::errors::ApiError;

/// Port for the locally stored bearer token.
#[async_trait]
pub trait TokenStoragePort: Send + Sync {
    /// Retrieves stored token.
    async fn get_token(&self) -> Result<Option<AuthToken>, ApiError>;

    /// Stores token securely.
    async fn store_token(&self, token: &AuthToken) -> Result<(), ApiError>;

    /// Deletes stored token. Deleting a missing token succeeds.
    async fn delete_token(&self) -> Result<(), ApiError>;

    /// Checks if token exists.
    async fn has_token(&self) -> Result<bool, ApiError> {
        Ok(self.get_token().await?.is_some())
    }
}
