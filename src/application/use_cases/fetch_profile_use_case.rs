//! Current-user fetch.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::UserProfile;
use crate::domain::errors::ApiError;
use crate::domain::ports::{ProfilePort, TokenStoragePort};

/// Loads the signed-in agent's profile with the stored token.
#[derive(Clone)]
pub struct FetchProfileUseCase {
    profile_port: Arc<dyn ProfilePort>,
    storage_port: Arc<dyn TokenStoragePort>,
}

impl FetchProfileUseCase {
    #[must_use]
    pub const fn new(
        profile_port: Arc<dyn ProfilePort>,
        storage_port: Arc<dyn TokenStoragePort>,
    ) -> Self {
        Self {
            profile_port,
            storage_port,
        }
    }

    /// # Errors
    /// [`ApiError::NoTokenAvailable`] without contacting the server when no
    /// token is stored, otherwise whatever the profile port reports.
    pub async fn execute(&self) -> Result<UserProfile, ApiError> {
        let Some(token) = self.storage_port.get_token().await? else {
            warn!("Profile fetch without a stored token");
            return Err(ApiError::NoTokenAvailable);
        };

        debug!("Fetching current user");
        self.profile_port
            .fetch_current_user(&token)
            .await
            .inspect_err(|e| warn!(error = %e, "Profile fetch failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AuthToken;
    use crate::domain::ports::mocks::{MockProfilePort, MockTokenStorage};

    #[tokio::test]
    async fn test_missing_token_issues_no_request() {
        let profile_port = Arc::new(MockProfilePort::new(true));
        let storage = Arc::new(MockTokenStorage::new());
        let use_case = FetchProfileUseCase::new(profile_port.clone(), storage);

        let result = use_case.execute().await;

        assert!(matches!(result, Err(ApiError::NoTokenAvailable)));
        assert_eq!(profile_port.fetch_calls(), 0);
        assert_eq!(
            result.unwrap_err().to_string(),
            "Session expired. Please login again."
        );
    }

    #[tokio::test]
    async fn test_fetch_with_token() {
        let profile_port = Arc::new(MockProfilePort::new(true));
        let storage = Arc::new(MockTokenStorage::with_token(AuthToken::new_unchecked("t")));
        let use_case = FetchProfileUseCase::new(profile_port.clone(), storage);

        let profile = use_case.execute().await.unwrap();

        assert_eq!(&profile, profile_port.profile());
        assert_eq!(profile_port.fetch_calls(), 1);
    }

    #[tokio::test]
    async fn test_server_failure_propagates() {
        let profile_port = Arc::new(MockProfilePort::new(false));
        let storage = Arc::new(MockTokenStorage::with_token(AuthToken::new_unchecked("t")));
        let use_case = FetchProfileUseCase::new(profile_port, storage);

        let err = use_case.execute().await.unwrap_err();
        assert!(err.requires_sign_in());
    }
}
