//! Profile save.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{ProfileUpdate, UserProfile};
use crate::domain::errors::{ApiError, SyncError};
use crate::domain::ports::{ProfilePort, TokenStoragePort};

/// Validates and sends profile edits. No retry and no rollback: a failed
/// save leaves the caller's profile untouched.
#[derive(Clone)]
pub struct UpdateProfileUseCase {
    profile_port: Arc<dyn ProfilePort>,
    storage_port: Arc<dyn TokenStoragePort>,
}

impl UpdateProfileUseCase {
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

    /// Sends `update` once and returns `current` with the edits applied.
    ///
    /// # Errors
    /// Missing token, invalid fields or any server failure.
    pub async fn execute(
        &self,
        current: &UserProfile,
        update: ProfileUpdate,
    ) -> Result<UserProfile, SyncError> {
        let Some(token) = self.storage_port.get_token().await? else {
            warn!("Profile save without a stored token");
            return Err(ApiError::NoTokenAvailable.into());
        };

        update.validate()?;

        debug!(status = %update.status, "Sending profile update");
        self.profile_port
            .update_profile(&token, &update)
            .await
            .inspect_err(|e| warn!(error = %e, "Profile update failed"))?;

        info!("Profile updated");
        Ok(current.with_update(&update))
    }
}
