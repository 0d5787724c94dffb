//! Candidate profile API port.

use async_trait::async_trait;

use crate::domain::entities::{AuthToken, ProfileUpdate, UserProfile};
use crate::domain::errors::ApiError;

/// Remote access to the signed-in agent's profile.
#[async_trait]
pub trait ProfilePort: Send + Sync {
    /// Fetches the profile the token belongs to.
    async fn fetch_current_user(&self, token: &AuthToken) -> Result<UserProfile, ApiError>;

    /// Sends the edited profile fields.
    async fn update_profile(&self, token: &AuthToken, update: &ProfileUpdate)
    -> Result<(), ApiError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use crate::domain::entities::ProfileStatus;

    /// Profile port that records calls instead of touching the network.
    pub struct MockProfilePort {
        should_succeed: AtomicBool,
        profile: UserProfile,
        fetch_calls: AtomicUsize,
        update_calls: AtomicUsize,
        last_update: Mutex<Option<ProfileUpdate>>,
    }

    impl MockProfilePort {
        /// Creates new mock.
        pub fn new(should_succeed: bool) -> Self {
            Self {
                should_succeed: AtomicBool::new(should_succeed),
                profile: UserProfile::new(
                    "664a",
                    "Test Agent",
                    "agent@example.com",
                    "+1 555 0100",
                    ProfileStatus::Available,
                    "caller",
                ),
                fetch_calls: AtomicUsize::new(0),
                update_calls: AtomicUsize::new(0),
                last_update: Mutex::new(None),
            }
        }

        /// Sets success behavior.
        pub fn set_should_succeed(&self, value: bool) {
            self.should_succeed.store(value, Ordering::SeqCst);
        }

        pub fn profile(&self) -> &UserProfile {
            &self.profile
        }

        pub fn fetch_calls(&self) -> usize {
            self.fetch_calls.load(Ordering::SeqCst)
        }

        pub fn update_calls(&self) -> usize {
            self.update_calls.load(Ordering::SeqCst)
        }

        pub fn last_update(&self) -> Option<ProfileUpdate> {
            self.last_update.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProfilePort for MockProfilePort {
        async fn fetch_current_user(&self, _token: &AuthToken) -> Result<UserProfile, ApiError> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            if self.should_succeed.load(Ordering::SeqCst) {
                Ok(self.profile.clone())
            } else {
                Err(ApiError::rejected("mock rejection"))
            }
        }

        async fn update_profile(
            &self,
            _token: &AuthToken,
            update: &ProfileUpdate,
        ) -> Result<(), ApiError> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_update.lock().unwrap() = Some(update.clone());
            if self.should_succeed.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(ApiError::http(500, "mock failure"))
            }
        }
    }
}
