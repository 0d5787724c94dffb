use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::use_cases::{FetchProfileUseCase, UpdateProfileUseCase};
use crate::domain::entities::{ProfileUpdate, UserProfile};
use crate::domain::errors::{ApiError, SyncError};

/// Who asked for a profile fetch. Each requester keeps its own ticket so a
/// late reply for a closed view can be told apart from a current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileRequester {
    Drawer,
    ProfileScreen,
}

#[derive(Debug)]
pub enum Action {
    ProfileLoaded {
        requester: ProfileRequester,
        ticket: u64,
        result: Result<UserProfile, ApiError>,
    },
    ProfileSaved {
        ticket: u64,
        result: Result<UserProfile, SyncError>,
    },
}

#[derive(Debug)]
pub enum BackendCommand {
    FetchProfile {
        requester: ProfileRequester,
        ticket: u64,
    },
    UpdateProfile {
        ticket: u64,
        current: UserProfile,
        update: ProfileUpdate,
    },
}

pub struct Backend {
    fetch_profile: FetchProfileUseCase,
    update_profile: UpdateProfileUseCase,
    command_rx: mpsc::UnboundedReceiver<BackendCommand>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Backend {
    pub const fn new(
        fetch_profile: FetchProfileUseCase,
        update_profile: UpdateProfileUseCase,
        command_rx: mpsc::UnboundedReceiver<BackendCommand>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            fetch_profile,
            update_profile,
            command_rx,
            action_tx,
        }
    }

    pub async fn run(mut self) {
        info!("Backend worker started");
        while let Some(command) = self.command_rx.recv().await {
            self.handle_command(command).await;
        }
        info!("Backend worker stopped");
    }

    async fn handle_command(&self, command: BackendCommand) {
        let action = match command {
            BackendCommand::FetchProfile { requester, ticket } => {
                let result = self.fetch_profile.execute().await;
                match &result {
                    Ok(profile) => debug!(?requester, ticket, user_id = %profile.id(), "Profile loaded"),
                    Err(e) => warn!(?requester, ticket, error = %e, "Profile load failed"),
                }
                Action::ProfileLoaded {
                    requester,
                    ticket,
                    result,
                }
            }
            BackendCommand::UpdateProfile {
                ticket,
                current,
                update,
            } => {
                let result = self.update_profile.execute(&current, update).await;
                if let Err(e) = &result {
                    warn!(ticket, error = %e, "Profile save failed");
                }
                Action::ProfileSaved { ticket, result }
            }
        };

        if self.action_tx.send(action).is_err() {
            debug!("UI closed before backend reply was delivered");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::entities::{AuthToken, ProfileStatus};
    use crate::domain::ports::TokenStoragePort;
    use crate::domain::ports::mocks::{MockProfilePort, MockTokenStorage};

    async fn spawn_backend(
        storage: Arc<MockTokenStorage>,
        port: Arc<MockProfilePort>,
    ) -> (
        mpsc::UnboundedSender<BackendCommand>,
        mpsc::UnboundedReceiver<Action>,
    ) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let backend = Backend::new(
            FetchProfileUseCase::new(port.clone(), storage.clone()),
            UpdateProfileUseCase::new(port, storage),
            command_rx,
            action_tx,
        );
        tokio::spawn(backend.run());
        (command_tx, action_rx)
    }

    #[tokio::test]
    async fn test_fetch_without_token_reports_session_expired() {
        let (tx, mut rx) = spawn_backend(
            Arc::new(MockTokenStorage::new()),
            Arc::new(MockProfilePort::new(true)),
        )
        .await;

        tx.send(BackendCommand::FetchProfile {
            requester: ProfileRequester::Drawer,
            ticket: 7,
        })
        .unwrap();

        let Some(Action::ProfileLoaded {
            requester,
            ticket,
            result,
        }) = rx.recv().await
        else {
            panic!("expected profile reply");
        };
        assert_eq!(requester, ProfileRequester::Drawer);
        assert_eq!(ticket, 7);
        assert_eq!(
            result.unwrap_err().to_string(),
            "Session expired. Please login again."
        );
    }

    #[tokio::test]
    async fn test_update_echoes_ticket_and_applies_edits() {
        let storage = Arc::new(MockTokenStorage::new());
        storage
            .store_token(&AuthToken::new_unchecked("bearer"))
            .await
            .unwrap();
        let port = Arc::new(MockProfilePort::new(true));
        let (tx, mut rx) = spawn_backend(storage, port).await;

        let current = UserProfile::default();
        let mut update = current.to_update();
        update.status = ProfileStatus::Away;
        tx.send(BackendCommand::UpdateProfile {
            ticket: 3,
            current,
            update,
        })
        .unwrap();

        let Some(Action::ProfileSaved { ticket, result }) = rx.recv().await else {
            panic!("expected save reply");
        };
        assert_eq!(ticket, 3);
        assert_eq!(result.unwrap().status(), ProfileStatus::Away);
    }
}
