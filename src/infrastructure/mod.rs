//! Infrastructure layer with external service adapters.

/// Candidate REST API client.
pub mod api;
/// Application configuration.
pub mod config;
/// Built-in caller directory.
pub mod directory;
/// Seeded notifications.
pub mod inbox;
/// Operating-system URI handlers.
pub mod intents;
/// Contact search.
pub mod search;
/// Token storage adapters.
pub mod storage;

pub use api::CandidateApiClient;
pub use config::{AppConfig, CliArgs, LogLevel, SettingsState, StorageManager};
pub use directory::StaticDirectory;
pub use intents::SystemIntents;
pub use search::{ContactSearch, FuzzySearcher};
pub use storage::{KeyringTokenStorage, SessionTokenStore};
