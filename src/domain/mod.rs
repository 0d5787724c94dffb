//! Domain layer with core business entities and port definitions.

/// Transient popup messages.
pub mod alert;
/// Call-session timer and status machine.
pub mod call_session;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Screens and drawer targets.
pub mod navigation;
/// Port definitions.
pub mod ports;

pub use alert::{Alert, AlertLevel};
pub use call_session::{CallSession, CallStatus, SessionEvent};
pub use entities::{AuthToken, UserProfile};
pub use errors::{ApiError, FormError, SyncError};
pub use navigation::{NavTarget, Screen};
pub use ports::{DeviceIntentPort, DirectoryPort, ProfilePort, TokenStoragePort};
