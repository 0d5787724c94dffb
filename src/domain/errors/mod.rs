//! Domain error types.

mod api_error;
mod form_error;
mod sync_error;

pub use api_error::ApiError;
pub use form_error::FormError;
pub use sync_error::SyncError;
