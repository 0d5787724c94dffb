//! Use case implementations.

mod fetch_profile_use_case;
mod login_use_case;
mod resolve_token_use_case;
mod update_profile_use_case;

pub use fetch_profile_use_case::FetchProfileUseCase;
pub use login_use_case::LoginUseCase;
pub use resolve_token_use_case::{ResolveTokenUseCase, ResolvedToken};
pub use update_profile_use_case::UpdateProfileUseCase;
