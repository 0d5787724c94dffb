//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateful services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{LoginRequest, LoginResponse, TokenSource};
pub use use_cases::{
    FetchProfileUseCase, LoginUseCase, ResolveTokenUseCase, ResolvedToken, UpdateProfileUseCase,
};
