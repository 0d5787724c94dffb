//! dialdesk - a terminal calling workbench for outbound CRM agents.
//!
//! Agents sign in with a bearer token, walk a caller queue with a simulated
//! call timer, log call outcomes and keep their candidate profile in sync
//! with the CRM's REST API.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "dialdesk";
