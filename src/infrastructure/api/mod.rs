//! Candidate REST API adapter.

mod client;
mod dto;

pub use client::{CandidateApiClient, DEFAULT_API_BASE};
