//! Track lookup module - resolves track metadata against MusicBrainz.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`dto.rs`) - Exact MusicBrainz response shapes
//! - **Adapter** - Converts DTOs to domain models
//! - **Client** - HTTP client for the MusicBrainz web service
//! - **Service** - Store-first orchestration of search and hydration
//! - **Traits** - The [`Lookup`] capability seam the HTTP handlers consume
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test API contracts independently
//! 3. Handlers can be tested against a mock lookup

pub mod adapter;
pub mod client;
pub mod domain;
pub mod dto;
pub mod service;
pub mod traits;

pub use domain::{LookupError, SearchRequest, SearchResult, Track, TrackMatch};
pub use service::MusicBrainzService;
pub use traits::Lookup;
