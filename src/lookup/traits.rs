//! The lookup capability trait.
//!
//! This is the seam between the HTTP handlers and the lookup backend.
//! Production code uses [`MusicBrainzService`](super::service::MusicBrainzService);
//! tests substitute the mock below and assert on what reached it.

use async_trait::async_trait;

use super::domain::{LookupError, SearchRequest, SearchResult, Track};

/// A service that resolves track metadata against a persistent store.
///
/// Implementations must be safe for concurrent use from many request tasks;
/// the server shares one instance process-wide behind an `Arc`.
#[async_trait]
pub trait Lookup: Send + Sync {
    /// Search for recordings matching the request.
    ///
    /// An empty match list is a successful result, not an error.
    async fn search(&self, req: SearchRequest) -> Result<SearchResult, LookupError>;

    /// Enrich a partially-known track with canonical metadata.
    async fn hydrate(&self, track: Track) -> Result<Track, LookupError>;
}
