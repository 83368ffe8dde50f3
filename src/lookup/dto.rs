//! MusicBrainz web service Data Transfer Objects.
//!
//! These types match EXACTLY what the MusicBrainz API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the lookup module - convert to domain types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! We use two endpoints: /recording?query=... (Lucene search, adds a `score`
//! to each recording) and /recording/{mbid} (direct lookup, no score).

use serde::{Deserialize, Serialize};

/// Response of the recording search endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordingSearchResponse {
    /// Total hits for the query
    pub count: u32,
    /// Offset of this page
    pub offset: u32,
    /// Recordings on this page
    #[serde(default)]
    pub recordings: Vec<Recording>,
}

/// A recording, as returned by both search and direct lookup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Recording {
    /// MusicBrainz recording ID
    pub id: String,
    /// Canonical recording title
    pub title: String,
    /// Search relevance 0-100 (absent on direct lookup)
    pub score: Option<u8>,
    /// Duration in milliseconds
    pub length: Option<u64>,
    /// First release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    pub first_release_date: Option<String>,
    /// Artist credits
    #[serde(default)]
    pub artist_credit: Vec<ArtistCredit>,
    /// Releases this recording appears on
    #[serde(default)]
    pub releases: Vec<Release>,
}

/// Artist credit (can be multiple for collaborations)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistCredit {
    /// The artist
    pub artist: Artist,
    /// How this artist is credited (may differ from official name)
    pub name: Option<String>,
    /// Join phrase (e.g., " & ", " feat. ")
    pub joinphrase: Option<String>,
}

/// Artist info
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Artist {
    /// MusicBrainz artist ID
    pub id: String,
    /// Official artist name
    pub name: String,
    /// Sort name (e.g., "Beatles, The")
    pub sort_name: Option<String>,
}

/// Release (album/single/EP)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Release {
    /// MusicBrainz release ID
    pub id: String,
    /// Release title
    pub title: String,
    /// Release status (Official, Bootleg, etc.)
    pub status: Option<String>,
    /// Release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    pub date: Option<String>,
    /// Country code
    pub country: Option<String>,
    /// Release group (groups same album across editions)
    pub release_group: Option<ReleaseGroup>,
}

/// Release group (e.g., "Abbey Road" across all editions)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroup {
    /// MusicBrainz release group ID
    pub id: String,
    /// Primary type (Album, Single, EP, etc.)
    pub primary_type: Option<String>,
}

/// Error response from the MusicBrainz API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
    pub help: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
