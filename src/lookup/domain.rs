//! Domain types for track lookup.
//!
//! These types are OUR types - the web service's response shapes live in
//! `dto.rs` and get converted into these via the adapter. Handlers and the
//! store speak these types only.

use serde::{Deserialize, Serialize};

/// A search request as posted by callers.
///
/// `track` is the normalization target; everything else passes through to
/// the lookup untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Track title, possibly carrying edition noise
    pub track: String,
    /// Artist name
    pub artist: String,
    /// Release (album) title, if the caller knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    /// Track length in milliseconds, if the caller knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// A track entity submitted for hydration and returned enriched.
///
/// Only `name` and `artist` are required; the rest are disambiguators the
/// caller may or may not have. Hydration fills the gaps from canonical data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Track title (the mutation target for hydration)
    pub name: String,
    /// Artist name
    pub artist: String,
    /// Album title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Album artist, when it differs from the track artist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_artist: Option<String>,
    /// Track length in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// International Standard Recording Code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,
    /// MusicBrainz recording ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_mbid: Option<String>,
    /// MusicBrainz release ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_mbid: Option<String>,
    /// MusicBrainz artist ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_mbid: Option<String>,
}

/// One candidate recording produced by a search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackMatch {
    /// Search relevance, 0-100 (MusicBrainz convention)
    pub score: u8,
    /// Canonical recording title
    pub title: String,
    /// Credited artist string (join phrases applied)
    pub artist: String,
    /// Album title of the preferred release
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Recording length in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// MusicBrainz recording ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_mbid: Option<String>,
    /// MusicBrainz release ID of the preferred release
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_mbid: Option<String>,
    /// MusicBrainz artist ID of the first credited artist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_mbid: Option<String>,
    /// First release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_release_date: Option<String>,
}

/// Search response envelope. The zero value is the empty match list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub matches: Vec<TrackMatch>,
}

/// Errors a lookup can produce.
///
/// Clonable so test doubles can hand out the same error repeatedly.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(String),

    #[error("lookup API error: {0}")]
    Api(String),

    #[error("failed to parse lookup response: {0}")]
    Parse(String),

    #[error("no matching recording found")]
    NoMatches,

    #[error("rate limited - try again later")]
    RateLimited,

    #[error("store error: {0}")]
    Store(String),
}

impl Track {
    /// Merge canonical data from a match into this track, filling only
    /// missing or empty fields. Submitted values always win.
    pub fn merge(&mut self, m: &TrackMatch) {
        if self.name.is_empty() {
            self.name = m.title.clone();
        }
        if self.artist.is_empty() {
            self.artist = m.artist.clone();
        }
        if self.album.is_none() {
            self.album = m.album.clone();
        }
        if self.duration_ms.is_none() {
            self.duration_ms = m.duration_ms;
        }
        if self.recording_mbid.is_none() {
            self.recording_mbid = m.recording_mbid.clone();
        }
        if self.release_mbid.is_none() {
            self.release_mbid = m.release_mbid.clone();
        }
        if self.artist_mbid.is_none() {
            self.artist_mbid = m.artist_mbid.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_match() -> TrackMatch {
        TrackMatch {
            score: 100,
            title: "Canonical Title".to_string(),
            artist: "Canonical Artist".to_string(),
            album: Some("Canonical Album".to_string()),
            duration_ms: Some(201_000),
            recording_mbid: Some("rec-mbid".to_string()),
            release_mbid: Some("rel-mbid".to_string()),
            artist_mbid: Some("art-mbid".to_string()),
            first_release_date: Some("1999-09-09".to_string()),
        }
    }

    #[test]
    fn merge_fills_missing_fields() {
        let mut track = Track {
            name: "Submitted Name".to_string(),
            artist: "Submitted Artist".to_string(),
            ..Default::default()
        };

        track.merge(&full_match());

        // Submitted values kept
        assert_eq!(track.name, "Submitted Name");
        assert_eq!(track.artist, "Submitted Artist");
        // Gaps filled
        assert_eq!(track.album.as_deref(), Some("Canonical Album"));
        assert_eq!(track.duration_ms, Some(201_000));
        assert_eq!(track.recording_mbid.as_deref(), Some("rec-mbid"));
        assert_eq!(track.release_mbid.as_deref(), Some("rel-mbid"));
        assert_eq!(track.artist_mbid.as_deref(), Some("art-mbid"));
    }

    #[test]
    fn merge_does_not_override_existing() {
        let mut track = Track {
            name: "Name".to_string(),
            artist: "Artist".to_string(),
            album: Some("My Album".to_string()),
            recording_mbid: Some("my-mbid".to_string()),
            ..Default::default()
        };

        track.merge(&full_match());

        assert_eq!(track.album.as_deref(), Some("My Album"));
        assert_eq!(track.recording_mbid.as_deref(), Some("my-mbid"));
    }

    #[test]
    fn search_request_decodes_without_optionals() {
        let req: SearchRequest =
            serde_json::from_str(r#"{"track": "Song", "artist": "Band"}"#).unwrap();
        assert_eq!(req.track, "Song");
        assert_eq!(req.artist, "Band");
        assert!(req.release.is_none());
        assert!(req.duration_ms.is_none());
    }

    #[test]
    fn search_request_requires_track_and_artist() {
        assert!(serde_json::from_str::<SearchRequest>(r#"{"artist": "Band"}"#).is_err());
        assert!(serde_json::from_str::<SearchRequest>(r#"{"track": "Song"}"#).is_err());
    }

    #[test]
    fn track_omits_empty_optionals_when_serialized() {
        let track = Track {
            name: "Song".to_string(),
            artist: "Band".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Song", "artist": "Band"}));
    }
}
