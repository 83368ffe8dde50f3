//! Adapter layer: convert MusicBrainz DTOs to domain models.
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! If MusicBrainz changes their response format, only this file and dto.rs
//! need to change.

use super::dto;
use crate::lookup::domain::TrackMatch;

/// Convert a recording (search hit or direct lookup) to a [`TrackMatch`].
///
/// Direct lookups carry no score; they are exact matches and get 100.
pub fn to_match(recording: dto::Recording) -> TrackMatch {
    let artist = build_artist_string(&recording.artist_credit);
    let artist_mbid = recording.artist_credit.first().map(|c| c.artist.id.clone());

    let (album, release_mbid) = match preferred_release(&recording.releases) {
        Some(release) => (Some(release.title.clone()), Some(release.id.clone())),
        None => (None, None),
    };

    TrackMatch {
        score: recording.score.unwrap_or(100),
        title: recording.title,
        artist: artist.unwrap_or_default(),
        album,
        duration_ms: recording.length,
        recording_mbid: Some(recording.id),
        release_mbid,
        artist_mbid,
        first_release_date: recording.first_release_date,
    }
}

/// Build a combined artist string from artist credits.
fn build_artist_string(credits: &[dto::ArtistCredit]) -> Option<String> {
    if credits.is_empty() {
        return None;
    }

    let mut result = String::new();
    for credit in credits {
        // Use credited name if available, otherwise official name
        let name = credit.name.as_ref().unwrap_or(&credit.artist.name);
        result.push_str(name);

        // Add join phrase if present (e.g., " & ", " feat. ")
        if let Some(ref join) = credit.joinphrase {
            result.push_str(join);
        }
    }

    Some(result)
}

/// Pick the release to report for a recording.
///
/// Prefer official album releases over singles and bootlegs, then any
/// official release, then whatever is first.
fn preferred_release(releases: &[dto::Release]) -> Option<&dto::Release> {
    releases
        .iter()
        .find(|r| {
            r.status.as_deref() == Some("Official")
                && r.release_group
                    .as_ref()
                    .and_then(|rg| rg.primary_type.as_deref())
                    == Some("Album")
        })
        .or_else(|| {
            releases
                .iter()
                .find(|r| r.status.as_deref() == Some("Official"))
        })
        .or_else(|| releases.first())
}
