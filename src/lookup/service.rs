//! MusicBrainz-backed lookup service.
//!
//! Orchestrates the store and the web service client:
//! 1. Consult the local store for already-resolved recordings
//! 2. On a miss, query the MusicBrainz web service
//! 3. Write resolved recordings back to the store
//!
//! Everything here sits behind the [`Lookup`] trait; handlers never see the
//! pool or the client.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::lookup::adapter;
use crate::lookup::client::MusicBrainzClient;
use crate::lookup::domain::{LookupError, SearchRequest, SearchResult, Track, TrackMatch};
use crate::lookup::traits::Lookup;

/// Half-width of the duration window used when a caller supplies a track
/// length, in milliseconds. MusicBrainz durations wobble between editions.
const DURATION_SLACK_MS: u64 = 3_000;

/// Lookup service backed by the MusicBrainz web service and a SQLite store.
///
/// One instance is constructed at startup and shared across all request
/// tasks; the pool and HTTP client are both internally synchronized.
pub struct MusicBrainzService {
    pool: SqlitePool,
    client: MusicBrainzClient,
}

impl MusicBrainzService {
    /// Create a service on top of an initialized store.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            client: MusicBrainzClient::new(),
        }
    }

    /// Create a service with a custom client (pointing at a test server).
    #[cfg(test)]
    pub fn with_client(pool: SqlitePool, client: MusicBrainzClient) -> Self {
        Self { pool, client }
    }

    /// Resolve a single recording by MBID, store first.
    async fn resolve_by_mbid(&self, mbid: &str) -> Result<TrackMatch, LookupError> {
        if let Some(cached) = db::find_by_mbid(&self.pool, mbid)
            .await
            .map_err(|e| LookupError::Store(e.to_string()))?
        {
            tracing::debug!(mbid, "recording served from store");
            return Ok(cached);
        }

        let recording = self.client.lookup_recording(mbid).await?;
        let m = adapter::to_match(recording);
        self.write_back(std::slice::from_ref(&m)).await;
        Ok(m)
    }

    /// Write resolved recordings to the store. Best effort: a failed write
    /// costs a future cache hit, not this request.
    async fn write_back(&self, matches: &[TrackMatch]) {
        for m in matches {
            if let Some(ref mbid) = m.recording_mbid
                && let Err(e) = db::upsert_recording(&self.pool, mbid, m).await
            {
                tracing::warn!(mbid = %mbid, "failed to cache recording: {e}");
            }
        }
    }
}

/// Build the Lucene query for a search request.
fn build_query(req: &SearchRequest) -> String {
    let mut query = format!(
        r#"recording:"{}" AND artist:"{}""#,
        lucene_escape(&req.track),
        lucene_escape(&req.artist)
    );

    if let Some(ref release) = req.release {
        query.push_str(&format!(r#" AND release:"{}""#, lucene_escape(release)));
    }

    if let Some(ms) = req.duration_ms {
        query.push_str(&format!(
            " AND dur:[{} TO {}]",
            ms.saturating_sub(DURATION_SLACK_MS),
            ms + DURATION_SLACK_MS
        ));
    }

    query
}

/// Escape characters that would terminate a quoted Lucene phrase.
fn lucene_escape(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

#[async_trait]
impl Lookup for MusicBrainzService {
    async fn search(&self, req: SearchRequest) -> Result<SearchResult, LookupError> {
        let cached = db::find_matches(&self.pool, &req.track, &req.artist)
            .await
            .map_err(|e| LookupError::Store(e.to_string()))?;
        if !cached.is_empty() {
            tracing::debug!(track = %req.track, artist = %req.artist, "search served from store");
            return Ok(SearchResult { matches: cached });
        }

        let recordings = self.client.search_recordings(&build_query(&req)).await?;
        let matches: Vec<TrackMatch> = recordings.into_iter().map(adapter::to_match).collect();
        tracing::info!(
            track = %req.track,
            artist = %req.artist,
            hits = matches.len(),
            "resolved search via web service"
        );

        self.write_back(&matches).await;
        Ok(SearchResult { matches })
    }

    async fn hydrate(&self, mut track: Track) -> Result<Track, LookupError> {
        let best = match track.recording_mbid {
            Some(ref mbid) => self.resolve_by_mbid(mbid).await?,
            None => {
                let req = SearchRequest {
                    track: track.name.clone(),
                    artist: track.artist.clone(),
                    release: track.album.clone(),
                    duration_ms: track.duration_ms,
                };
                self.search(req)
                    .await?
                    .matches
                    .into_iter()
                    .max_by_key(|m| m.score)
                    .ok_or(LookupError::NoMatches)?
            }
        };

        track.merge(&best);
        Ok(track)
    }
}
