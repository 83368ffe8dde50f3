//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header and rate limits to 1 req/sec.

use super::dto;
use crate::lookup::domain::LookupError;

/// How many search hits to request per query.
const SEARCH_LIMIT: u32 = 10;

/// User agent string - MusicBrainz requires this
const USER_AGENT: &str = concat!(
    "TrackMatch/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/trackmatch)"
);

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MusicBrainzClient {
    /// Create a new client
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: "https://musicbrainz.org/ws/2".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Run a Lucene query against the recording search endpoint.
    pub async fn search_recordings(
        &self,
        query: &str,
    ) -> Result<Vec<dto::Recording>, LookupError> {
        let url = format!("{}/recording", self.base_url);
        let limit = SEARCH_LIMIT.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("query", query),
                ("fmt", "json"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let response = Self::check_status(response).await?;

        response
            .json::<dto::RecordingSearchResponse>()
            .await
            .map(|r| r.recordings)
            .map_err(|e| LookupError::Parse(e.to_string()))
    }

    /// Look up a single recording by its MusicBrainz ID.
    pub async fn lookup_recording(
        &self,
        mbid: &str,
    ) -> Result<dto::Recording, LookupError> {
        let url = format!("{}/recording/{}", self.base_url, mbid);

        let response = self
            .http_client
            .get(&url)
            .query(&[("fmt", "json"), ("inc", "artists+releases")])
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let response = Self::check_status(response).await?;

        response
            .json::<dto::Recording>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))
    }

    /// Map error statuses onto the lookup error taxonomy.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, LookupError> {
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NoMatches);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LookupError::RateLimited);
        }

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(LookupError::Api(error.error));
            }
            return Err(LookupError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        Ok(response)
    }
}

impl Default for MusicBrainzClient {
    fn default() -> Self {
        Self::new()
    }
}
