//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a meaningful User-Agent header; the caller
//! supplies it through configuration (usage policy), it is never prompted for.

use super::{adapter, dto};
use crate::lookup::domain::{LookupError, ReleaseMetadata, TrackEntry};
use crate::lookup::retry::{self, RetryPolicy};

/// MusicBrainz API client.
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl MusicBrainzClient {
    /// Create a new client with the caller-supplied User-Agent.
    pub fn new(user_agent: &str, retry: RetryPolicy) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: "https://musicbrainz.org/ws/2".to_string(),
            retry,
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(user_agent: &str, base_url: impl Into<String>) -> Self {
        let mut client = Self::new(user_agent, RetryPolicy::default());
        client.base_url = base_url.into();
        client
    }

    /// Search for a release by barcode.
    ///
    /// Returns the first matching release normalized to domain form, or
    /// `None` when the service reports no match.
    pub async fn search_release(
        &self,
        barcode: &str,
    ) -> Result<Option<ReleaseMetadata>, LookupError> {
        let url = format!(
            "{}/release/?query=barcode:{}&fmt=json",
            self.base_url,
            urlencoding::encode(barcode)
        );
        let response: dto::ReleaseSearchResponse = self.get_json(&url).await?;
        Ok(adapter::to_release(response))
    }

    /// Fetch the full track listing for a release.
    pub async fn fetch_tracklist(&self, release_id: &str) -> Result<Vec<TrackEntry>, LookupError> {
        let url = format!(
            "{}/release/{}?inc=recordings&fmt=json",
            self.base_url, release_id
        );
        let response: dto::TracklistResponse = self.get_json(&url).await?;
        adapter::to_tracklist(response)
    }

    /// GET a URL with the retry policy and parse the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, LookupError> {
        let response = retry::execute(&self.retry, || async {
            self.http_client
                .get(url)
                .send()
                .await
                .map_err(|e| LookupError::Network(e.to_string()))
        })
        .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::ApiError(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))
    }
}
