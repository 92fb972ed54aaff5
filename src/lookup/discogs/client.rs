//! Discogs HTTP client
//!
//! Handles communication with the Discogs web service.
//! See: https://www.discogs.com/developers
//!
//! Authentication uses a personal access token passed as the `token` query
//! parameter, the same way the API's curl examples do.

use super::{adapter, dto};
use crate::lookup::domain::{ContributorCredit, LookupError, SecondaryMatch};
use crate::lookup::retry::{self, RetryPolicy};

/// Discogs API client.
pub struct DiscogsClient {
    http_client: reqwest::Client,
    base_url: String,
    token: String,
    retry: RetryPolicy,
}

impl DiscogsClient {
    /// Create a new client with the given API token.
    pub fn new(user_agent: &str, token: impl Into<String>, retry: RetryPolicy) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: "https://api.discogs.com".to_string(),
            token: token.into(),
            retry,
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let mut client = Self::new("test-agent", token, RetryPolicy::default());
        client.base_url = base_url.into();
        client
    }

    /// Search for a release by barcode; `None` when nothing matches.
    pub async fn search_release(
        &self,
        barcode: &str,
    ) -> Result<Option<SecondaryMatch>, LookupError> {
        let url = format!(
            "{}/database/search?q={}&token={}&type=release",
            self.base_url,
            urlencoding::encode(barcode),
            urlencoding::encode(&self.token)
        );
        let response: dto::SearchResponse = self.get_json(&url).await?;
        Ok(adapter::to_match(response))
    }

    /// Fetch the contributor credit list for a release.
    pub async fn fetch_credits(
        &self,
        release_id: u64,
    ) -> Result<Vec<ContributorCredit>, LookupError> {
        let url = format!(
            "{}/releases/{}?token={}",
            self.base_url,
            release_id,
            urlencoding::encode(&self.token)
        );
        let response: dto::ReleaseResponse = self.get_json(&url).await?;
        Ok(adapter::to_credits(response))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DiscogsClient::new("ua", "secret-token", RetryPolicy::default());
        assert_eq!(client.base_url, "https://api.discogs.com");
        assert_eq!(client.token, "secret-token");
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = DiscogsClient::with_base_url("tok", "http://localhost:9090");
        assert_eq!(client.base_url, "http://localhost:9090");
    }
}
