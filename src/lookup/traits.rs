//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations to drive the batch pipeline
//! without a network.

use async_trait::async_trait;

use super::discogs::DiscogsClient;
use super::domain::{ContributorCredit, LookupError, ReleaseMetadata, SecondaryMatch, TrackEntry};
use super::musicbrainz::MusicBrainzClient;

/// Trait for the primary (bibliographic) release service.
#[async_trait]
pub trait PrimaryLookup: Send + Sync {
    /// Search for a release by barcode; `None` means no match.
    async fn search_release(&self, barcode: &str)
    -> Result<Option<ReleaseMetadata>, LookupError>;

    /// Fetch the ordered track listing for a release.
    async fn fetch_tracklist(&self, release_id: &str) -> Result<Vec<TrackEntry>, LookupError>;
}

/// Trait for the secondary (discography) service used for contributor credits.
#[async_trait]
pub trait SecondaryLookup: Send + Sync {
    /// Search for a candidate release by barcode; `None` means no match.
    async fn search_release(&self, barcode: &str) -> Result<Option<SecondaryMatch>, LookupError>;

    /// Fetch the contributor credit list for a candidate release.
    async fn fetch_credits(&self, release_id: u64) -> Result<Vec<ContributorCredit>, LookupError>;
}

// Implement traits for real clients

#[async_trait]
impl PrimaryLookup for MusicBrainzClient {
    async fn search_release(
        &self,
        barcode: &str,
    ) -> Result<Option<ReleaseMetadata>, LookupError> {
        self.search_release(barcode).await
    }

    async fn fetch_tracklist(&self, release_id: &str) -> Result<Vec<TrackEntry>, LookupError> {
        self.fetch_tracklist(release_id).await
    }
}

#[async_trait]
impl SecondaryLookup for DiscogsClient {
    async fn search_release(&self, barcode: &str) -> Result<Option<SecondaryMatch>, LookupError> {
        self.search_release(barcode).await
    }

    async fn fetch_credits(&self, release_id: u64) -> Result<Vec<ContributorCredit>, LookupError> {
        self.fetch_credits(release_id).await
    }
}

/// Mock clients for testing the driver without a network.
#[cfg(test)]
pub mod mocks {
    use std::collections::HashMap;

    use super::*;

    /// Mock primary service keyed by barcode / release id.
    #[derive(Default)]
    pub struct MockPrimary {
        /// Releases returned by barcode search
        pub releases: HashMap<String, ReleaseMetadata>,
        /// Track listings returned by release id
        pub tracklists: HashMap<String, Vec<TrackEntry>>,
        /// Errors returned by barcode search (takes precedence)
        pub search_errors: HashMap<String, LookupError>,
        /// Errors returned by tracklist fetch (takes precedence)
        pub tracklist_errors: HashMap<String, LookupError>,
    }

    impl MockPrimary {
        pub fn with_release(mut self, barcode: &str, release: ReleaseMetadata) -> Self {
            self.releases.insert(barcode.to_string(), release);
            self
        }

        pub fn with_tracklist(mut self, release_id: &str, tracks: Vec<TrackEntry>) -> Self {
            self.tracklists.insert(release_id.to_string(), tracks);
            self
        }

        pub fn with_tracklist_error(mut self, release_id: &str, error: LookupError) -> Self {
            self.tracklist_errors.insert(release_id.to_string(), error);
            self
        }
    }

    #[async_trait]
    impl PrimaryLookup for MockPrimary {
        async fn search_release(
            &self,
            barcode: &str,
        ) -> Result<Option<ReleaseMetadata>, LookupError> {
            if let Some(err) = self.search_errors.get(barcode) {
                return Err(err.clone());
            }
            Ok(self.releases.get(barcode).cloned())
        }

        async fn fetch_tracklist(
            &self,
            release_id: &str,
        ) -> Result<Vec<TrackEntry>, LookupError> {
            if let Some(err) = self.tracklist_errors.get(release_id) {
                return Err(err.clone());
            }
            Ok(self.tracklists.get(release_id).cloned().unwrap_or_default())
        }
    }

    /// Mock secondary service keyed by barcode / release id.
    #[derive(Default)]
    pub struct MockSecondary {
        pub matches: HashMap<String, SecondaryMatch>,
        pub credits: HashMap<u64, Vec<ContributorCredit>>,
        pub search_errors: HashMap<String, LookupError>,
    }

    impl MockSecondary {
        pub fn with_credits(
            mut self,
            barcode: &str,
            release_id: u64,
            credits: Vec<ContributorCredit>,
        ) -> Self {
            self.matches
                .insert(barcode.to_string(), SecondaryMatch { id: release_id });
            self.credits.insert(release_id, credits);
            self
        }
    }

    #[async_trait]
    impl SecondaryLookup for MockSecondary {
        async fn search_release(
            &self,
            barcode: &str,
        ) -> Result<Option<SecondaryMatch>, LookupError> {
            if let Some(err) = self.search_errors.get(barcode) {
                return Err(err.clone());
            }
            Ok(self.matches.get(barcode).cloned())
        }

        async fn fetch_credits(
            &self,
            release_id: u64,
        ) -> Result<Vec<ContributorCredit>, LookupError> {
            Ok(self.credits.get(&release_id).cloned().unwrap_or_default())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_primary_no_match() {
            let mock = MockPrimary::default();
            let result = mock.search_release("0000").await.unwrap();
            assert!(result.is_none());
        }

        #[tokio::test]
        async fn test_mock_primary_with_release() {
            let release = ReleaseMetadata {
                id: "rel-1".to_string(),
                title: Some("Album".to_string()),
                ..Default::default()
            };
            let mock = MockPrimary::default().with_release("12345", release);

            let found = mock.search_release("12345").await.unwrap().unwrap();
            assert_eq!(found.id, "rel-1");
        }

        #[tokio::test]
        async fn test_mock_secondary_credits() {
            let mock = MockSecondary::default().with_credits(
                "12345",
                99,
                vec![ContributorCredit {
                    name: "Jane".to_string(),
                    role: "Producer".to_string(),
                }],
            );

            let found = mock.search_release("12345").await.unwrap().unwrap();
            let credits = mock.fetch_credits(found.id).await.unwrap();
            assert_eq!(credits[0].name, "Jane");
        }
    }
}
