//! Batch driver - sequences identifiers through lookup and mapping.
//!
//! One identifier's full lookup-and-map cycle completes before the next
//! begins; there is no fan-out and no shared state between identifiers. The
//! driver owns no mapping logic, only sequencing and error containment:
//! any failed stage skips that identifier with a warning and the run moves
//! on. A run never aborts because of a single barcode.

use std::time::Duration;

use crate::lookup::{
    DiscogsClient, MusicBrainzClient, PrimaryLookup, RetryPolicy, SecondaryLookup,
};
use crate::mapper::{self, TabularRow};
use crate::marc::MarcRecord;

/// Everything the pipeline needs, assembled up front by the CLI layer.
///
/// There are no ambient globals: credentials, base behavior and the retry
/// policy all travel through this struct.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// User-Agent sent to both services (MusicBrainz usage policy)
    pub user_agent: String,
    /// Discogs personal access token, if the user has one
    pub discogs_token: Option<String>,
    /// Whether to enrich records with Discogs contributor credits
    pub enable_contributor_enrichment: bool,
    /// Shared HTTP retry policy
    pub retry: RetryPolicy,
    /// Courtesy pause inserted between identifiers. This paces the batch as a
    /// whole; it is not a per-request rate limiter.
    pub pacing: Duration,
}

impl BatchConfig {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            discogs_token: None,
            enable_contributor_enrichment: false,
            retry: RetryPolicy::default(),
            pacing: Duration::from_millis(1100),
        }
    }
}

/// The stage at which an identifier failed; named in the skip log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Search,
    Tracklist,
    ContributorSearch,
    ContributorDetail,
    Mapping,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Search => "search",
            Stage::Tracklist => "tracklist",
            Stage::ContributorSearch => "contributor search",
            Stage::ContributorDetail => "contributor detail",
            Stage::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

/// Accumulated results of a run, handed to the sink once at the end.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// MARC records in processing order (found + not-found)
    pub records: Vec<MarcRecord>,
    /// Tabular rows, parallel to `records`
    pub rows: Vec<TabularRow>,
    /// Identifiers that produced a full record
    pub found: usize,
    /// Identifiers that produced the not-found pair
    pub not_found: usize,
    /// Identifiers skipped after a stage failure (absent from both outputs)
    pub skipped: usize,
}

/// Sequential lookup-and-map pipeline over the two services.
pub struct BatchService<P, S> {
    primary: P,
    secondary: Option<S>,
    /// Courtesy pause between identifiers, from [`BatchConfig::pacing`]
    pacing: Duration,
}

impl BatchService<MusicBrainzClient, DiscogsClient> {
    /// Build the production pipeline from configuration.
    pub fn from_config(config: &BatchConfig) -> Self {
        let primary = MusicBrainzClient::new(&config.user_agent, config.retry.clone());
        let secondary = if config.enable_contributor_enrichment {
            config
                .discogs_token
                .as_ref()
                .map(|token| DiscogsClient::new(&config.user_agent, token, config.retry.clone()))
        } else {
            None
        };

        let mut service = Self::new(primary, secondary);
        service.pacing = config.pacing;
        service
    }
}

impl<P: PrimaryLookup, S: SecondaryLookup> BatchService<P, S> {
    pub fn new(primary: P, secondary: Option<S>) -> Self {
        Self {
            primary,
            secondary,
            pacing: Duration::ZERO,
        }
    }

    /// Process all identifiers in order and accumulate the outputs.
    pub async fn process(&self, identifiers: &[String]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for (i, barcode) in identifiers.iter().enumerate() {
            tracing::debug!(barcode, "processing identifier");

            match self.process_one(barcode).await {
                Ok(Processed::Found(record, row)) => {
                    outcome.records.push(record);
                    outcome.rows.push(row);
                    outcome.found += 1;
                }
                Ok(Processed::NotFound(record, row)) => {
                    tracing::info!(barcode, "no matching release");
                    outcome.records.push(record);
                    outcome.rows.push(row);
                    outcome.not_found += 1;
                }
                Err((stage, error)) => {
                    tracing::warn!(barcode, stage = %stage, %error, "skipping identifier");
                    outcome.skipped += 1;
                }
            }

            if !self.pacing.is_zero() && i + 1 < identifiers.len() {
                tokio::time::sleep(self.pacing).await;
            }
        }

        outcome
    }

    /// Run the full cycle for one identifier.
    async fn process_one(&self, barcode: &str) -> Result<Processed, (Stage, String)> {
        let release = self
            .primary
            .search_release(barcode)
            .await
            .map_err(|e| (Stage::Search, e.to_string()))?;

        // "No match" is a business outcome, not a failure: the not-found
        // pair is emitted and no further lookups happen for this barcode.
        let Some(release) = release else {
            let (record, row) = mapper::not_found_pair();
            return Ok(Processed::NotFound(record, row));
        };

        let tracks = self
            .primary
            .fetch_tracklist(&release.id)
            .await
            .map_err(|e| (Stage::Tracklist, e.to_string()))?;

        let credits = match &self.secondary {
            Some(secondary) => {
                let candidate = secondary
                    .search_release(barcode)
                    .await
                    .map_err(|e| (Stage::ContributorSearch, e.to_string()))?;
                match candidate {
                    Some(candidate) => secondary
                        .fetch_credits(candidate.id)
                        .await
                        .map_err(|e| (Stage::ContributorDetail, e.to_string()))?,
                    // No secondary match just means no 700 fields
                    None => Vec::new(),
                }
            }
            None => Vec::new(),
        };

        let (record, row) = mapper::map_release(barcode, &release, &tracks, &credits)
            .map_err(|e| (Stage::Mapping, e.to_string()))?;
        Ok(Processed::Found(record, row))
    }
}

enum Processed {
    Found(MarcRecord, TabularRow),
    NotFound(MarcRecord, TabularRow),
}
