//! Internal domain models for release lookup.
//!
//! These types are OUR types - they don't change when external APIs change.
//! All external API responses get converted into these types via adapters,
//! and any multi-valued source field (artist credits, label info, media) is
//! flattened to its first entry exactly once, in the adapter.

/// Release metadata normalized from the primary service.
///
/// Every attribute except the release id may be absent in the source document.
/// Absence is carried as `None` here; the mapper decides whether that means
/// "skip the identifier" - it never panics mid-run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseMetadata {
    /// Release identifier (MBID)
    pub id: String,
    /// Release title
    pub title: Option<String>,
    /// Primary artist name (first artist credit)
    pub artist: Option<String>,
    /// Release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    pub date: Option<String>,
    /// Release country code
    pub country: Option<String>,
    /// Label name (first label-info entry)
    pub label: Option<String>,
    /// Physical media format (first medium)
    pub media_format: Option<String>,
    /// Text language of the release
    pub language: Option<String>,
}

/// One track of a release's track listing, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    /// Position label as the service reports it ("1", "A1", ...)
    pub position: String,
    /// Track title
    pub title: String,
}

/// A (name, role) contributor credit from the secondary service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorCredit {
    pub name: String,
    pub role: String,
}

/// A candidate release returned by the secondary service's barcode search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryMatch {
    /// Secondary-service release identifier, used for the detail fetch
    pub id: u64,
}

/// Errors from the lookup clients.
///
/// Only HTTP 500/502/503/504 responses are retried, inside the client (see
/// `retry`); everything here surfaces to the driver as a single
/// per-identifier failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("expected field missing from response: {0}")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_metadata_defaults_to_absent() {
        let release = ReleaseMetadata {
            id: "mbid-1".to_string(),
            ..Default::default()
        };
        assert!(release.title.is_none());
        assert!(release.label.is_none());
        assert!(release.language.is_none());
    }

    #[test]
    fn test_lookup_error_display_names_the_field() {
        let err = LookupError::MissingField("media");
        assert!(err.to_string().contains("media"));
    }
}
