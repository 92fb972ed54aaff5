//! Discogs API Data Transfer Objects
//!
//! These types match EXACTLY what the Discogs API returns.
//! DO NOT use these types outside the discogs module - convert to domain types.
//!
//! API Reference: https://www.discogs.com/developers
//!
//! We use `/database/search?type=release` for barcode search and
//! `/releases/{id}` for the credit list.

use serde::Deserialize;

/// Database search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// One search result candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// Discogs release ID
    pub id: u64,
}

/// Release detail response.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseResponse {
    /// Extra (non-headline) credited artists. An absent key simply means no
    /// extra credits, not a malformed response.
    #[serde(default)]
    pub extraartists: Vec<ExtraArtist>,
}

/// A credited contributor with their role.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtraArtist {
    pub name: String,
    pub role: String,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "pagination": {"page": 1, "pages": 1},
            "results": [
                {"id": 1234, "title": "Queen - Greatest Hits", "type": "release"},
                {"id": 5678, "title": "Queen - Greatest Hits", "type": "release"}
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).expect("Should parse search");
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].id, 1234);
    }

    #[test]
    fn test_parse_empty_search() {
        let response: SearchResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_parse_release_with_credits() {
        let json = r#"{
            "id": 1234,
            "title": "Greatest Hits",
            "extraartists": [
                {"name": "Jane Doe", "role": "Producer", "id": 1},
                {"name": "Sam Smith", "role": "Mixer", "id": 2}
            ]
        }"#;

        let response: ReleaseResponse = serde_json::from_str(json).expect("Should parse release");
        assert_eq!(response.extraartists.len(), 2);
        assert_eq!(response.extraartists[0].name, "Jane Doe");
        assert_eq!(response.extraartists[1].role, "Mixer");
    }

    #[test]
    fn test_parse_release_without_credits_key() {
        let response: ReleaseResponse = serde_json::from_str(r#"{"id": 1234}"#).unwrap();
        assert!(response.extraartists.is_empty());
    }
}
