//! MusicBrainz API Data Transfer Objects
//!
//! These types match EXACTLY what the MusicBrainz API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the musicbrainz module - convert to domain types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! We use two endpoints: `/release/?query=barcode:...` for barcode search and
//! `/release/{mbid}?inc=recordings` for the full track listing.

use serde::Deserialize;

/// Barcode search response.
///
/// An entirely absent `releases` key and an empty array are equivalent: both
/// mean "no matching release".
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseSearchResponse {
    #[serde(default)]
    pub releases: Vec<Release>,
}

/// A release as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Release {
    /// MusicBrainz release ID
    pub id: String,
    /// Release title
    pub title: Option<String>,
    /// Release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    pub date: Option<String>,
    /// Country code
    pub country: Option<String>,
    /// Artist credits (can be multiple for collaborations)
    #[serde(default)]
    pub artist_credit: Vec<ArtistCredit>,
    /// Label info entries
    #[serde(default)]
    pub label_info: Vec<LabelInfo>,
    /// Media (discs) in this release
    #[serde(default)]
    pub media: Vec<Medium>,
    /// Script/language of the release text
    pub text_representation: Option<TextRepresentation>,
}

/// Artist credit entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistCredit {
    pub artist: Artist,
    /// How this artist is credited (may differ from official name)
    pub name: Option<String>,
}

/// Artist info.
#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub name: String,
}

/// Label info entry.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelInfo {
    pub label: Option<Label>,
}

/// A record label.
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Script/language representation of the release text.
#[derive(Debug, Clone, Deserialize)]
pub struct TextRepresentation {
    pub language: Option<String>,
}

/// Medium (disc) within a release.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Medium {
    /// Format (CD, Vinyl, Digital, etc.)
    pub format: Option<String>,
    /// Tracks on this medium. Absent on search results; the tracklist
    /// endpoint must return it.
    pub tracks: Option<Vec<Track>>,
}

/// Release lookup response with `inc=recordings`.
#[derive(Debug, Clone, Deserialize)]
pub struct TracklistResponse {
    /// Absent `media` is a malformed tracklist response, not an empty listing.
    pub media: Option<Vec<Medium>>,
}

/// Track on a medium.
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    /// Track position on the medium
    pub position: Option<u32>,
    /// Track title
    pub title: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
