//! Adapter layer: Convert MusicBrainz DTOs to domain models
//!
//! This is the ONLY place where MusicBrainz DTO types become domain types.
//! It is also the single normalization point for the API's multi-valued
//! fields: artist credits, label info and media are flattened to their first
//! entry here, once, so the mapper never sees source-shape differences.

use super::dto;
use crate::lookup::domain::{LookupError, ReleaseMetadata, TrackEntry};

/// Reduce a barcode search response to its top matching release, normalized.
///
/// `None` means "no matching release" - a business outcome, not an error.
pub fn to_release(response: dto::ReleaseSearchResponse) -> Option<ReleaseMetadata> {
    let release = response.releases.into_iter().next()?;

    // Prefer the as-credited name when the search result carries one
    let artist = release
        .artist_credit
        .first()
        .map(|credit| credit.name.clone().unwrap_or_else(|| credit.artist.name.clone()));
    let label = release
        .label_info
        .first()
        .and_then(|info| info.label.as_ref())
        .map(|label| label.name.clone());
    let media_format = release.media.first().and_then(|m| m.format.clone());
    let language = release
        .text_representation
        .and_then(|text| text.language);

    Some(ReleaseMetadata {
        id: release.id,
        title: release.title,
        artist,
        date: release.date,
        country: release.country,
        label,
        media_format,
        language,
    })
}

/// Flatten a tracklist response into an ordered track sequence.
///
/// Tracks keep source order across media. A response without a `media` key,
/// or a track without position or title, is malformed and fails the whole
/// tracklist stage (the driver skips the identifier).
pub fn to_tracklist(response: dto::TracklistResponse) -> Result<Vec<TrackEntry>, LookupError> {
    let media = response.media.ok_or(LookupError::MissingField("media"))?;

    let mut tracks = Vec::new();
    for medium in media {
        let medium_tracks = medium
            .tracks
            .ok_or(LookupError::MissingField("media.tracks"))?;
        for track in medium_tracks {
            let position = track
                .position
                .ok_or(LookupError::MissingField("track.position"))?;
            let title = track.title.ok_or(LookupError::MissingField("track.title"))?;
            tracks.push(TrackEntry {
                position: position.to_string(),
                title,
            });
        }
    }
    Ok(tracks)
}
