//! Adapter layer: Convert Discogs DTOs to domain models
//!
//! The only place Discogs response shapes become domain types. Role filtering
//! is NOT done here - the mapper owns the producer/engineer rule; this layer
//! just normalizes the credit list in document order.

use super::dto;
use crate::lookup::domain::{ContributorCredit, SecondaryMatch};

/// Reduce a barcode search to its top candidate release, or `None`.
pub fn to_match(response: dto::SearchResponse) -> Option<SecondaryMatch> {
    response
        .results
        .into_iter()
        .next()
        .map(|result| SecondaryMatch { id: result.id })
}

/// Extract the contributor credit list, preserving document order.
pub fn to_credits(response: dto::ReleaseResponse) -> Vec<ContributorCredit> {
    response
        .extraartists
        .into_iter()
        .map(|artist| ContributorCredit {
            name: artist.name,
            role: artist.role,
        })
        .collect()
}
