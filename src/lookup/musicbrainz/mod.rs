//! MusicBrainz integration (primary service).
//!
//! Release search by barcode plus track-listing lookup by release MBID.

mod adapter;
mod client;
mod dto;

pub use client::MusicBrainzClient;
