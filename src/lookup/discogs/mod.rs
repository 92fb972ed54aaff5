//! Discogs integration (secondary service).
//!
//! Used only for contributor-role enrichment: barcode search to find the
//! matching Discogs release, then a detail lookup for its credit list.

mod adapter;
mod client;
mod dto;

pub use client::DiscogsClient;
