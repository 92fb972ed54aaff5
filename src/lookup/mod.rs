//! Release lookup module - queries external catalog services by barcode.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`musicbrainz/dto.rs`, `discogs/dto.rs`) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models; the single place where
//!   multi-valued source fields are flattened
//! - **Clients** - HTTP clients for external APIs, sharing one retry policy
//! - **Traits** - Seams for driving the pipeline with mocks in tests
//!
//! This decoupling means API changes don't ripple through the mapper, and the
//! batch driver can be tested without a network.

pub mod discogs;
pub mod domain;
pub mod musicbrainz;
pub mod retry;
pub mod traits;

pub use discogs::DiscogsClient;
pub use domain::{ContributorCredit, LookupError, ReleaseMetadata, SecondaryMatch, TrackEntry};
pub use musicbrainz::MusicBrainzClient;
pub use retry::RetryPolicy;
pub use traits::{PrimaryLookup, SecondaryLookup};
