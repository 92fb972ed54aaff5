//! Record mapper - the core of the pipeline.
//!
//! Turns one identifier's normalized lookup results into the two outputs: a
//! fixed-schema MARC record and a flat tabular row. Both are derived from the
//! same extracted values, so they can never disagree for an identifier.
//!
//! Mapping is pure: no I/O, no hidden state. Calling it twice with identical
//! inputs yields byte-identical outputs.
//!
//! # Failure policy
//!
//! Two different outcomes, and the distinction is a contract:
//! - "no matching release" at the top level is a business outcome - the caller
//!   emits the [`not_found_pair`] instead of calling [`map_release`];
//! - a required attribute missing deeper in an otherwise matched release is a
//!   [`MapError`] - the caller logs it and skips the identifier entirely.

use serde::Serialize;

use crate::lookup::domain::{ContributorCredit, ReleaseMetadata, TrackEntry};
use crate::marc::{Field, MarcRecord};

/// Cataloging source recorded in 040 $d.
const CATALOGING_AGENCY: &str = "Marcbrainz";
/// 040 $a prefix in front of the release MBID.
const SOURCE_PREFIX: &str = "Musicbrainz.org MBID ";
/// 300 $b - fixed sound characteristics for a commercial audio release.
const SOUND_CHARACTERISTICS: &str = "digital, stereo";
/// 300 $c - fixed disc dimensions.
const DISC_DIMENSIONS: &str = "120 mm";
/// Separator between rendered track entries: space + newline.
const TRACK_SEPARATOR: &str = " \n";

const NOT_FOUND: &str = "Not found";
const NOT_AVAILABLE: &str = "N/A";

/// Mapping failure: a required release attribute was absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("release attribute missing: {field}")]
    MissingField { field: &'static str },
}

/// The 5-column flat projection of a mapped release.
///
/// Field order is the CSV column order: title, artist, release date,
/// rendered track listing, release identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabularRow {
    pub title: String,
    pub artist: String,
    pub release_date: String,
    pub track_info: String,
    pub id: String,
}

impl TabularRow {
    /// The literal fallback row for a not-found identifier.
    pub fn not_found() -> Self {
        Self {
            title: NOT_FOUND.to_string(),
            artist: NOT_AVAILABLE.to_string(),
            release_date: NOT_AVAILABLE.to_string(),
            track_info: NOT_AVAILABLE.to_string(),
            id: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Unwrap an optional release attribute or name the missing field.
fn require<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, MapError> {
    value.ok_or(MapError::MissingField { field })
}

/// Render the track listing for the 505 field and the tabular row.
///
/// Each track becomes `"{position}. {title}"`; entries are joined with a
/// space + newline, preserving source order.
pub fn render_track_listing(tracks: &[TrackEntry]) -> String {
    tracks
        .iter()
        .map(|track| format!("{}. {}", track.position, track.title))
        .collect::<Vec<_>>()
        .join(TRACK_SEPARATOR)
}

/// Whether a contributor credit earns a 700 added-entry field.
fn qualifies_for_added_entry(credit: &ContributorCredit) -> bool {
    credit.role.eq_ignore_ascii_case("producer") || credit.role.eq_ignore_ascii_case("engineer")
}

/// Map a matched release into its MARC record and tabular row.
///
/// Field order follows the fixed tag catalog: 024, 028, 040, 100, 245, 260,
/// 300, 505, 546, then one 700 per qualifying contributor credit in source
/// order.
pub fn map_release(
    barcode: &str,
    release: &ReleaseMetadata,
    tracks: &[TrackEntry],
    credits: &[ContributorCredit],
) -> Result<(MarcRecord, TabularRow), MapError> {
    let title = require(release.title.as_deref(), "title")?;
    let artist = require(release.artist.as_deref(), "artist")?;
    let date = require(release.date.as_deref(), "date")?;
    let country = require(release.country.as_deref(), "country")?;
    let label = require(release.label.as_deref(), "label")?;
    let media_format = require(release.media_format.as_deref(), "media format")?;
    let language = require(release.language.as_deref(), "language")?;
    let track_info = render_track_listing(tracks);

    let mut record = MarcRecord::new();
    record.add_field(Field::new("024", '1', ' ').with_subfield('a', barcode));
    record.add_field(Field::new("028", '0', '0').with_subfield('b', label));
    record.add_field(
        Field::new("040", ' ', ' ')
            .with_subfield('a', format!("{SOURCE_PREFIX}{}", release.id))
            .with_subfield('d', CATALOGING_AGENCY),
    );
    record.add_field(Field::new("100", '1', ' ').with_subfield('a', artist));
    record.add_field(Field::new("245", '0', '0').with_subfield('a', title));
    record.add_field(
        Field::new("260", ' ', ' ')
            .with_subfield('a', country)
            .with_subfield('b', label)
            .with_subfield('c', date),
    );
    record.add_field(
        Field::new("300", ' ', ' ')
            .with_subfield('a', media_format)
            .with_subfield('b', SOUND_CHARACTERISTICS)
            .with_subfield('c', DISC_DIMENSIONS),
    );
    record.add_field(Field::new("505", '0', '0').with_subfield('a', track_info.as_str()));
    record.add_field(Field::new("546", ' ', ' ').with_subfield('a', language));

    for credit in credits.iter().filter(|c| qualifies_for_added_entry(c)) {
        record.add_field(
            Field::new("700", '1', ' ')
                .with_subfield('a', credit.name.as_str())
                .with_subfield('e', credit.role.as_str()),
        );
    }

    let row = TabularRow {
        title: title.to_string(),
        artist: artist.to_string(),
        release_date: date.to_string(),
        track_info,
        id: release.id.clone(),
    };

    Ok((record, row))
}

/// The fallback pair for an identifier with no matching release.
pub fn not_found_pair() -> (MarcRecord, TabularRow) {
    let mut record = MarcRecord::new();
    record.add_field(Field::new("245", '0', '0').with_subfield('a', NOT_FOUND));
    (record, TabularRow::not_found())
}
