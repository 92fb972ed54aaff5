//! Record sink: the two output files of a run.
//!
//! Everything is buffered in memory by the driver and written here exactly
//! once at the end of the run - there is no incremental persistence, so a
//! crash mid-run loses the accumulated output. That matches the intent of
//! the tool: a run is re-executable from the same barcode file.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::Result;
use crate::mapper::TabularRow;
use crate::marc::{MarcRecord, MarcWriter};

/// Paths of the two output files.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub marc: PathBuf,
    pub csv: PathBuf,
}

impl OutputPaths {
    /// Derive both paths from a common prefix.
    pub fn from_prefix(prefix: &str) -> Self {
        Self {
            marc: PathBuf::from(format!("{prefix}.mrc")),
            csv: PathBuf::from(format!("{prefix}.csv")),
        }
    }
}

/// Timestamped default prefix, e.g. `search_results_260830_1412`.
pub fn default_prefix() -> String {
    format!(
        "search_results_{}",
        chrono::Local::now().format("%y%m%d_%H%M")
    )
}

/// CSV header, written even for a run with zero processed identifiers.
const CSV_HEADER: [&str; 5] = ["Title", "Artist", "Release Date", "Track Info", "ID"];

/// Write the accumulated records and rows to their files.
///
/// Rows are written in processing order under the fixed header
/// `Title,Artist,Release Date,Track Info,ID`.
pub fn write_outputs(
    paths: &OutputPaths,
    records: &[MarcRecord],
    rows: &[TabularRow],
) -> Result<()> {
    let marc_file = BufWriter::new(File::create(&paths.marc)?);
    let mut marc_writer = MarcWriter::new(marc_file);
    marc_writer.write_all(records)?;

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&paths.csv)?;
    csv_writer.write_record(CSV_HEADER)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marc::Field;

    fn sample_record(title: &str) -> MarcRecord {
        let mut record = MarcRecord::new();
        record.add_field(Field::new("245", '0', '0').with_subfield('a', title));
        record
    }

    fn sample_row() -> TabularRow {
        TabularRow {
            title: "A Night at the Opera".to_string(),
            artist: "Queen".to_string(),
            release_date: "1975-11-21".to_string(),
            track_info: "1. Death on Two Legs \n2. Lazing".to_string(),
            id: "mbid-42".to_string(),
        }
    }

    fn temp_paths(dir: &tempfile::TempDir) -> OutputPaths {
        OutputPaths {
            marc: dir.path().join("out.mrc"),
            csv: dir.path().join("out.csv"),
        }
    }

    #[test]
    fn test_prefix_derives_both_paths() {
        let paths = OutputPaths::from_prefix("search_results_240101_0900");
        assert_eq!(paths.marc.to_str().unwrap(), "search_results_240101_0900.mrc");
        assert_eq!(paths.csv.to_str().unwrap(), "search_results_240101_0900.csv");
    }

    #[test]
    fn test_default_prefix_shape() {
        let prefix = default_prefix();
        // search_results_ + yymmdd_hhmm
        assert!(prefix.starts_with("search_results_"));
        assert_eq!(prefix.len(), "search_results_".len() + 11);
    }

    #[test]
    fn test_csv_header_and_row_order() {
        let dir = tempfile::tempdir().unwrap();
        let paths = temp_paths(&dir);

        let rows = vec![TabularRow::not_found(), sample_row()];
        write_outputs(&paths, &[], &rows).unwrap();

        let contents = std::fs::read_to_string(&paths.csv).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("Title,Artist,Release Date,Track Info,ID"));
        assert_eq!(lines.next(), Some("Not found,N/A,N/A,N/A,N/A"));
        // Embedded newline in track info forces quoting, so just check the start
        assert!(lines.next().unwrap().starts_with("A Night at the Opera,Queen,1975-11-21,"));
    }

    #[test]
    fn test_marc_file_contains_all_records() {
        let dir = tempfile::tempdir().unwrap();
        let paths = temp_paths(&dir);

        let records = vec![sample_record("First"), sample_record("Second")];
        write_outputs(&paths, &records, &[]).unwrap();

        let bytes = std::fs::read(&paths.marc).unwrap();
        assert_eq!(bytes.iter().filter(|&&b| b == 0x1D).count(), 2);
        assert_eq!(*bytes.last().unwrap(), 0x1D);
        // Leader starts with the record length digits
        assert!(bytes[0].is_ascii_digit());
    }

    #[test]
    fn test_empty_run_still_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths = temp_paths(&dir);

        write_outputs(&paths, &[], &[]).unwrap();

        assert!(paths.marc.exists());
        let contents = std::fs::read_to_string(&paths.csv).unwrap();
        // Header only
        assert_eq!(contents.lines().count(), 1);
    }
}
