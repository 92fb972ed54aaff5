//! Identifier source: the line-delimited barcode file.
//!
//! Each line is trimmed of surrounding whitespace. Blank lines are kept as
//! empty-string identifiers - they become literal lookups that find nothing,
//! exactly like any other unknown barcode. Order is preserved and nothing is
//! deduplicated; the file defines the processing order of the whole run.

use std::path::Path;

use crate::error::{Error, Result};

/// Read the ordered identifier sequence from a file.
///
/// A missing or unreadable file is the one fatal error of a run.
pub fn read_identifiers(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::input(path, e.to_string()))?;
    Ok(contents.lines().map(|line| line.trim().to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_lines_are_trimmed_in_order() {
        let file = write_temp("  0123456789 \n5099902895529\n");
        let ids = read_identifiers(file.path()).unwrap();
        assert_eq!(ids, vec!["0123456789", "5099902895529"]);
    }

    #[test]
    fn test_blank_lines_become_empty_identifiers() {
        let file = write_temp("111\n\n222\n");
        let ids = read_identifiers(file.path()).unwrap();
        assert_eq!(ids, vec!["111", "", "222"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let file = write_temp("333\n333\n");
        let ids = read_identifiers(file.path()).unwrap();
        assert_eq!(ids, vec!["333", "333"]);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = read_identifiers(Path::new("/nonexistent/barcodes.txt"));
        assert!(matches!(result, Err(Error::Input { .. })));
    }
}
