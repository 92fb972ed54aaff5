//! Minimal MARC 21 record model.
//!
//! This is deliberately not a general MARC library: it models exactly what the
//! mapper emits. Fields live in a flat, insertion-ordered list because the
//! emission order of the tag catalog is part of the output contract and must
//! survive serialization unchanged.

pub mod writer;

pub use writer::MarcWriter;

/// Errors from MARC serialization.
#[derive(Debug, thiserror::Error)]
pub enum MarcError {
    /// I/O error while writing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ISO 2709 record length field is 5 decimal digits; larger records
    /// cannot be represented
    #[error("record of {0} bytes exceeds the ISO 2709 limit of 99999")]
    RecordTooLarge(usize),

    /// Directory field lengths are 4 decimal digits; a longer field would
    /// break the 12-byte directory entry layout
    #[error("field of {0} bytes exceeds the ISO 2709 limit of 9999")]
    FieldTooLarge(usize),
}

/// A subfield: a one-character code and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subfield {
    pub code: char,
    pub value: String,
}

/// A variable data field: three-character tag, two indicators, ordered subfields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub tag: String,
    pub indicator1: char,
    pub indicator2: char,
    pub subfields: Vec<Subfield>,
}

impl Field {
    /// Create an empty field with the given tag and indicators.
    pub fn new(tag: impl Into<String>, indicator1: char, indicator2: char) -> Self {
        Self {
            tag: tag.into(),
            indicator1,
            indicator2,
            subfields: Vec::new(),
        }
    }

    /// Builder-style subfield append, preserving insertion order.
    pub fn with_subfield(mut self, code: char, value: impl Into<String>) -> Self {
        self.subfields.push(Subfield {
            code,
            value: value.into(),
        });
        self
    }

    /// Value of the first subfield with the given code, if any.
    pub fn subfield(&self, code: char) -> Option<&str> {
        self.subfields
            .iter()
            .find(|s| s.code == code)
            .map(|s| s.value.as_str())
    }
}

/// A bibliographic record: an ordered sequence of fields.
///
/// Records are assembled once by the mapper and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarcRecord {
    pub fields: Vec<Field>,
}

impl MarcRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field at the end of the record.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// All fields carrying the given tag, in record order.
    pub fn fields_with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Field> {
        self.fields.iter().filter(move |f| f.tag == tag)
    }

    /// The tags of all fields, in record order.
    pub fn tags(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.tag.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder_preserves_subfield_order() {
        let field = Field::new("260", ' ', ' ')
            .with_subfield('a', "US")
            .with_subfield('b', "Label")
            .with_subfield('c', "1999");

        let codes: Vec<char> = field.subfields.iter().map(|s| s.code).collect();
        assert_eq!(codes, vec!['a', 'b', 'c']);
        assert_eq!(field.subfield('b'), Some("Label"));
    }

    #[test]
    fn test_record_preserves_field_order() {
        let mut record = MarcRecord::new();
        record.add_field(Field::new("245", '0', '0').with_subfield('a', "Title"));
        record.add_field(Field::new("100", '1', ' ').with_subfield('a', "Artist"));

        // Insertion order wins, not tag order
        assert_eq!(record.tags(), vec!["245", "100"]);
    }

    #[test]
    fn test_fields_with_tag_returns_repeats_in_order() {
        let mut record = MarcRecord::new();
        record.add_field(Field::new("700", '1', ' ').with_subfield('a', "Jane"));
        record.add_field(Field::new("700", '1', ' ').with_subfield('a', "Sam"));

        let names: Vec<_> = record
            .fields_with_tag("700")
            .filter_map(|f| f.subfield('a'))
            .collect();
        assert_eq!(names, vec!["Jane", "Sam"]);
    }
}
