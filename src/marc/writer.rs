//! ISO 2709 binary serialization.
//!
//! Each record is written as a 24-byte leader, a directory (one 12-byte entry
//! per field), the field data area, and a record terminator. Field data uses
//! 0x1F subfield delimiters and 0x1E field terminators; lengths and offsets in
//! the directory are byte counts, so multi-byte UTF-8 values are handled
//! correctly without special cases.

use std::io::Write;

use super::{MarcError, MarcRecord};

const FIELD_TERMINATOR: u8 = 0x1E;
const SUBFIELD_DELIMITER: u8 = 0x1F;
const RECORD_TERMINATOR: u8 = 0x1D;

const LEADER_LEN: usize = 24;
const DIRECTORY_ENTRY_LEN: usize = 12;

/// Maximum representable record length (5 decimal digits in the leader).
const MAX_RECORD_LEN: usize = 99_999;
/// Maximum representable field length (4 decimal digits in a directory entry).
const MAX_FIELD_LEN: usize = 9_999;

/// Writer for ISO 2709 binary MARC output.
///
/// Serializes [`MarcRecord`] values one at a time to any [`std::io::Write`]
/// destination. The leader is synthesized per record: status `n` (new), type
/// `j` (musical sound recording), bibliographic level `m` (monograph), UTF-8
/// character coding.
#[derive(Debug)]
pub struct MarcWriter<W: Write> {
    writer: W,
    records_written: usize,
}

impl<W: Write> MarcWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records_written: 0,
        }
    }

    /// Serialize one record and write it out.
    pub fn write_record(&mut self, record: &MarcRecord) -> Result<(), MarcError> {
        let mut directory = Vec::new();
        let mut data_area = Vec::new();

        for field in &record.fields {
            let mut field_data = Vec::new();
            field_data.push(field.indicator1 as u8);
            field_data.push(field.indicator2 as u8);
            for subfield in &field.subfields {
                field_data.push(SUBFIELD_DELIMITER);
                let mut code_buf = [0u8; 4];
                field_data.extend_from_slice(subfield.code.encode_utf8(&mut code_buf).as_bytes());
                field_data.extend_from_slice(subfield.value.as_bytes());
            }
            field_data.push(FIELD_TERMINATOR);

            if field_data.len() > MAX_FIELD_LEN {
                return Err(MarcError::FieldTooLarge(field_data.len()));
            }

            directory.extend_from_slice(field.tag.as_bytes());
            directory.extend_from_slice(format!("{:04}", field_data.len()).as_bytes());
            directory.extend_from_slice(format!("{:05}", data_area.len()).as_bytes());
            data_area.extend_from_slice(&field_data);
        }
        directory.push(FIELD_TERMINATOR);

        let base_address = LEADER_LEN + directory.len();
        let record_length = base_address + data_area.len() + 1;
        if record_length > MAX_RECORD_LEN {
            return Err(MarcError::RecordTooLarge(record_length));
        }

        let leader = build_leader(record_length, base_address);
        self.writer.write_all(&leader)?;
        self.writer.write_all(&directory)?;
        self.writer.write_all(&data_area)?;
        self.writer.write_all(&[RECORD_TERMINATOR])?;

        self.records_written += 1;
        Ok(())
    }

    /// Write a whole batch and flush.
    pub fn write_all(&mut self, records: &[MarcRecord]) -> Result<(), MarcError> {
        for record in records {
            self.write_record(record)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Number of records written so far.
    pub fn records_written(&self) -> usize {
        self.records_written
    }
}

/// Build the 24-byte leader with computed length and base address.
fn build_leader(record_length: usize, base_address: usize) -> [u8; LEADER_LEN] {
    let mut leader = [b' '; LEADER_LEN];
    leader[0..5].copy_from_slice(format!("{record_length:05}").as_bytes());
    leader[5] = b'n'; // record status: new
    leader[6] = b'j'; // record type: musical sound recording
    leader[7] = b'm'; // bibliographic level: monograph
    leader[9] = b'a'; // character coding: UCS/Unicode
    leader[10] = b'2'; // indicator count
    leader[11] = b'2'; // subfield code count
    leader[12..17].copy_from_slice(format!("{base_address:05}").as_bytes());
    leader[20..24].copy_from_slice(b"4500"); // entry map
    leader
}
