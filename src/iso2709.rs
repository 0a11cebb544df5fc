//! ISO 2709 binary records.
//!
//! This module tokenizes binary MARC into [`RawRecord`]s (leader plus control
//! and data fields in stored order) and writes records back out. Tokenizing
//! does no schema work; [`ingest::binary`](crate::ingest::binary) turns a
//! `RawRecord` into a [`MarcRecord`].
//!
//! # Examples
//!
//! ```
//! use marcqa::iso2709::{RawRecordReader, RecoveryMode, Iso2709Writer};
//! use marcqa::{Leader, MarcRecord};
//! use std::io::Cursor;
//!
//! let record = MarcRecord::builder(Leader::decode("00000cam a2200000   4500", None)?)
//!     .control_field("001", "rec-1")
//!     .data_field("245", '1', '0', [('a', "Title")])
//!     .build();
//!
//! let mut buffer = Vec::new();
//! Iso2709Writer::new(&mut buffer).write_record(&record)?;
//!
//! let mut reader = RawRecordReader::new(Cursor::new(buffer))
//!     .with_recovery_mode(RecoveryMode::Lenient);
//! let raw = reader.read_record()?.unwrap();
//! assert_eq!(raw.control_number(), Some("rec-1"));
//! # Ok::<(), marcqa::MarcError>(())
//! ```

use crate::error::{MarcError, Result};
use crate::leader::LEADER_LENGTH;
use crate::record::{is_control_tag, MarcRecord};
use memchr::memchr;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use tracing::warn;

/// Field terminator.
pub const FIELD_TERMINATOR: u8 = 0x1E;
/// Subfield delimiter.
pub const SUBFIELD_DELIMITER: u8 = 0x1F;
/// Record terminator.
pub const RECORD_TERMINATOR: u8 = 0x1D;

const DIRECTORY_ENTRY_LENGTH: usize = 12;

/// Strategy for handling malformed or truncated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecoveryMode {
    /// Return errors for any malformation (default)
    #[default]
    Strict,
    /// Skip malformed directory entries and fields, keep the rest
    Lenient,
    /// Like `Lenient`, and also keep the readable part of damaged fields
    Permissive,
}

/// A field as stored in a binary record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawField {
    /// Control field (001-009)
    Control {
        /// Tag
        tag: String,
        /// Content without the field terminator
        value: String,
    },
    /// Data field
    Data {
        /// Tag
        tag: String,
        /// First indicator
        ind1: char,
        /// Second indicator
        ind2: char,
        /// `(code, value)` pairs in stored order
        subfields: Vec<(char, String)>,
    },
}

impl RawField {
    /// Field tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            RawField::Control { tag, .. } | RawField::Data { tag, .. } => tag,
        }
    }
}

/// A tokenized binary record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Leader as stored
    pub leader: String,
    /// Fields in directory order
    pub fields: Vec<RawField>,
}

impl RawRecord {
    /// Content of the 001 field.
    #[must_use]
    pub fn control_number(&self) -> Option<&str> {
        self.fields.iter().find_map(|field| match field {
            RawField::Control { tag, value } if tag == "001" => Some(value.as_str()),
            _ => None,
        })
    }
}

impl From<&MarcRecord> for RawRecord {
    /// Control fields in canonical order, then data fields in source order.
    fn from(record: &MarcRecord) -> Self {
        let mut fields: Vec<RawField> = record
            .control_fields()
            .map(|field| RawField::Control {
                tag: field.tag().to_string(),
                value: field.content().to_string(),
            })
            .collect();
        fields.extend(record.data_fields().iter().map(|field| RawField::Data {
            tag: field.tag().to_string(),
            ind1: field.ind1(),
            ind2: field.ind2(),
            subfields: field
                .subfields()
                .iter()
                .map(|s| (s.code, s.value.clone()))
                .collect(),
        }));
        RawRecord {
            leader: record.leader().as_str().to_string(),
            fields,
        }
    }
}

/// Reader for ISO 2709 binary records.
///
/// Reads one record at a time from any [`std::io::Read`] source.
#[derive(Debug)]
pub struct RawRecordReader<R: Read> {
    reader: R,
    recovery_mode: RecoveryMode,
    records_read: usize,
}

impl<R: Read> RawRecordReader<R> {
    /// Create a reader in [`RecoveryMode::Strict`].
    pub fn new(reader: R) -> Self {
        RawRecordReader {
            reader,
            recovery_mode: RecoveryMode::Strict,
            records_read: 0,
        }
    }

    /// Set the recovery mode for malformed records.
    #[must_use]
    pub fn with_recovery_mode(mut self, mode: RecoveryMode) -> Self {
        self.recovery_mode = mode;
        self
    }

    /// Number of records read so far.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Read the next record.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the record length in the leader is unreadable, if
    /// the record is malformed and the recovery mode does not allow repairing
    /// it, or if an I/O error occurs.
    pub fn read_record(&mut self) -> Result<Option<RawRecord>> {
        let mut leader = [0u8; LEADER_LENGTH];
        match self.reader.read_exact(&mut leader) {
            Ok(()) => {},
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(MarcError::IoError(e)),
        }

        let record_length = parse_digits(&leader[0..5])?;
        if record_length <= LEADER_LENGTH {
            return Err(MarcError::InvalidRecord(format!(
                "Record length {record_length} is shorter than the leader"
            )));
        }

        let mut bytes = leader.to_vec();
        bytes.resize(record_length, 0);
        let filled = read_up_to(&mut self.reader, &mut bytes[LEADER_LENGTH..])?;
        if filled < record_length - LEADER_LENGTH {
            if self.recovery_mode == RecoveryMode::Strict {
                return Err(MarcError::TruncatedRecord(
                    "Unexpected end of file while reading record data".to_string(),
                ));
            }
            bytes.truncate(LEADER_LENGTH + filled);
        }

        let record = parse_record(&bytes, self.recovery_mode)?;
        self.records_read += 1;
        Ok(Some(record))
    }
}

impl<R: Read> Iterator for RawRecordReader<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

/// Read until `buf` is full or the source is exhausted.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {},
            Err(e) => return Err(MarcError::IoError(e)),
        }
    }
    Ok(filled)
}

/// Tokenize one complete binary record.
///
/// `bytes` starts at the leader; a trailing record terminator is optional.
///
/// # Errors
///
/// In [`RecoveryMode::Strict`] any malformation is an error. The other modes
/// only fail when no leader can be read.
pub fn parse_record(bytes: &[u8], mode: RecoveryMode) -> Result<RawRecord> {
    if bytes.len() < LEADER_LENGTH {
        return Err(MarcError::TruncatedRecord(format!(
            "Record has {} bytes, fewer than a leader",
            bytes.len()
        )));
    }
    let leader = String::from_utf8_lossy(&bytes[..LEADER_LENGTH]).to_string();
    let body = &bytes[LEADER_LENGTH..];

    // Directory ends at the first field terminator.
    let declared_base = parse_digits(&bytes[12..17]).ok();
    let directory_end = match (declared_base, memchr(FIELD_TERMINATOR, body)) {
        (Some(base), Some(end)) if base == LEADER_LENGTH + end + 1 => end,
        (_, Some(end)) if mode != RecoveryMode::Strict => end,
        (_, None) if mode != RecoveryMode::Strict => body.len(),
        (base, _) => {
            return Err(MarcError::InvalidRecord(format!(
                "Base address {base:?} does not match the end of the directory"
            )))
        },
    };
    let directory = &body[..directory_end];
    let data = body.get(directory_end + 1..).unwrap_or_default();

    let mut record = RawRecord {
        leader,
        fields: Vec::new(),
    };

    for entry in directory.chunks(DIRECTORY_ENTRY_LENGTH) {
        if entry.len() < DIRECTORY_ENTRY_LENGTH {
            if mode == RecoveryMode::Strict {
                return Err(MarcError::InvalidRecord(
                    "Incomplete directory entry".to_string(),
                ));
            }
            warn!(entry = %String::from_utf8_lossy(entry), "incomplete directory entry skipped");
            break;
        }

        let tag = String::from_utf8_lossy(&entry[0..3]).to_string();
        let (length, start) = match (parse_digits(&entry[3..7]), parse_digits(&entry[7..12])) {
            (Ok(length), Ok(start)) => (length, start),
            (Err(e), _) | (_, Err(e)) => {
                if mode == RecoveryMode::Strict {
                    return Err(e);
                }
                warn!(tag, error = %e, "unreadable directory entry skipped");
                continue;
            },
        };

        let end = start + length;
        let field_data = if end <= data.len() {
            &data[start..end]
        } else if mode == RecoveryMode::Strict {
            return Err(MarcError::InvalidRecord(format!(
                "Field {tag} exceeds data area"
            )));
        } else if start < data.len() {
            warn!(tag, "field exceeds data area, keeping the available part");
            &data[start..]
        } else {
            warn!(tag, "field starts beyond data area, skipped");
            continue;
        };

        if is_control_tag(&tag) {
            let value = field_data.strip_suffix(&[FIELD_TERMINATOR]).unwrap_or(field_data);
            record.fields.push(RawField::Control {
                tag,
                value: String::from_utf8_lossy(value).to_string(),
            });
            continue;
        }

        match parse_data_field(field_data, mode) {
            Ok((ind1, ind2, subfields)) => record.fields.push(RawField::Data {
                tag,
                ind1,
                ind2,
                subfields,
            }),
            Err(e) if mode == RecoveryMode::Strict => {
                return Err(MarcError::InvalidField(format!("Tag {tag}: {e}")));
            },
            Err(e) => warn!(tag, error = %e, "malformed data field skipped"),
        }
    }

    Ok(record)
}

type DataFieldParts = (char, char, Vec<(char, String)>);

/// Parse indicators and subfields of a data field.
fn parse_data_field(data: &[u8], mode: RecoveryMode) -> Result<DataFieldParts> {
    let data = data.strip_suffix(&[FIELD_TERMINATOR]).unwrap_or(data);
    if data.len() < 2 {
        return Err(MarcError::InvalidField(
            "Data field too short (needs indicators)".to_string(),
        ));
    }

    let ind1 = data[0] as char;
    let ind2 = data[1] as char;
    let mut content = &data[2..];

    if content.first().is_some_and(|b| *b != SUBFIELD_DELIMITER) {
        if mode != RecoveryMode::Permissive {
            return Err(MarcError::InvalidField(
                "Expected subfield delimiter".to_string(),
            ));
        }
        // Drop the bytes before the first delimiter.
        content = memchr(SUBFIELD_DELIMITER, content).map_or(&[][..], |i| &content[i..]);
    }

    let subfields = content
        .split(|b| *b == SUBFIELD_DELIMITER)
        .skip(1)
        .filter_map(|chunk| {
            let (code, value) = chunk.split_first()?;
            Some((*code as char, String::from_utf8_lossy(value).to_string()))
        })
        .collect();

    Ok((ind1, ind2, subfields))
}

/// Parse an ASCII decimal number.
fn parse_digits(bytes: &[u8]) -> Result<usize> {
    let mut result = 0usize;
    for &byte in bytes {
        if byte.is_ascii_digit() {
            result = result * 10 + (byte - b'0') as usize;
        } else {
            return Err(MarcError::InvalidRecord(format!(
                "Invalid numeric field: expected digits, got byte {}",
                byte as char
            )));
        }
    }
    Ok(result)
}

/// Writer for ISO 2709 binary records.
///
/// The record length (leader/00-04) and base address (leader/12-16) are
/// computed; every other leader position is written as stored.
#[derive(Debug)]
pub struct Iso2709Writer<W: Write> {
    writer: W,
    records_written: usize,
}

impl<W: Write> Iso2709Writer<W> {
    /// Create a writer.
    pub fn new(writer: W) -> Self {
        Iso2709Writer {
            writer,
            records_written: 0,
        }
    }

    /// Write a canonical record.
    ///
    /// # Errors
    ///
    /// Same as [`Iso2709Writer::write_raw`].
    pub fn write_record(&mut self, record: &MarcRecord) -> Result<()> {
        self.write_raw(&RawRecord::from(record))
    }

    /// Write a tokenized record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not fit the format's length
    /// fields, or if an I/O error occurs.
    pub fn write_raw(&mut self, record: &RawRecord) -> Result<()> {
        let bytes = to_bytes(record)?;
        self.writer.write_all(&bytes)?;
        self.records_written += 1;
        Ok(())
    }

    /// Flush the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of records written so far.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }
}

/// Serialize a tokenized record to ISO 2709 bytes.
///
/// # Errors
///
/// Returns [`MarcError::InvalidRecord`] if the leader is not 24 bytes, a
/// field is longer than 9999 bytes, or the record is longer than 99999 bytes.
pub fn to_bytes(record: &RawRecord) -> Result<Vec<u8>> {
    if record.leader.len() != LEADER_LENGTH {
        return Err(MarcError::InvalidRecord(format!(
            "Leader must be {LEADER_LENGTH} bytes, got {}",
            record.leader.len()
        )));
    }

    let mut directory = Vec::with_capacity(record.fields.len() * DIRECTORY_ENTRY_LENGTH + 1);
    let mut data_area = Vec::new();

    for field in &record.fields {
        let start = data_area.len();
        match field {
            RawField::Control { value, .. } => data_area.extend_from_slice(value.as_bytes()),
            RawField::Data {
                ind1,
                ind2,
                subfields,
                ..
            } => {
                push_char(&mut data_area, *ind1);
                push_char(&mut data_area, *ind2);
                for (code, value) in subfields {
                    data_area.push(SUBFIELD_DELIMITER);
                    push_char(&mut data_area, *code);
                    data_area.extend_from_slice(value.as_bytes());
                }
            },
        }
        data_area.push(FIELD_TERMINATOR);

        let length = data_area.len() - start;
        if length > 9999 || start > 99999 {
            return Err(MarcError::InvalidRecord(format!(
                "Field {} does not fit the directory (length {length}, start {start})",
                field.tag()
            )));
        }
        let tag = field.tag().as_bytes();
        if tag.len() != 3 {
            return Err(MarcError::InvalidRecord(format!(
                "Tag '{}' is not 3 bytes",
                field.tag()
            )));
        }
        directory.extend_from_slice(tag);
        directory.extend_from_slice(format!("{length:04}{start:05}").as_bytes());
    }
    directory.push(FIELD_TERMINATOR);

    let base_address = LEADER_LENGTH + directory.len();
    let record_length = base_address + data_area.len() + 1;
    if record_length > 99999 {
        return Err(MarcError::InvalidRecord(format!(
            "Record length {record_length} exceeds 99999"
        )));
    }

    let leader = record.leader.as_bytes();
    let mut bytes = Vec::with_capacity(record_length);
    bytes.extend_from_slice(format!("{record_length:05}").as_bytes());
    bytes.extend_from_slice(&leader[5..12]);
    bytes.extend_from_slice(format!("{base_address:05}").as_bytes());
    bytes.extend_from_slice(&leader[17..]);
    bytes.extend_from_slice(&directory);
    bytes.extend_from_slice(&data_area);
    bytes.push(RECORD_TERMINATOR);
    Ok(bytes)
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn raw() -> RawRecord {
        RawRecord {
            leader: "00000cam a2200000   4500".to_string(),
            fields: vec![
                RawField::Control {
                    tag: "001".to_string(),
                    value: "   00000002 ".to_string(),
                },
                RawField::Data {
                    tag: "245".to_string(),
                    ind1: '1',
                    ind2: '0',
                    subfields: vec![
                        ('a', "Botanical materia medica".to_string()),
                        ('c', "By S. H. Aurand.".to_string()),
                    ],
                },
            ],
        }
    }

    #[test]
    fn test_write_computes_lengths() {
        let bytes = to_bytes(&raw()).unwrap();
        assert_eq!(&bytes[0..5], format!("{:05}", bytes.len()).as_bytes());
        // leader + two directory entries + terminator
        assert_eq!(&bytes[12..17], b"00049");
        assert_eq!(bytes.last(), Some(&RECORD_TERMINATOR));
    }

    #[test]
    fn test_read_back_written_record() {
        let bytes = to_bytes(&raw()).unwrap();
        let parsed = parse_record(&bytes, RecoveryMode::Strict).unwrap();
        assert_eq!(parsed.fields, raw().fields);
        assert_eq!(&parsed.leader[5..12], "cam a22");
    }

    #[test]
    fn test_reader_multiple_records_then_eof() {
        let mut all = to_bytes(&raw()).unwrap();
        all.extend(to_bytes(&raw()).unwrap());
        let mut reader = RawRecordReader::new(Cursor::new(all));
        assert!(reader.read_record().unwrap().is_some());
        assert!(reader.read_record().unwrap().is_some());
        assert!(reader.read_record().unwrap().is_none());
        assert_eq!(reader.records_read(), 2);
    }

    #[test]
    fn test_truncated_record() {
        let bytes = to_bytes(&raw()).unwrap();
        let cut = bytes[..bytes.len() - 10].to_vec();

        let mut strict = RawRecordReader::new(Cursor::new(cut.clone()));
        assert!(matches!(strict.read_record(), Err(MarcError::TruncatedRecord(_))));

        let mut lenient =
            RawRecordReader::new(Cursor::new(cut)).with_recovery_mode(RecoveryMode::Lenient);
        let record = lenient.read_record().unwrap().unwrap();
        assert_eq!(record.control_number(), Some("   00000002 "));
        assert_eq!(record.fields.len(), 2);
    }

    #[test]
    fn test_bad_directory_entry() {
        let mut bytes = to_bytes(&raw()).unwrap();
        // length digits of the 245 entry
        bytes[24 + 12 + 3] = b'x';
        assert!(parse_record(&bytes, RecoveryMode::Strict).is_err());
        let record = parse_record(&bytes, RecoveryMode::Lenient).unwrap();
        assert_eq!(record.fields.len(), 1);
    }

    #[test]
    fn test_garbage_before_first_subfield() {
        let field = b"10junk\x1faTitle\x1e";
        assert!(parse_data_field(field, RecoveryMode::Lenient).is_err());
        let (ind1, ind2, subfields) = parse_data_field(field, RecoveryMode::Permissive).unwrap();
        assert_eq!((ind1, ind2), ('1', '0'));
        assert_eq!(subfields, vec![('a', "Title".to_string())]);
    }

    #[test]
    fn test_unreadable_record_length() {
        let mut reader = RawRecordReader::new(Cursor::new(b"abcdecam a2200000   4500".to_vec()));
        assert!(reader.read_record().is_err());
    }

    #[test]
    fn test_iterator() {
        let bytes = to_bytes(&raw()).unwrap();
        let records: Vec<_> = RawRecordReader::new(Cursor::new(bytes))
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(records.len(), 1);
    }
}
