//! Parallel ingestion of many records.
//!
//! Records are independent, so a batch is split into records first and each
//! record is ingested on Rayon's thread pool. Every record yields its own
//! `Result`, in input order: a record with a broken leader fails alone and
//! the rest of the batch is still produced.
//!
//! # Examples
//!
//! ```
//! use marcqa::batch::ingest_binary_batch;
//! use marcqa::ingest::IngestOptions;
//! use marcqa::iso2709::Iso2709Writer;
//! use marcqa::{Leader, MarcRecord};
//!
//! let record = MarcRecord::builder(Leader::decode("00000cam a2200000   4500", None)?)
//!     .control_field("001", "rec-1")
//!     .build();
//! let mut buffer = Vec::new();
//! let mut writer = Iso2709Writer::new(&mut buffer);
//! writer.write_record(&record)?;
//! writer.write_record(&record)?;
//!
//! let results = ingest_binary_batch(&buffer, &IngestOptions::default());
//! assert_eq!(results.len(), 2);
//! assert!(results.iter().all(Result::is_ok));
//! # Ok::<(), marcqa::MarcError>(())
//! ```

use crate::boundary_scanner;
use crate::error::{MarcError, Result};
use crate::ingest::{binary, text, IngestOptions};
use crate::iso2709::{parse_record, RecoveryMode};
use crate::record::MarcRecord;
use rayon::prelude::*;
use tracing::warn;

/// Ingest a buffer of ISO 2709 records in [`RecoveryMode::Strict`].
#[must_use]
pub fn ingest_binary_batch(buffer: &[u8], options: &IngestOptions) -> Vec<Result<MarcRecord>> {
    ingest_binary_batch_with(buffer, options, RecoveryMode::Strict)
}

/// Ingest a buffer of ISO 2709 records.
///
/// Bytes after the last record terminator yield a final
/// [`MarcError::TruncatedRecord`].
#[must_use]
pub fn ingest_binary_batch_with(
    buffer: &[u8],
    options: &IngestOptions,
    mode: RecoveryMode,
) -> Vec<Result<MarcRecord>> {
    let boundaries = boundary_scanner::scan(buffer);

    let mut results: Vec<Result<MarcRecord>> = boundaries
        .records
        .par_iter()
        .enumerate()
        .map(|(index, range)| {
            let result = parse_record(&buffer[range.clone()], mode)
                .and_then(|raw| binary::ingest(&raw, options));
            if let Err(err) = &result {
                warn!(index, offset = range.start, error = %err, "record failed");
            }
            result
        })
        .collect();

    if let Some(trailing) = boundaries.trailing {
        warn!(offset = trailing.start, "unterminated data at end of batch");
        results.push(Err(MarcError::TruncatedRecord(format!(
            "{} bytes after the last record terminator at offset {}",
            trailing.len(),
            trailing.start
        ))));
    }
    results
}

/// Ingest a formatted-text export holding many records.
#[must_use]
pub fn ingest_text_batch(input: &str, options: &IngestOptions) -> Vec<Result<MarcRecord>> {
    text::split_records(input)
        .par_iter()
        .enumerate()
        .map(|(index, chunk)| {
            let result = text::ingest(chunk, options);
            if let Err(err) = &result {
                warn!(index, error = %err, "record failed");
            }
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iso2709::{to_bytes, RawField, RawRecord};

    fn raw(leader: &str, id: &str) -> Vec<u8> {
        to_bytes(&RawRecord {
            leader: leader.to_string(),
            fields: vec![RawField::Control {
                tag: "001".to_string(),
                value: id.to_string(),
            }],
        })
        .unwrap()
    }

    #[test]
    fn test_bad_leader_fails_only_its_record() {
        let mut buffer = raw("00000cam a2200000   4500", "one");
        buffer.extend(raw("00000czm a2200000   4500", "two"));
        buffer.extend(raw("00000cam a2200000   4500", "three"));

        let results = ingest_binary_batch(&buffer, &IngestOptions::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().control_number(), Some("one"));
        let err = results[1].as_ref().unwrap_err().to_string();
        assert!(err.contains("two"), "{err}");
        assert_eq!(results[2].as_ref().unwrap().control_number(), Some("three"));
    }

    #[test]
    fn test_trailing_bytes_reported() {
        let mut buffer = raw("00000cam a2200000   4500", "one");
        buffer.extend_from_slice(b"00123cam");
        let results = ingest_binary_batch(&buffer, &IngestOptions::default());
        assert_eq!(results.len(), 2);
        assert!(matches!(results[1], Err(MarcError::TruncatedRecord(_))));
    }

    #[test]
    fn test_empty_batch() {
        assert!(ingest_binary_batch(&[], &IngestOptions::default()).is_empty());
        assert!(ingest_text_batch("", &IngestOptions::default()).is_empty());
    }

    #[test]
    fn test_text_batch_keeps_order() {
        let input = "LEADER 00720cam a22002051  4500\n001 a\n\
                     LEADER 00720cam a22002051  4500\n001 b\n";
        let ids: Vec<_> = ingest_text_batch(input, &IngestOptions::default())
            .into_iter()
            .map(|r| r.unwrap().control_number().map(str::to_string))
            .collect();
        assert_eq!(ids, vec![Some("a".to_string()), Some("b".to_string())]);
    }
}
