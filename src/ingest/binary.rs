//! Ingestion of tokenized ISO 2709 records.

use super::{ingest_events, IngestEvent, IngestOptions};
use crate::error::Result;
use crate::iso2709::{RawField, RawRecord};
use crate::record::MarcRecord;

/// Events for a tokenized record: the leader, then fields in directory order.
#[must_use]
pub fn events(raw: &RawRecord) -> Vec<IngestEvent> {
    let mut events = Vec::with_capacity(raw.fields.len() + 1);
    events.push(IngestEvent::Leader(raw.leader.clone()));
    events.extend(raw.fields.iter().map(|field| match field {
        RawField::Control { tag, value } => IngestEvent::ControlField {
            tag: tag.clone(),
            content: value.clone(),
        },
        RawField::Data {
            tag,
            ind1,
            ind2,
            subfields,
        } => IngestEvent::DataField {
            tag: tag.clone(),
            ind1: *ind1,
            ind2: *ind2,
            subfields: subfields.clone(),
        },
    }));
    events
}

/// Build a canonical record from a tokenized binary record.
///
/// # Errors
///
/// Returns an error if the leader cannot be decoded.
pub fn ingest(raw: &RawRecord, options: &IngestOptions) -> Result<MarcRecord> {
    ingest_events(events(raw), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iso2709::{parse_record, to_bytes, RecoveryMode};

    fn raw() -> RawRecord {
        RawRecord {
            leader: "00720cam a22002051  4500".to_string(),
            fields: vec![
                RawField::Data {
                    tag: "245".to_string(),
                    ind1: '1',
                    ind2: '0',
                    subfields: vec![('c', "By S. H. Aurand.".to_string()), ('a', "Botanical".to_string())],
                },
                RawField::Control {
                    tag: "001".to_string(),
                    value: "   00000002 ".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_ingest_raw_record() {
        let record = ingest(&raw(), &IngestOptions::default()).unwrap();
        assert_eq!(record.control_number(), Some("   00000002 "));
        assert_eq!(record.select("245$a").unwrap(), vec!["Botanical"]);
    }

    #[test]
    fn test_ingested_record_is_a_fixpoint() {
        let options = IngestOptions::default();
        let bytes = to_bytes(&raw()).unwrap();
        let first = ingest(&parse_record(&bytes, RecoveryMode::Strict).unwrap(), &options).unwrap();
        let again = to_bytes(&RawRecord::from(&first)).unwrap();
        let second = ingest(&parse_record(&again, RecoveryMode::Strict).unwrap(), &options).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn test_events_keep_directory_order() {
        let events = events(&raw());
        assert!(matches!(events[0], IngestEvent::Leader(_)));
        assert!(matches!(&events[1], IngestEvent::DataField { tag, .. } if tag == "245"));
        assert!(matches!(&events[2], IngestEvent::ControlField { tag, .. } if tag == "001"));
    }
}
