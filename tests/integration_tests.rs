//! Integration tests for marcqa: every source syntax converging on one record.

mod common;

use common::{book_leader, book_record, BOOK_008, BOOK_JSON, BOOK_LEADER, BOOK_TEXT};
use marcqa::batch::ingest_binary_batch;
use marcqa::ingest::{alephseq, binary, pica, text, IngestOptions};
use marcqa::iso2709::{Iso2709Writer, RawRecordReader, RecoveryMode};
use marcqa::{
    FieldCategory, MarcError, MarcRecord, MaterialType, PhysicalDescription, ValidationErrorKind,
};
use std::io::Cursor;

#[test]
fn test_book_record_json() {
    let record = book_record();
    assert_eq!(record.to_json().unwrap(), BOOK_JSON);
}

#[test]
fn test_book_record_selection() {
    let record = book_record();
    assert_eq!(record.select("008~0-5").unwrap(), vec!["800108"]);
    assert_eq!(record.select("008~7-10").unwrap(), vec!["1899"]);
    assert_eq!(record.select("008~0-1").unwrap(), vec!["80"]);
    assert_eq!(record.select("008~6").unwrap(), vec!["s"]);
    assert_eq!(
        record.select("650$a").unwrap(),
        vec!["Botany, Medical.", "Homeopathy"]
    );
    assert!(record.select("700$a").unwrap().is_empty());
    assert!(matches!(record.select("650"), Err(MarcError::InvalidSelector(_))));
}

#[test]
fn test_book_record_decoding() {
    let record = book_record();
    assert_eq!(record.leader().material_type(), MaterialType::Books);
    let fixed = record.control_field("008").unwrap();
    assert_eq!(fixed.category(), Some(FieldCategory::Material(MaterialType::Books)));
    assert_eq!(fixed.content(), BOOK_008);
    assert!(record.unhandled_tags().next().is_none());
}

#[test]
fn test_book_record_validates_clean() {
    let findings = book_record().validate();
    assert!(findings.is_empty(), "{findings:?}");
}

#[test]
fn test_multiple_007() {
    let leader = marcqa::Leader::decode("00860cam a22002774a 45 0", None).unwrap();
    let record = MarcRecord::builder(leader)
        .control_field("001", "010000011")
        .control_field("003", "DE-627")
        .control_field("005", "20180502143346.0")
        .control_field("008", "861106s1985    xx |||||      10| ||ger c")
        .control_field("007", "tu")
        .control_field("007", "at")
        .build();

    let descriptions = record.physical_descriptions();
    assert_eq!(descriptions.len(), 2);
    assert_eq!(descriptions[0].content(), "tu");
    assert_eq!(
        descriptions[0].category(),
        Some(FieldCategory::Physical(PhysicalDescription::Text))
    );
    assert_eq!(descriptions[1].content(), "at");
    assert_eq!(
        descriptions[1].category(),
        Some(FieldCategory::Physical(PhysicalDescription::Map))
    );
    assert_eq!(record.select("007~0").unwrap(), vec!["t", "a"]);

    let json = record.to_json().unwrap();
    assert!(json.contains(r#""007":["tu","at"],"008""#), "{json}");
}

#[test]
fn test_unknown_tag_tolerated() {
    let source = format!("{BOOK_TEXT}999 ##$alocal$bcopy 2\n");
    let record = text::ingest(&source, &IngestOptions::default()).unwrap();
    assert!(record.is_unhandled("999"));
    let json = record.to_json().unwrap();
    assert!(
        json.ends_with(r#""999":[{"ind1":" ","ind2":" ","subfields":{"a":"local","b":"copy 2"}}]}"#),
        "{json}"
    );
    // Unhandled fields are not validated.
    assert!(record.validate().is_empty());
}

#[test]
fn test_binary_source_matches_text_source() {
    let record = book_record();
    let mut buffer = Vec::new();
    Iso2709Writer::new(&mut buffer).write_record(&record).unwrap();

    let raw = RawRecordReader::new(Cursor::new(buffer))
        .read_record()
        .unwrap()
        .unwrap();
    let from_binary = binary::ingest(&raw, &IngestOptions::default()).unwrap();
    // Only the computed length and base address differ.
    assert_eq!(&from_binary.leader().as_str()[5..12], &BOOK_LEADER[5..12]);
    assert_eq!(from_binary.data_fields(), record.data_fields());
    assert_eq!(from_binary.control_number(), record.control_number());
}

#[test]
fn test_alephseq_source_matches_text_source() {
    let export = "\
000000002 LDR   L 00720cam^a22002051^^4500
000000002 001   L ^^^00000002^
000000002 003   L DLC
000000002 005   L 20040505165105.0
000000002 008   L 800108s1899^^^^ilu^^^^^^^^^^^000^0^eng^^
000000002 010   L $$a   00000002 
000000002 035   L $$a(OCoLC)5853149
000000002 040   L $$aDLC$$cDSI$$dDLC
000000002 05000 L $$aRX671$$b.A92
000000002 1001  L $$aAurand, Samuel Herbert,$$d1854-
000000002 24510 L $$aBotanical materia medica and pharmacology;$$bdrugs considered from a botanical, pharmaceutical, physiological, therapeutical and toxicological standpoint.$$cBy S. H. Aurand.
000000002 260   L $$aChicago,$$bP. H. Mallen Company,$$c1899.
000000002 300   L $$a406 p.$$c24 cm.
000000002 500   L $$aHomeopathic formulae.
000000002 650 0 L $$aBotany, Medical.
000000002 650 0 L $$aHomeopathy$$xMateria medica and therapeutics.
000000002 CAT   L $$aLOAD
";
    let lines = alephseq::parse_lines(export);
    let records = alephseq::split_records(lines);
    assert_eq!(records.len(), 1);
    let record = alephseq::ingest(&records[0], &IngestOptions::default()).unwrap();
    assert_eq!(record.to_json().unwrap(), BOOK_JSON);
}

#[test]
fn test_pica_source() {
    let lines = pica::parse_lines(
        "LDR 00720cam a22002051  4500\n001 00000002\n021A $aBotanical materia medica\n",
    );
    let record = pica::ingest(&lines, &IngestOptions::default()).unwrap();
    assert_eq!(record.control_number(), Some("00000002"));
    assert_eq!(record.unhandled_tags().collect::<Vec<_>>(), vec!["021A"]);
}

#[test]
fn test_failed_leader_names_record() {
    let source = BOOK_TEXT.replace("00720cam", "00720c?m");
    let err = text::ingest(&source, &IngestOptions::default()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("   00000002 "), "{message}");
    assert!(message.contains("00720c?m a22002051  4500"), "{message}");

    let rescued = text::ingest(
        &source,
        &IngestOptions::default().with_default_category(MaterialType::Books),
    )
    .unwrap();
    assert_eq!(rescued.leader().material_type(), MaterialType::Books);
}

#[test]
fn test_batch_continues_after_failed_record() {
    let good = book_record();
    let broken = MarcRecord::builder(book_leader()).control_field("001", "broken").build();

    let mut buffer = Vec::new();
    let mut writer = Iso2709Writer::new(&mut buffer);
    writer.write_record(&good).unwrap();
    writer.write_record(&broken).unwrap();
    writer.write_record(&good).unwrap();
    assert_eq!(writer.records_written(), 3);

    // Corrupt the record type of the second record.
    let second = buffer.iter().position(|b| *b == 0x1D).unwrap() + 1;
    buffer[second + 6] = b'?';

    let results = ingest_binary_batch(&buffer, &IngestOptions::default());
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(MarcError::InvalidLeader { ref control_number, .. }) if control_number == "broken"));
    assert!(results[2].is_ok());
}

#[test]
fn test_lenient_reader_skips_damaged_entry() {
    let record = book_record();
    let mut buffer = Vec::new();
    Iso2709Writer::new(&mut buffer).write_record(&record).unwrap();
    // Damage the start position of the first directory entry.
    buffer[24 + 7] = b'x';

    let strict = RawRecordReader::new(Cursor::new(buffer.clone())).read_record();
    assert!(strict.is_err());

    let raw = RawRecordReader::new(Cursor::new(buffer))
        .with_recovery_mode(RecoveryMode::Lenient)
        .read_record()
        .unwrap()
        .unwrap();
    let recovered = binary::ingest(&raw, &IngestOptions::default()).unwrap();
    assert_eq!(recovered.control_number(), None);
    assert_eq!(recovered.data_fields().len(), record.data_fields().len());
}

#[test]
fn test_validation_findings_are_data() {
    let source = format!("{BOOK_TEXT}245 10$aSecond title$aagain\n");
    let record = text::ingest(&source, &IngestOptions::default()).unwrap();
    let findings = record.validate();
    let kinds: Vec<_> = findings.iter().map(|f| f.kind).collect();
    assert_eq!(kinds, vec![ValidationErrorKind::NonrepeatableSubfield]);
    assert_eq!(findings[0].record_id.as_deref(), Some("   00000002 "));
}
