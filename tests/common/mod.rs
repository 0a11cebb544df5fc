//! Fixtures shared across the integration tests.

#![allow(dead_code)]

use marcqa::ingest::{text, IngestOptions};
use marcqa::{Leader, MarcRecord};

/// Leader of the sample book record.
pub const BOOK_LEADER: &str = "00720cam a22002051  4500";

/// 008 of the sample book record.
pub const BOOK_008: &str = "800108s1899    ilu           000 0 eng  ";

/// The sample book record in formatted text, as a cataloger would paste it.
pub const BOOK_TEXT: &str = "LEADER 00720cam a22002051  4500
001    00000002 
003 DLC
005 20040505165105.0
008 800108s1899    ilu           000 0 eng  
010 ##$a   00000002 
035 ##$a(OCoLC)5853149
040 ##$aDLC$cDSI$dDLC
050 00$aRX671$b.A92
100 1#$aAurand, Samuel Herbert,$d1854-
245 10$aBotanical materia medica and pharmacology;$bdrugs considered from a botanical, pharmaceutical, physiological, therapeutical and toxicological standpoint.$cBy S. H. Aurand.
260 ##$aChicago,$bP. H. Mallen Company,$c1899.
300 ##$a406 p.$c24 cm.
500 ##$aHomeopathic formulae.
650 #0$aBotany, Medical.
650 #0$aHomeopathy$xMateria medica and therapeutics.
";

/// Canonical JSON of the sample book record.
pub const BOOK_JSON: &str = concat!(
    r#"{"leader":"00720cam a22002051  4500","001":"   00000002 ","003":"DLC","#,
    r#""005":"20040505165105.0","008":"800108s1899    ilu           000 0 eng  ","#,
    r#""010":[{"ind1":" ","ind2":" ","subfields":{"a":"   00000002 "}}],"#,
    r#""035":[{"ind1":" ","ind2":" ","subfields":{"a":"(OCoLC)5853149"}}],"#,
    r#""040":[{"ind1":" ","ind2":" ","subfields":{"a":"DLC","c":"DSI","d":"DLC"}}],"#,
    r#""050":[{"ind1":"0","ind2":"0","subfields":{"a":"RX671","b":".A92"}}],"#,
    r#""100":[{"ind1":"1","ind2":" ","subfields":{"a":"Aurand, Samuel Herbert,","d":"1854-"}}],"#,
    r#""245":[{"ind1":"1","ind2":"0","subfields":{"a":"Botanical materia medica and pharmacology;","#,
    r#""b":"drugs considered from a botanical, pharmaceutical, physiological, therapeutical and toxicological standpoint.","#,
    r#""c":"By S. H. Aurand."}}],"#,
    r#""260":[{"ind1":" ","ind2":" ","subfields":{"a":"Chicago,","b":"P. H. Mallen Company,","c":"1899."}}],"#,
    r#""300":[{"ind1":" ","ind2":" ","subfields":{"a":"406 p.","c":"24 cm."}}],"#,
    r#""500":[{"ind1":" ","ind2":" ","subfields":{"a":"Homeopathic formulae."}}],"#,
    r#""650":[{"ind1":" ","ind2":"0","subfields":{"a":"Botany, Medical."}},"#,
    r#"{"ind1":" ","ind2":"0","subfields":{"a":"Homeopathy","x":"Materia medica and therapeutics."}}]}"#,
);

/// The sample book record, ingested from [`BOOK_TEXT`].
pub fn book_record() -> MarcRecord {
    text::ingest(BOOK_TEXT, &IngestOptions::default()).expect("sample record ingests")
}

/// The sample book leader, decoded.
pub fn book_leader() -> Leader {
    Leader::decode(BOOK_LEADER, None).expect("sample leader decodes")
}
