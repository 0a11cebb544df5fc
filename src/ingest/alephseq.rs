//! Aleph sequential export lines.
//!
//! ```text
//! 000000002 LDR   L 00720cam^a22002051^^4500
//! 000000002 008   L 800108s1899^^^^ilu^^^^^^^^^^^000^0^eng^^
//! 000000002 24510 L $$aBotanical materia medica$$cBy S. H. Aurand.
//! ```
//!
//! Columns: system number (0-8), tag (10-12), indicators (13-14), format
//! code (16), content (18 onward). In the leader and control fields `^`
//! stands for a blank.

use super::{ingest_events, IngestEvent, IngestOptions};
use crate::error::Result;
use crate::record::{is_control_tag, MarcRecord};
use tracing::warn;

const SUBFIELD_DELIMITER: &str = "$$";
const CONTENT_OFFSET: usize = 18;

/// One line of an Aleph sequential export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlephseqLine {
    record_id: String,
    tag: String,
    ind1: char,
    ind2: char,
    content: String,
}

impl AlephseqLine {
    /// Parse one line.
    ///
    /// Returns `None` for lines too short to carry a system number and tag.
    ///
    /// ```
    /// use marcqa::ingest::alephseq::AlephseqLine;
    ///
    /// let line = AlephseqLine::parse("000000002 24510 L $$aTitle").unwrap();
    /// assert_eq!(line.tag(), "245");
    /// assert_eq!(line.indicators(), ('1', '0'));
    /// assert_eq!(line.subfields(), vec![('a', "Title".to_string())]);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let record_id = line.get(0..9)?.to_string();
        let tag = line.get(10..13)?.to_string();
        let mut indicators = line.get(13..)?.chars();
        let ind1 = indicators.next().unwrap_or(' ');
        let ind2 = indicators.next().unwrap_or(' ');
        let content = line.get(CONTENT_OFFSET..).unwrap_or_default().to_string();
        Some(AlephseqLine {
            record_id,
            tag,
            ind1,
            ind2,
            content,
        })
    }

    /// Aleph system number.
    #[must_use]
    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    /// Tag, `LDR` for the leader.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Both indicators.
    #[must_use]
    pub fn indicators(&self) -> (char, char) {
        (self.ind1, self.ind2)
    }

    /// Content as exported.
    #[must_use]
    pub fn raw_content(&self) -> &str {
        &self.content
    }

    /// Content with `^` placeholders turned into blanks.
    #[must_use]
    pub fn content(&self) -> String {
        self.content.replace('^', " ")
    }

    /// Whether this line carries the leader.
    #[must_use]
    pub fn is_leader(&self) -> bool {
        self.tag == "LDR"
    }

    /// Whether the tag is three digits. Aleph-internal fields (`CAT`, `SYS`,
    /// `OWN`) are not.
    #[must_use]
    pub fn is_numeric_tag(&self) -> bool {
        self.tag.len() == 3 && self.tag.bytes().all(|b| b.is_ascii_digit())
    }

    /// Whether this line is a control field (001-009).
    #[must_use]
    pub fn is_control_field(&self) -> bool {
        self.is_numeric_tag() && is_control_tag(&self.tag)
    }

    /// `(code, value)` pairs of a data-field line.
    ///
    /// Pieces with no code are logged and dropped.
    #[must_use]
    pub fn subfields(&self) -> Vec<(char, String)> {
        let mut pieces = self.content.split(SUBFIELD_DELIMITER);
        if let Some(leading) = pieces.next().filter(|text| !text.trim().is_empty()) {
            warn!(
                record_id = %self.record_id,
                tag = %self.tag,
                text = leading,
                "text before first subfield dropped"
            );
        }
        pieces
            .filter_map(|piece| {
                let mut chars = piece.chars();
                let Some(code) = chars.next() else {
                    warn!(
                        record_id = %self.record_id,
                        tag = %self.tag,
                        content = %self.content,
                        "subfield parse error"
                    );
                    return None;
                };
                Some((code, chars.as_str().to_string()))
            })
            .collect()
    }

    fn event(&self) -> Option<IngestEvent> {
        if self.is_leader() {
            return Some(IngestEvent::Leader(self.content()));
        }
        if !self.is_numeric_tag() {
            return None;
        }
        if self.is_control_field() {
            return Some(IngestEvent::ControlField {
                tag: self.tag.clone(),
                content: self.content(),
            });
        }
        Some(IngestEvent::DataField {
            tag: self.tag.clone(),
            ind1: self.ind1,
            ind2: self.ind2,
            subfields: self.subfields(),
        })
    }
}

/// Parse export text into lines, logging and skipping unreadable ones.
#[must_use]
pub fn parse_lines(input: &str) -> Vec<AlephseqLine> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(number, line)| {
            let parsed = AlephseqLine::parse(line.trim_end_matches('\r'));
            if parsed.is_none() {
                warn!(line = number + 1, content = line, "unreadable Aleph line skipped");
            }
            parsed
        })
        .collect()
}

/// Group consecutive lines by system number.
#[must_use]
pub fn split_records(lines: Vec<AlephseqLine>) -> Vec<Vec<AlephseqLine>> {
    let mut records: Vec<Vec<AlephseqLine>> = Vec::new();
    for line in lines {
        match records.last_mut() {
            Some(current) if current[0].record_id == line.record_id => current.push(line),
            _ => records.push(vec![line]),
        }
    }
    records
}

/// Events for the lines of one record. Non-numeric tags are skipped.
#[must_use]
pub fn events(lines: &[AlephseqLine]) -> Vec<IngestEvent> {
    lines.iter().filter_map(AlephseqLine::event).collect()
}

/// Build a canonical record from the lines of one record.
///
/// # Errors
///
/// Returns an error if there is no `LDR` line or the leader cannot be decoded.
pub fn ingest(lines: &[AlephseqLine], options: &IngestOptions) -> Result<MarcRecord> {
    ingest_events(events(lines), options)
}
