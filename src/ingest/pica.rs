//! PICA+ plain lines.
//!
//! ```text
//! LDR 00720cam a22002051  4500
//! 001 1234567
//! 021A $aBotanical materia medica$hBy S. H. Aurand.
//! 045E/01 $a610
//! ```
//!
//! Each line is a tag with an optional `/occurrence`, a space and the
//! content. `$` introduces a subfield code and `$$` is a literal dollar sign.
//! Three-digit tags below 010 are control fields; any other tag starting with
//! three digits is a data field with blank indicators.

use super::{ingest_events, IngestEvent, IngestOptions};
use crate::error::Result;
use crate::field::BLANK;
use crate::record::{is_control_tag, MarcRecord};
use tracing::warn;

const DELIMITER: char = '$';

/// One PICA+ line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PicaLine {
    tag: String,
    occurrence: Option<String>,
    content: String,
}

impl PicaLine {
    /// Parse one line.
    ///
    /// Returns `None` when the line has no space between tag and content.
    ///
    /// ```
    /// use marcqa::ingest::pica::PicaLine;
    ///
    /// let line = PicaLine::parse("045E/01 $a610$bUS$$").unwrap();
    /// assert_eq!(line.tag(), "045E");
    /// assert_eq!(line.occurrence(), Some("01"));
    /// assert_eq!(
    ///     line.subfields(),
    ///     vec![('a', "610".to_string()), ('b', "US$".to_string())]
    /// );
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let (label, content) = line.split_once(' ')?;
        if label.is_empty() {
            return None;
        }
        let (tag, occurrence) = match label.split_once('/') {
            Some((tag, occurrence)) => (tag, Some(occurrence.to_string())),
            None => (label, None),
        };
        Some(PicaLine {
            tag: tag.to_string(),
            occurrence,
            content: content.to_string(),
        })
    }

    /// Tag without the occurrence.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Occurrence, the part after `/`.
    #[must_use]
    pub fn occurrence(&self) -> Option<&str> {
        self.occurrence.as_deref()
    }

    /// Content after the tag.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether this is the `LDR` pseudo-line.
    #[must_use]
    pub fn is_leader(&self) -> bool {
        self.tag == "LDR"
    }

    /// Whether the tag starts with three digits.
    #[must_use]
    pub fn is_numeric_tag(&self) -> bool {
        self.tag.len() >= 3 && self.tag.bytes().take(3).all(|b| b.is_ascii_digit())
    }

    /// Whether this is a control field (a three-digit tag below 010).
    #[must_use]
    pub fn is_control_field(&self) -> bool {
        self.tag.bytes().all(|b| b.is_ascii_digit()) && is_control_tag(&self.tag)
    }

    /// `(code, value)` pairs.
    ///
    /// Text before the first code and a trailing `$` with no code are logged
    /// and dropped.
    #[must_use]
    pub fn subfields(&self) -> Vec<(char, String)> {
        let mut subfields: Vec<(char, String)> = Vec::new();
        let mut leading = String::new();
        let mut chars = self.content.chars();
        while let Some(c) = chars.next() {
            if c != DELIMITER {
                match subfields.last_mut() {
                    Some((_, value)) => value.push(c),
                    None => leading.push(c),
                }
                continue;
            }
            match chars.next() {
                Some(DELIMITER) => match subfields.last_mut() {
                    Some((_, value)) => value.push(DELIMITER),
                    None => leading.push(DELIMITER),
                },
                Some(code) => subfields.push((code, String::new())),
                None => warn!(tag = %self.tag, content = %self.content, "dangling subfield delimiter"),
            }
        }
        if !leading.trim().is_empty() {
            warn!(tag = %self.tag, text = %leading, "text before first subfield dropped");
        }
        subfields
    }

    fn event(&self) -> Option<IngestEvent> {
        if self.is_leader() {
            return Some(IngestEvent::Leader(self.content.clone()));
        }
        if !self.is_numeric_tag() {
            return None;
        }
        if self.is_control_field() {
            return Some(IngestEvent::ControlField {
                tag: self.tag.clone(),
                content: self.content.clone(),
            });
        }
        Some(IngestEvent::DataField {
            tag: self.tag.clone(),
            ind1: BLANK,
            ind2: BLANK,
            subfields: self.subfields(),
        })
    }
}

/// Parse record text into lines, logging and skipping unreadable ones.
#[must_use]
pub fn parse_lines(input: &str) -> Vec<PicaLine> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(number, line)| {
            let parsed = PicaLine::parse(line.trim_end_matches('\r'));
            if parsed.is_none() {
                warn!(line = number + 1, content = line, "unreadable PICA+ line skipped");
            }
            parsed
        })
        .collect()
}

/// Events for the lines of one record. Tags not starting with three digits
/// are skipped.
#[must_use]
pub fn events(lines: &[PicaLine]) -> Vec<IngestEvent> {
    lines.iter().filter_map(PicaLine::event).collect()
}

/// Build a canonical record from the lines of one record.
///
/// # Errors
///
/// Returns an error if there is no `LDR` line or the leader cannot be decoded.
pub fn ingest(lines: &[PicaLine], options: &IngestOptions) -> Result<MarcRecord> {
    ingest_events(events(lines), options)
}
