//! Formatted-text records.
//!
//! One field per line:
//!
//! ```text
//! LEADER 00720cam a22002051  4500
//! 001    00000002
//! 008 800108s1899    ilu           000 0 eng
//! 245 10$aBotanical materia medica and pharmacology;$cBy S. H. Aurand.
//! ```
//!
//! The first three characters are the tag, one separator character follows,
//! and the rest is the content. Control-field content is taken verbatim. Data
//! field content starts with the two indicators (`#` or `_` for blank)
//! followed by `$<code><value>` pairs; a literal `$` is written `$$`.

use super::{ingest_events, IngestEvent, IngestOptions};
use crate::error::Result;
use crate::field::BLANK;
use crate::record::{is_control_tag, MarcRecord};
use std::fmt::Write as _;
use tracing::warn;

const LEADER_PREFIX: &str = "LEADER ";
const DELIMITER: char = '$';

/// Events for one formatted-text record.
///
/// Blank lines are ignored. Lines that cannot be read as a field are logged
/// and skipped.
#[must_use]
pub fn events(input: &str) -> Vec<IngestEvent> {
    input
        .lines()
        .enumerate()
        .filter_map(|(number, line)| parse_line(line.trim_end_matches('\r'), number + 1))
        .collect()
}

/// Build a canonical record from formatted text.
///
/// # Errors
///
/// Returns an error if the text has no `LEADER` line or the leader cannot be
/// decoded.
pub fn ingest(input: &str, options: &IngestOptions) -> Result<MarcRecord> {
    ingest_events(events(input), options)
}

/// Split a multi-record text into records, each starting at a `LEADER` line.
///
/// Lines before the first `LEADER` line form a record of their own, which
/// fails to ingest with a missing-leader error.
pub fn split_records(input: &str) -> Vec<&str> {
    let mut starts: Vec<usize> = Vec::new();
    let mut offset = 0;
    for line in input.split_inclusive('\n') {
        if line.starts_with(LEADER_PREFIX) {
            starts.push(offset);
        }
        offset += line.len();
    }
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| &input[start..starts.get(i + 1).copied().unwrap_or(input.len())])
        .filter(|chunk| !chunk.trim().is_empty())
        .collect()
}

fn parse_line(line: &str, number: usize) -> Option<IngestEvent> {
    if line.trim().is_empty() {
        return None;
    }
    if let Some(leader) = line.strip_prefix(LEADER_PREFIX) {
        return Some(IngestEvent::Leader(leader.to_string()));
    }

    let Some(tag) = line.get(..3) else {
        warn!(line = number, content = line, "line too short for a tag, skipped");
        return None;
    };
    let rest = &line[3..];
    let content = rest
        .chars()
        .next()
        .map_or("", |separator| &rest[separator.len_utf8()..]);

    if is_control_tag(tag) {
        return Some(IngestEvent::ControlField {
            tag: tag.to_string(),
            content: content.to_string(),
        });
    }

    let mut chars = content.chars();
    let (Some(ind1), Some(ind2)) = (chars.next(), chars.next()) else {
        warn!(line = number, tag, "data field without indicators, skipped");
        return None;
    };
    let subfields = read_subfields(chars.as_str(), number, tag);

    Some(IngestEvent::DataField {
        tag: tag.to_string(),
        ind1: read_indicator(ind1),
        ind2: read_indicator(ind2),
        subfields,
    })
}

/// Split `$<code><value>` pairs; `$$` is a literal dollar sign.
fn read_subfields(body: &str, number: usize, tag: &str) -> Vec<(char, String)> {
    let mut subfields: Vec<(char, String)> = Vec::new();
    let mut leading = String::new();
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        let literal = if c == DELIMITER {
            match chars.next() {
                Some(DELIMITER) => DELIMITER,
                Some(code) => {
                    subfields.push((code, String::new()));
                    continue;
                },
                None => {
                    warn!(line = number, tag, "empty subfield skipped");
                    break;
                },
            }
        } else {
            c
        };
        match subfields.last_mut() {
            Some((_, value)) => value.push(literal),
            None => leading.push(literal),
        }
    }
    if !leading.is_empty() {
        warn!(line = number, tag, text = %leading, "text before first subfield dropped");
    }
    subfields
}

fn read_indicator(c: char) -> char {
    match c {
        '#' | '_' => BLANK,
        other => other,
    }
}

fn write_indicator(c: char) -> char {
    if c == BLANK {
        '#'
    } else {
        c
    }
}

/// Render a record in the formatted-text syntax [`ingest`] reads.
///
/// Control fields come first in canonical order, then data fields in source
/// order with subfields as stored. Dollar signs in values are doubled.
///
/// # Examples
///
/// ```
/// use marcqa::ingest::{text, IngestOptions};
/// use marcqa::{Leader, MarcRecord};
///
/// let record = MarcRecord::builder(Leader::decode("00720cam a22002051  4500", None)?)
///     .control_field("001", "   00000002 ")
///     .data_field("650", ' ', '0', [('a', "Homeopathy")])
///     .build();
///
/// let rendered = text::to_formatted_text(&record);
/// assert_eq!(
///     rendered,
///     "LEADER 00720cam a22002051  4500\n001    00000002 \n650 #0$aHomeopathy\n"
/// );
/// assert_eq!(text::ingest(&rendered, &IngestOptions::default())?, record);
/// # Ok::<(), marcqa::MarcError>(())
/// ```
#[must_use]
pub fn to_formatted_text(record: &MarcRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{LEADER_PREFIX}{}", record.leader().as_str());
    for field in record.control_fields() {
        let _ = writeln!(out, "{} {}", field.tag(), field.content());
    }
    for field in record.data_fields() {
        let _ = write!(
            out,
            "{} {}{}",
            field.tag(),
            write_indicator(field.ind1()),
            write_indicator(field.ind2())
        );
        for subfield in field.subfields() {
            let _ = write!(
                out,
                "{DELIMITER}{}{}",
                subfield.code,
                subfield.value.replace(DELIMITER, "$$")
            );
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = "LEADER 00720cam a22002051  4500
001    00000002
008 800108s1899    ilu           000 0 eng
100 1#$aAurand, Samuel Herbert,$d1854-
650 _0$aHomeopathy$xMateria medica and therapeutics.
";

    #[test]
    fn test_parse_record() {
        let record = ingest(RECORD, &IngestOptions::default()).unwrap();
        assert_eq!(record.control_number(), Some("   00000002"));
        assert_eq!(record.select("008~7-10").unwrap(), vec!["1899"]);
        let author = &record.data_fields()[0];
        assert_eq!((author.ind1(), author.ind2()), ('1', ' '));
        assert_eq!(author.first_value('d'), Some("1854-"));
        assert_eq!(record.data_fields()[1].ind1(), ' ');
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let input = "LEADER 00720cam a22002051  4500\nxy\n245 1\n\n245 10$aTitle\n";
        let events = events(input);
        assert_eq!(events.len(), 2);
        let record = ingest(input, &IngestOptions::default()).unwrap();
        assert_eq!(record.select("245$a").unwrap(), vec!["Title"]);
    }

    #[test]
    fn test_text_before_first_subfield_dropped() {
        let events = events("245 10junk$aTitle");
        assert_eq!(
            events,
            vec![IngestEvent::DataField {
                tag: "245".to_string(),
                ind1: '1',
                ind2: '0',
                subfields: vec![('a', "Title".to_string())],
            }]
        );
    }

    #[test]
    fn test_crlf_lines() {
        let record = ingest(
            "LEADER 00720cam a22002051  4500\r\n245 10$aTitle\r\n",
            &IngestOptions::default(),
        )
        .unwrap();
        assert_eq!(record.select("245$a").unwrap(), vec!["Title"]);
    }

    #[test]
    fn test_missing_leader() {
        assert!(ingest("245 10$aTitle\n", &IngestOptions::default()).is_err());
    }

    #[test]
    fn test_round_trip_through_text() {
        let options = IngestOptions::default();
        let first = ingest(RECORD, &options).unwrap();
        let second = ingest(&to_formatted_text(&first), &options).unwrap();
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn test_dollar_sign_in_value() {
        let options = IngestOptions::default();
        let record = ingest(
            "LEADER 00720cam a22002051  4500\n020 ##$a0123456789$c$$25.00\n",
            &options,
        )
        .unwrap();
        assert_eq!(record.select("020$c").unwrap(), vec!["$25.00"]);

        let rendered = to_formatted_text(&record);
        assert!(rendered.contains("$c$$25.00"), "{rendered}");
        let reread = ingest(&rendered, &options).unwrap();
        assert_eq!(reread.to_json().unwrap(), record.to_json().unwrap());
        assert!(reread.to_json().unwrap().contains(r#""c":"$25.00""#));
    }

    #[test]
    fn test_split_records() {
        let input = format!("{RECORD}\n{RECORD}");
        let records = split_records(&input);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.starts_with("LEADER ")));

        let stray = split_records("245 10$aTitle\nLEADER 00720cam a22002051  4500\n");
        assert_eq!(stray.len(), 2);
        assert!(stray[0].starts_with("245"));
    }
}
