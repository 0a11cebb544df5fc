//! Selection locators.
//!
//! A locator names values inside a record:
//!
//! - `TAG~START-END`: characters `START` through `END` of a control field,
//!   both ends included (`008~7-10` is the four-character Date 1)
//! - `TAG~START`: the single character at `START`
//! - `TAG$CODE`: every value of a subfield code across all occurrences of a
//!   data field
//!
//! `LDR` selects from the leader with the positional forms. Tags have three
//! or four characters, so PICA+ fields (`021A$a`) can be selected too.

use crate::error::{MarcError, Result};
use crate::record::{is_control_tag, MarcRecord};
use nom::branch::alt;
use nom::bytes::complete::take_while_m_n;
use nom::character::complete::{anychar, char, digit1};
use nom::combinator::{all_consuming, map, map_res, opt};
use nom::sequence::{pair, preceded, separated_pair};
use nom::IResult;
use std::fmt;
use std::str::FromStr;

/// A parsed selection locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Control field or leader characters `[start, end)`
    ///
    /// The locator text names the last position; `end` is one past it.
    Position {
        /// Tag, or `LDR`
        tag: String,
        /// First position
        start: usize,
        /// Position after the last
        end: usize,
    },
    /// Subfield values of a data field
    Subfield {
        /// Tag
        tag: String,
        /// Subfield code
        code: char,
    },
}

// MARC tags have three characters; PICA+ tags such as `021A` or `003@` four.
fn tag(input: &str) -> IResult<&str, &str> {
    take_while_m_n(3, 4, |c: char| c.is_ascii_alphanumeric() || c == '@')(input)
}

fn number(input: &str) -> IResult<&str, usize> {
    map_res(digit1, usize::from_str)(input)
}

fn position(input: &str) -> IResult<&str, (&str, (usize, Option<usize>))> {
    separated_pair(tag, char('~'), pair(number, opt(preceded(char('-'), number))))(input)
}

fn subfield(input: &str) -> IResult<&str, (&str, char)> {
    separated_pair(tag, char('$'), anychar)(input)
}

fn locator(input: &str) -> IResult<&str, Selector> {
    alt((
        map(position, |(tag, (start, end))| Selector::Position {
            tag: tag.to_string(),
            start,
            end: end.unwrap_or(start).saturating_add(1),
        }),
        map(subfield, |(tag, code)| Selector::Subfield {
            tag: tag.to_string(),
            code,
        }),
    ))(input)
}

impl Selector {
    /// Parse a locator.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::InvalidSelector`] when the text does not follow
    /// one of the three forms, or when the range ends before it starts.
    pub fn parse(text: &str) -> Result<Self> {
        let (_, selector) = all_consuming(locator)(text)
            .map_err(|_| MarcError::InvalidSelector(text.to_string()))?;
        if let Selector::Position { start, end, .. } = &selector {
            if start >= end {
                return Err(MarcError::InvalidSelector(text.to_string()));
            }
        }
        Ok(selector)
    }

    /// Tag this selector reads from.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Selector::Position { tag, .. } | Selector::Subfield { tag, .. } => tag,
        }
    }

    /// Values in field-occurrence order; empty when nothing matches.
    #[must_use]
    pub fn select(&self, record: &MarcRecord) -> Vec<String> {
        match self {
            Selector::Position { tag, start, end } if tag == "LDR" => {
                slice_chars(record.leader().as_str(), *start, *end)
                    .into_iter()
                    .collect()
            },
            Selector::Position { tag, start, end } if tag == "007" => record
                .physical_descriptions()
                .iter()
                .filter_map(|field| field.slice(*start, *end))
                .collect(),
            Selector::Position { tag, start, end } if is_control_tag(tag) => record
                .control_field(tag)
                .and_then(|field| field.slice(*start, *end))
                .into_iter()
                .collect(),
            Selector::Position { .. } => Vec::new(),
            Selector::Subfield { tag, code } => record
                .fields_by_tag(tag)
                .flat_map(|field| field.values(*code))
                .map(str::to_string)
                .collect(),
        }
    }
}

fn slice_chars(content: &str, start: usize, end: usize) -> Option<String> {
    if end > content.chars().count() {
        return None;
    }
    Some(content.chars().skip(start).take(end - start).collect())
}

impl FromStr for Selector {
    type Err = MarcError;

    fn from_str(s: &str) -> Result<Self> {
        Selector::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Position { tag, start, end } if *end == start + 1 => {
                write!(f, "{tag}~{start}")
            },
            Selector::Position { tag, start, end } => write!(f, "{tag}~{start}-{}", end - 1),
            Selector::Subfield { tag, code } => write!(f, "{tag}${code}"),
        }
    }
}
