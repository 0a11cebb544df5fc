//! MARC record leader decoding.
//!
//! The MARC leader is a 24-character fixed-length field at the start of every MARC record.
//! It contains metadata describing the record's structure, content type, and encoding.
//! Decoding the leader establishes the record's [`MaterialType`], which selects the
//! layout used for the 008 control field.
//!
//! # Structure
//!
//! - Positions 0-4: Record length (5 digits)
//! - Position 5: Record status
//! - Position 6: Record type (a = language material, c = music, etc.)
//! - Position 7: Bibliographic level (m = monograph, s = serial, etc.)
//! - Position 8: Control record type
//! - Position 9: Character coding (space = MARC-8, a = UTF-8)
//! - Position 10: Indicator count (usually 2)
//! - Position 11: Subfield code count (usually 2)
//! - Positions 12-16: Base address of data (5 digits)
//! - Positions 17-19: Encoding level, cataloging form, multipart level
//! - Positions 20-23: Entry map (usually "4500")

use crate::error::{MarcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of a MARC leader in characters.
pub const LEADER_LENGTH: usize = 24;

/// Material category that decides how fixed-length control data is read.
///
/// `AllMaterials` names the positions shared by every category; a leader never
/// resolves to it, but the control field layouts are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaterialType {
    /// Positions common to all materials
    AllMaterials,
    /// Books (BK)
    Books,
    /// Computer files (CF)
    ComputerFiles,
    /// Maps (MP)
    Maps,
    /// Music (MU)
    Music,
    /// Continuing resources (CR)
    ContinuingResources,
    /// Visual materials (VM)
    VisualMaterials,
    /// Mixed materials (MX)
    MixedMaterials,
}

impl MaterialType {
    /// Every category that a leader or 006 can resolve to.
    pub const CONCRETE: [MaterialType; 7] = [
        MaterialType::Books,
        MaterialType::ComputerFiles,
        MaterialType::Maps,
        MaterialType::Music,
        MaterialType::ContinuingResources,
        MaterialType::VisualMaterials,
        MaterialType::MixedMaterials,
    ];

    /// Resolve a category from a type-of-record code.
    ///
    /// Language material (`a`, `t`) is split by bibliographic level: monographic
    /// levels give [`MaterialType::Books`], serial and integrating levels give
    /// [`MaterialType::ContinuingResources`]. When no level is known (006/00)
    /// language material resolves to books, and `s` names continuing resources.
    #[must_use]
    pub fn from_type_code(record_type: char, bibliographic_level: Option<char>) -> Option<Self> {
        match record_type {
            'a' | 't' => match bibliographic_level {
                None | Some('a' | 'c' | 'd' | 'm') => Some(MaterialType::Books),
                Some('b' | 'i' | 's') => Some(MaterialType::ContinuingResources),
                Some(_) => None,
            },
            's' if bibliographic_level.is_none() => Some(MaterialType::ContinuingResources),
            'c' | 'd' | 'i' | 'j' => Some(MaterialType::Music),
            'e' | 'f' => Some(MaterialType::Maps),
            'g' | 'k' | 'o' | 'r' => Some(MaterialType::VisualMaterials),
            'm' => Some(MaterialType::ComputerFiles),
            'p' => Some(MaterialType::MixedMaterials),
            _ => None,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MaterialType::AllMaterials => "All Materials",
            MaterialType::Books => "Books",
            MaterialType::ComputerFiles => "Computer Files",
            MaterialType::Maps => "Maps",
            MaterialType::Music => "Music",
            MaterialType::ContinuingResources => "Continuing Resources",
            MaterialType::VisualMaterials => "Visual Materials",
            MaterialType::MixedMaterials => "Mixed Materials",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// MARC Leader - 24 characters at the start of every MARC record.
///
/// The leader keeps its raw content so it serializes back exactly as read.
/// Positional values are exposed through accessors. Numeric positions of
/// legacy leaders are often garbage, so they decode to `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    content: String,
    material_type: MaterialType,
}

impl Leader {
    /// Decode a leader string.
    ///
    /// `default_type` is used when the type-of-record code (and bibliographic
    /// level) maps to no known category, which legacy feeds with malformed
    /// leaders need.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::InvalidLeader`] if the content is not exactly 24
    /// characters, or if no category can be resolved and no default was given.
    pub fn decode(content: &str, default_type: Option<MaterialType>) -> Result<Self> {
        let length = content.chars().count();
        if length != LEADER_LENGTH {
            return Err(MarcError::invalid_leader(
                content,
                format!("leader must be {LEADER_LENGTH} characters, got {length}"),
            ));
        }

        let record_type = char_at(content, 6);
        let level = char_at(content, 7);
        let material_type = MaterialType::from_type_code(record_type, Some(level))
            .or(default_type)
            .ok_or_else(|| {
                MarcError::invalid_leader(
                    content,
                    format!(
                        "no material type for record type '{record_type}' and bibliographic level '{level}'"
                    ),
                )
            })?;

        Ok(Leader {
            content: content.to_string(),
            material_type,
        })
    }

    /// The raw 24-character leader.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Category resolved from positions 6 and 7 (or the caller's default).
    #[must_use]
    pub fn material_type(&self) -> MaterialType {
        self.material_type
    }

    /// Character at a leader position; blank beyond the end.
    #[must_use]
    pub fn position(&self, position: usize) -> char {
        char_at(&self.content, position)
    }

    /// Record length (positions 0-4), if numeric.
    #[must_use]
    pub fn record_length(&self) -> Option<u32> {
        self.content.get(0..5).and_then(|s| s.parse().ok())
    }

    /// Record status (position 5).
    #[must_use]
    pub fn record_status(&self) -> char {
        self.position(5)
    }

    /// Type of record (position 6).
    #[must_use]
    pub fn record_type(&self) -> char {
        self.position(6)
    }

    /// Bibliographic level (position 7).
    #[must_use]
    pub fn bibliographic_level(&self) -> char {
        self.position(7)
    }

    /// Type of control (position 8).
    #[must_use]
    pub fn control_record_type(&self) -> char {
        self.position(8)
    }

    /// Character coding scheme (position 9).
    #[must_use]
    pub fn character_coding(&self) -> char {
        self.position(9)
    }

    /// Base address of data (positions 12-16), if numeric.
    #[must_use]
    pub fn data_base_address(&self) -> Option<u32> {
        self.content.get(12..17).and_then(|s| s.parse().ok())
    }

    /// Encoding level (position 17).
    #[must_use]
    pub fn encoding_level(&self) -> char {
        self.position(17)
    }

    /// Descriptive cataloging form (position 18).
    #[must_use]
    pub fn cataloging_form(&self) -> char {
        self.position(18)
    }

    /// Multipart resource record level (position 19).
    #[must_use]
    pub fn multipart_level(&self) -> char {
        self.position(19)
    }

    /// Positions whose value is not in the MARC 21 code table for that position.
    ///
    /// Returns `(position, value)` pairs in position order.
    #[must_use]
    pub fn invalid_positions(&self) -> Vec<(usize, char)> {
        [5, 6, 7, 8, 9, 17, 18, 19]
            .into_iter()
            .map(|pos| (pos, self.position(pos)))
            .filter(|(pos, c)| !Self::is_valid_value(*pos, &c.to_string()))
            .collect()
    }

    /// Get valid values for a specific leader position from the MARC 21 format.
    ///
    /// # Arguments
    ///
    /// * `position` - The leader position (5-19)
    ///
    /// # Returns
    ///
    /// A vector of tuples containing (value, description) for valid values at that position.
    /// Returns `None` for positions without a code table.
    ///
    /// # Example
    ///
    /// ```
    /// use marcqa::Leader;
    /// let valid_values = Leader::valid_values_at_position(5).unwrap();
    /// assert!(valid_values.iter().any(|(code, _)| *code == "n"));
    /// ```
    #[must_use]
    pub fn valid_values_at_position(position: usize) -> Option<Vec<(&'static str, &'static str)>> {
        match position {
            5 => Some(vec![
                ("a", "Increase in encoding level"),
                ("c", "Corrected or revised"),
                ("d", "Deleted"),
                ("n", "New"),
                ("p", "Increase in encoding level from prepublication"),
            ]),
            6 => Some(vec![
                ("a", "Language material"),
                ("c", "Notated music"),
                ("d", "Manuscript notated music"),
                ("e", "Cartographic material"),
                ("f", "Manuscript cartographic material"),
                ("g", "Projected medium"),
                ("i", "Nonmusical sound recording"),
                ("j", "Musical sound recording"),
                ("k", "Two-dimensional nonprojectable graphic"),
                ("m", "Computer file"),
                ("o", "Kit"),
                ("p", "Mixed materials"),
                (
                    "r",
                    "Three-dimensional artifact or naturally occurring object",
                ),
                ("t", "Manuscript language material"),
            ]),
            7 => Some(vec![
                ("a", "Monographic component part"),
                ("b", "Serial component part"),
                ("c", "Collection"),
                ("d", "Subunit"),
                ("i", "Integrating resource"),
                ("m", "Monograph/Item"),
                ("s", "Serial"),
            ]),
            8 => Some(vec![(" ", "No specified type"), ("a", "Archival")]),
            9 => Some(vec![(" ", "MARC-8"), ("a", "UCS/Unicode")]),
            17 => Some(vec![
                (" ", "Full level"),
                ("1", "Full level, material not examined"),
                ("2", "Less-than-full level, material not examined"),
                ("3", "Abbreviated level"),
                ("4", "Core level"),
                ("5", "Partial (preliminary) level"),
                ("7", "Minimal level"),
                ("8", "Prepublication level"),
                ("u", "Unknown"),
                ("z", "Not applicable"),
            ]),
            18 => Some(vec![
                (" ", "Non-ISBD"),
                ("a", "AACR 2"),
                ("c", "ISBD punctuation omitted"),
                ("i", "ISBD punctuation included"),
                ("n", "Non-ISBD punctuation omitted"),
                ("u", "Unknown"),
            ]),
            19 => Some(vec![
                (" ", "Not specified or not applicable"),
                ("a", "Set"),
                ("b", "Part with independent title"),
                ("c", "Part with dependent title"),
            ]),
            _ => None,
        }
    }

    /// Get description for a specific value at a leader position.
    ///
    /// # Example
    ///
    /// ```
    /// use marcqa::Leader;
    /// assert_eq!(Leader::describe_value(6, "e"), Some("Cartographic material"));
    /// ```
    #[must_use]
    pub fn describe_value(position: usize, value: &str) -> Option<&'static str> {
        Self::valid_values_at_position(position).and_then(|values| {
            values
                .into_iter()
                .find(|(v, _)| *v == value)
                .map(|(_, desc)| desc)
        })
    }

    /// Check if a value is valid for a specific leader position.
    ///
    /// If the position has no defined valid values, any value is considered valid.
    #[must_use]
    pub fn is_valid_value(position: usize, value: &str) -> bool {
        match Self::valid_values_at_position(position) {
            Some(values) => values.iter().any(|(v, _)| *v == value),
            None => true,
        }
    }
}

impl FromStr for Leader {
    type Err = MarcError;

    fn from_str(s: &str) -> Result<Self> {
        Leader::decode(s, None)
    }
}

impl fmt::Display for Leader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

fn char_at(content: &str, position: usize) -> char {
    content.chars().nth(position).unwrap_or(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_book_leader() {
        let leader = Leader::decode("00720cam a22002051  4500", None).unwrap();

        assert_eq!(leader.record_length(), Some(720));
        assert_eq!(leader.record_status(), 'c');
        assert_eq!(leader.record_type(), 'a');
        assert_eq!(leader.bibliographic_level(), 'm');
        assert_eq!(leader.character_coding(), 'a');
        assert_eq!(leader.data_base_address(), Some(205));
        assert_eq!(leader.encoding_level(), '1');
        assert_eq!(leader.material_type(), MaterialType::Books);
        assert_eq!(leader.as_str(), "00720cam a22002051  4500");
    }

    #[test]
    fn test_serial_is_continuing_resource() {
        let leader = Leader::decode("00000nas a2200000 a 4500", None).unwrap();
        assert_eq!(leader.material_type(), MaterialType::ContinuingResources);
    }

    #[test]
    fn test_category_table() {
        let cases = [
            ('c', MaterialType::Music),
            ('j', MaterialType::Music),
            ('e', MaterialType::Maps),
            ('g', MaterialType::VisualMaterials),
            ('r', MaterialType::VisualMaterials),
            ('m', MaterialType::ComputerFiles),
            ('p', MaterialType::MixedMaterials),
        ];
        for (code, expected) in cases {
            let raw = format!("00000n{code}m a2200000 a 4500");
            let leader = Leader::decode(&raw, None).unwrap();
            assert_eq!(leader.material_type(), expected, "record type {code}");
        }
    }

    #[test]
    fn test_wrong_length_is_fatal() {
        let result = Leader::decode("0123456789012", None);
        assert!(matches!(result, Err(MarcError::InvalidLeader { .. })));

        // A default category does not rescue a short leader.
        let result = Leader::decode("0123456789012", Some(MaterialType::Books));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_type_uses_default() {
        let raw = "00000nzm a2200000 a 4500";
        assert!(Leader::decode(raw, None).is_err());

        let leader = Leader::decode(raw, Some(MaterialType::MixedMaterials)).unwrap();
        assert_eq!(leader.material_type(), MaterialType::MixedMaterials);
        assert_eq!(leader.record_type(), 'z');
    }

    #[test]
    fn test_language_material_with_unknown_level() {
        let raw = "00000na  a2200000 a 4500";
        assert!(Leader::decode(raw, None).is_err());
        assert_eq!(
            MaterialType::from_type_code('a', None),
            Some(MaterialType::Books)
        );
    }

    #[test]
    fn test_non_numeric_lengths_are_tolerated() {
        let leader = Leader::decode("^^^^^cam^^22^^^^^1^^4500", Some(MaterialType::Books)).unwrap();
        assert_eq!(leader.record_length(), None);
        assert_eq!(leader.data_base_address(), None);
    }

    #[test]
    fn test_invalid_positions() {
        let leader = Leader::decode("00720xam a22002059  4500", None).unwrap();
        assert_eq!(leader.invalid_positions(), vec![(5, 'x'), (17, '9')]);
    }

    #[test]
    fn test_describe_value_position_6() {
        assert_eq!(Leader::describe_value(6, "a"), Some("Language material"));
        assert_eq!(
            Leader::describe_value(6, "t"),
            Some("Manuscript language material")
        );
        assert_eq!(Leader::describe_value(99, "a"), None);
    }

    #[test]
    fn test_describe_value_all_valid_position_7() {
        let values = Leader::valid_values_at_position(7).unwrap();
        for (code, expected_desc) in values {
            assert_eq!(Leader::describe_value(7, code), Some(expected_desc));
        }
    }

    #[test]
    fn test_from_str_roundtrip() {
        let leader: Leader = "01136ccm a2200253ui 4500".parse().unwrap();
        assert_eq!(leader.to_string(), "01136ccm a2200253ui 4500");
        assert_eq!(leader.material_type(), MaterialType::Music);
    }
}
