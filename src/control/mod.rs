//! Control field codec.
//!
//! Control fields 001-009 carry positional data instead of subfields. The
//! meaning of 006, 007 and 008 positions depends on a category resolved at
//! decode time:
//!
//! - 008 uses the leader's [`MaterialType`];
//! - 006 resolves its own [`MaterialType`] from 006/00;
//! - 007 resolves a [`PhysicalDescription`] from 007/00.
//!
//! Decoding slices the raw content by the category's [`PositionalAttribute`]
//! layout and maps each slice through the attribute's code table. Unknown
//! codes are kept raw and positions past the end of a short field decode as
//! missing; neither fails the decode.
//!
//! # Examples
//!
//! ```
//! use marcqa::control::ControlField;
//! use marcqa::MaterialType;
//!
//! let field = ControlField::decode(
//!     "008",
//!     "800108s1899    ilu           000 0 eng  ",
//!     MaterialType::Books,
//! );
//! assert_eq!(field.value("date1").unwrap().raw, "1899");
//! assert_eq!(field.value("literaryForm").unwrap().label, Some("Not fiction (not further specified)"));
//! ```

pub mod layouts;

use crate::leader::MaterialType;
use crate::schema::code_lists::{BundledCodeLists, CodeListId, CodeListLookup};
use crate::schema::{find_code, Code};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a 007 physical description, from 007/00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhysicalDescription {
    /// a
    Map,
    /// c
    ElectronicResource,
    /// d
    Globe,
    /// f
    TactileMaterial,
    /// g
    ProjectedGraphic,
    /// h
    Microform,
    /// k
    NonprojectedGraphic,
    /// m
    MotionPicture,
    /// o
    Kit,
    /// q
    NotatedMusic,
    /// r
    RemoteSensingImage,
    /// s
    SoundRecording,
    /// t
    Text,
    /// v
    Videorecording,
    /// z
    Unspecified,
}

impl PhysicalDescription {
    /// Every category.
    pub const ALL: [PhysicalDescription; 15] = [
        PhysicalDescription::Map,
        PhysicalDescription::ElectronicResource,
        PhysicalDescription::Globe,
        PhysicalDescription::TactileMaterial,
        PhysicalDescription::ProjectedGraphic,
        PhysicalDescription::Microform,
        PhysicalDescription::NonprojectedGraphic,
        PhysicalDescription::MotionPicture,
        PhysicalDescription::Kit,
        PhysicalDescription::NotatedMusic,
        PhysicalDescription::RemoteSensingImage,
        PhysicalDescription::SoundRecording,
        PhysicalDescription::Text,
        PhysicalDescription::Videorecording,
        PhysicalDescription::Unspecified,
    ];

    /// Resolve from the 007/00 category code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        let category = match code {
            'a' => PhysicalDescription::Map,
            'c' => PhysicalDescription::ElectronicResource,
            'd' => PhysicalDescription::Globe,
            'f' => PhysicalDescription::TactileMaterial,
            'g' => PhysicalDescription::ProjectedGraphic,
            'h' => PhysicalDescription::Microform,
            'k' => PhysicalDescription::NonprojectedGraphic,
            'm' => PhysicalDescription::MotionPicture,
            'o' => PhysicalDescription::Kit,
            'q' => PhysicalDescription::NotatedMusic,
            'r' => PhysicalDescription::RemoteSensingImage,
            's' => PhysicalDescription::SoundRecording,
            't' => PhysicalDescription::Text,
            'v' => PhysicalDescription::Videorecording,
            'z' => PhysicalDescription::Unspecified,
            _ => return None,
        };
        Some(category)
    }

    /// The 007/00 code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            PhysicalDescription::Map => 'a',
            PhysicalDescription::ElectronicResource => 'c',
            PhysicalDescription::Globe => 'd',
            PhysicalDescription::TactileMaterial => 'f',
            PhysicalDescription::ProjectedGraphic => 'g',
            PhysicalDescription::Microform => 'h',
            PhysicalDescription::NonprojectedGraphic => 'k',
            PhysicalDescription::MotionPicture => 'm',
            PhysicalDescription::Kit => 'o',
            PhysicalDescription::NotatedMusic => 'q',
            PhysicalDescription::RemoteSensingImage => 'r',
            PhysicalDescription::SoundRecording => 's',
            PhysicalDescription::Text => 't',
            PhysicalDescription::Videorecording => 'v',
            PhysicalDescription::Unspecified => 'z',
        }
    }
}

/// Category a control field was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldCategory {
    /// 006 and 008
    Material(MaterialType),
    /// 007
    Physical(PhysicalDescription),
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldCategory::Material(material) => write!(f, "{material}"),
            FieldCategory::Physical(physical) => write!(f, "{physical:?}"),
        }
    }
}

/// A named byte range `[start, end)` of a control field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalAttribute {
    /// Identifier, unique within one layout
    pub id: &'static str,
    /// Label
    pub label: &'static str,
    /// First position
    pub start: usize,
    /// Position after the last
    pub end: usize,
    /// Code table
    pub codes: &'static [Code],
    /// External code list the value may also come from
    pub code_list: Option<CodeListId>,
    /// Regular expression the value may also match
    pub pattern: Option<&'static str>,
    /// Each character is a code on its own (e.g. up to four illustration codes)
    pub per_character: bool,
}

impl PositionalAttribute {
    /// Declare an attribute without a code table.
    #[must_use]
    pub const fn new(id: &'static str, label: &'static str, start: usize, end: usize) -> Self {
        PositionalAttribute {
            id,
            label,
            start,
            end,
            codes: &[],
            code_list: None,
            pattern: None,
            per_character: false,
        }
    }

    /// Bind a code table.
    #[must_use]
    pub const fn codes(self, codes: &'static [Code]) -> Self {
        PositionalAttribute { codes, ..self }
    }

    /// Bind an external code list.
    #[must_use]
    pub const fn code_list(self, list: CodeListId) -> Self {
        PositionalAttribute {
            code_list: Some(list),
            ..self
        }
    }

    /// Accept values matching a regular expression.
    #[must_use]
    pub const fn pattern(self, pattern: &'static str) -> Self {
        PositionalAttribute {
            pattern: Some(pattern),
            ..self
        }
    }

    /// Treat each character as a separate code.
    #[must_use]
    pub const fn per_character(self) -> Self {
        PositionalAttribute {
            per_character: true,
            ..self
        }
    }

    /// Same attribute moved `offset` positions towards the start.
    #[must_use]
    pub const fn shifted(self, offset: usize) -> Self {
        PositionalAttribute {
            start: self.start - offset,
            end: self.end - offset,
            ..self
        }
    }

    /// Width in characters.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.end - self.start
    }

    /// Whether any constraint restricts the values of this attribute.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !self.codes.is_empty() || self.code_list.is_some() || self.pattern.is_some()
    }

    /// Meaning of a raw value, from the code table or the bundled code list.
    #[must_use]
    pub fn describe(&self, raw: &str) -> Option<&'static str> {
        if self.per_character && self.width() > 1 {
            return None;
        }
        find_code(self.codes, raw).map(|c| c.label).or_else(|| {
            self.code_list
                .and_then(|list| BundledCodeLists.lookup(list, raw))
        })
    }

    /// Raw code for a label of this attribute's code table or code list.
    #[must_use]
    pub fn code_for_label(&self, label: &str) -> Option<&'static str> {
        let list = self.code_list.map_or(&[][..], BundledCodeLists::codes);
        self.codes
            .iter()
            .chain(list)
            .find(|c| c.label == label)
            .map(|c| c.code)
    }
}

/// One decoded position range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedValue {
    /// The attribute this value was read for
    pub attribute: &'static PositionalAttribute,
    /// Raw slice; blanks when the field is too short
    pub raw: String,
    /// Meaning of the raw value, when the code table knows it
    pub label: Option<&'static str>,
    /// The field ended before this attribute
    pub missing: bool,
}

impl DecodedValue {
    /// The label when known, otherwise the raw value.
    #[must_use]
    pub fn display_value(&self) -> &str {
        self.label.unwrap_or(&self.raw)
    }
}

/// A control field with its decoded positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlField {
    tag: String,
    content: String,
    category: Option<FieldCategory>,
    values: IndexMap<&'static str, DecodedValue>,
}

impl ControlField {
    /// Decode a control field.
    ///
    /// `leader_type` is the category resolved from the leader; only 008
    /// uses it. Tags other than 006/007/008 are kept verbatim without
    /// positional values.
    #[must_use]
    pub fn decode(tag: &str, content: impl Into<String>, leader_type: MaterialType) -> Self {
        let content = content.into();
        let first = content.chars().next().unwrap_or(' ');
        let (category, layout): (Option<FieldCategory>, &'static [PositionalAttribute]) = match tag
        {
            "006" => match MaterialType::from_type_code(first, None) {
                Some(material) => (
                    Some(FieldCategory::Material(material)),
                    layouts::layout_006(material),
                ),
                None => (None, std::slice::from_ref(layouts::form_of_material_006())),
            },
            "007" => match PhysicalDescription::from_code(first) {
                Some(physical) => (
                    Some(FieldCategory::Physical(physical)),
                    layouts::layout_007(physical),
                ),
                None => (None, std::slice::from_ref(layouts::category_of_material_007())),
            },
            "008" => (
                Some(FieldCategory::Material(leader_type)),
                layouts::layout_008(leader_type),
            ),
            _ => (None, &[]),
        };

        let values = decode_layout(&content, layout);
        ControlField {
            tag: tag.to_string(),
            content,
            category,
            values,
        }
    }

    /// Field tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Raw content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Category the positions were decoded with, if any.
    #[must_use]
    pub fn category(&self) -> Option<FieldCategory> {
        self.category
    }

    /// Decoded value of one attribute.
    #[must_use]
    pub fn value(&self, id: &str) -> Option<&DecodedValue> {
        self.values.get(id)
    }

    /// All decoded values in position order.
    pub fn values(&self) -> impl Iterator<Item = &DecodedValue> {
        self.values.values()
    }

    /// Content characters `[start, end)`, or `None` when out of range.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> Option<String> {
        if start >= end || end > self.content.chars().count() {
            return None;
        }
        Some(self.content.chars().skip(start).take(end - start).collect())
    }

    /// `(attribute id, label or raw value)` pairs, the input [`encode`]
    /// accepts.
    #[must_use]
    pub fn labeled_values(&self) -> Vec<(&'static str, String)> {
        self.values
            .values()
            .filter(|v| !v.missing)
            .map(|v| (v.attribute.id, v.display_value().to_string()))
            .collect()
    }
}

fn decode_layout(
    content: &str,
    layout: &'static [PositionalAttribute],
) -> IndexMap<&'static str, DecodedValue> {
    let chars: Vec<char> = content.chars().collect();
    layout
        .iter()
        .map(|attribute| {
            let value = if attribute.end <= chars.len() {
                let raw: String = chars[attribute.start..attribute.end].iter().collect();
                DecodedValue {
                    attribute,
                    label: attribute.describe(&raw),
                    raw,
                    missing: false,
                }
            } else {
                DecodedValue {
                    attribute,
                    raw: " ".repeat(attribute.width()),
                    label: None,
                    missing: true,
                }
            };
            (attribute.id, value)
        })
        .collect()
}

/// Layout used for a tag and category.
#[must_use]
pub fn layout_for(tag: &str, category: FieldCategory) -> &'static [PositionalAttribute] {
    match (tag, category) {
        ("006", FieldCategory::Material(material)) => layouts::layout_006(material),
        ("008", FieldCategory::Material(material)) => layouts::layout_008(material),
        ("007", FieldCategory::Physical(physical)) => layouts::layout_007(physical),
        _ => &[],
    }
}

/// Re-encode attribute values into a fixed-length control field string.
///
/// Each value is either a label from the attribute's code table or a raw
/// value. Positions no value covers are blank-filled; values are padded or
/// cut to the attribute's width. Unknown attribute ids are ignored.
#[must_use]
pub fn encode<'a, I>(tag: &str, category: FieldCategory, values: I, length: usize) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let layout = layout_for(tag, category);
    let mut out = vec![' '; length];
    for (id, value) in values {
        let Some(attribute) = layout.iter().find(|a| a.id == id) else {
            continue;
        };
        let raw = attribute.code_for_label(value).unwrap_or(value);
        let mut chars = raw.chars();
        for slot in out
            .iter_mut()
            .take(attribute.end)
            .skip(attribute.start)
        {
            *slot = chars.next().unwrap_or(' ');
        }
    }
    out.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOK_008: &str = "800108s1899    ilu           000 0 eng  ";

    #[test]
    fn test_decode_book_008() {
        let field = ControlField::decode("008", BOOK_008, MaterialType::Books);
        assert_eq!(
            field.category(),
            Some(FieldCategory::Material(MaterialType::Books))
        );
        assert_eq!(field.value("dateEnteredOnFile").unwrap().raw, "800108");
        assert_eq!(
            field.value("typeOfDate").unwrap().label,
            Some("Single known date/probable date")
        );
        assert_eq!(field.value("placeOfPublication").unwrap().label, Some("Illinois"));
        assert_eq!(field.value("language").unwrap().label, Some("English"));
        assert_eq!(field.value("index").unwrap().label, Some("No index"));
    }

    #[test]
    fn test_unmapped_value_stays_raw() {
        let mut content = BOOK_008.to_string();
        content.replace_range(22..23, "x");
        let field = ControlField::decode("008", content, MaterialType::Books);
        let audience = field.value("targetAudience").unwrap();
        assert_eq!(audience.raw, "x");
        assert_eq!(audience.label, None);
        assert_eq!(audience.display_value(), "x");
    }

    #[test]
    fn test_short_field_marks_missing_positions() {
        let field = ControlField::decode("008", "800108s1899", MaterialType::Books);
        assert!(!field.value("date1").unwrap().missing);
        let language = field.value("language").unwrap();
        assert!(language.missing);
        assert_eq!(language.raw, "   ");
    }

    #[test]
    fn test_006_resolves_own_category() {
        let field = ControlField::decode("006", "m     o  d        ", MaterialType::Books);
        assert_eq!(
            field.category(),
            Some(FieldCategory::Material(MaterialType::ComputerFiles))
        );
        assert_eq!(field.value("formOfItem").unwrap().label, Some("Online"));
        assert_eq!(
            field.value("typeOfComputerFile").unwrap().label,
            Some("Document")
        );
    }

    #[test]
    fn test_006_unknown_form_of_material() {
        let field = ControlField::decode("006", "x", MaterialType::Books);
        assert_eq!(field.category(), None);
        assert_eq!(field.values().count(), 1);
    }

    #[test]
    fn test_007_categories() {
        let text = ControlField::decode("007", "tu", MaterialType::Books);
        assert_eq!(
            text.category(),
            Some(FieldCategory::Physical(PhysicalDescription::Text))
        );
        assert_eq!(
            text.value("specificMaterialDesignation").unwrap().label,
            Some("Unspecified")
        );

        let map = ControlField::decode("007", "at", MaterialType::Books);
        assert_eq!(
            map.category(),
            Some(FieldCategory::Physical(PhysicalDescription::Map))
        );
    }

    #[test]
    fn test_simple_control_field_has_no_values() {
        let field = ControlField::decode("001", "   00000002 ", MaterialType::Books);
        assert_eq!(field.category(), None);
        assert_eq!(field.values().count(), 0);
        assert_eq!(field.content(), "   00000002 ");
    }

    #[test]
    fn test_slice() {
        let field = ControlField::decode("008", BOOK_008, MaterialType::Books);
        assert_eq!(field.slice(0, 6).as_deref(), Some("800108"));
        assert_eq!(field.slice(38, 41), None);
        assert_eq!(field.slice(5, 5), None);
    }

    #[test]
    fn test_encode_round_trip_on_declared_positions() {
        let field = ControlField::decode("008", BOOK_008, MaterialType::Books);
        let labeled = field.labeled_values();
        let encoded = encode(
            "008",
            FieldCategory::Material(MaterialType::Books),
            labeled.iter().map(|(id, v)| (*id, v.as_str())),
            layouts::LENGTH_008,
        );
        assert_eq!(encoded, BOOK_008);
    }

    #[test]
    fn test_encode_pads_and_ignores_unknown_ids() {
        let encoded = encode(
            "007",
            FieldCategory::Physical(PhysicalDescription::Text),
            [("categoryOfMaterial", "Text"), ("bogus", "zz")],
            2,
        );
        assert_eq!(encoded, "t ");
    }
}
