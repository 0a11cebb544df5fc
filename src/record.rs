//! The canonical MARC record.
//!
//! This module provides:
//! - [`MarcRecord`]: leader, control fields and ordered data fields of one
//!   source record, immutable once built
//! - [`RecordBuilder`]: the sink ingestors feed while a record is built
//!
//! # Examples
//!
//! ```
//! use marcqa::{Leader, MarcRecord};
//!
//! let leader = Leader::decode("00720cam a22002051  4500", None)?;
//! let record = MarcRecord::builder(leader)
//!     .control_field("001", "   00000002 ")
//!     .control_field("008", "800108s1899    ilu           000 0 eng  ")
//!     .data_field("245", '1', '0', [('a', "Botanical materia medica")])
//!     .build();
//!
//! assert_eq!(record.select("008~7-10")?, vec!["1899"]);
//! assert_eq!(record.select("245$a")?, vec!["Botanical materia medica"]);
//! # Ok::<(), marcqa::MarcError>(())
//! ```

use crate::control::ControlField;
use crate::error::Result;
use crate::field::DataField;
use crate::leader::Leader;
use crate::normalizer::Normalizer;
use crate::schema::SchemaVersion;
use crate::selector::Selector;
use crate::validation::content::LinkageInfo;
use crate::validation::{ValidationError, Validator};
use indexmap::{IndexMap, IndexSet};
use tracing::warn;

/// Control tags this model knows. 007 is repeatable, the others are not.
pub const KNOWN_CONTROL_TAGS: [&str; 6] = ["001", "003", "005", "006", "007", "008"];

/// Whether a tag names a control field (`001`-`009`).
#[must_use]
pub fn is_control_tag(tag: &str) -> bool {
    tag.len() == 3 && tag.starts_with("00") && tag != "000"
}

/// A MARC record in canonical form.
///
/// Data fields keep source order. Every data field either has a schema
/// descriptor or its tag is listed in [`MarcRecord::unhandled_tags`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarcRecord {
    leader: Leader,
    schema_version: SchemaVersion,
    control_fields: IndexMap<String, ControlField>,
    physical_descriptions: Vec<ControlField>,
    data_fields: Vec<DataField>,
    unhandled_tags: IndexSet<String>,
}

impl MarcRecord {
    /// Builder bound to the bundled schema registry, standard MARC 21 tags.
    #[must_use]
    pub fn builder(leader: Leader) -> RecordBuilder<'static> {
        RecordBuilder::new(leader, Normalizer::bundled(SchemaVersion::Marc21))
    }

    /// Record leader.
    #[must_use]
    pub fn leader(&self) -> &Leader {
        &self.leader
    }

    /// Schema version the data fields were resolved under.
    #[must_use]
    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    /// Control field by tag; for 007 the first occurrence.
    #[must_use]
    pub fn control_field(&self, tag: &str) -> Option<&ControlField> {
        if tag == "007" {
            self.physical_descriptions.first()
        } else {
            self.control_fields.get(tag)
        }
    }

    /// Every 007 in source order.
    #[must_use]
    pub fn physical_descriptions(&self) -> &[ControlField] {
        &self.physical_descriptions
    }

    /// Control fields in canonical order: 001, 003, 005, 006, each 007,
    /// 008, then any other control tag in first-occurrence order.
    pub fn control_fields(&self) -> impl Iterator<Item = &ControlField> {
        let known = KNOWN_CONTROL_TAGS.iter().flat_map(move |tag| {
            if *tag == "007" {
                self.physical_descriptions.iter().collect::<Vec<_>>()
            } else {
                self.control_fields.get(*tag).into_iter().collect()
            }
        });
        let other = self
            .control_fields
            .values()
            .filter(|f| !KNOWN_CONTROL_TAGS.contains(&f.tag()));
        known.chain(other)
    }

    /// Data fields in source order.
    #[must_use]
    pub fn data_fields(&self) -> &[DataField] {
        &self.data_fields
    }

    /// Data fields with a tag, in source order.
    pub fn fields_by_tag<'a, 't>(
        &'a self,
        tag: &'t str,
    ) -> impl Iterator<Item = &'a DataField> + 't
    where
        'a: 't,
    {
        self.data_fields.iter().filter(move |f| f.tag() == tag)
    }

    /// Distinct tags that did not resolve against the schema, in first
    /// occurrence order.
    pub fn unhandled_tags(&self) -> impl Iterator<Item = &str> {
        self.unhandled_tags.iter().map(String::as_str)
    }

    /// Whether a tag was recorded as unhandled.
    #[must_use]
    pub fn is_unhandled(&self, tag: &str) -> bool {
        self.unhandled_tags.contains(tag)
    }

    /// Control number (001).
    #[must_use]
    pub fn control_number(&self) -> Option<&str> {
        self.control_fields.get("001").map(ControlField::content)
    }

    /// Values a selection locator points at, in field-occurrence order.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::InvalidSelector`](crate::MarcError::InvalidSelector)
    /// when the locator cannot be parsed.
    pub fn select(&self, locator: &str) -> Result<Vec<String>> {
        Ok(Selector::parse(locator)?.select(self))
    }

    /// Canonical JSON serialization.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::Json`](crate::MarcError::Json) if serialization
    /// fails.
    pub fn to_json(&self) -> Result<String> {
        crate::json::to_json(self)
    }

    /// Validate against the bundled schema and code lists.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationError> {
        Validator::bundled().validate(self)
    }

    /// Find the field linked to `field` through `$6`.
    ///
    /// For a regular field this is the 880 carrying the same occurrence
    /// number; for an 880 it is the original field named by its linkage.
    #[must_use]
    pub fn linked_field(&self, field: &DataField) -> Option<&DataField> {
        let linkage = LinkageInfo::parse(field.first_value('6')?)?;
        if linkage.is_unlinked() {
            return None;
        }
        let target_tag = if field.tag() == "880" {
            linkage.tag.as_str()
        } else {
            "880"
        };
        let found = self.fields_by_tag(target_tag).find(|candidate| {
            candidate
                .first_value('6')
                .and_then(LinkageInfo::parse)
                .is_some_and(|other| {
                    other.occurrence == linkage.occurrence
                        && (field.tag() == "880" || other.tag == field.tag())
                })
        });
        found
    }
}

/// Accumulates control and data fields under one decoded leader.
///
/// The leader is fixed at construction, so material-dependent control fields
/// are always decoded against it.
#[derive(Debug)]
pub struct RecordBuilder<'s> {
    normalizer: Normalizer<'s>,
    record: MarcRecord,
}

impl<'s> RecordBuilder<'s> {
    /// Start a record.
    #[must_use]
    pub fn new(leader: Leader, normalizer: Normalizer<'s>) -> Self {
        RecordBuilder {
            record: MarcRecord {
                leader,
                schema_version: normalizer.version(),
                control_fields: IndexMap::new(),
                physical_descriptions: Vec::new(),
                data_fields: Vec::new(),
                unhandled_tags: IndexSet::new(),
            },
            normalizer,
        }
    }

    /// Add a control field (chaining form).
    #[must_use]
    pub fn control_field(mut self, tag: &str, content: impl Into<String>) -> Self {
        self.add_control_field(tag, content);
        self
    }

    /// Add a data field (chaining form).
    #[must_use]
    pub fn data_field<I, V>(mut self, tag: &str, ind1: char, ind2: char, subfields: I) -> Self
    where
        I: IntoIterator<Item = (char, V)>,
        V: Into<String>,
    {
        self.add_data_field(tag, ind1, ind2, subfields);
        self
    }

    /// Add a control field.
    ///
    /// 007 accumulates. For any other tag a second occurrence is dropped with
    /// a warning. Control tags outside 001-008's known set are kept and
    /// recorded as unhandled.
    pub fn add_control_field(&mut self, tag: &str, content: impl Into<String>) {
        let field = ControlField::decode(tag, content, self.record.leader.material_type());
        if tag == "007" {
            self.record.physical_descriptions.push(field);
            return;
        }
        if self.record.control_fields.contains_key(tag) {
            warn!(
                tag,
                control_number = self.record.control_number().unwrap_or("unknown"),
                "duplicate non-repeatable control field ignored"
            );
            return;
        }
        if !KNOWN_CONTROL_TAGS.contains(&tag) {
            self.record.unhandled_tags.insert(tag.to_string());
        }
        self.record.control_fields.insert(tag.to_string(), field);
    }

    /// Normalize and add a data field.
    pub fn add_data_field<I, V>(&mut self, tag: &str, ind1: char, ind2: char, subfields: I)
    where
        I: IntoIterator<Item = (char, V)>,
        V: Into<String>,
    {
        let mut field = self.normalizer.normalize(
            tag,
            ind1,
            ind2,
            subfields.into_iter().map(|(code, value)| (code, value.into())),
        );
        if !field.is_handled() {
            self.record.unhandled_tags.insert(tag.to_string());
        }
        field.set_position(self.record.data_fields.len());
        self.record.data_fields.push(field);
    }

    /// Finish the record.
    #[must_use]
    pub fn build(self) -> MarcRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{FieldCategory, PhysicalDescription};
    use crate::MaterialType;

    fn leader() -> Leader {
        Leader::decode("00720cam a22002051  4500", None).unwrap()
    }

    #[test]
    fn test_data_fields_keep_source_order() {
        let record = MarcRecord::builder(leader())
            .data_field("650", ' ', '0', [('a', "Botany")])
            .data_field("245", '1', '0', [('a', "Title")])
            .data_field("650", ' ', '0', [('a', "Homeopathy")])
            .build();
        let tags: Vec<&str> = record.data_fields().iter().map(DataField::tag).collect();
        assert_eq!(tags, vec!["650", "245", "650"]);
        let positions: Vec<_> = record.data_fields().iter().map(DataField::position).collect();
        assert_eq!(positions, vec![Some(0), Some(1), Some(2)]);
        assert_eq!(record.fields_by_tag("650").count(), 2);
    }

    #[test]
    fn test_unknown_tag_is_recorded_and_kept() {
        let record = MarcRecord::builder(leader())
            .data_field("999", ' ', ' ', [('a', "local")])
            .data_field("999", ' ', ' ', [('a', "again")])
            .build();
        assert_eq!(record.unhandled_tags().collect::<Vec<_>>(), vec!["999"]);
        assert_eq!(record.fields_by_tag("999").count(), 2);
        assert!(record.is_unhandled("999"));
    }

    #[test]
    fn test_handled_and_unhandled_are_exclusive() {
        let record = MarcRecord::builder(leader())
            .data_field("245", '1', '0', [('a', "Title")])
            .data_field("QQQ", ' ', ' ', [('a', "x")])
            .build();
        for field in record.data_fields() {
            assert_ne!(field.is_handled(), record.is_unhandled(field.tag()));
        }
    }

    #[test]
    fn test_repeated_007_kept_in_order() {
        let record = MarcRecord::builder(leader())
            .control_field("007", "tu")
            .control_field("007", "at")
            .build();
        let categories: Vec<_> = record
            .physical_descriptions()
            .iter()
            .map(ControlField::category)
            .collect();
        assert_eq!(
            categories,
            vec![
                Some(FieldCategory::Physical(PhysicalDescription::Text)),
                Some(FieldCategory::Physical(PhysicalDescription::Map)),
            ]
        );
        assert_eq!(record.control_field("007").unwrap().content(), "tu");
    }

    #[test]
    fn test_duplicate_single_valued_control_field_keeps_first() {
        let record = MarcRecord::builder(leader())
            .control_field("001", "first")
            .control_field("001", "second")
            .build();
        assert_eq!(record.control_number(), Some("first"));
    }

    #[test]
    fn test_008_uses_leader_category() {
        let record = MarcRecord::builder(leader())
            .control_field("008", "800108s1899    ilu           000 0 eng  ")
            .build();
        assert_eq!(
            record.control_field("008").unwrap().category(),
            Some(FieldCategory::Material(MaterialType::Books))
        );
    }

    #[test]
    fn test_canonical_control_order() {
        let record = MarcRecord::builder(leader())
            .control_field("008", "800108s1899    ilu           000 0 eng  ")
            .control_field("009", "extra")
            .control_field("007", "tu")
            .control_field("001", "id")
            .build();
        let tags: Vec<&str> = record.control_fields().map(ControlField::tag).collect();
        assert_eq!(tags, vec!["001", "007", "008", "009"]);
        assert!(record.is_unhandled("009"));
    }

    #[test]
    fn test_linked_field_both_directions() {
        let record = MarcRecord::builder(leader())
            .data_field("245", '1', '0', [('6', "880-01"), ('a', "Romanized")])
            .data_field("880", '1', '0', [('6', "245-01/(N"), ('a', "Оригинал")])
            .build();
        let title = &record.data_fields()[0];
        let vernacular = record.linked_field(title).unwrap();
        assert_eq!(vernacular.tag(), "880");
        let back = record.linked_field(vernacular).unwrap();
        assert_eq!(back.tag(), "245");
    }

    #[test]
    fn test_fields_outlive_tag() {
        fn first_with_tag(record: &MarcRecord, tag: String) -> Option<&DataField> {
            record.fields_by_tag(&tag).next()
        }

        let record = MarcRecord::builder(leader())
            .data_field("650", ' ', '0', [('a', "Homeopathy")])
            .build();
        let field = first_with_tag(&record, "650".to_string()).unwrap();
        assert_eq!(field.first_value('a'), Some("Homeopathy"));
        assert!(first_with_tag(&record, "700".to_string()).is_none());
    }

    #[test]
    fn test_is_control_tag() {
        assert!(is_control_tag("001"));
        assert!(is_control_tag("009"));
        assert!(!is_control_tag("010"));
        assert!(!is_control_tag("000"));
        assert!(!is_control_tag("LDR"));
    }
}
