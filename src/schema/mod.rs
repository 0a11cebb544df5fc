//! Field and subfield schema for MARC data fields.
//!
//! Each data-field tag is described by one [`FieldDescriptor`]: label,
//! cardinality, the two indicator code tables, and the ordered list of
//! [`SubfieldDescriptor`]s. Descriptors are plain `'static` data declared in
//! [`marc21`] and [`local`]; the [`SchemaRegistry`] indexes them once per
//! process and answers lookups by `(tag, SchemaVersion)`.
//!
//! # Examples
//!
//! ```
//! use marcqa::schema::{SchemaLookup, SchemaRegistry, SchemaVersion};
//!
//! let registry = SchemaRegistry::global();
//! let title = registry.lookup("245", SchemaVersion::Marc21).unwrap();
//! assert_eq!(title.label, "Title Statement");
//! assert!(title.subfield('a').is_some());
//! ```

pub mod code_lists;
pub mod local;
pub mod marc21;

use crate::schema::code_lists::CodeListId;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Whether a field or subfield may occur more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinality {
    /// R
    Repeatable,
    /// NR
    Nonrepeatable,
}

/// Shorthand for [`Cardinality::Repeatable`] in the declarative tables.
pub const R: Cardinality = Cardinality::Repeatable;
/// Shorthand for [`Cardinality::Nonrepeatable`] in the declarative tables.
pub const NR: Cardinality = Cardinality::Nonrepeatable;

/// One entry of a fixed code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    /// Code as it appears in the record
    pub code: &'static str,
    /// Meaning of the code
    pub label: &'static str,
}

/// Build a [`Code`].
#[must_use]
pub const fn code(code: &'static str, label: &'static str) -> Code {
    Code { code, label }
}

/// Find a code in a table.
#[must_use]
pub fn find_code<'a>(codes: &'a [Code], value: &str) -> Option<&'a Code> {
    codes.iter().find(|c| c.code == value)
}

/// Schema entry for one indicator position.
///
/// An indicator without codes is undefined and must be blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorDescriptor {
    /// What the indicator means, empty when undefined
    pub label: &'static str,
    /// Valid codes
    pub codes: &'static [Code],
    /// Codes that were valid in earlier editions of the format
    pub historical_codes: &'static [Code],
}

impl IndicatorDescriptor {
    /// An undefined indicator.
    pub const UNDEFINED: IndicatorDescriptor = IndicatorDescriptor {
        label: "",
        codes: &[],
        historical_codes: &[],
    };

    /// A defined indicator with its code table.
    #[must_use]
    pub const fn new(label: &'static str, codes: &'static [Code]) -> Self {
        IndicatorDescriptor {
            label,
            codes,
            historical_codes: &[],
        }
    }

    /// Add codes that are obsolete for this indicator.
    #[must_use]
    pub const fn historical(self, historical_codes: &'static [Code]) -> Self {
        IndicatorDescriptor {
            historical_codes,
            ..self
        }
    }

    /// Whether the schema declares any codes for this indicator.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.codes.is_empty()
    }
}

/// Specialized grammar a subfield's content must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentGrammar {
    /// `$6` linkage: `TAG-OCC[/SCRIPT][/r]`
    Linkage,
    /// Record control number, optionally prefixed by `(ORG)`
    RecordControlNumber,
    /// Value must match at least one of the regular expressions
    Patterns(&'static [&'static str]),
}

/// Schema entry for one subfield code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubfieldDescriptor {
    /// Subfield code
    pub code: char,
    /// Label
    pub label: &'static str,
    /// Cardinality within one field occurrence
    pub cardinality: Cardinality,
    /// Fixed code table the value must come from
    pub codes: &'static [Code],
    /// Code table values that are no longer valid
    pub historical_codes: &'static [Code],
    /// External code list the value must come from
    pub code_list: Option<CodeListId>,
    /// Content grammar the value must follow
    pub content: Option<ContentGrammar>,
    /// Exact length of the value in characters
    pub length: Option<usize>,
    /// Subfield is obsolete in the current format
    pub obsolete: bool,
}

/// Declare a subfield.
#[must_use]
pub const fn subfield(
    code: char,
    label: &'static str,
    cardinality: Cardinality,
) -> SubfieldDescriptor {
    SubfieldDescriptor {
        code,
        label,
        cardinality,
        codes: &[],
        historical_codes: &[],
        code_list: None,
        content: None,
        length: None,
        obsolete: false,
    }
}

impl SubfieldDescriptor {
    /// Bind a fixed code table.
    #[must_use]
    pub const fn codes(self, codes: &'static [Code]) -> Self {
        SubfieldDescriptor { codes, ..self }
    }

    /// Bind codes that are no longer valid.
    #[must_use]
    pub const fn historical(self, historical_codes: &'static [Code]) -> Self {
        SubfieldDescriptor {
            historical_codes,
            ..self
        }
    }

    /// Bind an external code list.
    #[must_use]
    pub const fn code_list(self, list: CodeListId) -> Self {
        SubfieldDescriptor {
            code_list: Some(list),
            ..self
        }
    }

    /// Bind a content grammar.
    #[must_use]
    pub const fn content(self, grammar: ContentGrammar) -> Self {
        SubfieldDescriptor {
            content: Some(grammar),
            ..self
        }
    }

    /// Require an exact value length.
    #[must_use]
    pub const fn length(self, length: usize) -> Self {
        SubfieldDescriptor {
            length: Some(length),
            ..self
        }
    }

    /// Mark as obsolete.
    #[must_use]
    pub const fn obsolete(self) -> Self {
        SubfieldDescriptor {
            obsolete: true,
            ..self
        }
    }

    /// Whether the code may occur more than once in one field.
    #[must_use]
    pub fn is_repeatable(&self) -> bool {
        self.cardinality == Cardinality::Repeatable
    }
}

/// Schema entry for one data-field tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field tag
    pub tag: &'static str,
    /// Label
    pub label: &'static str,
    /// Cardinality within one record
    pub cardinality: Cardinality,
    /// First indicator
    pub ind1: IndicatorDescriptor,
    /// Second indicator
    pub ind2: IndicatorDescriptor,
    /// Subfields in declared order
    pub subfields: &'static [SubfieldDescriptor],
    /// Field is obsolete in the current format
    pub obsolete: bool,
}

impl FieldDescriptor {
    /// Declare a field with undefined indicators and no subfields.
    #[must_use]
    pub const fn new(tag: &'static str, label: &'static str, cardinality: Cardinality) -> Self {
        FieldDescriptor {
            tag,
            label,
            cardinality,
            ind1: IndicatorDescriptor::UNDEFINED,
            ind2: IndicatorDescriptor::UNDEFINED,
            subfields: &[],
            obsolete: false,
        }
    }

    /// Set the first indicator.
    #[must_use]
    pub const fn ind1(self, ind1: IndicatorDescriptor) -> Self {
        FieldDescriptor { ind1, ..self }
    }

    /// Set the second indicator.
    #[must_use]
    pub const fn ind2(self, ind2: IndicatorDescriptor) -> Self {
        FieldDescriptor { ind2, ..self }
    }

    /// Set the subfields.
    #[must_use]
    pub const fn subfields(self, subfields: &'static [SubfieldDescriptor]) -> Self {
        FieldDescriptor { subfields, ..self }
    }

    /// Mark as obsolete.
    #[must_use]
    pub const fn obsolete(self) -> Self {
        FieldDescriptor {
            obsolete: true,
            ..self
        }
    }

    /// Descriptor for a subfield code.
    #[must_use]
    pub fn subfield(&self, code: char) -> Option<&SubfieldDescriptor> {
        self.subfields.iter().find(|s| s.code == code)
    }

    /// Declared position of a subfield code, used to order serialized output.
    #[must_use]
    pub fn subfield_position(&self, code: char) -> Option<usize> {
        self.subfields.iter().position(|s| s.code == code)
    }

    /// Indicator descriptor by position (1 or 2).
    #[must_use]
    pub fn indicator(&self, which: u8) -> &IndicatorDescriptor {
        if which == 1 {
            &self.ind1
        } else {
            &self.ind2
        }
    }

    /// Whether the field may occur more than once in a record.
    #[must_use]
    pub fn is_repeatable(&self) -> bool {
        self.cardinality == Cardinality::Repeatable
    }
}

/// Named variant of the tag/subfield rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaVersion {
    /// Standard MARC 21 bibliographic format
    #[default]
    Marc21,
    /// Deutsche Nationalbibliothek
    Dnb,
    /// OCLC local fields
    Oclc,
    /// British Library
    Bl,
}

impl SchemaVersion {
    /// Every known version.
    pub const ALL: [SchemaVersion; 4] = [
        SchemaVersion::Marc21,
        SchemaVersion::Dnb,
        SchemaVersion::Oclc,
        SchemaVersion::Bl,
    ];
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SchemaVersion::Marc21 => "MARC21",
            SchemaVersion::Dnb => "DNB",
            SchemaVersion::Oclc => "OCLC",
            SchemaVersion::Bl => "BL",
        };
        f.write_str(name)
    }
}

/// Lookup service for field descriptors.
///
/// Implementations must be safe to share between threads; descriptors are
/// `'static` so records can hold them without borrowing the registry.
pub trait SchemaLookup: Send + Sync {
    /// Descriptor for a tag under a schema version.
    fn lookup(&self, tag: &str, version: SchemaVersion) -> Option<&'static FieldDescriptor>;

    /// Position of the tag in the schema's declaration order.
    ///
    /// Serialization sorts data-field tags by this value.
    fn declaration_order(&self, tag: &str, version: SchemaVersion) -> Option<usize>;
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    order: usize,
    descriptor: &'static FieldDescriptor,
}

/// Process-wide index over the bundled descriptor tables.
///
/// Built once; every lookup afterwards is a hash probe with no allocation.
/// Local variants override the standard entry for the same tag, and any tag
/// missing from a variant falls back to the standard MARC 21 entry.
#[derive(Debug)]
pub struct SchemaRegistry {
    standard: HashMap<&'static str, Entry>,
    local: HashMap<SchemaVersion, HashMap<&'static str, Entry>>,
}

lazy_static! {
    static ref REGISTRY: SchemaRegistry = SchemaRegistry::bundled();
}

impl SchemaRegistry {
    /// The registry built from the bundled tables.
    ///
    /// Initialized on first access, exactly once, even under concurrent access.
    #[must_use]
    pub fn global() -> &'static SchemaRegistry {
        &REGISTRY
    }

    /// Build a registry from the bundled MARC 21 and local tables.
    #[must_use]
    pub fn bundled() -> Self {
        let mut registry = Self::from_tables(marc21::FIELDS);
        for version in SchemaVersion::ALL {
            registry.add_variant(version, local::fields_for(version));
        }
        registry
    }

    /// Build a registry from a standard descriptor table.
    ///
    /// Table order is the declaration order.
    #[must_use]
    pub fn from_tables(standard: &'static [FieldDescriptor]) -> Self {
        let standard = standard
            .iter()
            .enumerate()
            .map(|(order, descriptor)| (descriptor.tag, Entry { order, descriptor }))
            .collect();
        SchemaRegistry {
            standard,
            local: HashMap::new(),
        }
    }

    /// Register the descriptors of a schema variant.
    ///
    /// A variant descriptor for a standard tag keeps the standard tag's place
    /// in declaration order; local tags are ordered after all standard tags.
    pub fn add_variant(&mut self, version: SchemaVersion, fields: &'static [FieldDescriptor]) {
        let base = self.standard.len();
        for (index, descriptor) in fields.iter().enumerate() {
            let order = self
                .standard
                .get(descriptor.tag)
                .map_or(base + index, |entry| entry.order);
            self.local
                .entry(version)
                .or_default()
                .insert(descriptor.tag, Entry { order, descriptor });
        }
    }

    /// Number of standard tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.standard.len()
    }

    /// Whether the registry has no standard tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.standard.is_empty()
    }

    fn entry(&self, tag: &str, version: SchemaVersion) -> Option<Entry> {
        self.local
            .get(&version)
            .and_then(|fields| fields.get(tag))
            .or_else(|| self.standard.get(tag))
            .copied()
    }
}

impl SchemaLookup for SchemaRegistry {
    fn lookup(&self, tag: &str, version: SchemaVersion) -> Option<&'static FieldDescriptor> {
        self.entry(tag, version).map(|entry| entry.descriptor)
    }

    fn declaration_order(&self, tag: &str, version: SchemaVersion) -> Option<usize> {
        self.entry(tag, version).map(|entry| entry.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_standard_tag() {
        let registry = SchemaRegistry::global();
        let field = registry.lookup("100", SchemaVersion::Marc21).unwrap();
        assert_eq!(field.tag, "100");
        assert!(!field.is_repeatable());
        assert_eq!(field.ind1.codes.len(), 3);
        assert!(!field.ind2.is_defined());
    }

    #[test]
    fn test_nlm_copy_statement() {
        let field = SchemaRegistry::global().lookup("061", SchemaVersion::Marc21).unwrap();
        assert!(field.is_repeatable());
        assert!(field.subfield('a').unwrap().is_repeatable());
        assert!(!field.subfield('b').unwrap().is_repeatable());
        assert!(!field.subfield('c').unwrap().is_repeatable());
        assert!(field.subfield('8').unwrap().is_repeatable());
        assert!(field.subfield('6').is_none());
    }

    #[test]
    fn test_unknown_tag() {
        let registry = SchemaRegistry::global();
        assert!(registry.lookup("999", SchemaVersion::Marc21).is_none());
        assert!(registry.lookup("AQN", SchemaVersion::Marc21).is_none());
    }

    #[test]
    fn test_variant_falls_back_to_standard() {
        let registry = SchemaRegistry::global();
        let standard = registry.lookup("245", SchemaVersion::Marc21).unwrap();
        let dnb = registry.lookup("245", SchemaVersion::Dnb).unwrap();
        assert!(std::ptr::eq(standard, dnb));
    }

    #[test]
    fn test_local_tag_only_in_its_variant() {
        let registry = SchemaRegistry::global();
        let aqn = registry.lookup("AQN", SchemaVersion::Bl).unwrap();
        assert!(aqn.obsolete);
        assert!(registry.lookup("AQN", SchemaVersion::Dnb).is_none());
    }

    #[test]
    fn test_declaration_order_follows_table() {
        let registry = SchemaRegistry::global();
        let order_010 = registry.declaration_order("010", SchemaVersion::Marc21).unwrap();
        let order_245 = registry.declaration_order("245", SchemaVersion::Marc21).unwrap();
        let order_650 = registry.declaration_order("650", SchemaVersion::Marc21).unwrap();
        assert!(order_010 < order_245 && order_245 < order_650);

        let local = registry.declaration_order("AQN", SchemaVersion::Bl).unwrap();
        assert!(local >= registry.len());
    }

    #[test]
    fn test_standard_table_is_sorted_and_unique() {
        let tags: Vec<&str> = marc21::FIELDS.iter().map(|f| f.tag).collect();
        let mut sorted = tags.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(tags, sorted);
    }

    #[test]
    fn test_subfield_position() {
        let field = SchemaRegistry::global()
            .lookup("245", SchemaVersion::Marc21)
            .unwrap();
        assert!(field.subfield_position('a') < field.subfield_position('c'));
        assert_eq!(field.subfield_position('!'), None);
    }

    #[test]
    fn test_concurrent_first_access() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    SchemaRegistry::global()
                        .lookup("650", SchemaVersion::Marc21)
                        .map(|f| f as *const FieldDescriptor as usize)
                })
            })
            .collect();
        let addresses: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.iter().all(|a| a.is_some() && *a == addresses[0]));
    }
}
