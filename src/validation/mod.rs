//! Validation of MARC records against the field schema.
//!
//! The [`Validator`] walks a finished [`MarcRecord`] and reports every
//! problem it finds as a [`ValidationError`]. Findings are data: a record with
//! a hundred findings still validates without failing.
//!
//! Checks, in output order:
//! - leader positions against the leader code tables
//! - 005/006/008 lengths and the closed positional attributes of 006/007/008
//! - for each data field with a schema descriptor: obsolete field, indicator
//!   codes, missing subfields, undeclared and non-repeatable subfield codes,
//!   code tables and code lists, fixed value lengths and content grammars
//!
//! Data fields with an undeclared tag are not checked.
//!
//! # Examples
//!
//! ```
//! use marcqa::validation::ValidationErrorKind;
//! use marcqa::{Leader, MarcRecord};
//!
//! let record = MarcRecord::builder(Leader::decode("00720cam a22002051  4500", None)?)
//!     .data_field("245", '1', '0', [('a', "Title"), ('a', "Again")])
//!     .build();
//!
//! let errors = record.validate();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].kind, ValidationErrorKind::NonrepeatableSubfield);
//! assert_eq!(errors[0].location, "245$a");
//! # Ok::<(), marcqa::MarcError>(())
//! ```

pub mod content;

use crate::control::{ControlField, PositionalAttribute};
use crate::field::DataField;
use crate::record::MarcRecord;
use crate::schema::code_lists::{BundledCodeLists, CodeListId, CodeListLookup};
use crate::schema::{find_code, Code, ContentGrammar, SchemaLookup, SchemaRegistry, SubfieldDescriptor};
use crate::validation::content::{matches_any, LinkageInfo, RecordControlNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Field, indicator code or subfield code is obsolete
    #[serde(rename = "obsolete")]
    Obsolete,
    /// Value is not in the code table or code list
    #[serde(rename = "hasInvalidValue")]
    HasInvalidValue,
    /// Value contains a code outside its code list
    #[serde(rename = "containsInvalidCode")]
    ContainsInvalidCode,
    /// Subfield code is not declared for the field
    #[serde(rename = "undefinedSubfield")]
    UndefinedSubfield,
    /// Value has the wrong length
    #[serde(rename = "invalidLength")]
    InvalidLength,
    /// Required subfield is absent
    #[serde(rename = "missingSubfield")]
    MissingSubfield,
    /// Linkage points at a field that is not in the record
    #[serde(rename = "invalidReference")]
    InvalidReference,
    /// Undefined indicator carries a value
    #[serde(rename = "nonEmptyIndicator")]
    NonEmptyIndicator,
    /// Value follows none of the expected forms
    #[serde(rename = "patternMismatch")]
    PatternMismatch,
    /// Non-repeatable subfield occurs more than once
    #[serde(rename = "NonrepeatableSubfield")]
    NonrepeatableSubfield,
}

impl ValidationErrorKind {
    /// Short code used in reports.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorKind::Obsolete => "obsolete",
            ValidationErrorKind::HasInvalidValue => "hasInvalidValue",
            ValidationErrorKind::ContainsInvalidCode => "containsInvalidCode",
            ValidationErrorKind::UndefinedSubfield => "undefinedSubfield",
            ValidationErrorKind::InvalidLength => "invalidLength",
            ValidationErrorKind::MissingSubfield => "missingSubfield",
            ValidationErrorKind::InvalidReference => "invalidReference",
            ValidationErrorKind::NonEmptyIndicator => "nonEmptyIndicator",
            ValidationErrorKind::PatternMismatch => "patternMismatch",
            ValidationErrorKind::NonrepeatableSubfield => "NonrepeatableSubfield",
        }
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ValidationErrorKind::Obsolete => "obsolete value",
            ValidationErrorKind::HasInvalidValue => "invalid value",
            ValidationErrorKind::ContainsInvalidCode => "contains invalid code",
            ValidationErrorKind::UndefinedSubfield => "undefined subfield",
            ValidationErrorKind::InvalidLength => "invalid length",
            ValidationErrorKind::MissingSubfield => "missing subfield",
            ValidationErrorKind::InvalidReference => "invalid reference",
            ValidationErrorKind::NonEmptyIndicator => "non-empty indicator",
            ValidationErrorKind::PatternMismatch => "does not match any patterns",
            ValidationErrorKind::NonrepeatableSubfield => "non-repeatable subfield",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Control number of the record, when it has one
    pub record_id: Option<String>,
    /// Kind of finding
    pub kind: ValidationErrorKind,
    /// Tag, or `LDR` for the leader
    pub tag: String,
    /// Subfield code, for subfield-level findings
    pub subfield: Option<char>,
    /// Where the finding is: `245$a`, `245/ind1`, `008/18-21`, `LDR/06`
    pub location: String,
    /// The offending value
    pub value: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = &self.record_id {
            write!(f, "[{id}] ")?;
        }
        write!(f, "{}: {} '{}'", self.location, self.kind, self.value)
    }
}

/// Validates records against a schema and code lists.
///
/// Holds no state between records; one validator can check any number of
/// records, from any number of threads.
#[derive(Clone, Copy)]
pub struct Validator<'a> {
    schema: &'a dyn SchemaLookup,
    code_lists: &'a dyn CodeListLookup,
}

impl fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

impl Validator<'static> {
    /// Validator over the bundled schema registry and code lists.
    #[must_use]
    pub fn bundled() -> Self {
        Validator::new(SchemaRegistry::global(), &BundledCodeLists)
    }
}

impl<'a> Validator<'a> {
    /// Validator over caller-supplied lookup services.
    #[must_use]
    pub fn new(schema: &'a dyn SchemaLookup, code_lists: &'a dyn CodeListLookup) -> Self {
        Validator { schema, code_lists }
    }

    /// Validate a record.
    ///
    /// Data fields that resolved when the record was built are checked
    /// against this validator's schema, under the record's schema version.
    #[must_use]
    pub fn validate(&self, record: &MarcRecord) -> Vec<ValidationError> {
        let mut run = Run {
            validator: self,
            record,
            errors: Vec::new(),
        };
        run.leader();
        for field in record.control_fields() {
            run.control_field(field);
        }
        for field in record.data_fields() {
            run.data_field(field);
        }
        run.errors
    }
}

/// Findings collected while validating one record.
struct Run<'v, 'r> {
    validator: &'v Validator<'v>,
    record: &'r MarcRecord,
    errors: Vec<ValidationError>,
}

impl Run<'_, '_> {
    fn push(
        &mut self,
        kind: ValidationErrorKind,
        tag: &str,
        subfield: Option<char>,
        location: String,
        value: &str,
    ) {
        self.errors.push(ValidationError {
            record_id: self.record.control_number().map(str::to_string),
            kind,
            tag: tag.to_string(),
            subfield,
            location,
            value: value.to_string(),
        });
    }

    fn leader(&mut self) {
        for (position, value) in self.record.leader().invalid_positions() {
            self.push(
                ValidationErrorKind::HasInvalidValue,
                "LDR",
                None,
                format!("LDR/{position:02}"),
                &value.to_string(),
            );
        }
    }

    fn control_field(&mut self, field: &ControlField) {
        let expected = match field.tag() {
            "005" => Some(16),
            "006" => Some(crate::control::layouts::LENGTH_006),
            "008" => Some(crate::control::layouts::LENGTH_008),
            _ => None,
        };
        if let Some(expected) = expected {
            if field.content().chars().count() != expected {
                self.push(
                    ValidationErrorKind::InvalidLength,
                    field.tag(),
                    None,
                    field.tag().to_string(),
                    field.content(),
                );
            }
        }

        for value in field.values() {
            let attribute = value.attribute;
            if value.missing || !attribute.is_closed() || self.position_is_valid(attribute, &value.raw)
            {
                continue;
            }
            let location = if attribute.width() == 1 {
                format!("{}/{:02}", field.tag(), attribute.start)
            } else {
                format!("{}/{:02}-{:02}", field.tag(), attribute.start, attribute.end - 1)
            };
            self.push(
                ValidationErrorKind::HasInvalidValue,
                field.tag(),
                None,
                location,
                &value.raw,
            );
        }
    }

    fn position_is_valid(&self, attribute: &PositionalAttribute, raw: &str) -> bool {
        if attribute.per_character {
            return raw.chars().all(|c| {
                let mut buf = [0u8; 4];
                self.attribute_accepts(attribute, c.encode_utf8(&mut buf))
            });
        }
        self.attribute_accepts(attribute, raw)
    }

    fn attribute_accepts(&self, attribute: &PositionalAttribute, raw: &str) -> bool {
        find_code(attribute.codes, raw).is_some()
            || attribute
                .code_list
                .is_some_and(|list| self.validator.code_lists.contains(list, raw))
            || attribute
                .pattern
                .is_some_and(|pattern| matches_any(&[pattern], raw))
    }

    fn data_field(&mut self, field: &DataField) {
        if !field.is_handled() {
            return;
        }
        let tag = field.tag();
        let Some(descriptor) = self
            .validator
            .schema
            .lookup(tag, self.record.schema_version())
        else {
            return;
        };

        if descriptor.obsolete {
            self.push(ValidationErrorKind::Obsolete, tag, None, tag.to_string(), tag);
        }

        // 880 indicators follow the associated field.
        let indicators: &[u8] = if tag == "880" { &[] } else { &[1, 2] };
        for &which in indicators {
            let indicator = descriptor.indicator(which);
            let value = normalize_blank(field.indicator(which));
            let location = format!("{tag}/ind{which}");
            if !indicator.is_defined() {
                if value != ' ' {
                    self.push(
                        ValidationErrorKind::NonEmptyIndicator,
                        tag,
                        None,
                        location,
                        &value.to_string(),
                    );
                }
                continue;
            }
            let value = value.to_string();
            if find_code(indicator.codes, &value).is_some() {
                continue;
            }
            let kind = if find_code(indicator.historical_codes, &value).is_some() {
                ValidationErrorKind::Obsolete
            } else {
                ValidationErrorKind::HasInvalidValue
            };
            self.push(kind, tag, None, location, &value);
        }

        if field.subfields().is_empty() {
            self.push(ValidationErrorKind::MissingSubfield, tag, None, tag.to_string(), "");
        } else if tag == "880" && field.occurrences('6') == 0 {
            self.push(
                ValidationErrorKind::MissingSubfield,
                tag,
                Some('6'),
                format!("{tag}$6"),
                "",
            );
        }

        for code in field.codes() {
            let location = format!("{tag}${code}");
            let Some(subfield) = descriptor.subfield(code) else {
                let first = field.first_value(code).unwrap_or_default();
                self.push(ValidationErrorKind::UndefinedSubfield, tag, Some(code), location, first);
                continue;
            };
            if !subfield.is_repeatable() && field.occurrences(code) > 1 {
                let first = field.first_value(code).unwrap_or_default();
                self.push(
                    ValidationErrorKind::NonrepeatableSubfield,
                    tag,
                    Some(code),
                    location.clone(),
                    first,
                );
            }
            for value in field.values(code) {
                if subfield.obsolete {
                    self.push(ValidationErrorKind::Obsolete, tag, Some(code), location.clone(), value);
                }
                self.subfield_value(field, subfield, &location, value);
            }
        }
    }

    fn subfield_value(
        &mut self,
        field: &DataField,
        subfield: &SubfieldDescriptor,
        location: &str,
        value: &str,
    ) {
        let tag = field.tag();
        let code = Some(subfield.code);

        if !subfield.codes.is_empty() || subfield.code_list.is_some() {
            let known = find_code(subfield.codes, value).is_some()
                || subfield
                    .code_list
                    .is_some_and(|list| self.validator.code_lists.contains(list, value));
            if !known {
                let kind = if is_historical(subfield.historical_codes, value) {
                    ValidationErrorKind::Obsolete
                } else {
                    ValidationErrorKind::HasInvalidValue
                };
                self.push(kind, tag, code, location.to_string(), value);
            }
        }

        if let Some(length) = subfield.length {
            if value.chars().count() != length {
                self.push(ValidationErrorKind::InvalidLength, tag, code, location.to_string(), value);
            }
        }

        match subfield.content {
            Some(ContentGrammar::Linkage) => self.linkage(field, location, value),
            Some(ContentGrammar::RecordControlNumber) => {
                if RecordControlNumber::parse(value).is_none() {
                    self.push(ValidationErrorKind::PatternMismatch, tag, code, location.to_string(), value);
                }
            },
            Some(ContentGrammar::Patterns(patterns)) => {
                if !matches_any(patterns, value) {
                    self.push(ValidationErrorKind::PatternMismatch, tag, code, location.to_string(), value);
                }
            },
            None => {},
        }
    }

    fn linkage(&mut self, field: &DataField, location: &str, value: &str) {
        let tag = field.tag();
        let Some(linkage) = LinkageInfo::parse(value) else {
            self.push(ValidationErrorKind::PatternMismatch, tag, Some('6'), location.to_string(), value);
            return;
        };
        if !linkage.script_id.is_empty()
            && !self
                .validator
                .code_lists
                .contains(CodeListId::Scripts, &linkage.script_id)
        {
            self.push(
                ValidationErrorKind::ContainsInvalidCode,
                tag,
                Some('6'),
                location.to_string(),
                &linkage.script_id,
            );
        }
        if !linkage.is_unlinked() && self.record.linked_field(field).is_none() {
            self.push(ValidationErrorKind::InvalidReference, tag, Some('6'), location.to_string(), value);
        }
    }
}

/// `#` is the conventional stand-in for a blank indicator.
fn normalize_blank(indicator: char) -> char {
    if indicator == '#' {
        ' '
    } else {
        indicator
    }
}

fn is_historical(codes: &[Code], value: &str) -> bool {
    find_code(codes, value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leader::Leader;

    const BOOK_008: &str = "800108s1899    ilu           000 0 eng  ";

    fn leader() -> Leader {
        Leader::decode("00720cam a22002051  4500", None).unwrap()
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_clean_record() {
        let record = MarcRecord::builder(leader())
            .control_field("001", "   00000002 ")
            .control_field("005", "20040505165105.0")
            .control_field("008", BOOK_008)
            .data_field("100", '1', ' ', [('a', "Aurand, Samuel Herbert,"), ('d', "1854-")])
            .data_field("245", '1', '0', [('a', "Botanical materia medica")])
            .build();
        assert!(Validator::bundled().validate(&record).is_empty());
    }

    #[test]
    fn test_nonrepeatable_subfield_reported_once() {
        let record = MarcRecord::builder(leader())
            .data_field("245", '1', '0', [('a', "One"), ('a', "Two"), ('a', "Three")])
            .build();
        let errors = record.validate();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::NonrepeatableSubfield]);
        assert_eq!(errors[0].tag, "245");
        assert_eq!(errors[0].subfield, Some('a'));
    }

    #[test]
    fn test_undefined_subfield() {
        let record = MarcRecord::builder(leader())
            .data_field("245", '1', '0', [('a', "Title"), ('!', "odd")])
            .build();
        let errors = record.validate();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::UndefinedSubfield]);
        assert_eq!(errors[0].location, "245$!");
    }

    #[test]
    fn test_indicators() {
        let record = MarcRecord::builder(leader())
            .data_field("100", '1', 'x', [('a', "Name")])
            .data_field("245", '9', '0', [('a', "Title")])
            .data_field("100", '1', '#', [('a', "Name")])
            .build();
        let errors = record.validate();
        assert_eq!(
            kinds(&errors),
            vec![
                ValidationErrorKind::NonEmptyIndicator,
                ValidationErrorKind::HasInvalidValue
            ]
        );
        assert_eq!(errors[0].location, "100/ind2");
        assert_eq!(errors[1].location, "245/ind1");
    }

    #[test]
    fn test_unhandled_fields_not_checked() {
        let record = MarcRecord::builder(leader())
            .data_field("999", 'z', 'z', Vec::<(char, String)>::new())
            .build();
        assert!(record.validate().is_empty());
    }

    #[test]
    fn test_missing_subfields() {
        let record = MarcRecord::builder(leader())
            .data_field("245", '1', '0', Vec::<(char, String)>::new())
            .data_field("880", '1', '0', [('a', "Title")])
            .build();
        let errors = record.validate();
        assert_eq!(
            kinds(&errors),
            vec![
                ValidationErrorKind::MissingSubfield,
                ValidationErrorKind::MissingSubfield
            ]
        );
        assert_eq!(errors[1].location, "880$6");
    }

    #[test]
    fn test_linkage_checks() {
        let record = MarcRecord::builder(leader())
            .data_field("245", '1', '0', [('6', "880-01"), ('a', "Romanized")])
            .data_field("880", '1', '0', [('6', "245-01/(Q"), ('a', "Vernacular")])
            .data_field("100", '1', ' ', [('6', "880-02"), ('a', "Name")])
            .data_field("700", '1', ' ', [('6', "garbage"), ('a', "Name")])
            .build();
        let errors = record.validate();
        assert_eq!(
            kinds(&errors),
            vec![
                ValidationErrorKind::ContainsInvalidCode,
                ValidationErrorKind::InvalidReference,
                ValidationErrorKind::PatternMismatch,
            ]
        );
        assert_eq!(errors[0].value, "(Q");
        assert_eq!(errors[1].tag, "100");
        assert_eq!(errors[2].tag, "700");
    }

    #[test]
    fn test_unlinked_880_is_fine() {
        let record = MarcRecord::builder(leader())
            .data_field("880", '1', '0', [('6', "245-00/(N"), ('a', "Вернакулярное")])
            .build();
        assert!(record.validate().is_empty());
    }

    #[test]
    fn test_code_list_and_length() {
        let record = MarcRecord::builder(leader())
            .data_field("041", '0', ' ', [('a', "eng"), ('a', "xyz"), ('a', "english")])
            .build();
        let errors = record.validate();
        assert_eq!(
            kinds(&errors),
            vec![
                ValidationErrorKind::HasInvalidValue,
                ValidationErrorKind::HasInvalidValue,
                ValidationErrorKind::InvalidLength,
            ]
        );
        assert_eq!(errors[0].value, "xyz");
        assert_eq!(errors[2].value, "english");
    }

    #[test]
    fn test_organization_code_without_number() {
        let record = MarcRecord::builder(leader())
            .data_field("035", ' ', ' ', [('a', "(OCoLC)")])
            .build();
        let errors = record.validate();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::PatternMismatch]);
        assert_eq!(errors[0].location, "035$a");
        assert_eq!(errors[0].value, "(OCoLC)");
    }

    #[test]
    fn test_content_patterns() {
        let record = MarcRecord::builder(leader())
            .data_field("010", ' ', ' ', [('a', "   00000002 ")])
            .data_field("035", ' ', ' ', [('a', "(OCoLC)5853149")])
            .data_field("022", ' ', ' ', [('a', "1234-567")])
            .build();
        let errors = record.validate();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::PatternMismatch]);
        assert_eq!(errors[0].location, "022$a");
    }

    #[test]
    fn test_obsolete_field() {
        let record = MarcRecord::builder(leader())
            .data_field("440", ' ', '0', [('a', "Series")])
            .build();
        assert!(kinds(&record.validate()).contains(&ValidationErrorKind::Obsolete));
    }

    #[test]
    fn test_control_field_lengths_and_codes() {
        let record = MarcRecord::builder(leader())
            .control_field("005", "2004")
            .control_field("008", "800108s1899    ilu           000 0 eng")
            .build();
        let errors = record.validate();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::InvalidLength; 2]);

        let record = MarcRecord::builder(leader())
            .control_field("008", "800108s1899    ilu      Q    000 0 eng  ")
            .build();
        let errors = record.validate();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::HasInvalidValue]);
        assert_eq!(errors[0].location, "008/24-27");
    }

    #[test]
    fn test_invalid_leader_position() {
        let leader = Leader::decode("00720zam a22002051  4500", None).unwrap();
        let record = MarcRecord::builder(leader).build();
        let errors = record.validate();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::HasInvalidValue]);
        assert_eq!(errors[0].location, "LDR/05");
    }

    #[test]
    fn test_record_id_and_display() {
        let record = MarcRecord::builder(leader())
            .control_field("001", "42")
            .data_field("245", '1', '0', [('a', "One"), ('a', "Two")])
            .build();
        let errors = record.validate();
        assert_eq!(errors[0].record_id.as_deref(), Some("42"));
        assert_eq!(errors[0].to_string(), "[42] 245$a: non-repeatable subfield 'One'");
    }

    #[test]
    fn test_kind_serializes_to_code() {
        let json = serde_json::to_string(&ValidationErrorKind::HasInvalidValue).unwrap();
        assert_eq!(json, "\"hasInvalidValue\"");
        assert_eq!(ValidationErrorKind::NonrepeatableSubfield.code(), "NonrepeatableSubfield");
    }
}
