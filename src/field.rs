//! Data fields (010 and higher) and their subfields.
//!
//! A [`DataField`] keeps its subfields in source order and indexes them by
//! code, so repeated-code lookups during validation and selection do not
//! rescan the field. Fields built by the [`Normalizer`](crate::normalizer::Normalizer)
//! carry `'static` references into the schema; fields with an undeclared tag
//! carry none.

use crate::schema::{FieldDescriptor, SubfieldDescriptor};
use smallvec::SmallVec;
use std::collections::HashMap;

/// Blank indicator value.
pub const BLANK: char = ' ';

/// A subfield within a data field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subfield {
    /// Subfield code (single character)
    pub code: char,
    /// Subfield value
    pub value: String,
    descriptor: Option<&'static SubfieldDescriptor>,
}

impl Subfield {
    /// Create a subfield without a schema binding.
    #[must_use]
    pub fn new(code: char, value: impl Into<String>) -> Self {
        Subfield {
            code,
            value: value.into(),
            descriptor: None,
        }
    }

    /// Schema entry for this code, absent when the code is undeclared.
    #[must_use]
    pub fn descriptor(&self) -> Option<&'static SubfieldDescriptor> {
        self.descriptor
    }
}

/// A data field in a MARC record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataField {
    tag: String,
    ind1: char,
    ind2: char,
    subfields: SmallVec<[Subfield; 4]>,
    descriptor: Option<&'static FieldDescriptor>,
    by_code: HashMap<char, SmallVec<[usize; 2]>>,
    position: Option<usize>,
}

impl DataField {
    /// Build a field, binding each subfield to its descriptor when the field
    /// has one.
    ///
    /// Subfields keep source order; undeclared codes are kept unbound.
    #[must_use]
    pub fn new<I>(
        tag: impl Into<String>,
        ind1: char,
        ind2: char,
        descriptor: Option<&'static FieldDescriptor>,
        subfields: I,
    ) -> Self
    where
        I: IntoIterator<Item = (char, String)>,
    {
        let subfields: SmallVec<[Subfield; 4]> = subfields
            .into_iter()
            .map(|(code, value)| Subfield {
                code,
                value,
                descriptor: descriptor.and_then(|d| d.subfield(code)),
            })
            .collect();

        let mut by_code: HashMap<char, SmallVec<[usize; 2]>> = HashMap::new();
        for (index, subfield) in subfields.iter().enumerate() {
            by_code.entry(subfield.code).or_default().push(index);
        }

        DataField {
            tag: tag.into(),
            ind1,
            ind2,
            subfields,
            descriptor,
            by_code,
            position: None,
        }
    }

    /// Field tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// First indicator.
    #[must_use]
    pub fn ind1(&self) -> char {
        self.ind1
    }

    /// Second indicator.
    #[must_use]
    pub fn ind2(&self) -> char {
        self.ind2
    }

    /// Indicator by position (1 or 2).
    #[must_use]
    pub fn indicator(&self, which: u8) -> char {
        if which == 1 {
            self.ind1
        } else {
            self.ind2
        }
    }

    /// Schema entry for the tag, absent for unhandled tags.
    #[must_use]
    pub fn descriptor(&self) -> Option<&'static FieldDescriptor> {
        self.descriptor
    }

    /// Whether the tag resolved against the schema.
    #[must_use]
    pub fn is_handled(&self) -> bool {
        self.descriptor.is_some()
    }

    /// Subfields in source order.
    #[must_use]
    pub fn subfields(&self) -> &[Subfield] {
        &self.subfields
    }

    /// Values of every subfield with a code, in source order.
    pub fn values(&self, code: char) -> impl Iterator<Item = &str> {
        self.by_code
            .get(&code)
            .into_iter()
            .flatten()
            .map(move |&i| self.subfields[i].value.as_str())
    }

    /// First value of a subfield code.
    #[must_use]
    pub fn first_value(&self, code: char) -> Option<&str> {
        self.by_code
            .get(&code)
            .and_then(|indexes| indexes.first())
            .map(|&i| self.subfields[i].value.as_str())
    }

    /// Number of occurrences of a subfield code.
    #[must_use]
    pub fn occurrences(&self, code: char) -> usize {
        self.by_code.get(&code).map_or(0, SmallVec::len)
    }

    /// Distinct subfield codes in order of first occurrence.
    #[must_use]
    pub fn codes(&self) -> Vec<char> {
        let mut codes: Vec<char> = Vec::with_capacity(self.by_code.len());
        for subfield in &self.subfields {
            if !codes.contains(&subfield.code) {
                codes.push(subfield.code);
            }
        }
        codes
    }

    /// Position of this field in its owning record's data-field list.
    ///
    /// Set when the field is attached to a record.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = Some(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(char, &str)]) -> Vec<(char, String)> {
        items.iter().map(|(c, v)| (*c, (*v).to_string())).collect()
    }

    #[test]
    fn test_index_by_code() {
        let field = DataField::new(
            "650",
            BLANK,
            '0',
            None,
            pairs(&[('a', "Botany"), ('x', "History"), ('x', "Sources")]),
        );
        assert_eq!(field.occurrences('x'), 2);
        assert_eq!(field.values('x').collect::<Vec<_>>(), vec!["History", "Sources"]);
        assert_eq!(field.first_value('a'), Some("Botany"));
        assert_eq!(field.first_value('z'), None);
        assert_eq!(field.values('z').count(), 0);
        assert_eq!(field.codes(), vec!['a', 'x']);
    }

    #[test]
    fn test_unbound_field() {
        let field = DataField::new("999", BLANK, BLANK, None, pairs(&[('a', "local")]));
        assert!(!field.is_handled());
        assert!(field.subfields()[0].descriptor().is_none());
        assert_eq!(field.position(), None);
    }

    #[test]
    fn test_indicator_by_position() {
        let field = DataField::new("245", '1', '0', None, Vec::new());
        assert_eq!(field.indicator(1), '1');
        assert_eq!(field.indicator(2), '0');
    }
}
