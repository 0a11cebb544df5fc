//! Data field normalization.
//!
//! Every ingestor hands the same shape to the [`Normalizer`]: a tag, two
//! indicators, and ordered `(code, value)` pairs. The normalizer resolves the
//! tag against a [`SchemaLookup`] and binds the field. A tag without a
//! descriptor still produces a field; the caller records it as unhandled.

use crate::field::DataField;
use crate::schema::{SchemaLookup, SchemaRegistry, SchemaVersion};
use tracing::debug;

/// Binds raw data fields to schema descriptors.
#[derive(Clone, Copy)]
pub struct Normalizer<'s> {
    schema: &'s dyn SchemaLookup,
    version: SchemaVersion,
}

impl std::fmt::Debug for Normalizer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl Normalizer<'static> {
    /// Normalizer over the bundled process-wide registry.
    #[must_use]
    pub fn bundled(version: SchemaVersion) -> Self {
        Normalizer::new(SchemaRegistry::global(), version)
    }
}

impl<'s> Normalizer<'s> {
    /// Normalizer over any schema lookup service.
    #[must_use]
    pub fn new(schema: &'s dyn SchemaLookup, version: SchemaVersion) -> Self {
        Normalizer { schema, version }
    }

    /// Schema version fields are resolved under.
    #[must_use]
    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    /// Schema lookup service.
    #[must_use]
    pub fn schema(&self) -> &'s dyn SchemaLookup {
        self.schema
    }

    /// Build a data field.
    ///
    /// The returned field has a descriptor exactly when the tag is declared
    /// for this normalizer's schema version.
    #[must_use]
    pub fn normalize<I>(&self, tag: &str, ind1: char, ind2: char, subfields: I) -> DataField
    where
        I: IntoIterator<Item = (char, String)>,
    {
        let descriptor = self.schema.lookup(tag, self.version);
        if descriptor.is_none() {
            debug!(tag, version = %self.version, "tag not declared in schema");
        }
        DataField::new(tag, ind1, ind2, descriptor, subfields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::BLANK;

    #[test]
    fn test_bind_declared_field() {
        let normalizer = Normalizer::bundled(SchemaVersion::Marc21);
        let field = normalizer.normalize(
            "245",
            '1',
            '0',
            vec![('a', "Title".to_string()), ('!', "odd".to_string())],
        );
        assert!(field.is_handled());
        assert_eq!(field.subfields()[0].descriptor().unwrap().label, "Title");
        assert!(field.subfields()[1].descriptor().is_none());
        assert_eq!(field.subfields()[1].value, "odd");
    }

    #[test]
    fn test_undeclared_tag_keeps_content() {
        let normalizer = Normalizer::bundled(SchemaVersion::Marc21);
        let field = normalizer.normalize("999", BLANK, BLANK, vec![('a', "x".to_string())]);
        assert!(!field.is_handled());
        assert_eq!(field.first_value('a'), Some("x"));
    }

    #[test]
    fn test_version_selects_local_tags() {
        let bl = Normalizer::bundled(SchemaVersion::Bl);
        let standard = Normalizer::bundled(SchemaVersion::Marc21);
        assert!(bl.normalize("AQN", BLANK, BLANK, Vec::new()).is_handled());
        assert!(!standard.normalize("AQN", BLANK, BLANK, Vec::new()).is_handled());
    }
}
