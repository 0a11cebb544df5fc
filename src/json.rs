//! Canonical JSON serialization of MARC records.
//!
//! The output is deterministic: the same record always serializes to the same
//! bytes, whatever order its fields and subfields arrived in.
//!
//! # Format
//!
//! - `leader` first
//! - control fields `001`, `003`, `005`, `006`, `007`, `008`, then any other
//!   control tag; `007` becomes an array when repeated
//! - data-field tags in schema declaration order, then undeclared tags in
//!   first-occurrence order; each tag maps to an array of
//!   `{ind1, ind2, subfields}` objects in source order
//! - subfields in schema order, undeclared codes after them in source order;
//!   a repeated code maps to an array of values
//!
//! # Examples
//!
//! ```
//! use marcqa::{json, Leader, MarcRecord};
//!
//! let record = MarcRecord::builder(Leader::decode("00720cam a22002051  4500", None)?)
//!     .data_field("245", '1', '0', [('c', "By S. H. Aurand."), ('a', "Botanical materia medica")])
//!     .build();
//!
//! assert_eq!(
//!     json::to_json(&record)?,
//!     r#"{"leader":"00720cam a22002051  4500","245":[{"ind1":"1","ind2":"0","subfields":{"a":"Botanical materia medica","c":"By S. H. Aurand."}}]}"#
//! );
//! # Ok::<(), marcqa::MarcError>(())
//! ```

use crate::error::Result;
use crate::field::DataField;
use crate::record::MarcRecord;
use crate::schema::{SchemaLookup, SchemaRegistry};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Serialize a record to its canonical JSON string.
///
/// Data-field order comes from the bundled schema registry.
///
/// # Errors
///
/// Returns an error if the value cannot be written.
pub fn to_json(record: &MarcRecord) -> Result<String> {
    Ok(serde_json::to_string(&to_json_value(record))?)
}

/// Canonical JSON value of a record, ordered by the bundled schema registry.
#[must_use]
pub fn to_json_value(record: &MarcRecord) -> Value {
    to_json_value_with(record, SchemaRegistry::global())
}

/// Canonical JSON value of a record, ordered by a caller-supplied schema.
#[must_use]
pub fn to_json_value_with(record: &MarcRecord, schema: &dyn SchemaLookup) -> Value {
    let mut object = Map::new();
    object.insert(
        "leader".to_string(),
        Value::String(record.leader().as_str().to_string()),
    );

    let descriptions = record.physical_descriptions();
    for field in record.control_fields() {
        if field.tag() == "007" && descriptions.len() > 1 {
            if !object.contains_key("007") {
                let values = descriptions
                    .iter()
                    .map(|f| Value::String(f.content().to_string()))
                    .collect();
                object.insert("007".to_string(), Value::Array(values));
            }
            continue;
        }
        object.insert(
            field.tag().to_string(),
            Value::String(field.content().to_string()),
        );
    }

    for (tag, fields) in grouped_data_fields(record, schema) {
        let occurrences = fields.into_iter().map(data_field_value).collect();
        object.insert(tag.to_string(), Value::Array(occurrences));
    }

    Value::Object(object)
}

/// Data fields grouped by tag, tags sorted by declaration order.
fn grouped_data_fields<'r>(
    record: &'r MarcRecord,
    schema: &dyn SchemaLookup,
) -> Vec<(&'r str, Vec<&'r DataField>)> {
    let mut groups: IndexMap<&str, Vec<&DataField>> = IndexMap::new();
    for field in record.data_fields() {
        groups.entry(field.tag()).or_default().push(field);
    }

    let version = record.schema_version();
    let mut groups: Vec<_> = groups.into_iter().enumerate().collect();
    // Stable: undeclared tags keep first-occurrence order after all declared ones.
    groups.sort_by_key(|(first_seen, (tag, fields))| {
        let declared = fields
            .first()
            .filter(|f| f.is_handled())
            .and_then(|_| schema.declaration_order(tag, version));
        match declared {
            Some(order) => (0, order),
            None => (1, *first_seen),
        }
    });
    groups.into_iter().map(|(_, group)| group).collect()
}

fn data_field_value(field: &DataField) -> Value {
    let mut codes = field.codes();
    if let Some(descriptor) = field.descriptor() {
        // Undeclared codes sort after declared ones and keep source order.
        codes.sort_by_key(|code| descriptor.subfield_position(*code).unwrap_or(usize::MAX));
    }

    let mut subfields = Map::new();
    for code in codes {
        let mut values: Vec<Value> = field
            .values(code)
            .map(|v| Value::String(v.to_string()))
            .collect();
        let value = if values.len() == 1 {
            values.remove(0)
        } else {
            Value::Array(values)
        };
        subfields.insert(code.to_string(), value);
    }

    let mut object = Map::new();
    object.insert("ind1".to_string(), Value::String(field.ind1().to_string()));
    object.insert("ind2".to_string(), Value::String(field.ind2().to_string()));
    object.insert("subfields".to_string(), Value::Object(subfields));
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leader::Leader;
    use crate::normalizer::Normalizer;
    use crate::record::RecordBuilder;
    use crate::schema::SchemaVersion;

    fn leader() -> Leader {
        Leader::decode("00720cam a22002051  4500", None).unwrap()
    }

    #[test]
    fn test_data_tags_in_declaration_order() {
        let record = MarcRecord::builder(leader())
            .data_field("650", ' ', '0', [('a', "Botany")])
            .data_field("100", '1', ' ', [('a', "Aurand")])
            .data_field("245", '1', '0', [('a', "Title")])
            .build();
        let value = to_json_value(&record);
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["leader", "100", "245", "650"]);
    }

    #[test]
    fn test_subfields_in_schema_order() {
        let record = MarcRecord::builder(leader())
            .data_field("260", ' ', ' ', [('c', "1899."), ('b', "Mallen,"), ('a', "Chicago,")])
            .build();
        assert_eq!(
            to_json(&record).unwrap(),
            r#"{"leader":"00720cam a22002051  4500","260":[{"ind1":" ","ind2":" ","subfields":{"a":"Chicago,","b":"Mallen,","c":"1899."}}]}"#
        );
    }

    #[test]
    fn test_repeated_code_becomes_array() {
        let record = MarcRecord::builder(leader())
            .data_field("650", ' ', '0', [('a', "Botany"), ('x', "History"), ('x', "Sources")])
            .build();
        let value = to_json_value(&record);
        assert_eq!(
            value["650"][0]["subfields"]["x"],
            serde_json::json!(["History", "Sources"])
        );
        assert_eq!(value["650"][0]["subfields"]["a"], "Botany");
    }

    #[test]
    fn test_unhandled_tags_last_and_kept() {
        let record = MarcRecord::builder(leader())
            .data_field("999", ' ', ' ', [('b', "two"), ('a', "one")])
            .data_field("245", '1', '0', [('a', "Title")])
            .data_field("998", ' ', ' ', [('a', "x")])
            .build();
        let value = to_json_value(&record);
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["leader", "245", "999", "998"]);
        let codes: Vec<&String> = value["999"][0]["subfields"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(codes, vec!["b", "a"]);
    }

    #[test]
    fn test_single_and_repeated_007() {
        let one = MarcRecord::builder(leader()).control_field("007", "tu").build();
        assert_eq!(to_json_value(&one)["007"], "tu");

        let two = MarcRecord::builder(leader())
            .control_field("008", "800108s1899    ilu           000 0 eng  ")
            .control_field("007", "tu")
            .control_field("007", "at")
            .control_field("001", "id")
            .build();
        let value = to_json_value(&two);
        assert_eq!(value["007"], serde_json::json!(["tu", "at"]));
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["leader", "001", "007", "008"]);
    }

    #[test]
    fn test_local_tags_follow_standard_tags() {
        let mut builder =
            RecordBuilder::new(leader(), Normalizer::bundled(SchemaVersion::Bl));
        builder.add_data_field("AQN", ' ', ' ', [('a', "note")]);
        builder.add_data_field("245", '1', '0', [('a', "Title")]);
        let record = builder.build();
        let value = to_json_value(&record);
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["leader", "245", "AQN"]);
    }
}
