//! Ingestion of source records into the canonical model.
//!
//! Every source syntax is turned into the same stream of [`IngestEvent`]s: one
//! leader, then control and data fields in source order. [`ingest_events`]
//! is the single pipeline that decodes the leader, applies the source fixes
//! from [`IngestOptions`] and feeds the fields to a
//! [`RecordBuilder`](crate::record::RecordBuilder).
//!
//! | Module | Source syntax |
//! |---|---|
//! | [`binary`] | tokenized ISO 2709 records ([`RawRecord`](crate::iso2709::RawRecord)) |
//! | [`text`] | formatted text (`LEADER ...`, `245 10$aTitle`) |
//! | [`alephseq`] | Aleph sequential export lines |
//! | [`pica`] | PICA+ plain lines |
//!
//! # Examples
//!
//! ```
//! use marcqa::ingest::{ingest_events, IngestEvent, IngestOptions};
//!
//! let events = vec![
//!     IngestEvent::Leader("00720cam a22002051  4500".to_string()),
//!     IngestEvent::ControlField {
//!         tag: "001".to_string(),
//!         content: "   00000002 ".to_string(),
//!     },
//!     IngestEvent::DataField {
//!         tag: "245".to_string(),
//!         ind1: '1',
//!         ind2: '0',
//!         subfields: vec![('a', "Botanical materia medica".to_string())],
//!     },
//! ];
//! let record = ingest_events(events, &IngestOptions::default())?;
//! assert_eq!(record.select("245$a")?, vec!["Botanical materia medica"]);
//! # Ok::<(), marcqa::MarcError>(())
//! ```

pub mod alephseq;
pub mod binary;
pub mod pica;
pub mod text;

use crate::error::{MarcError, Result};
use crate::leader::{Leader, MaterialType};
use crate::normalizer::Normalizer;
use crate::record::{MarcRecord, RecordBuilder};
use crate::schema::{SchemaLookup, SchemaRegistry, SchemaVersion};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Control fields whose content may carry the Aleph `^` blank placeholder.
const FIXABLE_CONTROL_FIELDS: [&str; 3] = ["006", "007", "008"];

/// One unit of source content, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestEvent {
    /// The record leader
    Leader(String),
    /// A control field (001-009)
    ControlField {
        /// Tag
        tag: String,
        /// Raw content
        content: String,
    },
    /// A data field
    DataField {
        /// Tag
        tag: String,
        /// First indicator
        ind1: char,
        /// Second indicator
        ind2: char,
        /// `(code, value)` pairs in source order
        subfields: Vec<(char, String)>,
    },
}

/// Options shared by all ingestors.
///
/// # Examples
///
/// ```
/// use marcqa::ingest::IngestOptions;
/// use marcqa::schema::SchemaVersion;
/// use marcqa::MaterialType;
///
/// let options = IngestOptions::default()
///     .with_schema_version(SchemaVersion::Dnb)
///     .with_default_category(MaterialType::Books)
///     .with_fix_alephseq(true);
/// assert!(options.fix_alephseq);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    /// Schema variant data fields are resolved under
    pub schema_version: SchemaVersion,
    /// Category used when the leader's record type maps to none
    pub default_category: Option<MaterialType>,
    /// Replace `^` with a space in 006/007/008 content
    pub fix_alephseq: bool,
}

impl IngestOptions {
    /// Set the schema version.
    #[must_use]
    pub fn with_schema_version(mut self, version: SchemaVersion) -> Self {
        self.schema_version = version;
        self
    }

    /// Set the fallback material category for undecodable leaders.
    #[must_use]
    pub fn with_default_category(mut self, category: MaterialType) -> Self {
        self.default_category = Some(category);
        self
    }

    /// Enable or disable the Aleph `^` placeholder fix.
    #[must_use]
    pub fn with_fix_alephseq(mut self, fix: bool) -> Self {
        self.fix_alephseq = fix;
        self
    }
}

/// Build a record from ingestion events using the bundled schema registry.
///
/// # Errors
///
/// Returns [`MarcError::MissingLeader`] if no leader event is present, or
/// [`MarcError::InvalidLeader`] if the leader cannot be decoded. Both name the
/// record's control number when the events carry a 001.
pub fn ingest_events<I>(events: I, options: &IngestOptions) -> Result<MarcRecord>
where
    I: IntoIterator<Item = IngestEvent>,
{
    ingest_events_with(events, options, SchemaRegistry::global())
}

/// Build a record from ingestion events using a caller-supplied schema.
///
/// # Errors
///
/// Same as [`ingest_events`].
pub fn ingest_events_with<I>(
    events: I,
    options: &IngestOptions,
    schema: &dyn SchemaLookup,
) -> Result<MarcRecord>
where
    I: IntoIterator<Item = IngestEvent>,
{
    let events: Vec<IngestEvent> = events.into_iter().collect();
    let control_number = events.iter().find_map(|event| match event {
        IngestEvent::ControlField { tag, content } if tag == "001" => Some(content.clone()),
        _ => None,
    });
    let control_number = control_number.as_deref();

    let leader_content = events
        .iter()
        .find_map(|event| match event {
            IngestEvent::Leader(content) => Some(content.as_str()),
            _ => None,
        })
        .ok_or_else(|| MarcError::MissingLeader(control_number.unwrap_or("unknown").to_string()))?;
    let leader = Leader::decode(leader_content, options.default_category)
        .map_err(|err| err.with_control_number(control_number))?;

    let mut builder = RecordBuilder::new(leader, Normalizer::new(schema, options.schema_version));
    let mut leaders = 0;
    for event in events {
        match event {
            IngestEvent::Leader(content) => {
                leaders += 1;
                if leaders > 1 {
                    warn!(
                        control_number = control_number.unwrap_or("unknown"),
                        leader = %content,
                        "additional leader ignored"
                    );
                }
            },
            IngestEvent::ControlField { tag, content } => {
                let content = if options.fix_alephseq && FIXABLE_CONTROL_FIELDS.contains(&tag.as_str())
                {
                    content.replace('^', " ")
                } else {
                    content
                };
                builder.add_control_field(&tag, content);
            },
            IngestEvent::DataField {
                tag,
                ind1,
                ind2,
                subfields,
            } => builder.add_data_field(&tag, ind1, ind2, subfields),
        }
    }
    Ok(builder.build())
}
