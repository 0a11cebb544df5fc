#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # marcqa: MARC records for quality auditing
//!
//! Turns bibliographic records from four source syntaxes into one canonical
//! [`MarcRecord`], validates it against a MARC 21 schema and serializes it to
//! deterministic JSON.
//!
//! ## Quick Start
//!
//! ```
//! use marcqa::ingest::{text, IngestOptions};
//!
//! let source = "LEADER 00720cam a22002051  4500
//! 001    00000002
//! 008 800108s1899    ilu           000 0 eng
//! 245 10$aBotanical materia medica and pharmacology;$cBy S. H. Aurand.
//! 650 #0$aBotany, Medical.
//! 650 #0$aHomeopathy$xMateria medica and therapeutics.
//! ";
//!
//! let record = text::ingest(source, &IngestOptions::default())?;
//!
//! assert_eq!(record.select("008~7-10")?, vec!["1899"]);
//! assert_eq!(record.select("245$c")?, vec!["By S. H. Aurand."]);
//!
//! for finding in record.validate() {
//!     println!("{finding}");
//! }
//! println!("{}", record.to_json()?);
//! # Ok::<(), marcqa::MarcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`leader`]: leader decoding and the material-type category
//! - [`control`]: positional decoding of 006, 007 and 008
//! - [`schema`]: field and subfield descriptors, schema versions, code lists
//! - [`normalizer`]: binds data fields to their schema descriptors
//! - [`record`]: the canonical record and its builder
//! - [`selector`]: `TAG~START-END` and `TAG$CODE` locators
//! - [`json`]: canonical JSON
//! - [`validation`]: schema validation findings
//! - [`ingest`]: binary, formatted-text, Aleph sequential and PICA+ ingestors
//! - [`iso2709`]: binary record tokenizer and writer
//! - [`boundary_scanner`]: record boundaries in binary buffers
//! - [`batch`]: parallel ingestion of many records
//! - [`error`]: error type and result alias

pub mod batch;
pub mod boundary_scanner;
pub mod control;
pub mod error;
pub mod field;
pub mod ingest;
pub mod iso2709;
pub mod json;
pub mod leader;
pub mod normalizer;
pub mod record;
pub mod schema;
pub mod selector;
pub mod validation;

pub use control::{ControlField, FieldCategory, PhysicalDescription};
pub use error::{MarcError, Result};
pub use field::{DataField, Subfield};
pub use ingest::{IngestEvent, IngestOptions};
pub use iso2709::{RawRecord, RawRecordReader, RecoveryMode};
pub use leader::{Leader, MaterialType};
pub use normalizer::Normalizer;
pub use record::{MarcRecord, RecordBuilder};
pub use schema::{SchemaLookup, SchemaRegistry, SchemaVersion};
pub use selector::Selector;
pub use validation::{ValidationError, ValidationErrorKind, Validator};
