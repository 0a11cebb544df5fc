//! Error types for MARC ingestion.
//!
//! This module provides the [`MarcError`] type for all fallible operations in
//! the crate and the [`Result`] convenience type. Validation findings are not
//! errors; see [`crate::validation`].

use thiserror::Error;

/// Error type for all MARC library operations.
///
/// Only structural problems that prevent building a record are errors.
/// Unknown tags, undeclared subfields and malformed individual source lines
/// are recorded on the record or logged instead.
#[derive(Error, Debug)]
pub enum MarcError {
    /// The leader is not 24 characters long, or its record type maps to no
    /// material category and no default category was supplied.
    #[error("Invalid leader in record '{control_number}': {reason}. Leader: '{leader}'")]
    InvalidLeader {
        /// Control number (001) of the offending record, or `unknown`.
        control_number: String,
        /// Raw leader content as found in the source.
        leader: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The source record never supplied a leader.
    #[error("Missing leader in record '{0}'")]
    MissingLeader(String),

    /// Error indicating an invalid or malformed MARC record.
    #[error("Invalid MARC record: {0}")]
    InvalidRecord(String),

    /// Error indicating an invalid field structure.
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// A selection locator that does not follow `TAG~START-END`,
    /// `TAG~START` or `TAG$CODE`.
    #[error("Invalid selector '{0}'")]
    InvalidSelector(String),

    /// Error indicating a truncated or incomplete record.
    #[error("Truncated record: {0}")]
    TruncatedRecord(String),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MarcError {
    /// Build an [`MarcError::InvalidLeader`] with an unknown control number.
    pub(crate) fn invalid_leader(leader: &str, reason: impl Into<String>) -> Self {
        MarcError::InvalidLeader {
            control_number: "unknown".to_string(),
            leader: leader.to_string(),
            reason: reason.into(),
        }
    }

    /// Attach the record's control number to a leader error.
    ///
    /// Leader errors are raised before the 001 field is known to the decoder;
    /// ingestors call this once they can name the record.
    #[must_use]
    pub fn with_control_number(self, id: Option<&str>) -> Self {
        match (self, id) {
            (
                MarcError::InvalidLeader {
                    leader, reason, ..
                },
                Some(id),
            ) => MarcError::InvalidLeader {
                control_number: id.to_string(),
                leader,
                reason,
            },
            (MarcError::MissingLeader(_), Some(id)) => MarcError::MissingLeader(id.to_string()),
            (other, _) => other,
        }
    }
}

/// Convenience type alias for [`std::result::Result`] with [`MarcError`].
pub type Result<T> = std::result::Result<T, MarcError>;
