//! # Error Types
//!
//! Ingest errors carry the 1-based line number and the column header so the
//! user can fix the exact cell. Scoring has one failure of its own: no rows.

use infrasec_core::InfrasecError;
use thiserror::Error;

/// Failure while reading a control table.
#[derive(Error, Debug)]
pub enum IngestError {
    /// A required column is absent from the header row.
    #[error("missing required column {0:?}")]
    MissingColumn(&'static str),

    /// A required cell is empty.
    #[error("line {line}: missing value for {column:?}")]
    MissingField {
        /// 1-based line number in the source file.
        line: u64,
        /// Column header.
        column: &'static str,
    },

    /// A cell holds a value that cannot be interpreted.
    #[error("line {line}: invalid value {value:?} for {column:?}")]
    InvalidValue {
        /// 1-based line number in the source file.
        line: u64,
        /// Column header.
        column: &'static str,
        /// The offending cell content.
        value: String,
    },

    /// The file is not well-formed CSV (wrong cell count, bad UTF-8, ...).
    #[error("malformed table: {0}")]
    Malformed(#[from] csv::Error),
}

/// Failure while scoring or reporting.
#[derive(Error, Debug)]
pub enum ComplianceError {
    /// There are no control rows to score.
    #[error("no data: the control table has no rows")]
    NoData,

    /// The control table could not be read.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// A core primitive failed (digest serialization, validation).
    #[error(transparent)]
    Core(#[from] InfrasecError),
}
