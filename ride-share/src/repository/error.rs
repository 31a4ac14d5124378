//! Repository error types.

use std::path::PathBuf;

use crate::domain::{RecordId, ValidationError};

/// Errors raised while loading records or wiring trips into the directory.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The data file could not be opened
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not well-formed CSV, or a row has the wrong shape
    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A timestamp cell could not be parsed
    #[error("{file} line {line}: unparseable timestamp {value:?}")]
    Timestamp {
        file: &'static str,
        line: u64,
        value: String,
    },

    /// A row failed domain validation
    #[error("{file} line {line}: {source}")]
    Validation {
        file: &'static str,
        line: u64,
        #[source]
        source: ValidationError,
    },

    /// The same id appears twice for one kind of record
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: RecordId },

    /// A trip names a passenger that was never loaded
    #[error("trip {trip} references unknown passenger {passenger}")]
    UnknownPassenger { trip: RecordId, passenger: RecordId },

    /// A trip names a driver that was never loaded
    #[error("trip {trip} references unknown driver {driver}")]
    UnknownDriver { trip: RecordId, driver: RecordId },
}
