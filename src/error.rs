//! Error types for dataset loading

use crate::dataset::FieldType;
use std::fmt;

/// Errors that can occur while loading a dataset file
///
/// Loading failures are fatal for the analysis session; the request-level
/// errors live next to their verb modules (`FilterError`, `AggregateError`,
/// `BucketError`).
#[derive(Debug)]
pub enum LoadError {
    /// IO error reading the file
    Io {
        path: String,
        source: std::io::Error,
    },
    /// CSV structure error (ragged rows, bad quoting)
    Csv { source: csv::Error },
    /// A required schema column is missing from the header row
    MissingColumn { column: String },
    /// A cell could not be parsed as its declared field type
    BadCell {
        column: String,
        line: u64,
        value: String,
        expected: FieldType,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path, source)
            }
            LoadError::Csv { source } => {
                write!(f, "Invalid CSV: {}", source)
            }
            LoadError::MissingColumn { column } => {
                write!(f, "Required column '{}' missing from header row", column)
            }
            LoadError::BadCell {
                column,
                line,
                value,
                expected,
            } => write!(
                f,
                "Cannot parse '{}' (column '{}', line {}) as {}",
                value, column, line, expected
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Csv { source } => Some(source),
            _ => None,
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Csv { source: err }
    }
}
