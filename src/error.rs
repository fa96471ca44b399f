use std::path::PathBuf;
use thiserror::Error;

/// A record in the samples file could not be turned into a [`Person`](crate::models::Person).
#[derive(Debug, Error)]
pub enum RecordError {
    /// The element is not a JSON object.
    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },

    /// A required key is absent.
    #[error("record {index} is missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// A key is present but holds the wrong kind of value.
    #[error("record {index} has invalid field `{field}`: expected {expected}")]
    InvalidField {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },

    /// The `born` field is not a `DD/MM/YYYY` date.
    #[error("record {index} has unparsable date `{value}`")]
    InvalidDate {
        index: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Errors raised by the benchmark runner.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The samples file could not be read.
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The samples file is not valid JSON.
    #[error("malformed JSON in {}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an array.
    #[error("expected a JSON array of records in {}", .path.display())]
    NotAnArray { path: PathBuf },

    #[error(transparent)]
    Record(#[from] RecordError),

    /// An aggregate was requested over zero records.
    #[error("empty dataset: {operation} need at least one record")]
    EmptyDataset { operation: &'static str },
}
