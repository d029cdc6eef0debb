//! Issue parsing error types.

use thiserror::Error;

/// Errors that make the whole input unusable.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input is not valid JSON.
    #[error("Input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Input is valid JSON but the top level is not an array.
    #[error("Expected a JSON array of issues, found {found}")]
    NotAnArray { found: &'static str },
}

/// Errors affecting a single record of the batch.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record does not have the expected shape.
    #[error("Invalid issue record at index {index}: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
