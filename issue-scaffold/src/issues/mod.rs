//! Issue input parsing.
//!
//! The input is a JSON array as produced by
//! `gh issue list --json title,body,number`. Only the top level is parsed
//! eagerly; each element is converted to an [`IssueRecord`] by the runner so
//! that one malformed record does not reject the whole batch.

mod error;
mod record;

pub use error::{ParseError, RecordError};
pub use record::IssueRecord;

use serde_json::Value;
use tracing::debug;

/// Parses the input text into the raw elements of the top-level array.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not JSON or not an array.
pub fn parse_batch(input: &str) -> Result<Vec<Value>, ParseError> {
    let value: Value = serde_json::from_str(input)?;
    match value {
        Value::Array(records) => {
            debug!(count = records.len(), "Parsed issue batch");
            Ok(records)
        }
        other => Err(ParseError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
