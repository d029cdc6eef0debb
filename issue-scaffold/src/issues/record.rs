//! Issue records as exported by the issue tracker.

use super::RecordError;
use serde::Deserialize;
use serde_json::Value;

/// A single issue read from the input array.
///
/// Additional fields (labels, url, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueRecord {
    /// Issue number, unique within the tracker.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Issue body; `null` and missing bodies are allowed.
    #[serde(default)]
    pub body: Option<String>,
}

impl IssueRecord {
    /// Creates a record from its parts.
    pub fn new(number: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            body: Some(body.into()),
        }
    }

    /// Converts one element of the input array into a record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Invalid`] if a field is missing or has the wrong type.
    pub fn from_value(value: Value, index: usize) -> Result<Self, RecordError> {
        serde_json::from_value(value).map_err(|source| RecordError::Invalid { index, source })
    }

    /// Returns the body, treating a missing body as empty.
    #[must_use]
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}
