//! Processing result types.

use std::path::PathBuf;

/// Result of processing a single issue record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingResult {
    /// The scaffold was written.
    Created {
        /// Issue number.
        number: u64,
        /// Test directory.
        directory: PathBuf,
    },

    /// The scaffold already existed.
    Skipped {
        /// Issue number.
        number: u64,
        /// Reason for skipping.
        reason: String,
    },

    /// The scaffold was rendered but not written (dry run).
    Previewed {
        /// Issue number.
        number: u64,
        /// Test directory.
        directory: PathBuf,
    },

    /// Processing failed.
    Failed {
        /// Position of the record in the input array.
        index: usize,
        /// Issue number, if the record had one.
        number: Option<u64>,
        /// Error message.
        error: String,
    },
}
