//! Scaffold status types.

/// Outcome of writing a scaffold bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldStatus {
    /// All three files were written.
    Created,

    /// Nothing was written.
    Skipped {
        /// Reason for skipping.
        reason: String,
    },
}
