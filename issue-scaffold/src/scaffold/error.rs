//! Scaffold writing error types.

use thiserror::Error;

/// Errors that can occur while materializing a scaffold.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Failed to create the test directory.
    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreateError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to check whether a path exists.
    #[error("Failed to access '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write one of the scaffold files.
    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Template rendering error.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),
}
