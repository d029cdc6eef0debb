//! Runner error types.

/// Errors that abort a whole run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The input is not a JSON array.
    #[error(transparent)]
    Parse(#[from] crate::issues::ParseError),

    /// The input could not be read.
    #[error("Failed to read input from {input}: {source}")]
    Input {
        input: String,
        #[source]
        source: std::io::Error,
    },
}
