#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod issues;
pub mod runner;
pub mod scaffold;
pub mod summary;
pub mod templates;

pub use config::{ConfigError, ScaffoldConfig};
pub use issues::{parse_batch, IssueRecord, ParseError, RecordError};
pub use runner::{read_input, Runner, RunnerConfig, RunnerError};
pub use scaffold::{
    existing_status, write_bundle, ScaffoldBundle, ScaffoldError, ScaffoldStatus,
};
pub use summary::{ProcessingResult, RunSummary};
pub use templates::{
    comment_block, create_handlebars_registry, directory_name, source_file_name, TemplateError,
    TemplateRenderer,
};
