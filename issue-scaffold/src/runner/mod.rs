//! Orchestrates scaffold generation for a batch of issues.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::issues::{parse_batch, IssueRecord};
use crate::scaffold::{
    existing_status, write_bundle, ScaffoldBundle, ScaffoldError, ScaffoldStatus,
};
use crate::summary::{ProcessingResult, RunSummary};
use crate::templates::{comment_block, TemplateRenderer};
use serde_json::Value;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::{error, info, info_span, warn, Instrument};

/// Reads the whole input, from a file if given and from stdin otherwise.
///
/// # Errors
///
/// Returns [`RunnerError::Input`] if reading fails or the input is not UTF-8.
pub async fn read_input(path: Option<&Path>) -> Result<String, RunnerError> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RunnerError::Input {
                input: path.display().to_string(),
                source: e,
            }),
        None => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .map_err(|e| RunnerError::Input {
                    input: "stdin".to_string(),
                    source: e,
                })?;
            Ok(input)
        }
    }
}

/// Generates test scaffolds for a batch of issues.
pub struct Runner {
    config: RunnerConfig,
    renderer: TemplateRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            renderer: TemplateRenderer::new(),
        }
    }

    /// Parses the input and generates scaffolds for every record.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Parse`] before touching the filesystem if the
    /// input is not a JSON array. Failures of single records are reported in
    /// the returned summary instead.
    pub async fn run(&self, input: &str) -> Result<RunSummary, RunnerError> {
        let records = parse_batch(input)?;

        if records.is_empty() {
            warn!("No issues in input");
        } else {
            info!(count = records.len(), "Found issues");
        }

        Ok(self.generate(records).await)
    }

    /// Generates scaffolds for the records one after another, in input order.
    ///
    /// Every write of a record completes before the next record starts.
    pub async fn generate(&self, records: Vec<Value>) -> RunSummary {
        let mut summary = RunSummary::new(self.config.dry_run());

        for (index, record) in records.into_iter().enumerate() {
            let number = record.get("number").and_then(Value::as_u64);
            let span = info_span!("scaffold", index, number);
            let result = self
                .process_record(index, number, record)
                .instrument(span)
                .await;
            summary.record_result(&result);
        }

        summary
    }

    async fn process_record(
        &self,
        index: usize,
        number: Option<u64>,
        record: Value,
    ) -> ProcessingResult {
        let issue = match IssueRecord::from_value(record, index) {
            Ok(issue) => issue,
            Err(e) => {
                error!(error = %e, "Invalid issue record");
                return ProcessingResult::Failed {
                    index,
                    number,
                    error: e.to_string(),
                };
            }
        };

        match self.scaffold_issue(&issue).await {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "Failed to create scaffold");
                ProcessingResult::Failed {
                    index,
                    number: Some(issue.number),
                    error: e.to_string(),
                }
            }
        }
    }

    async fn scaffold_issue(
        &self,
        issue: &IssueRecord,
    ) -> Result<ProcessingResult, ScaffoldError> {
        let bundle = ScaffoldBundle::render(
            issue,
            self.config.tests_dir(),
            self.config.makefile_include(),
            &self.renderer,
        )?;

        if self.config.dry_run() {
            if let Some(ScaffoldStatus::Skipped { reason }) = existing_status(&bundle).await? {
                info!(reason = %reason, "Scaffold exists, would skip");
                return Ok(ProcessingResult::Skipped {
                    number: issue.number,
                    reason,
                });
            }
            print_dry_run_preview(issue, &bundle);
            return Ok(ProcessingResult::Previewed {
                number: issue.number,
                directory: bundle.directory,
            });
        }

        match write_bundle(&bundle, self.config.create_parents()).await? {
            ScaffoldStatus::Created => Ok(ProcessingResult::Created {
                number: issue.number,
                directory: bundle.directory,
            }),
            ScaffoldStatus::Skipped { reason } => {
                info!(reason = %reason, "Scaffold exists, skipping");
                Ok(ProcessingResult::Skipped {
                    number: issue.number,
                    reason,
                })
            }
        }
    }
}

fn print_dry_run_preview(issue: &IssueRecord, bundle: &ScaffoldBundle) {
    println!("\n[DRY RUN] Issue #{}: {}", issue.number, issue.title);
    println!("  Would create: {}", bundle.directory.display());
    println!("    {}", bundle.skip_path().display());
    println!("    {}", bundle.makefile_path().display());
    println!("    {}", bundle.source_path().display());

    println!("\n  Source stub comment:");
    let comment = comment_block(&issue.title, issue.body());
    for line in comment.lines().take(10) {
        println!("    {line}");
    }
    if comment.lines().count() > 10 {
        println!("    ...");
    }
}
