//! Run summary types.

use super::result::ProcessingResult;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of records in the input.
    pub records_processed: usize,

    /// Number of scaffolds written.
    pub scaffolds_created: usize,

    /// Number of scaffolds skipped because they already existed.
    pub scaffolds_skipped: usize,

    /// Number of scaffolds rendered in dry-run mode.
    pub scaffolds_previewed: usize,

    /// Number of records that failed.
    pub scaffolds_failed: usize,

    /// One message per failed record.
    pub failures: Vec<String>,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: &ProcessingResult) {
        self.records_processed += 1;
        match result {
            ProcessingResult::Created { .. } => self.scaffolds_created += 1,
            ProcessingResult::Skipped { .. } => self.scaffolds_skipped += 1,
            ProcessingResult::Previewed { .. } => self.scaffolds_previewed += 1,
            ProcessingResult::Failed {
                index,
                number,
                error,
            } => {
                self.scaffolds_failed += 1;
                self.failures.push(match number {
                    Some(number) => format!("issue #{number}: {error}"),
                    None => format!("record {index}: {error}"),
                });
            }
        }
    }

    /// Returns true if any record failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.scaffolds_failed > 0
    }

    /// Returns true if every record was created, skipped or previewed.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.scaffolds_failed == 0
    }
}
