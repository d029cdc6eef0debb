//! CLI for issue-scaffold.
//!
//! Reads issues exported with
//! `gh issue list --json title,body,number` and creates a regression test
//! scaffold for each of them.

use clap::Parser;
use issue_scaffold::{read_input, RunSummary, Runner, RunnerConfig, RunnerError, ScaffoldConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Issue Scaffold - Create regression test scaffolds from issue tracker exports.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with issues; reads stdin if omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory the test directories are created in [default: tests].
    #[arg(long)]
    tests_dir: Option<PathBuf>,

    /// Create the tests directory if it does not exist.
    #[arg(long)]
    create_parents: bool,

    /// Preview scaffolds without writing files.
    #[arg(long)]
    dry_run: bool,

    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Events go to stderr so that stdout only carries the summary. Log level
/// filtering uses the `RUST_LOG` env var and defaults to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        // Compact single-line output on stderr, without module target paths
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let settings = match &args.config {
        Some(path) => ScaffoldConfig::load(path)?,
        None => ScaffoldConfig::default(),
    };
    // Flags win over the config file
    let settings = settings.with_overrides(args.tests_dir, args.create_parents)?;

    let input = read_input(args.input.as_deref()).await?;
    let runner = Runner::new(RunnerConfig::from_config(settings, args.dry_run));
    runner.run(&input).await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Issues processed: {}", summary.records_processed);

    if summary.dry_run {
        println!("  Scaffolds previewed: {}", summary.scaffolds_previewed);
    } else {
        println!("  Scaffolds created: {}", summary.scaffolds_created);
        println!("  Scaffolds skipped: {}", summary.scaffolds_skipped);
    }
    println!("  Failures: {}", summary.scaffolds_failed);

    for failure in &summary.failures {
        println!("    {failure}");
    }
}
