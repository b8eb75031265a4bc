//! CLI for the Showcase Projects action.
//!
//! Action inputs are read from the `INPUT_*` environment variables set by the
//! GitHub Actions runner; the flags below only cover local runs.

use clap::Parser;
use showcase_projects::{
    ActionInputs, EnvInputs, GitHubReporter, Reporter, RepositoryContext, RunSummary, Runner,
    RunnerConfig, RunnerError,
};
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Showcase Projects - Render your topic-tagged repositories into your README.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Repository to commit to, as "owner/repo".
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// Preview changes without writing or committing the README.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Explicitly install aws-lc-rs as the default crypto provider for rustls
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();
    let reporter = GitHubReporter::from_env();

    match run(args, &reporter).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            e.report(&reporter);
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args, reporter: &dyn Reporter) -> Result<RunSummary, RunnerError> {
    let inputs = ActionInputs::load(&EnvInputs)?;

    let repository = args.repository.as_deref().and_then(|slug| {
        let parsed = RepositoryContext::parse(slug);
        if parsed.is_none() {
            warn!(repository = %slug, "Ignoring malformed repository");
        }
        parsed
    });

    let config = RunnerConfig::new(inputs)
        .with_repository(repository)
        .with_dry_run(args.dry_run);
    let runner = Runner::new(config)?;
    runner.run(reporter).await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Repositories found: {}", summary.repositories_found);
    println!("  Repositories rendered: {}", summary.repositories_rendered);
    println!(
        "  Markers: {}",
        if summary.appended() {
            "appended"
        } else {
            "replaced"
        }
    );
    println!("  README changed: {}", summary.readme_changed);

    if !summary.dry_run {
        println!("  README written: {}", summary.readme_written);
        println!("  Commit: {}", summary.commit.as_str());
    }
}
