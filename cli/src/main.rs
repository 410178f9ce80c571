//! CLI for the Contribution Guide generator.
//!
//! This tool profiles a GitHub repository, ranks its open issues by how
//! approachable they are, and writes a markdown guide with a step-by-step
//! plan for each one.

use clap::Parser;
use contribution_guide::{
    FactSourceConfig, IssueFilter, RepositorySlug, RunOutput, RunSummary, Runner, RunnerConfig,
    RunnerError, SourceError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Contribution Guide - Rank a repository's open issues for newcomers.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Repository as `owner/name` or a GitHub URL.
    #[arg(required_unless_present = "snapshot", conflicts_with = "snapshot")]
    repository: Option<RepositorySlug>,

    /// Read repository and issue facts from a JSON snapshot instead of GitHub.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Where to write the guide.
    #[arg(short, long, default_value = contribution_guide::runner::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Path to an analysis config file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to a custom Handlebars template for the guide.
    #[arg(long)]
    template: Option<PathBuf>,

    /// Only consider issues carrying this label (repeatable).
    #[arg(long = "label")]
    labels: Vec<String>,

    /// Only consider issues mentioning one of these keywords (repeatable).
    #[arg(long = "keyword")]
    keywords: Vec<String>,

    /// Maximum number of issues to analyze.
    #[arg(long, default_value_t = contribution_guide::runner::DEFAULT_LIMIT)]
    limit: usize,

    /// Maximum concurrent API requests.
    #[arg(long, default_value_t = contribution_guide::runner::DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Print the guide instead of writing it.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        warn!("A rustls crypto provider was already installed");
    }

    let args = Args::parse();

    match run(args).await {
        Ok(output) => {
            if output.summary.dry_run {
                println!("{}", output.rendered);
            }
            print_summary(&output.summary);

            if output.summary.all_success() {
                ExitCode::from(0)
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with compact output and a `RUST_LOG` filter
/// (defaults to "info").
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunOutput, RunnerError> {
    let source = match (args.snapshot, args.repository) {
        (Some(path), _) => FactSourceConfig::Snapshot(path),
        (None, Some(repository)) => FactSourceConfig::GitHub {
            repository,
            token: args.token,
        },
        (None, None) => {
            return Err(SourceError::InvalidRepository {
                input: String::new(),
                reason: "a repository or --snapshot is required".to_string(),
            }
            .into())
        }
    };

    let config = RunnerConfig::new(source)
        .with_output_path(args.output)
        .with_config_path(args.config)
        .with_template_path(args.template)
        .with_filter(IssueFilter::new(args.labels, args.keywords))
        .with_limit(args.limit)
        .with_concurrency(args.concurrency)
        .with_dry_run(args.dry_run);

    Runner::new(config)?.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Repository: {}", summary.repository);
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Issues fetched: {}", summary.issues_fetched);
    println!("  Issues analyzed: {}", summary.issues_analyzed);
    println!("  Issues skipped: {}", summary.issues_skipped);
    println!("  Issues failed: {}", summary.issues_failed);
    println!("  Warnings: {}", summary.warnings);

    if let Some(score) = summary.top_score {
        println!("  Top score: {score}/10");
    }
    if let Some(path) = &summary.output_path {
        println!("  Guide written to: {}", path.display());
    }
}
