//! Orchestrates a guide generation run.
//!
//! A run collects repository facts, builds the profile, pre-filters the
//! issues, then fetches comments and analyzes the remaining issues
//! concurrently before ranking, rendering and writing the guide.

mod config;
mod error;
mod output;

pub use config::{
    FactSourceConfig, RunnerConfig, DEFAULT_CONCURRENCY, DEFAULT_LIMIT, DEFAULT_OUTPUT_PATH,
};
pub use error::RunnerError;
pub use output::RunOutput;

use crate::analysis::{analyze_issue, ContributionGuide, GuideEntry};
use crate::config::AnalysisConfig;
use crate::issues::{IssueScorer, RawIssue};
use crate::profile::{build_profile, RepositoryProfile};
use crate::report::{write_report, ReportRenderer};
use crate::sources::{GitHubSource, IssueFactSource, RepositoryFactSource, SnapshotSource};
use crate::summary::{IssueOutcome, RunSummary};
use futures::stream::{self, StreamExt};
use octocrab::Octocrab;
use tracing::{error, info, info_span, Instrument};

/// Orchestrates a full analysis and report run.
pub struct Runner {
    config: RunnerConfig,
    analysis: AnalysisConfig,
    renderer: ReportRenderer,
}

impl Runner {
    /// Builds a runner, loading the analysis config and report template.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file or template cannot be loaded.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let analysis = AnalysisConfig::load_or_default(config.config_path())?;
        let renderer = match config.template_path() {
            Some(path) => ReportRenderer::from_template_file(path)?,
            None => ReportRenderer::new()?,
        };
        Ok(Self {
            config,
            analysis,
            renderer,
        })
    }

    /// Executes the run against the configured fact source.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be opened, the profile cannot be
    /// built, or the guide cannot be written. Failures of single issues are
    /// recorded in the summary instead.
    ///
    /// A dry run renders the guide without writing it; the text is returned in
    /// [`RunOutput::rendered`].
    pub async fn run(&self) -> Result<RunOutput, RunnerError> {
        match self.config.source() {
            FactSourceConfig::GitHub { repository, token } => {
                let mut builder = Octocrab::builder();
                if let Some(token) = token {
                    builder = builder.personal_token(token.clone());
                }
                let source = GitHubSource::new(
                    builder.build()?,
                    repository.clone(),
                    self.analysis.profile.top_contributor_count,
                );
                self.run_with(&source).await
            }
            FactSourceConfig::Snapshot(path) => {
                let source = SnapshotSource::load(path)?;
                self.run_with(&source).await
            }
        }
    }

    /// Executes the run against any fact source.
    ///
    /// # Errors
    ///
    /// See [`Runner::run`].
    pub async fn run_with<S>(&self, source: &S) -> Result<RunOutput, RunnerError>
    where
        S: RepositoryFactSource + IssueFactSource + Sync,
    {
        let facts = source.repository_facts().await?;
        let span = info_span!("run", repository = %facts.name);

        async {
            let mut summary = RunSummary::new(facts.name.clone(), self.config.dry_run());
            let profile = build_profile(&facts, &self.analysis.profile)?;

            let issues = source
                .issues(self.config.filter(), self.config.limit())
                .await?;
            summary.issues_fetched = issues.len();
            info!(count = issues.len(), "Fetched issues");

            let (candidates, skipped) = self.select_candidates(issues);
            for outcome in &skipped {
                summary.record_outcome(outcome);
            }
            info!(
                candidates = candidates.len(),
                skipped = skipped.len(),
                "Selected issues for analysis"
            );

            let scorer = IssueScorer::new(&self.analysis);
            let outcomes: Vec<IssueOutcome> = stream::iter(candidates)
                .map(|issue| process_issue(source, &scorer, &profile, issue))
                .buffer_unordered(self.config.concurrency())
                .collect()
                .await;

            let mut entries: Vec<GuideEntry> = Vec::with_capacity(outcomes.len());
            for outcome in outcomes {
                summary.record_outcome(&outcome);
                if let IssueOutcome::Analyzed(entry) = outcome {
                    entries.push(*entry);
                }
            }

            let guide = ContributionGuide::new(profile, entries);
            let rendered = self.renderer.render(&guide)?;

            if !self.config.dry_run() {
                write_report(self.config.output_path(), &rendered)?;
                summary.output_path = Some(self.config.output_path().to_path_buf());
            }

            Ok(RunOutput {
                summary,
                guide,
                rendered,
            })
        }
        .instrument(span)
        .await
    }

    /// Splits issues into analysis candidates and skipped outcomes.
    ///
    /// Closed issues and issues rejected by the filter are skipped, then the
    /// remaining issues are cut to the configured limit in source order.
    fn select_candidates(&self, issues: Vec<RawIssue>) -> (Vec<RawIssue>, Vec<IssueOutcome>) {
        let mut candidates = Vec::new();
        let mut skipped = Vec::new();

        for issue in issues {
            let reason = if !issue.is_open() {
                Some("closed")
            } else if !self.config.filter().matches(&issue) {
                Some("filtered out")
            } else if candidates.len() >= self.config.limit() {
                Some("over limit")
            } else {
                None
            };

            match reason {
                Some(reason) => skipped.push(IssueOutcome::Skipped {
                    number: issue.number,
                    reason: reason.to_string(),
                }),
                None => candidates.push(issue),
            }
        }

        (candidates, skipped)
    }
}

/// Fetches comments for one issue and analyzes it.
async fn process_issue<S: IssueFactSource>(
    source: &S,
    scorer: &IssueScorer,
    profile: &RepositoryProfile,
    mut issue: RawIssue,
) -> IssueOutcome {
    match source.comments(issue.number).await {
        Ok(comments) => issue.comments = comments,
        Err(e) => {
            error!(issue = issue.number, error = %e, "Failed to fetch comments");
            return IssueOutcome::Failed {
                number: issue.number,
                error: e.to_string(),
            };
        }
    }

    IssueOutcome::Analyzed(Box::new(analyze_issue(scorer, &issue, profile)))
}
