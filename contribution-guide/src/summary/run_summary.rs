//! Run summary types.

use super::result::IssueOutcome;
use std::path::PathBuf;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Repository that was analyzed.
    pub repository: String,

    /// Number of issues the source returned.
    pub issues_fetched: usize,

    /// Number of issues scored and planned.
    pub issues_analyzed: usize,

    /// Number of issues left out (closed, filtered, over the limit).
    pub issues_skipped: usize,

    /// Number of issues whose facts could not be collected.
    pub issues_failed: usize,

    /// Number of non-fatal warnings attached to analyzed issues.
    pub warnings: usize,

    /// Highest approachability score in the guide.
    pub top_score: Option<u8>,

    /// Where the guide was written; `None` on a dry run.
    pub output_path: Option<PathBuf>,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(repository: impl Into<String>, dry_run: bool) -> Self {
        Self {
            repository: repository.into(),
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_outcome(&mut self, outcome: &IssueOutcome) {
        match outcome {
            IssueOutcome::Analyzed(entry) => {
                self.issues_analyzed += 1;
                self.warnings += entry.issue.warnings.len();
                self.top_score = self.top_score.max(Some(entry.issue.score));
            }
            IssueOutcome::Skipped { .. } => self.issues_skipped += 1,
            IssueOutcome::Failed { .. } => self.issues_failed += 1,
        }
    }

    /// Returns true if any issue failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.issues_failed > 0
    }

    /// Returns true if any analyzed issue carried a warning.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.warnings > 0
    }

    /// Returns true if every issue was analyzed cleanly.
    #[must_use]
    pub fn all_success(&self) -> bool {
        !self.has_failures() && !self.has_warnings()
    }
}
