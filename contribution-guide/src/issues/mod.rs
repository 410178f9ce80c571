//! Issue classification and approachability scoring.
//!
//! For each issue this module:
//! 1. Classifies it with an ordered list of label and keyword rules
//! 2. Extracts referenced files and code snippets
//! 3. Computes a clamped approachability score
//!
//! All of it is pure and deterministic; identical input always yields an
//! identical [`ScoredIssue`].

mod category;
mod filter;
mod raw_issue;
mod scored_issue;
mod scoring;
mod warning;

pub use category::{Category, IssueClassifier};
pub use filter::IssueFilter;
pub use raw_issue::{IssueState, RawIssue};
pub use scored_issue::ScoredIssue;
pub use scoring::{
    compute_score, Adjustment, AppliedAdjustment, ScoreInputs, ADJUSTMENTS, BASE_SCORE,
    MAX_SCORE, MIN_SCORE,
};
pub use warning::IssueWarning;

use crate::config::{AnalysisConfig, ScoringConfig};
use crate::heuristics::{estimate_complexity, extract_code_blocks, extract_file_references};
use crate::profile::RepositoryProfile;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Classifies and scores issues against one repository profile.
#[derive(Debug, Clone)]
pub struct IssueScorer {
    classifier: IssueClassifier,
    scoring: ScoringConfig,
}

impl IssueScorer {
    /// Creates a scorer from analysis configuration.
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            classifier: IssueClassifier::new(&config.classification),
            scoring: config.scoring.clone(),
        }
    }

    /// Classifies, scores and extracts references for one issue.
    ///
    /// Never fails: an issue without a label set is scored with defaults and
    /// carries an [`IssueWarning::MalformedIssue`].
    #[must_use]
    pub fn score(&self, issue: &RawIssue, profile: &RepositoryProfile) -> ScoredIssue {
        let mut warnings = Vec::new();

        let category = match &issue.labels {
            Some(labels) => self.classifier.classify(labels, &issue.title_and_body()),
            None => {
                let warning = IssueWarning::MalformedIssue {
                    number: issue.number,
                    reason: "label set is missing".to_string(),
                };
                warn!(issue = issue.number, warning = %warning, "Malformed issue");
                warnings.push(warning);
                Category::Other
            }
        };

        let referenced_files = collect_references(issue);
        let code_snippets = collect_snippets(issue);

        let (score, adjustments) = compute_score(&ScoreInputs {
            category,
            title: &issue.title,
            body: &issue.body,
            references: &referenced_files,
            profile,
            config: &self.scoring,
            malformed: issue.labels.is_none(),
        });

        let known_files: BTreeSet<String> = referenced_files
            .iter()
            .filter(|path| profile.has_file(path))
            .cloned()
            .collect();
        let related_tests: BTreeSet<String> = referenced_files
            .iter()
            .flat_map(|path| profile.related_tests(path))
            .filter(|test| !referenced_files.contains(test))
            .collect();

        let max_snippet_complexity = code_snippets
            .iter()
            .map(|snippet| estimate_complexity(snippet))
            .max();

        debug!(
            issue = issue.number,
            category = %category,
            score,
            references = referenced_files.len(),
            snippets = code_snippets.len(),
            "Scored issue"
        );

        ScoredIssue {
            issue: issue.clone(),
            category,
            score,
            adjustments,
            referenced_files,
            known_files,
            related_tests,
            code_snippets,
            max_snippet_complexity,
            warnings,
        }
    }
}

impl Default for IssueScorer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

/// File references across the title, body and every comment.
fn collect_references(issue: &RawIssue) -> BTreeSet<String> {
    let mut text = issue.title_and_body();
    for comment in &issue.comments {
        text.push('\n');
        text.push_str(comment);
    }
    extract_file_references(&text)
}

/// Code blocks from the title, body, then each comment in posting order.
///
/// Each part is scanned on its own so an unclosed fence in one comment cannot
/// swallow the next.
fn collect_snippets(issue: &RawIssue) -> Vec<String> {
    std::iter::once(issue.title.as_str())
        .chain(std::iter::once(issue.body.as_str()))
        .chain(issue.comments.iter().map(String::as_str))
        .flat_map(extract_code_blocks)
        .collect()
}
