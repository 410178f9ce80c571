//! An issue with every derived field the report needs.

use super::{AppliedAdjustment, Category, IssueWarning, RawIssue};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Output of the classifier and scorer for one issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredIssue {
    /// The issue as supplied.
    pub issue: RawIssue,

    /// Assigned category.
    pub category: Category,

    /// Approachability score in `0..=10`; higher is easier.
    pub score: u8,

    /// Score rules that changed the score, in evaluation order.
    pub adjustments: Vec<AppliedAdjustment>,

    /// Path-like strings found in the title, body and comments.
    pub referenced_files: BTreeSet<String>,

    /// Referenced paths that exist in the repository.
    pub known_files: BTreeSet<String>,

    /// Repository test files that appear to cover a referenced path.
    pub related_tests: BTreeSet<String>,

    /// Code blocks from the title, body and comments, in order.
    pub code_snippets: Vec<String>,

    /// Highest estimated complexity among the code snippets.
    pub max_snippet_complexity: Option<u32>,

    /// Problems that degraded the analysis.
    pub warnings: Vec<IssueWarning>,
}

impl ScoredIssue {
    /// Issue number.
    #[must_use]
    pub fn number(&self) -> u64 {
        self.issue.number
    }

    /// Ranking order: higher score first, then lower issue number.
    ///
    /// Issue numbers are unique, so this order is total.
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.number().cmp(&other.number()))
    }
}
