//! The fully computed contribution guide handed to the report writer.

use crate::issues::{IssueWarning, ScoredIssue};
use crate::plan::ContributionPlan;
use crate::profile::RepositoryProfile;
use serde::Serialize;

/// One ranked issue and its plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideEntry {
    pub issue: ScoredIssue,
    pub plan: ContributionPlan,
}

/// Repository profile plus every analyzed issue, best first.
#[derive(Debug, Clone, Serialize)]
pub struct ContributionGuide {
    /// Profile of the analyzed repository.
    pub profile: RepositoryProfile,

    /// Entries sorted by score descending, then issue number ascending.
    pub entries: Vec<GuideEntry>,
}

impl ContributionGuide {
    /// Creates a guide, sorting `entries` into rank order.
    #[must_use]
    pub fn new(profile: RepositoryProfile, mut entries: Vec<GuideEntry>) -> Self {
        entries.sort_by(|a, b| a.issue.rank_cmp(&b.issue));
        Self { profile, entries }
    }

    /// Warnings attached to any entry, in rank order.
    pub fn warnings(&self) -> impl Iterator<Item = &IssueWarning> {
        self.entries.iter().flat_map(|entry| entry.issue.warnings.iter())
    }

    /// Returns true if no issue made it into the guide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
