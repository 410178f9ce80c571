//! Per-issue processing results.

use crate::analysis::GuideEntry;

/// Result of processing a single issue.
#[derive(Debug, Clone)]
pub enum IssueOutcome {
    /// The issue was scored and planned.
    Analyzed(Box<GuideEntry>),

    /// The issue was left out before scoring.
    Skipped {
        /// Issue number.
        number: u64,
        /// Reason for skipping.
        reason: String,
    },

    /// Collecting the issue's facts failed.
    Failed {
        /// Issue number.
        number: u64,
        /// Error message.
        error: String,
    },
}

impl IssueOutcome {
    /// Issue number.
    #[must_use]
    pub fn number(&self) -> u64 {
        match self {
            Self::Analyzed(entry) => entry.issue.number(),
            Self::Skipped { number, .. } | Self::Failed { number, .. } => *number,
        }
    }
}
