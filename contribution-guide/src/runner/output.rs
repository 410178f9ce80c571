//! What a run hands back to its caller.

use crate::analysis::ContributionGuide;
use crate::summary::RunSummary;

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Counts and outcome of the run.
    pub summary: RunSummary,

    /// The ranked guide.
    pub guide: ContributionGuide,

    /// The guide rendered as markdown. On a dry run this is the only copy;
    /// the caller decides where it goes.
    pub rendered: String,
}
