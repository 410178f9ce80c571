//! Contribution plan steps and their fixed ordinal slots.

use serde::Serialize;

/// Kind of plan step. Each kind owns a fixed ordinal, so optional steps
/// leave gaps in the numbering when they are omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    ReadIssue,
    ExamineFiles,
    SetUpProject,
    CreateBranch,
    ReproduceBug,
    DiscussDesign,
    MakeChanges,
    OpenPullRequest,
}

impl StepKind {
    /// Every step kind in ordinal order.
    pub const ALL: [StepKind; 8] = [
        Self::ReadIssue,
        Self::ExamineFiles,
        Self::SetUpProject,
        Self::CreateBranch,
        Self::ReproduceBug,
        Self::DiscussDesign,
        Self::MakeChanges,
        Self::OpenPullRequest,
    ];

    /// The skeleton steps present in every plan, in order.
    pub const SKELETON: [StepKind; 5] = [
        Self::ReadIssue,
        Self::SetUpProject,
        Self::CreateBranch,
        Self::MakeChanges,
        Self::OpenPullRequest,
    ];

    /// The step's fixed position in a plan.
    #[must_use]
    pub fn ordinal(self) -> u8 {
        match self {
            Self::ReadIssue => 1,
            Self::ExamineFiles => 2,
            Self::SetUpProject => 3,
            Self::CreateBranch => 4,
            Self::ReproduceBug => 5,
            Self::DiscussDesign => 6,
            Self::MakeChanges => 7,
            Self::OpenPullRequest => 8,
        }
    }

    /// Returns true for steps that appear in every plan.
    #[must_use]
    pub fn is_skeleton(self) -> bool {
        Self::SKELETON.contains(&self)
    }
}

/// One instruction in a contribution plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    /// Fixed ordinal of the step kind.
    pub ordinal: u8,

    /// What the step is.
    pub kind: StepKind,

    /// Instruction text.
    pub text: String,
}

impl PlanStep {
    /// Creates a step, taking the ordinal from its kind.
    #[must_use]
    pub fn new(kind: StepKind, text: impl Into<String>) -> Self {
        Self {
            ordinal: kind.ordinal(),
            kind,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_strictly_increasing() {
        let ordinals: Vec<u8> = StepKind::ALL.iter().map(|k| k.ordinal()).collect();
        assert!(ordinals.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn skeleton_has_five_steps() {
        assert_eq!(
            StepKind::ALL.iter().filter(|k| k.is_skeleton()).count(),
            5
        );
    }
}
