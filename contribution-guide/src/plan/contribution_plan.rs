//! An ordered contribution plan for one issue.

use super::{PlanStep, StepKind};
use serde::Serialize;
use std::fmt;

/// Step-by-step instructions for resolving one issue.
///
/// Steps are kept in ordinal order. Optional steps that do not apply are
/// absent, so the ordinals can have gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributionPlan {
    /// Issue the plan is for.
    pub issue_number: u64,

    /// Steps in ordinal order.
    pub steps: Vec<PlanStep>,

    /// Suggested git branch name.
    pub branch_name: String,
}

impl ContributionPlan {
    /// Returns the step of the given kind, if the plan has one.
    #[must_use]
    pub fn step(&self, kind: StepKind) -> Option<&PlanStep> {
        self.steps.iter().find(|step| step.kind == kind)
    }

    /// Ordinals of the steps, in order.
    #[must_use]
    pub fn ordinals(&self) -> Vec<u8> {
        self.steps.iter().map(|step| step.ordinal).collect()
    }
}

impl fmt::Display for ContributionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{}. {}", step.ordinal, step.text)?;
        }
        Ok(())
    }
}
