//! Contribution plan synthesis.
//!
//! Every plan is built from a fixed skeleton of steps with intrinsic
//! ordinals (see [`StepKind::ordinal`]). Optional steps are slotted in by
//! ordinal, never by position, so an omitted step leaves a gap in the
//! numbering instead of shifting the steps after it.

mod branch;
mod contribution_plan;
mod step;

pub use branch::suggest_branch_name;
pub use contribution_plan::ContributionPlan;
pub use step::{PlanStep, StepKind};

use crate::issues::{Category, ScoredIssue};

/// Builds the contribution plan for a scored issue.
#[must_use]
pub fn synthesize_plan(scored: &ScoredIssue) -> ContributionPlan {
    let number = scored.number();
    let branch_name = suggest_branch_name(number, &scored.issue.title);

    let steps = StepKind::ALL
        .iter()
        .filter_map(|kind| {
            step_text(*kind, scored, &branch_name).map(|text| PlanStep::new(*kind, text))
        })
        .collect();

    ContributionPlan {
        issue_number: number,
        steps,
        branch_name,
    }
}

/// Instruction text for `kind`, or `None` if the step does not apply.
fn step_text(kind: StepKind, scored: &ScoredIssue, branch_name: &str) -> Option<String> {
    let number = scored.number();
    match kind {
        StepKind::ReadIssue => Some(format!(
            "Read issue #{number} and its comments to understand what is being asked."
        )),
        StepKind::ExamineFiles => (!scored.referenced_files.is_empty()).then(|| {
            let files: Vec<String> = scored
                .referenced_files
                .iter()
                .map(|path| format!("`{path}`"))
                .collect();
            format!("Examine the referenced files: {}.", files.join(", "))
        }),
        StepKind::SetUpProject => Some(
            "Fork the repository and set up the project locally following its setup instructions."
                .to_string(),
        ),
        StepKind::CreateBranch => {
            Some(format!("Create a branch: `git checkout -b {branch_name}`."))
        }
        StepKind::ReproduceBug => (scored.category == Category::Bug).then(|| {
            "Reproduce the bug locally and, if possible, capture it in a failing test.".to_string()
        }),
        StepKind::DiscussDesign => (scored.category == Category::FeatureRequest).then(|| {
            "Discuss the design approach with the maintainers on the issue before writing code."
                .to_string()
        }),
        StepKind::MakeChanges => Some(match scored.category {
            Category::Documentation => {
                "Make the documentation changes and check that they render correctly.".to_string()
            }
            _ => "Make the changes, add or update tests, and run the test suite.".to_string(),
        }),
        StepKind::OpenPullRequest => Some(format!(
            "Open a pull request that references #{number} and describes your changes."
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::{IssueScorer, RawIssue};
    use crate::profile::{build_profile, RepositoryFacts, RepositoryProfile};

    fn profile() -> RepositoryProfile {
        let facts = RepositoryFacts {
            name: "widget".to_string(),
            files: Some(Vec::new()),
            ..RepositoryFacts::default()
        };
        build_profile(&facts, &Default::default()).unwrap()
    }

    fn plan_for(issue: RawIssue) -> ContributionPlan {
        synthesize_plan(&IssueScorer::default().score(&issue, &profile()))
    }

    #[test]
    fn empty_issue_has_skeleton_only() {
        let plan = plan_for(RawIssue::new(3, "", ""));
        let kinds: Vec<StepKind> = plan.steps.iter().map(|s| s.kind).collect();

        assert_eq!(kinds, StepKind::SKELETON.to_vec());
        assert_eq!(plan.ordinals(), vec![1, 3, 4, 7, 8]);
        assert_eq!(plan.branch_name, "issue-3");
    }

    #[test]
    fn referenced_files_add_examine_step_at_slot_two() {
        let plan = plan_for(RawIssue::new(1, "License", "see README.md line 178"));

        let step = plan.step(StepKind::ExamineFiles).unwrap();
        assert_eq!(step.ordinal, 2);
        assert!(step.text.contains("`README.md`"));
        assert_eq!(plan.ordinals(), vec![1, 2, 3, 4, 7, 8]);
    }

    #[test]
    fn bug_gets_reproduce_step() {
        let plan = plan_for(RawIssue::new(5, "Crash on start", "").with_label("bug"));

        assert_eq!(plan.ordinals(), vec![1, 3, 4, 5, 7, 8]);
        assert!(plan.step(StepKind::DiscussDesign).is_none());
    }

    #[test]
    fn feature_request_gets_design_step() {
        let plan = plan_for(RawIssue::new(6, "Dark mode", "").with_label("enhancement"));

        assert_eq!(plan.ordinals(), vec![1, 3, 4, 6, 7, 8]);
        assert!(plan.step(StepKind::ReproduceBug).is_none());
    }

    #[test]
    fn skeleton_steps_keep_relative_order() {
        let issues = [
            RawIssue::new(1, "", ""),
            RawIssue::new(2, "Crash in src/main.rs", "").with_label("bug"),
            RawIssue::new(3, "Add feature", "").with_label("enhancement"),
        ];

        for issue in issues {
            let plan = plan_for(issue);
            let skeleton: Vec<StepKind> = plan
                .steps
                .iter()
                .map(|s| s.kind)
                .filter(|k| k.is_skeleton())
                .collect();
            assert_eq!(skeleton, StepKind::SKELETON.to_vec());
            assert!(plan.ordinals().windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn display_shows_ordinal_gaps() {
        let plan = plan_for(RawIssue::new(3, "", ""));
        let rendered = plan.to_string();

        assert!(rendered.starts_with("1. Read issue #3"));
        assert!(rendered.contains("\n3. Fork"));
        assert!(!rendered.contains("\n2. "));
    }
}
