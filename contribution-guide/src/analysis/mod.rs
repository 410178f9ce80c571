//! Composition of the analysis stages.
//!
//! The profile is built once; each open issue is then scored and planned on
//! its own, and the results are ranked into a [`ContributionGuide`].

mod guide;

pub use guide::{ContributionGuide, GuideEntry};

use crate::config::AnalysisConfig;
use crate::issues::{IssueScorer, RawIssue};
use crate::plan::synthesize_plan;
use crate::profile::{build_profile, ProfileError, RepositoryFacts, RepositoryProfile};
use tracing::{debug, info};

/// Scores and plans a single issue.
#[must_use]
pub fn analyze_issue(
    scorer: &IssueScorer,
    issue: &RawIssue,
    profile: &RepositoryProfile,
) -> GuideEntry {
    let scored = scorer.score(issue, profile);
    let plan = synthesize_plan(&scored);
    debug!(
        issue = scored.number(),
        category = %scored.category,
        score = scored.score,
        steps = plan.steps.len(),
        "Analyzed issue"
    );
    GuideEntry { issue: scored, plan }
}

/// Builds the profile and analyzes every open issue.
///
/// Closed issues are skipped. Malformed issues are analyzed with defaults and
/// carry a warning; they never fail the batch.
///
/// # Errors
///
/// Returns [`ProfileError::MissingData`] if the profile cannot be built, since
/// no issue can be scored without it.
pub fn analyze(
    facts: &RepositoryFacts,
    issues: &[RawIssue],
    config: &AnalysisConfig,
) -> Result<ContributionGuide, ProfileError> {
    let profile = build_profile(facts, &config.profile)?;
    let scorer = IssueScorer::new(config);

    let entries: Vec<GuideEntry> = issues
        .iter()
        .filter(|issue| {
            if !issue.is_open() {
                debug!(issue = issue.number, "Skipping closed issue");
            }
            issue.is_open()
        })
        .map(|issue| analyze_issue(&scorer, issue, &profile))
        .collect();

    info!(
        repository = %profile.name,
        analyzed = entries.len(),
        skipped = issues.len() - entries.len(),
        "Analysis complete"
    );
    Ok(ContributionGuide::new(profile, entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::IssueState;

    fn facts() -> RepositoryFacts {
        RepositoryFacts {
            name: "widget".to_string(),
            files: Some(vec!["README.md".to_string()]),
            readme: Some("# Widget\n\n## Installation\n\n    cargo install widget\n".to_string()),
            ..RepositoryFacts::default()
        }
    }

    #[test]
    fn ranks_open_issues_and_skips_closed() {
        let mut closed = RawIssue::new(4, "Fix README.md typo", "").with_label("documentation");
        closed.state = IssueState::Closed;
        let issues = vec![
            RawIssue::new(3, "", ""),
            RawIssue::new(1, "License", "Please add a LICENSE file, see README.md line 178"),
            closed,
            RawIssue::new(2, "", ""),
        ];

        let guide = analyze(&facts(), &issues, &AnalysisConfig::default()).unwrap();
        let ranked: Vec<(u64, u8)> = guide
            .entries
            .iter()
            .map(|e| (e.issue.number(), e.issue.score))
            .collect();

        assert_eq!(ranked, vec![(1, 8), (2, 6), (3, 6)]);
        assert_eq!(guide.entries[0].plan.issue_number, 1);
    }

    #[test]
    fn missing_file_listing_blocks_analysis() {
        let facts = RepositoryFacts {
            files: None,
            ..facts()
        };
        let err = analyze(&facts, &[RawIssue::new(1, "", "")], &AnalysisConfig::default())
            .unwrap_err();

        assert!(matches!(
            err,
            ProfileError::MissingData { fact: "file listing", .. }
        ));
    }

    #[test]
    fn malformed_issues_do_not_fail_the_batch() {
        let mut malformed = RawIssue::new(9, "No labels", "");
        malformed.labels = None;

        let guide = analyze(
            &facts(),
            &[malformed, RawIssue::new(1, "", "")],
            &AnalysisConfig::default(),
        )
        .unwrap();

        assert_eq!(guide.entries.len(), 2);
        assert_eq!(guide.warnings().count(), 1);
    }
}
