//! Label and keyword pre-filter applied before scoring.

use super::RawIssue;
use crate::heuristics::KeywordSet;

/// Selects which issues enter the analysis.
///
/// An issue passes when it carries every requested label and, if keywords
/// were given, mentions at least one of them in its title or body.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    labels: Vec<String>,
    keywords: Vec<String>,
    keyword_set: KeywordSet,
}

impl IssueFilter {
    /// Creates a filter, dropping blank entries.
    #[must_use]
    pub fn new(labels: Vec<String>, keywords: Vec<String>) -> Self {
        let clean = |values: Vec<String>| -> Vec<String> {
            values
                .into_iter()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect()
        };

        let keywords = clean(keywords);
        Self {
            labels: clean(labels),
            keyword_set: KeywordSet::new(&keywords),
            keywords,
        }
    }

    /// Requested labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Requested keywords.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns true if the filter accepts every issue.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.keywords.is_empty()
    }

    /// Returns true if `issue` passes the filter.
    #[must_use]
    pub fn matches(&self, issue: &RawIssue) -> bool {
        let labels_match = self.labels.iter().all(|label| issue.has_label(label));
        let keywords_match =
            self.keywords.is_empty() || self.keyword_set.matches(&issue.title_and_body());
        labels_match && keywords_match
    }

    /// Counts the open issues in `issues` that pass the filter.
    ///
    /// Sources use this to stop paging once enough candidates were listed.
    #[must_use]
    pub fn count_candidates(&self, issues: &[RawIssue]) -> usize {
        issues
            .iter()
            .filter(|issue| issue.is_open() && self.matches(issue))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::IssueState;

    fn issue() -> RawIssue {
        RawIssue::new(7, "Crash when parsing YAML", "The parser panics on tabs.")
            .with_label("bug")
            .with_label("help wanted")
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = IssueFilter::new(vec![" ".into()], vec![]);
        assert!(filter.is_empty());
        assert!(filter.matches(&issue()));
    }

    #[test]
    fn requires_every_label() {
        let filter = IssueFilter::new(vec!["Bug".into(), "help wanted".into()], vec![]);
        assert!(filter.matches(&issue()));
        assert!(!IssueFilter::new(vec!["bug".into(), "docs".into()], vec![]).matches(&issue()));
    }

    #[test]
    fn requires_any_keyword() {
        assert!(IssueFilter::new(vec![], vec!["toml".into(), "yaml".into()]).matches(&issue()));
        assert!(!IssueFilter::new(vec![], vec!["json".into()]).matches(&issue()));
    }

    #[test]
    fn counts_only_open_matching_candidates() {
        let mut closed = issue();
        closed.state = IssueState::Closed;
        let issues = vec![
            issue(),
            closed,
            RawIssue::new(8, "Docs", "").with_label("documentation"),
            RawIssue::new(9, "Crash on exit", "").with_label("bug"),
        ];

        let filter = IssueFilter::new(vec!["bug".into()], vec![]);
        assert_eq!(filter.count_candidates(&issues), 2);
        assert_eq!(IssueFilter::default().count_candidates(&issues), 3);
    }
}
