//! Raw issue data as supplied by an issue source.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Open/closed state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    /// Issue is open.
    #[default]
    Open,

    /// Issue is closed.
    Closed,
}

/// One issue with its comments, before any analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawIssue {
    /// Issue number, unique per repository.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Issue body; empty if the author left it blank.
    #[serde(default)]
    pub body: String,

    /// Label names. `None` means the source could not supply labels, which
    /// marks the issue as malformed.
    #[serde(default)]
    pub labels: Option<BTreeSet<String>>,

    /// Comment bodies in posting order.
    #[serde(default)]
    pub comments: Vec<String>,

    /// Issue state.
    #[serde(default)]
    pub state: IssueState,
}

impl RawIssue {
    /// Creates an open issue with an empty label set and no comments.
    #[must_use]
    pub fn new(number: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            body: body.into(),
            labels: Some(BTreeSet::new()),
            comments: Vec::new(),
            state: IssueState::Open,
        }
    }

    /// Adds a label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels
            .get_or_insert_with(BTreeSet::new)
            .insert(label.into());
        self
    }

    /// Appends a comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    /// Returns true if the issue is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == IssueState::Open
    }

    /// Returns true if the issue carries `label` (case-insensitive).
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.as_ref().is_some_and(|labels| {
            labels
                .iter()
                .any(|l| l.trim().eq_ignore_ascii_case(label.trim()))
        })
    }

    /// Returns the title and body joined, the text used for classification.
    #[must_use]
    pub fn title_and_body(&self) -> String {
        format!("{}\n{}", self.title, self.body)
    }
}
