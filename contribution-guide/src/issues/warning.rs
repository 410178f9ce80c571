//! Non-fatal problems found while analyzing a single issue.

use serde::Serialize;
use thiserror::Error;

/// A problem that degraded the analysis of one issue without stopping the run.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueWarning {
    /// The issue lacked structure the classifier relies on; defaults were used.
    #[error("Issue #{number} is malformed ({reason}); scored with defaults")]
    MalformedIssue { number: u64, reason: String },
}
