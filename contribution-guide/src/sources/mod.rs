//! Where repository and issue facts come from.
//!
//! The analysis itself never performs I/O; it consumes facts through the
//! [`RepositoryFactSource`] and [`IssueFactSource`] traits. Two
//! implementations are provided: [`GitHubSource`] talks to the GitHub API and
//! [`SnapshotSource`] replays a JSON file for offline runs.

mod error;
mod github;
mod repository_slug;
mod snapshot;

pub use error::SourceError;
pub use github::GitHubSource;
pub use repository_slug::RepositorySlug;
pub use snapshot::{Snapshot, SnapshotSource};

use crate::issues::{IssueFilter, RawIssue};
use crate::profile::RepositoryFacts;
use std::future::Future;

/// Supplies the raw facts a repository profile is built from.
pub trait RepositoryFactSource {
    /// Collects facts about the repository.
    fn repository_facts(
        &self,
    ) -> impl Future<Output = Result<RepositoryFacts, SourceError>> + Send;
}

/// Supplies issues and their comments.
pub trait IssueFactSource {
    /// Lists issues without their comments.
    ///
    /// A source may narrow the listing by the labels in `filter` and may stop
    /// once it holds `limit` open issues that pass `filter`. Callers still
    /// apply the filter and the limit to the returned list.
    fn issues(
        &self,
        filter: &IssueFilter,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<RawIssue>, SourceError>> + Send;

    /// Fetches the comment bodies of one issue, in posting order.
    fn comments(
        &self,
        number: u64,
    ) -> impl Future<Output = Result<Vec<String>, SourceError>> + Send;
}
