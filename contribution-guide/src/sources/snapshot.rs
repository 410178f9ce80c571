//! Offline fact source backed by a JSON snapshot file.

use super::{IssueFactSource, RepositoryFactSource, SourceError};
use crate::issues::{IssueFilter, RawIssue};
use crate::profile::RepositoryFacts;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Repository facts and issues captured at one point in time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Repository facts.
    pub repository: RepositoryFacts,

    /// Issues with their comments.
    #[serde(default)]
    pub issues: Vec<RawIssue>,
}

/// Serves repository and issue facts from a [`Snapshot`].
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    snapshot: Snapshot,
}

impl SnapshotSource {
    /// Wraps an in-memory snapshot.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Loads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        debug!(path = %path.display(), "Loading snapshot");

        let content = std::fs::read_to_string(path).map_err(|e| SourceError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(|e| SourceError::JsonError {
                path: path.display().to_string(),
                source: e,
            })?;

        info!(
            path = %path.display(),
            repository = %snapshot.repository.name,
            issues = snapshot.issues.len(),
            "Loaded snapshot"
        );
        Ok(Self::new(snapshot))
    }
}

impl RepositoryFactSource for SnapshotSource {
    async fn repository_facts(&self) -> Result<RepositoryFacts, SourceError> {
        Ok(self.snapshot.repository.clone())
    }
}

impl IssueFactSource for SnapshotSource {
    async fn issues(
        &self,
        _filter: &IssueFilter,
        _limit: usize,
    ) -> Result<Vec<RawIssue>, SourceError> {
        Ok(self.snapshot.issues.clone())
    }

    async fn comments(&self, number: u64) -> Result<Vec<String>, SourceError> {
        self.snapshot
            .issues
            .iter()
            .find(|issue| issue.number == number)
            .map(|issue| issue.comments.clone())
            .ok_or_else(|| SourceError::MissingData {
                subject: format!("issue #{number}"),
                fact: "issue in snapshot",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "repository": {
            "name": "widget",
            "files": ["README.md"],
            "languages": { "Rust": 1200 }
        },
        "issues": [
            { "number": 1, "title": "Typo", "labels": ["documentation"], "comments": ["thanks"] },
            { "number": 2, "title": "No labels" }
        ]
    }"#;

    #[tokio::test]
    async fn loads_snapshot_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, SNAPSHOT).unwrap();

        let source = SnapshotSource::load(&path).unwrap();
        let facts = source.repository_facts().await.unwrap();
        assert_eq!(facts.name, "widget");
        assert_eq!(facts.languages.get("Rust"), Some(&1200));

        let issues = source.issues(&IssueFilter::default(), usize::MAX).await.unwrap();
        assert_eq!(issues.len(), 2);
        assert!(issues[0].has_label("documentation"));
        assert!(issues[1].labels.is_none());
        assert_eq!(issues[1].body, "");

        assert_eq!(source.comments(1).await.unwrap(), vec!["thanks"]);
        assert!(matches!(
            source.comments(99).await,
            Err(SourceError::MissingData { .. })
        ));
    }

    #[test]
    fn invalid_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            SnapshotSource::load(&path),
            Err(SourceError::JsonError { .. })
        ));
    }
}
