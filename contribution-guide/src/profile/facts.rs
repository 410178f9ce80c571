//! Raw repository facts supplied by a fact source.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the profile builder needs to know about a repository.
///
/// `None` means the source could not supply the fact at all, which is
/// different from an empty value (e.g. a repository with no files).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RepositoryFacts {
    /// Repository name.
    pub name: String,

    /// Short description, if the repository has one.
    #[serde(default)]
    pub description: Option<String>,

    /// Paths of every file in the default branch.
    #[serde(default)]
    pub files: Option<Vec<String>>,

    /// Bytes of code per language.
    #[serde(default)]
    pub languages: BTreeMap<String, u64>,

    /// Raw README content, if present.
    #[serde(default)]
    pub readme: Option<String>,

    /// Raw CONTRIBUTING content, if present.
    #[serde(default)]
    pub contributing: Option<String>,

    /// Paths of CI configuration files.
    #[serde(default)]
    pub ci_config_files: Vec<String>,

    /// Contributor logins, most active first.
    #[serde(default)]
    pub contributors: Vec<String>,
}
