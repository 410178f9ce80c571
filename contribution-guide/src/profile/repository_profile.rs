//! The repository profile consumed by the scorer and the report.

use super::section::SectionText;
use serde::Serialize;
use std::collections::BTreeSet;

/// Structured summary of a repository, built once per analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryProfile {
    /// Repository name.
    pub name: String,

    /// Short description, if any.
    pub description: Option<String>,

    /// Language with the most bytes of code.
    pub primary_language: Option<String>,

    /// Most active contributors, most active first.
    pub top_contributors: Vec<String>,

    /// Whether a README was supplied.
    pub has_readme: bool,

    /// Whether a CONTRIBUTING document was supplied.
    pub has_contributing: bool,

    /// Whether any CI configuration was found.
    pub has_ci_config: bool,

    /// Setup instructions from the README.
    pub setup_instructions: SectionText,

    /// Contribution guidelines from the README or CONTRIBUTING.
    pub contribution_guidelines: SectionText,

    /// CI providers inferred from configuration file names.
    pub ci_providers: Vec<String>,

    /// Community health files present in the repository.
    pub community_files: Vec<String>,

    /// Coding conventions inferred from the repository layout.
    pub coding_standards: Vec<String>,

    /// Root dependency manifests, as `name (ecosystem)`.
    pub dependency_files: Vec<String>,

    /// Issue template names under `.github/ISSUE_TEMPLATE/`.
    pub issue_templates: Vec<String>,

    /// Which of `.gitignore`, `README.md` and `LICENSE` exist at the root.
    pub important_files: Vec<String>,

    /// Every file path in the repository.
    #[serde(skip)]
    pub files: BTreeSet<String>,
}

impl RepositoryProfile {
    /// Returns true if `path` is a file in the repository.
    #[must_use]
    pub fn has_file(&self, path: &str) -> bool {
        self.files.contains(path)
    }

    /// Test files that appear to cover `path`.
    ///
    /// A file counts when it lives in a test directory or carries a test
    /// prefix or suffix, and its name without that marker equals the stem of
    /// `path`: `src/render.rs` pairs with `tests/render.rs`,
    /// `tests/test_render.py` or `src/render.test.ts`.
    #[must_use]
    pub fn related_tests(&self, path: &str) -> Vec<String> {
        let Some(subject) = file_stem(path).map(str::to_lowercase) else {
            return Vec::new();
        };

        self.files
            .iter()
            .filter(|candidate| candidate.as_str() != path)
            .filter(|candidate| {
                test_subject(candidate).is_some_and(|tested| tested.to_lowercase() == subject)
            })
            .cloned()
            .collect()
    }
}

const TEST_DIRS: &[&str] = &["test", "tests", "spec", "specs", "__tests__"];
const TEST_PREFIXES: &[&str] = &["test_"];
const TEST_SUFFIXES: &[&str] = &["_test", "_spec", ".test", ".spec", "Test", "Tests"];

/// File name without directories and without the last extension.
fn file_stem(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next()?;
    let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
    (!stem.is_empty()).then_some(stem)
}

/// What a test file tests, or `None` if `path` is not a test file.
fn test_subject(path: &str) -> Option<&str> {
    let stem = file_stem(path)?;

    let marked = TEST_PREFIXES
        .iter()
        .find_map(|prefix| stem.strip_prefix(prefix))
        .or_else(|| TEST_SUFFIXES.iter().find_map(|suffix| stem.strip_suffix(suffix)))
        .filter(|subject| !subject.is_empty());
    if marked.is_some() {
        return marked;
    }

    let in_test_dir = path
        .split('/')
        .rev()
        .skip(1)
        .any(|dir| TEST_DIRS.contains(&dir));
    in_test_dir.then_some(stem)
}
