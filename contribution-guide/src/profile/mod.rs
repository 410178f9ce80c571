//! Repository profile building.
//!
//! Turns raw [`RepositoryFacts`] into a [`RepositoryProfile`]: primary
//! language, top contributors, document presence flags, setup instructions
//! and a handful of layout-derived hints for the guide.

mod error;
mod facts;
mod repository_profile;
mod section;

pub use error::ProfileError;
pub use facts::RepositoryFacts;
pub use repository_profile::RepositoryProfile;
pub use section::{SectionText, NOT_FOUND};

use crate::config::ProfileConfig;
use crate::heuristics::find_section;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// CI configuration paths and the provider each one implies.
const CI_PROVIDERS: &[(&str, &str)] = &[
    (".github/workflows/", "GitHub Actions"),
    (".travis.yml", "Travis CI"),
    (".gitlab-ci.yml", "GitLab CI"),
    ("azure-pipelines.yml", "Azure Pipelines"),
    ("Jenkinsfile", "Jenkins"),
    (".circleci/config.yml", "CircleCI"),
    ("bitbucket-pipelines.yml", "Bitbucket Pipelines"),
];

/// Community health documents GitHub recognizes.
const COMMUNITY_FILES: &[&str] = &[
    "CODE_OF_CONDUCT.md",
    "CONTRIBUTING.md",
    "SECURITY.md",
    "SUPPORT.md",
];

/// Directories GitHub searches for community health documents.
const COMMUNITY_DIRS: &[&str] = &["", ".github/", "docs/"];

/// Root dependency manifests and the ecosystem each one belongs to.
const DEPENDENCY_MANIFESTS: &[(&str, &str)] = &[
    ("Cargo.toml", "Rust"),
    ("requirements.txt", "Python"),
    ("Pipfile", "Python"),
    ("setup.py", "Python"),
    ("pyproject.toml", "Python"),
    ("package.json", "JavaScript"),
    ("Gemfile", "Ruby"),
    ("pom.xml", "Java"),
    ("build.gradle", "Java"),
    ("composer.json", "PHP"),
    ("go.mod", "Go"),
];

/// Root files every repository is expected to carry.
const IMPORTANT_FILES: &[&str] = &[".gitignore", "README.md", "LICENSE"];

/// Where GitHub reads issue forms and templates from.
const ISSUE_TEMPLATE_DIR: &str = ".github/ISSUE_TEMPLATE/";

/// Issue template extensions GitHub understands.
const ISSUE_TEMPLATE_EXTENSIONS: &[&str] = &["md", "yml", "yaml"];

/// Root files that hint at enforced code style.
const STYLE_FILES: &[&str] = &[
    ".editorconfig",
    ".eslintrc.json",
    ".prettierrc",
    ".pylintrc",
    ".rustfmt.toml",
    "clippy.toml",
    "rustfmt.toml",
    "setup.cfg",
    "tox.ini",
];

/// Builds a repository profile from raw facts.
///
/// Missing README, CONTRIBUTING or CI files are not errors: the matching flags
/// are false and setup instructions fall back to [`NOT_FOUND`].
///
/// # Errors
///
/// Returns [`ProfileError::MissingData`] if the repository name or the file
/// listing was not supplied.
pub fn build_profile(
    facts: &RepositoryFacts,
    config: &ProfileConfig,
) -> Result<RepositoryProfile, ProfileError> {
    if facts.name.trim().is_empty() {
        return Err(ProfileError::MissingData {
            repository: "<unnamed>".to_string(),
            fact: "repository name",
        });
    }

    let files = facts.files.as_ref().ok_or_else(|| ProfileError::MissingData {
        repository: facts.name.clone(),
        fact: "file listing",
    })?;
    let files: BTreeSet<String> = files.iter().cloned().collect();

    let setup_instructions = SectionText::from_option(
        facts
            .readme
            .as_deref()
            .and_then(|readme| find_section(readme, &config.setup_headings)),
    );

    let contribution_guidelines = SectionText::from_option(contribution_guidelines(
        facts.readme.as_deref(),
        facts.contributing.as_deref(),
        &config.guideline_headings,
    ));

    let top_contributors: Vec<String> = facts
        .contributors
        .iter()
        .take(config.top_contributor_count)
        .cloned()
        .collect();

    let profile = RepositoryProfile {
        name: facts.name.clone(),
        description: facts.description.clone().filter(|d| !d.trim().is_empty()),
        primary_language: primary_language(&facts.languages),
        top_contributors,
        has_readme: facts.readme.is_some(),
        has_contributing: facts.contributing.is_some(),
        has_ci_config: !facts.ci_config_files.is_empty(),
        setup_instructions,
        contribution_guidelines,
        ci_providers: ci_providers(&facts.ci_config_files),
        community_files: community_files(&files),
        coding_standards: coding_standards(&files),
        dependency_files: dependency_files(&files),
        issue_templates: issue_templates(&files),
        important_files: important_files(&files),
        files,
    };

    debug!(
        repository = %profile.name,
        primary_language = ?profile.primary_language,
        has_setup = profile.setup_instructions.is_found(),
        "Built repository profile"
    );
    info!(repository = %profile.name, files = profile.files.len(), "Repository profiled");

    Ok(profile)
}

/// Returns true if `path` is a CI configuration file.
#[must_use]
pub fn is_ci_config(path: &str) -> bool {
    CI_PROVIDERS
        .iter()
        .any(|(pattern, _)| ci_pattern_matches(pattern, path))
}

/// Picks the language with the most bytes; ties go to the alphabetically first.
fn primary_language(languages: &BTreeMap<String, u64>) -> Option<String> {
    let mut best: Option<(&String, u64)> = None;
    for (language, bytes) in languages {
        if best.map_or(true, |(_, best_bytes)| *bytes > best_bytes) {
            best = Some((language, *bytes));
        }
    }
    best.map(|(language, _)| language.clone())
}

fn contribution_guidelines(
    readme: Option<&str>,
    contributing: Option<&str>,
    headings: &[String],
) -> Option<String> {
    readme
        .and_then(|text| find_section(text, headings))
        .or_else(|| contributing.and_then(|text| find_section(text, headings)))
        .or_else(|| {
            contributing
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        })
}

fn ci_pattern_matches(pattern: &str, path: &str) -> bool {
    if pattern.ends_with('/') {
        path.starts_with(pattern)
    } else {
        path == pattern
    }
}

fn ci_providers(ci_files: &[String]) -> Vec<String> {
    CI_PROVIDERS
        .iter()
        .filter(|(pattern, _)| ci_files.iter().any(|f| ci_pattern_matches(pattern, f)))
        .map(|(_, provider)| (*provider).to_string())
        .collect()
}

fn community_files(files: &BTreeSet<String>) -> Vec<String> {
    COMMUNITY_FILES
        .iter()
        .filter(|name| {
            COMMUNITY_DIRS
                .iter()
                .any(|dir| files.contains(&format!("{dir}{name}")))
        })
        .map(|name| (*name).to_string())
        .collect()
}

fn coding_standards(files: &BTreeSet<String>) -> Vec<String> {
    let mut standards: Vec<String> = STYLE_FILES
        .iter()
        .filter(|name| files.contains(**name))
        .map(|name| format!("Possible use of {name} for code style"))
        .collect();

    let top_dirs: BTreeSet<&str> = files
        .iter()
        .filter_map(|path| path.split_once('/').map(|(dir, _)| dir))
        .collect();

    if top_dirs.contains("tests") {
        standards.push("A 'tests' directory suggests unit testing is used".to_string());
    }
    if top_dirs.contains("docs") {
        standards.push("A 'docs' directory suggests documentation is maintained".to_string());
    }

    standards
}

fn dependency_files(files: &BTreeSet<String>) -> Vec<String> {
    DEPENDENCY_MANIFESTS
        .iter()
        .filter(|(name, _)| files.contains(*name))
        .map(|(name, ecosystem)| format!("{name} ({ecosystem})"))
        .collect()
}

/// Template names (file stems) under `.github/ISSUE_TEMPLATE/`. The chooser
/// config `config.yml` is not a template.
fn issue_templates(files: &BTreeSet<String>) -> Vec<String> {
    files
        .iter()
        .filter_map(|path| path.strip_prefix(ISSUE_TEMPLATE_DIR))
        .filter(|name| !name.contains('/'))
        .filter_map(|name| name.rsplit_once('.'))
        .filter(|(stem, extension)| {
            !stem.is_empty()
                && *stem != "config"
                && ISSUE_TEMPLATE_EXTENSIONS.contains(&extension.to_lowercase().as_str())
        })
        .map(|(stem, _)| stem.to_string())
        .collect()
}

/// Important root files, matching `LICENSE` with or without an extension.
fn important_files(files: &BTreeSet<String>) -> Vec<String> {
    IMPORTANT_FILES
        .iter()
        .filter_map(|wanted| {
            files
                .iter()
                .filter(|path| !path.contains('/'))
                .find(|path| {
                    *path == wanted
                        || path
                            .split_once('.')
                            .is_some_and(|(stem, _)| !wanted.contains('.') && stem == *wanted)
                })
        })
        .cloned()
        .collect()
}
