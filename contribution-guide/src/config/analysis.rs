//! Tunable analysis settings.
//!
//! Every field has a documented default, so an empty TOML file (or no file at
//! all) yields the stock behavior.

use serde::Deserialize;

/// Number of contributors kept in the repository profile.
pub const DEFAULT_TOP_CONTRIBUTORS: usize = 5;

/// Body length (in characters) above which an issue is considered hard to scope.
pub const DEFAULT_LONG_BODY_THRESHOLD: usize = 4000;

/// Maximum total penalty from hard keywords.
pub const DEFAULT_HARD_KEYWORD_CAP: u32 = 3;

/// Keywords that suggest an issue needs deep knowledge of the project.
pub const DEFAULT_HARD_KEYWORDS: &[&str] = &[
    "architecture",
    "breaking change",
    "performance regression",
    "race condition",
    "deadlock",
    "memory leak",
    "refactor",
    "redesign",
    "security",
];

/// Headings that introduce setup instructions in a README.
pub const DEFAULT_SETUP_HEADINGS: &[&str] = &["install", "setup", "getting started"];

/// Headings that introduce contribution guidelines.
pub const DEFAULT_GUIDELINE_HEADINGS: &[&str] = &["contributing", "how to contribute"];

/// Complete analysis configuration, usually read from `contribution-guide.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AnalysisConfig {
    /// Repository profile settings.
    pub profile: ProfileConfig,

    /// Approachability scoring settings.
    pub scoring: ScoringConfig,

    /// Label and keyword sets used to classify issues.
    pub classification: ClassificationConfig,
}

/// Settings for building the repository profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ProfileConfig {
    /// How many contributors to keep, in input order.
    pub top_contributor_count: usize,

    /// Heading fragments that mark the setup section of the README.
    pub setup_headings: Vec<String>,

    /// Heading fragments that mark contribution guidelines.
    pub guideline_headings: Vec<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            top_contributor_count: DEFAULT_TOP_CONTRIBUTORS,
            setup_headings: to_strings(DEFAULT_SETUP_HEADINGS),
            guideline_headings: to_strings(DEFAULT_GUIDELINE_HEADINGS),
        }
    }
}

/// Settings for the approachability score.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ScoringConfig {
    /// Body length in characters above which the long-body penalty applies.
    pub long_body_threshold: usize,

    /// Maximum number of points the hard-keyword penalty can remove.
    pub hard_keyword_cap: u32,

    /// Keywords counted by the hard-keyword penalty.
    pub hard_keywords: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            long_body_threshold: DEFAULT_LONG_BODY_THRESHOLD,
            hard_keyword_cap: DEFAULT_HARD_KEYWORD_CAP,
            hard_keywords: to_strings(DEFAULT_HARD_KEYWORDS),
        }
    }
}

/// Labels and keywords per category.
///
/// A category table given in the config file replaces that category's
/// defaults field by field; a field left out of the table is empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ClassificationConfig {
    pub bug: CategoryMatchers,
    pub feature_request: CategoryMatchers,
    pub documentation: CategoryMatchers,
    pub question: CategoryMatchers,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            bug: CategoryMatchers::new(
                &["bug", "type: bug", "kind/bug", "defect", "regression"],
                &["bug", "crash", "panic", "exception", "broken", "regression", "stack trace"],
            ),
            feature_request: CategoryMatchers::new(
                &["enhancement", "feature", "feature request", "feature-request", "kind/feature"],
                &["feature request", "enhancement", "would be nice", "proposal", "support for"],
            ),
            documentation: CategoryMatchers::new(
                &["documentation", "docs", "kind/documentation", "type: docs"],
                &["documentation", "docs", "typo", "docstring", "spelling"],
            ),
            question: CategoryMatchers::new(
                &["question", "kind/question", "support"],
                &["question", "how do i", "how to", "is it possible"],
            ),
        }
    }
}

/// Labels (exact, case-insensitive) and keywords (substring) for one category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CategoryMatchers {
    pub labels: Vec<String>,
    pub keywords: Vec<String>,
}

impl CategoryMatchers {
    fn new(labels: &[&str], keywords: &[&str]) -> Self {
        Self {
            labels: to_strings(labels),
            keywords: to_strings(keywords),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
