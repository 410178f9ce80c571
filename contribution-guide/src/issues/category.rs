//! Issue categories and the ordered rules that assign them.

use crate::config::{CategoryMatchers, ClassificationConfig};
use crate::heuristics::KeywordSet;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Coarse classification of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Bug,
    FeatureRequest,
    Documentation,
    Question,
    Other,
}

impl Category {
    /// Returns the category tag used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::FeatureRequest => "feature-request",
            Self::Documentation => "documentation",
            Self::Question => "question",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a rule inspects.
#[derive(Debug, Clone)]
enum Matcher {
    /// Exact label names, compared case-insensitively.
    Label(Vec<String>),
    /// Whole-word keywords searched in the title and body, case-insensitively.
    Keyword(KeywordSet),
}

/// One (predicate, category) pair.
#[derive(Debug, Clone)]
struct ClassificationRule {
    matcher: Matcher,
    category: Category,
}

impl ClassificationRule {
    fn matches(&self, labels: &BTreeSet<String>, text: &str) -> bool {
        match &self.matcher {
            Matcher::Label(wanted) => labels.iter().any(|label| {
                wanted
                    .iter()
                    .any(|w| label.trim().eq_ignore_ascii_case(w.trim()))
            }),
            Matcher::Keyword(keywords) => keywords.matches(text),
        }
    }
}

/// Assigns a [`Category`] by walking an ordered rule list; first match wins.
///
/// Every label rule precedes every keyword rule, so an explicit label always
/// beats wording in the text. Label rules run bug, feature-request,
/// documentation, question. Keyword rules run bug, documentation,
/// feature-request, question, so a symptom like "crash" outranks an
/// incidental mention of the docs.
#[derive(Debug, Clone)]
pub struct IssueClassifier {
    rules: Vec<ClassificationRule>,
}

impl IssueClassifier {
    /// Builds the ordered rule list from configuration.
    #[must_use]
    pub fn new(config: &ClassificationConfig) -> Self {
        let label_order: [(&CategoryMatchers, Category); 4] = [
            (&config.bug, Category::Bug),
            (&config.feature_request, Category::FeatureRequest),
            (&config.documentation, Category::Documentation),
            (&config.question, Category::Question),
        ];
        let keyword_order: [(&CategoryMatchers, Category); 4] = [
            (&config.bug, Category::Bug),
            (&config.documentation, Category::Documentation),
            (&config.feature_request, Category::FeatureRequest),
            (&config.question, Category::Question),
        ];

        let label_rules = label_order
            .into_iter()
            .filter(|(matchers, _)| !matchers.labels.is_empty())
            .map(|(matchers, category)| ClassificationRule {
                matcher: Matcher::Label(matchers.labels.clone()),
                category,
            });
        let keyword_rules = keyword_order
            .into_iter()
            .map(|(matchers, category)| (KeywordSet::new(&matchers.keywords), category))
            .filter(|(keywords, _)| !keywords.is_empty())
            .map(|(keywords, category)| ClassificationRule {
                matcher: Matcher::Keyword(keywords),
                category,
            });

        Self {
            rules: label_rules.chain(keyword_rules).collect(),
        }
    }

    /// Classifies an issue from its labels and its title + body text.
    #[must_use]
    pub fn classify(&self, labels: &BTreeSet<String>, text: &str) -> Category {
        self.rules
            .iter()
            .find(|rule| rule.matches(labels, text))
            .map_or(Category::Other, |rule| rule.category)
    }
}

impl Default for IssueClassifier {
    fn default() -> Self {
        Self::new(&ClassificationConfig::default())
    }
}
