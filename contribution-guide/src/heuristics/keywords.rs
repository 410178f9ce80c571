//! Case-insensitive keyword counting on word boundaries.

use regex::Regex;

/// Inflections accepted after a keyword that ends in a word character, so
/// `crash` also matches `crashes` and `crashed`.
const INFLECTIONS: &str = "(?:s|es|ed|ing)?";

/// A compiled set of keywords.
///
/// A keyword matches only where it starts a word, and (if it ends in a word
/// character) where it ends one, allowing a short inflection. `bug` matches
/// `bugs` but not `debug`; `docs` does not match inside `vdocsx`.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    patterns: Vec<Regex>,
}

impl KeywordSet {
    /// Compiles `keywords`. Empty keywords are ignored.
    #[must_use]
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        let patterns = keywords
            .iter()
            .map(|keyword| keyword.as_ref().trim())
            .filter(|keyword| !keyword.is_empty())
            .filter_map(|keyword| Regex::new(&keyword_pattern(keyword)).ok())
            .collect();
        Self { patterns }
    }

    /// Counts occurrences of every keyword in `text`.
    ///
    /// Occurrences of a single keyword do not overlap; occurrences of different
    /// keywords are counted independently, so `"breaking change"` and `"change"`
    /// both count for the text `"breaking change"`.
    #[must_use]
    pub fn hits(&self, text: &str) -> usize {
        self.patterns
            .iter()
            .map(|pattern| pattern.find_iter(text).count())
            .sum()
    }

    /// Returns true if at least one keyword occurs in `text`.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(text))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn keyword_pattern(keyword: &str) -> String {
    let starts_word = keyword.chars().next().is_some_and(is_word_char);
    let ends_word = keyword.chars().last().is_some_and(is_word_char);

    let mut pattern = String::from("(?i)");
    if starts_word {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(keyword));
    if ends_word {
        pattern.push_str(INFLECTIONS);
        pattern.push_str(r"\b");
    }
    pattern
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Counts occurrences of every keyword in `text`, ignoring case.
///
/// Compiles the keywords on every call; hold a [`KeywordSet`] when the same
/// keywords are matched against many texts.
#[must_use]
pub fn keyword_hits<S: AsRef<str>>(text: &str, keywords: &[S]) -> usize {
    if text.is_empty() {
        return 0;
    }
    KeywordSet::new(keywords).hits(text)
}

/// Returns true if at least one keyword occurs in `text`, ignoring case.
#[must_use]
pub fn contains_any<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    !text.is_empty() && KeywordSet::new(keywords).matches(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_case_insensitively() {
        let text = "Breaking change ahead. Another BREAKING CHANGE follows.";
        assert_eq!(keyword_hits(text, &["breaking change"]), 2);
    }

    #[test]
    fn sums_across_keywords() {
        let text = "architecture rework with a performance regression";
        let keywords = ["architecture", "performance regression", "rewrite"];
        assert_eq!(keyword_hits(text, &keywords), 2);
    }

    #[test]
    fn empty_inputs_yield_zero() {
        assert_eq!(keyword_hits("", &["bug"]), 0);
        assert_eq!(keyword_hits("a bug", &[] as &[&str]), 0);
        assert_eq!(keyword_hits("a bug", &["", "  "]), 0);
    }

    #[test]
    fn contains_any_matches_inflected_words() {
        assert!(contains_any("The app crashes on start", &["crash"]));
        assert!(contains_any("It panicked twice", &["panic"]));
        assert!(!contains_any("The app starts", &["crash"]));
    }

    #[test]
    fn keywords_do_not_match_inside_words() {
        assert!(!contains_any("Add a --debug flag", &["bug"]));
        assert!(!contains_any("Improve the debugger", &["bug"]));
        assert!(!contains_any("A paradocs entry", &["docs"]));
        assert_eq!(keyword_hits("bugs, debug, bug", &["bug"]), 2);
    }

    #[test]
    fn keywords_with_punctuation_still_match() {
        assert!(contains_any("Does it build with c++?", &["c++"]));
        assert_eq!(keyword_hits("see --verbose and --verbose", &["--verbose"]), 2);
    }

    #[test]
    fn compiled_set_is_reusable() {
        let set = KeywordSet::new(&["refactor", "security"]);
        assert!(!set.is_empty());
        assert_eq!(set.hits("Refactoring touches security code"), 2);
        assert!(KeywordSet::new(&[""]).is_empty());
    }
}
