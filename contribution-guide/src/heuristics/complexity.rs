//! Rough complexity signals for issue text and code snippets.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BRANCH_RE: Result<Regex, regex::Error> =
        Regex::new(r"\b(?:if|elif|for|while|match|case|catch|except|and|or)\b|&&|\|\|");
}

/// Estimates the cyclomatic complexity of a code snippet.
///
/// Starts at 1 and adds one per branching keyword or boolean operator. This
/// is language-agnostic and only meant to rank snippets against each other.
#[must_use]
pub fn estimate_complexity(snippet: &str) -> u32 {
    let branches = match BRANCH_RE.as_ref() {
        Ok(re) => re.find_iter(snippet).count(),
        Err(_) => 0,
    };
    1 + u32::try_from(branches).unwrap_or(u32::MAX - 1)
}

/// Returns true if `text` is longer than `threshold` characters.
#[must_use]
pub fn exceeds_length(text: &str, threshold: usize) -> bool {
    text.chars().count() > threshold
}
