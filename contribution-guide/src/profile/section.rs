//! Optional text sections pulled out of repository documents.

use serde::Serialize;
use std::fmt;

/// Text shown in place of a section that could not be found.
pub const NOT_FOUND: &str = "not found";

/// A section of a repository document, or the "not found" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum SectionText {
    /// The section was found.
    Found(String),

    /// No matching section exists.
    NotFound,
}

impl SectionText {
    /// Wraps an optional section.
    #[must_use]
    pub fn from_option(text: Option<String>) -> Self {
        match text {
            Some(text) if !text.trim().is_empty() => Self::Found(text),
            _ => Self::NotFound,
        }
    }

    /// Returns true if a section was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns the section text, or [`NOT_FOUND`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Found(text) => text,
            Self::NotFound => NOT_FOUND,
        }
    }
}

impl fmt::Display for SectionText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
