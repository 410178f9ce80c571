//! `owner/name` repository identifiers.

use super::SourceError;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// A GitHub repository identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositorySlug {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepositorySlug {
    /// Creates a slug, validating both parts.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidRepository`] if either part is empty or
    /// contains characters GitHub does not allow.
    pub fn new(owner: &str, name: &str) -> Result<Self, SourceError> {
        let input = format!("{owner}/{name}");
        let name = name.strip_suffix(".git").unwrap_or(name);

        for part in [owner, name] {
            if part.is_empty() {
                return Err(invalid(&input, "owner and name must not be empty"));
            }
            if !part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            {
                return Err(invalid(&input, "contains characters GitHub does not allow"));
            }
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Full name in `owner/name` form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    fn from_url(input: &str) -> Result<Self, SourceError> {
        let url = Url::parse(input).map_err(|e| invalid(input, &e.to_string()))?;
        match url.host_str() {
            Some("github.com" | "www.github.com") => {}
            _ => return Err(invalid(input, "not a github.com URL")),
        }

        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|part| !part.is_empty()).collect())
            .unwrap_or_default();
        match segments.as_slice() {
            [owner, name, ..] => Self::new(owner, name),
            _ => Err(invalid(input, "URL does not name a repository")),
        }
    }
}

impl FromStr for RepositorySlug {
    type Err = SourceError;

    /// Parses `owner/name` or a `https://github.com/owner/name[...]` URL.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.contains("://") {
            return Self::from_url(input);
        }

        match input.trim_end_matches('/').split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] => Self::new(owner, name),
            _ => Err(invalid(input, "expected 'owner/name'")),
        }
    }
}

impl fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn invalid(input: &str, reason: &str) -> SourceError {
    SourceError::InvalidRepository {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(input: &str) -> RepositorySlug {
        input.parse().unwrap()
    }

    #[test]
    fn parses_owner_and_name() {
        let parsed = slug("rust-lang/rust");
        assert_eq!(parsed.owner, "rust-lang");
        assert_eq!(parsed.name, "rust");
        assert_eq!(parsed.to_string(), "rust-lang/rust");
    }

    #[test]
    fn parses_github_urls() {
        assert_eq!(slug("https://github.com/tokio-rs/tokio"), slug("tokio-rs/tokio"));
        assert_eq!(slug("https://github.com/tokio-rs/tokio.git"), slug("tokio-rs/tokio"));
        assert_eq!(
            slug("https://www.github.com/tokio-rs/tokio/issues/42"),
            slug("tokio-rs/tokio")
        );
    }

    #[test]
    fn rejects_invalid_input() {
        for input in [
            "",
            "just-a-name",
            "a/b/c",
            "owner/",
            "own er/name",
            "https://gitlab.com/owner/name",
            "https://github.com/owner",
        ] {
            assert!(
                matches!(
                    input.parse::<RepositorySlug>(),
                    Err(SourceError::InvalidRepository { .. })
                ),
                "{input} should be rejected"
            );
        }
    }
}
