//! Configuration loading.
//!
//! Analysis settings live in an optional TOML file. Every key is optional and
//! falls back to the defaults in [`analysis`].

mod analysis;
mod error;

pub use analysis::{
    AnalysisConfig, CategoryMatchers, ClassificationConfig, ProfileConfig, ScoringConfig,
    DEFAULT_GUIDELINE_HEADINGS, DEFAULT_HARD_KEYWORDS, DEFAULT_HARD_KEYWORD_CAP,
    DEFAULT_LONG_BODY_THRESHOLD, DEFAULT_SETUP_HEADINGS, DEFAULT_TOP_CONTRIBUTORS,
};
pub use error::ConfigError;

use std::path::Path;
use tracing::{debug, info};

impl AnalysisConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading analysis config");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        config.validate(path)?;
        info!(path = %path.display(), "Loaded analysis config");
        Ok(config)
    }

    /// Loads configuration from `path` if given, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a path is given and loading it fails.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validates configuration values.
    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |message: &str| ConfigError::ValidationError {
            path: path.display().to_string(),
            message: message.to_string(),
        };

        if self.scoring.long_body_threshold == 0 {
            return Err(invalid("scoring.long-body-threshold must be greater than 0"));
        }

        if self
            .scoring
            .hard_keywords
            .iter()
            .any(|keyword| keyword.trim().is_empty())
        {
            return Err(invalid("scoring.hard-keywords cannot contain empty keywords"));
        }

        if self.profile.setup_headings.is_empty() {
            return Err(invalid("profile.setup-headings cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn can_load_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contribution-guide.toml");
        fs::write(
            &path,
            r#"
[scoring]
hard-keywords = ["rewrite"]
hard-keyword-cap = 2
"#,
        )
        .unwrap();

        let config = AnalysisConfig::load(&path).unwrap();

        assert_eq!(config.scoring.hard_keywords, vec!["rewrite"]);
        assert_eq!(config.scoring.hard_keyword_cap, 2);
        assert_eq!(config.scoring.long_body_threshold, DEFAULT_LONG_BODY_THRESHOLD);
    }

    #[test]
    fn load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = AnalysisConfig::load(&temp.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn load_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[scoring\nlong-body-threshold = ").unwrap();

        let result = AnalysisConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn load_rejects_zero_threshold() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("zero.toml");
        fs::write(&path, "[scoring]\nlong-body-threshold = 0\n").unwrap();

        let result = AnalysisConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn load_or_default_without_path() {
        let config = AnalysisConfig::load_or_default(None).unwrap();
        assert_eq!(config.profile.top_contributor_count, DEFAULT_TOP_CONTRIBUTORS);
    }
}
