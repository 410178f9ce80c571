//! Runner configuration.

use crate::issues::IssueFilter;
use crate::sources::RepositorySlug;
use std::path::{Path, PathBuf};

/// Default number of issues in the guide.
pub const DEFAULT_LIMIT: usize = 10;

/// Default maximum concurrent API requests.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Default output file name.
pub const DEFAULT_OUTPUT_PATH: &str = "CONTRIBUTION_GUIDE.md";

/// Where repository and issue facts are read from.
#[derive(Debug, Clone)]
pub enum FactSourceConfig {
    /// Live GitHub API.
    GitHub {
        repository: RepositorySlug,
        /// Personal access token; unauthenticated requests have a much lower
        /// rate limit.
        token: Option<String>,
    },

    /// JSON snapshot file.
    Snapshot(PathBuf),
}

/// Configuration for one guide generation run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Fact source.
    source: FactSourceConfig,
    /// Where the rendered guide is written.
    output_path: PathBuf,
    /// Optional analysis config file.
    config_path: Option<PathBuf>,
    /// Optional custom Handlebars template.
    template_path: Option<PathBuf>,
    /// Label and keyword pre-filter.
    filter: IssueFilter,
    /// Maximum issues analyzed.
    limit: usize,
    /// Maximum concurrent API requests.
    concurrency: usize,
    /// Whether to print the guide instead of writing it.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a configuration with default output, limit and concurrency.
    #[must_use]
    pub fn new(source: FactSourceConfig) -> Self {
        Self {
            source,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            config_path: None,
            template_path: None,
            filter: IssueFilter::default(),
            limit: DEFAULT_LIMIT,
            concurrency: DEFAULT_CONCURRENCY,
            dry_run: false,
        }
    }

    /// Sets the output path.
    #[must_use]
    pub fn with_output_path(mut self, output_path: PathBuf) -> Self {
        self.output_path = output_path;
        self
    }

    /// Sets the analysis config file.
    #[must_use]
    pub fn with_config_path(mut self, config_path: Option<PathBuf>) -> Self {
        self.config_path = config_path;
        self
    }

    /// Sets a custom template file.
    #[must_use]
    pub fn with_template_path(mut self, template_path: Option<PathBuf>) -> Self {
        self.template_path = template_path;
        self
    }

    /// Sets the issue pre-filter.
    #[must_use]
    pub fn with_filter(mut self, filter: IssueFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the maximum number of analyzed issues.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the maximum concurrent requests. Zero is treated as one.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the fact source.
    pub fn source(&self) -> &FactSourceConfig {
        &self.source
    }

    /// Returns the output path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the analysis config path.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Returns the custom template path.
    pub fn template_path(&self) -> Option<&Path> {
        self.template_path.as_deref()
    }

    /// Returns the issue filter.
    pub fn filter(&self) -> &IssueFilter {
        &self.filter
    }

    /// Returns the issue limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the max concurrent API requests.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
