//! Fact source backed by the GitHub REST API.

use super::{IssueFactSource, RepositoryFactSource, RepositorySlug, SourceError};
use crate::issues::{IssueFilter, IssueState, RawIssue};
use crate::profile::{is_ci_config, RepositoryFacts};
use crate::rate_limit::ensure_core_rate_limit;
use octocrab::models::issues::{Comment, Issue};
use octocrab::{params, Octocrab, Page};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, info_span, warn, Instrument};

/// Results per page for list endpoints.
const RESULTS_PER_PAGE: u8 = 100;

/// Maximum number of issues fetched from one repository.
const MAX_ISSUES: usize = 1000;

/// Where GitHub looks for a CONTRIBUTING document, in priority order.
const CONTRIBUTING_PATHS: &[&str] = &[
    "CONTRIBUTING.md",
    ".github/CONTRIBUTING.md",
    "docs/CONTRIBUTING.md",
    "CONTRIBUTING.rst",
    "CONTRIBUTING",
];

/// Response of `GET /repos/{owner}/{repo}/git/trees/{sha}?recursive=1`.
#[derive(Debug, Deserialize)]
struct GitTree {
    tree: Vec<TreeEntry>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Debug, Deserialize)]
struct TreeEntry {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct Contributor {
    login: Option<String>,
}

#[derive(Serialize)]
struct PerPage {
    per_page: usize,
}

#[derive(Serialize)]
struct Recursive {
    recursive: u8,
}

/// Collects repository and issue facts from GitHub.
#[derive(Debug, Clone)]
pub struct GitHubSource {
    octocrab: Octocrab,
    repository: RepositorySlug,
    contributor_count: usize,
}

impl GitHubSource {
    /// Creates a source for `repository`.
    ///
    /// `contributor_count` is how many top contributors to request.
    #[must_use]
    pub fn new(octocrab: Octocrab, repository: RepositorySlug, contributor_count: usize) -> Self {
        Self {
            octocrab,
            repository,
            contributor_count,
        }
    }

    /// Repository this source reads from.
    #[must_use]
    pub fn repository(&self) -> &RepositorySlug {
        &self.repository
    }

    fn route(&self, suffix: &str) -> String {
        format!(
            "/repos/{}/{}/{suffix}",
            self.repository.owner, self.repository.name
        )
    }

    async fn languages(&self) -> Result<BTreeMap<String, u64>, SourceError> {
        ensure_core_rate_limit(&self.octocrab).await?;
        Ok(self
            .octocrab
            .get::<BTreeMap<String, u64>, _, _>(self.route("languages"), None::<&()>)
            .await?)
    }

    /// Lists every blob path on `branch`. Returns `None` if the tree is
    /// unavailable, e.g. for an empty repository.
    async fn file_listing(&self, branch: &str) -> Result<Option<Vec<String>>, SourceError> {
        ensure_core_rate_limit(&self.octocrab).await?;
        let tree = match self
            .octocrab
            .get::<GitTree, _, _>(
                self.route(&format!("git/trees/{branch}")),
                Some(&Recursive { recursive: 1 }),
            )
            .await
        {
            Ok(tree) => tree,
            Err(e) if is_absent(&e) => {
                warn!(repo = %self.repository, branch, "File tree unavailable");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if tree.truncated {
            warn!(repo = %self.repository, "File tree truncated by GitHub");
        }

        Ok(Some(
            tree.tree
                .into_iter()
                .filter(|entry| entry.kind == "blob")
                .map(|entry| entry.path)
                .collect(),
        ))
    }

    async fn readme(&self) -> Result<Option<String>, SourceError> {
        ensure_core_rate_limit(&self.octocrab).await?;
        match self
            .octocrab
            .repos(&self.repository.owner, &self.repository.name)
            .get_readme()
            .send()
            .await
        {
            Ok(content) => Ok(content.decoded_content()),
            Err(e) if is_absent(&e) => {
                debug!(repo = %self.repository, "No README");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Fetches the first CONTRIBUTING document present in `files`.
    async fn contributing(&self, files: &BTreeSet<&str>) -> Result<Option<String>, SourceError> {
        let Some(path) = CONTRIBUTING_PATHS.iter().find(|p| files.contains(**p)) else {
            debug!(repo = %self.repository, "No CONTRIBUTING document");
            return Ok(None);
        };

        ensure_core_rate_limit(&self.octocrab).await?;
        let items = self
            .octocrab
            .repos(&self.repository.owner, &self.repository.name)
            .get_content()
            .path(*path)
            .send()
            .await?;
        Ok(items.items.first().and_then(|item| item.decoded_content()))
    }

    async fn contributors(&self) -> Result<Vec<String>, SourceError> {
        ensure_core_rate_limit(&self.octocrab).await?;
        let contributors = match self
            .octocrab
            .get::<Vec<Contributor>, _, _>(
                self.route("contributors"),
                Some(&PerPage {
                    per_page: self.contributor_count.max(1),
                }),
            )
            .await
        {
            Ok(contributors) => contributors,
            Err(e) if is_absent(&e) => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(contributors
            .into_iter()
            .filter_map(|c| c.login)
            .take(self.contributor_count)
            .collect())
    }
}

impl RepositoryFactSource for GitHubSource {
    async fn repository_facts(&self) -> Result<RepositoryFacts, SourceError> {
        let span = info_span!("repository_facts", repo = %self.repository);

        async {
            info!("Collecting repository facts");
            ensure_core_rate_limit(&self.octocrab).await?;
            let repo = self
                .octocrab
                .repos(&self.repository.owner, &self.repository.name)
                .get()
                .await?;
            let branch = repo.default_branch.unwrap_or_else(|| "main".to_string());

            let files = self.file_listing(&branch).await?;
            let (contributing, ci_config_files) = match &files {
                Some(files) => {
                    let paths: BTreeSet<&str> = files.iter().map(String::as_str).collect();
                    let ci_config_files = files
                        .iter()
                        .filter(|path| is_ci_config(path))
                        .cloned()
                        .collect();
                    (self.contributing(&paths).await?, ci_config_files)
                }
                None => (None, Vec::new()),
            };

            let facts = RepositoryFacts {
                name: repo.name,
                description: repo.description,
                languages: self.languages().await?,
                readme: self.readme().await?,
                contributing,
                ci_config_files,
                contributors: self.contributors().await?,
                files,
            };

            info!(
                files = facts.files.as_ref().map_or(0, Vec::len),
                languages = facts.languages.len(),
                "Collected repository facts"
            );
            Ok(facts)
        }
        .instrument(span)
        .await
    }
}

impl IssueFactSource for GitHubSource {
    async fn issues(
        &self,
        filter: &IssueFilter,
        limit: usize,
    ) -> Result<Vec<RawIssue>, SourceError> {
        let span = info_span!("issues", repo = %self.repository, limit);
        let labels = filter.labels();

        async {
            ensure_core_rate_limit(&self.octocrab).await?;
            let handler = self
                .octocrab
                .issues(&self.repository.owner, &self.repository.name);
            let mut request = handler
                .list()
                .state(params::State::Open)
                .per_page(RESULTS_PER_PAGE);
            if !labels.is_empty() {
                request = request.labels(labels);
            }
            let mut page: Page<Issue> = request.send().await?;

            let mut issues = Vec::new();
            loop {
                issues.extend(
                    page.items
                        .drain(..)
                        .filter(|issue| issue.pull_request.is_none())
                        .map(raw_issue),
                );

                if filter.count_candidates(&issues) >= limit {
                    debug!(count = issues.len(), "Listed enough candidate issues");
                    break;
                }
                if issues.len() >= MAX_ISSUES {
                    warn!(max = MAX_ISSUES, "Reached maximum issue limit");
                    issues.truncate(MAX_ISSUES);
                    break;
                }

                ensure_core_rate_limit(&self.octocrab).await?;
                match self.octocrab.get_page::<Issue>(&page.next).await? {
                    Some(next_page) => page = next_page,
                    None => break,
                }
            }

            info!(count = issues.len(), "Fetched open issues");
            Ok(issues)
        }
        .instrument(span)
        .await
    }

    async fn comments(&self, number: u64) -> Result<Vec<String>, SourceError> {
        ensure_core_rate_limit(&self.octocrab).await?;
        let mut page: Page<Comment> = self
            .octocrab
            .issues(&self.repository.owner, &self.repository.name)
            .list_comments(number)
            .per_page(RESULTS_PER_PAGE)
            .send()
            .await?;

        let mut comments = Vec::new();
        loop {
            comments.extend(page.items.drain(..).filter_map(|comment| comment.body));
            if page.next.is_none() {
                break;
            }

            ensure_core_rate_limit(&self.octocrab).await?;
            match self.octocrab.get_page::<Comment>(&page.next).await? {
                Some(next_page) => page = next_page,
                None => break,
            }
        }

        debug!(
            repo = %self.repository,
            issue = number,
            count = comments.len(),
            "Fetched comments"
        );
        Ok(comments)
    }
}

/// Converts an API issue. Comments are fetched separately.
fn raw_issue(issue: Issue) -> RawIssue {
    let state = match issue.state {
        octocrab::models::IssueState::Closed => IssueState::Closed,
        _ => IssueState::Open,
    };

    RawIssue {
        number: issue.number,
        title: issue.title,
        body: issue.body.unwrap_or_default(),
        labels: Some(issue.labels.into_iter().map(|label| label.name).collect()),
        comments: Vec::new(),
        state,
    }
}

/// Returns true if GitHub reported the resource as missing or empty.
fn is_absent(error: &octocrab::Error) -> bool {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            matches!(source.status_code.as_u16(), 404 | 409)
        }
        _ => false,
    }
}
