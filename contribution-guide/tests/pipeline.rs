//! End-to-end runs over snapshot and in-memory fact sources.

use contribution_guide::{
    analyze, AnalysisConfig, Category, FactSourceConfig, IssueFactSource, IssueFilter, RawIssue,
    RepositoryFactSource, RepositoryFacts, RunOutput, Runner, RunnerConfig, RunnerError,
    SnapshotSource, SourceError, StepKind,
};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Source that lists issues one per page and whose comment lookups fail for
/// selected issues.
struct FlakySource {
    facts: RepositoryFacts,
    issues: Vec<RawIssue>,
    failing: Vec<u64>,
}

impl RepositoryFactSource for FlakySource {
    async fn repository_facts(&self) -> Result<RepositoryFacts, SourceError> {
        Ok(self.facts.clone())
    }
}

impl IssueFactSource for FlakySource {
    async fn issues(
        &self,
        filter: &IssueFilter,
        limit: usize,
    ) -> Result<Vec<RawIssue>, SourceError> {
        let mut listed = Vec::new();
        for issue in &self.issues {
            if filter.count_candidates(&listed) >= limit {
                break;
            }
            listed.push(issue.clone());
        }
        Ok(listed)
    }

    async fn comments(&self, number: u64) -> Result<Vec<String>, SourceError> {
        if self.failing.contains(&number) {
            return Err(SourceError::MissingData {
                subject: format!("issue #{number}"),
                fact: "comments",
            });
        }
        Ok(vec![format!("comment on #{number}")])
    }
}

#[tokio::test]
async fn snapshot_run_writes_ranked_guide() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("GUIDE.md");
    let config = RunnerConfig::new(FactSourceConfig::Snapshot(fixture("snapshot.json")))
        .with_output_path(output.clone());

    let RunOutput {
        summary,
        guide,
        rendered,
    } = Runner::new(config).unwrap().run().await.unwrap();

    assert_eq!(summary.repository, "widget");
    assert_eq!(summary.issues_fetched, 5);
    assert_eq!(summary.issues_analyzed, 4);
    assert_eq!(summary.issues_skipped, 1);
    assert_eq!(summary.warnings, 1);
    assert_eq!(summary.output_path.as_deref(), Some(output.as_path()));

    let ranked: Vec<(u64, u8)> = guide
        .entries
        .iter()
        .map(|e| (e.issue.number(), e.issue.score))
        .collect();
    assert_eq!(ranked, vec![(12, 10), (7, 8), (41, 6), (31, 4)]);
    assert_eq!(summary.top_score, Some(10));

    let profile = &guide.profile;
    assert_eq!(profile.primary_language.as_deref(), Some("Rust"));
    assert_eq!(profile.top_contributors.len(), 5);
    assert_eq!(profile.ci_providers, vec!["GitHub Actions"]);
    assert!(profile.setup_instructions.as_str().contains("cargo build"));
    assert!(profile.contribution_guidelines.is_found());

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, rendered);
    assert!(written.starts_with("# Contributing to widget"));
    assert!(written.contains("### 1. #12: Typo in docs/intro.md"));
    assert!(written.contains("git checkout -b issue-12-typo-in-docs-intro-md"));
    assert!(written.contains("Issue #41 is malformed"));
}

#[tokio::test]
async fn snapshot_run_honors_config_filter_and_limit() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunnerConfig::new(FactSourceConfig::Snapshot(fixture("snapshot.json")))
        .with_output_path(dir.path().join("GUIDE.md"))
        .with_config_path(Some(fixture("config.toml")))
        .with_filter(IssueFilter::new(vec!["bug".to_string()], Vec::new()))
        .with_limit(1);

    let RunOutput { summary, guide, .. } = Runner::new(config).unwrap().run().await.unwrap();

    assert_eq!(guide.profile.top_contributors, vec!["alice", "bob", "carol"]);
    assert_eq!(summary.issues_analyzed, 1);
    assert_eq!(summary.issues_skipped, 4);

    let entry = &guide.entries[0];
    assert_eq!(entry.issue.number(), 7);
    assert_eq!(entry.issue.category, Category::Bug);
    assert!(entry.plan.step(StepKind::ReproduceBug).is_some());
    assert!(entry.plan.step(StepKind::ExamineFiles).is_some());
}

#[tokio::test]
async fn comment_failures_are_recorded_not_fatal() {
    let snapshot = SnapshotSource::load(&fixture("snapshot.json")).unwrap();
    let source = FlakySource {
        facts: snapshot.repository_facts().await.unwrap(),
        issues: snapshot
            .issues(&IssueFilter::default(), usize::MAX)
            .await
            .unwrap(),
        failing: vec![7],
    };

    let dir = tempfile::tempdir().unwrap();
    let config = RunnerConfig::new(FactSourceConfig::Snapshot(fixture("snapshot.json")))
        .with_output_path(dir.path().join("GUIDE.md"))
        .with_concurrency(2);
    let runner = Runner::new(config).unwrap();

    let RunOutput { summary, guide, .. } = runner.run_with(&source).await.unwrap();

    assert_eq!(summary.issues_failed, 1);
    assert_eq!(summary.issues_analyzed, 3);
    assert!(summary.has_failures());
    assert!(guide.entries.iter().all(|e| e.issue.number() != 7));
    assert!(guide
        .entries
        .iter()
        .all(|e| e.issue.issue.comments == vec![format!("comment on #{}", e.issue.number())]));
}

#[tokio::test]
async fn listing_stops_once_limit_is_reached() {
    let snapshot = SnapshotSource::load(&fixture("snapshot.json")).unwrap();
    let source = FlakySource {
        facts: snapshot.repository_facts().await.unwrap(),
        issues: snapshot
            .issues(&IssueFilter::default(), usize::MAX)
            .await
            .unwrap(),
        failing: Vec::new(),
    };

    let dir = tempfile::tempdir().unwrap();
    let config = RunnerConfig::new(FactSourceConfig::Snapshot(fixture("snapshot.json")))
        .with_output_path(dir.path().join("GUIDE.md"))
        .with_filter(IssueFilter::new(vec!["bug".to_string()], Vec::new()))
        .with_limit(1);

    let RunOutput { summary, guide, .. } =
        Runner::new(config).unwrap().run_with(&source).await.unwrap();

    // #12 is filtered out, #7 fills the limit; nothing after it is listed.
    assert_eq!(summary.issues_fetched, 2);
    assert_eq!(summary.issues_analyzed, 1);
    assert_eq!(summary.issues_skipped, 1);
    assert_eq!(guide.entries[0].issue.number(), 7);
}

#[tokio::test]
async fn dry_run_returns_guide_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("GUIDE.md");
    let config = RunnerConfig::new(FactSourceConfig::Snapshot(fixture("snapshot.json")))
        .with_output_path(output.clone())
        .with_dry_run(true);

    let RunOutput {
        summary, rendered, ..
    } = Runner::new(config).unwrap().run().await.unwrap();

    assert!(summary.dry_run);
    assert_eq!(summary.output_path, None);
    assert!(rendered.starts_with("# Contributing to widget"));
    assert!(!output.exists());
}

#[tokio::test]
async fn missing_file_listing_is_critical() {
    let source = FlakySource {
        facts: RepositoryFacts {
            name: "widget".to_string(),
            ..RepositoryFacts::default()
        },
        issues: vec![RawIssue::new(1, "Anything", "")],
        failing: Vec::new(),
    };

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("GUIDE.md");
    let config = RunnerConfig::new(FactSourceConfig::Snapshot(fixture("snapshot.json")))
        .with_output_path(output.clone());

    let result = Runner::new(config).unwrap().run_with(&source).await;

    assert!(matches!(result, Err(RunnerError::Profile(_))));
    assert!(!output.exists());
}

#[tokio::test]
async fn analysis_is_deterministic_across_runs() {
    let snapshot = SnapshotSource::load(&fixture("snapshot.json")).unwrap();
    let facts = snapshot.repository_facts().await.unwrap();
    let issues = snapshot
        .issues(&IssueFilter::default(), usize::MAX)
        .await
        .unwrap();
    let config = AnalysisConfig::default();

    let first = analyze(&facts, &issues, &config).unwrap();
    let second = analyze(&facts, &issues, &config).unwrap();

    assert_eq!(first.entries, second.entries);
    for entry in &first.entries {
        assert!(entry.issue.score <= 10);
    }
}
