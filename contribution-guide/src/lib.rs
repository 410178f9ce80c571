#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod analysis;
pub mod config;
pub mod heuristics;
pub mod issues;
pub mod plan;
pub mod profile;
pub mod rate_limit;
pub mod report;
pub mod runner;
pub mod sources;
pub mod summary;

pub use analysis::{analyze, analyze_issue, ContributionGuide, GuideEntry};
pub use config::{AnalysisConfig, ConfigError};
pub use issues::{
    Category, IssueFilter, IssueScorer, IssueState, IssueWarning, RawIssue, ScoredIssue,
};
pub use plan::{suggest_branch_name, synthesize_plan, ContributionPlan, PlanStep, StepKind};
pub use profile::{build_profile, ProfileError, RepositoryFacts, RepositoryProfile, SectionText};
pub use rate_limit::{check_core_rate_limit, ensure_core_rate_limit, wait_if_needed, RateLimitInfo};
pub use report::{write_report, ReportError, ReportRenderer};
pub use runner::{FactSourceConfig, RunOutput, Runner, RunnerConfig, RunnerError};
pub use sources::{
    GitHubSource, IssueFactSource, RepositoryFactSource, RepositorySlug, Snapshot,
    SnapshotSource, SourceError,
};
pub use summary::{IssueOutcome, RunSummary};
