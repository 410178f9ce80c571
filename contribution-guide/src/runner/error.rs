//! Runner error types.

/// Errors that stop a run before a guide can be produced.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Analysis configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Repository or issue facts could not be collected.
    #[error(transparent)]
    Source(#[from] crate::sources::SourceError),

    /// The repository profile could not be built.
    #[error(transparent)]
    Profile(#[from] crate::profile::ProfileError),

    /// The guide could not be rendered or written.
    #[error(transparent)]
    Report(#[from] crate::report::ReportError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}
