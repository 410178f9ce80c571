//! Fact source error types.

use thiserror::Error;

/// Errors that can occur while collecting repository or issue facts.
#[derive(Debug, Error)]
pub enum SourceError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The repository identifier could not be parsed.
    #[error("Invalid repository '{input}': {reason}")]
    InvalidRepository { input: String, reason: String },

    /// Failed to read a snapshot file.
    #[error("Failed to read snapshot '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file is not valid JSON.
    #[error("Failed to parse snapshot '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The source could not supply a required fact.
    #[error("Missing data for '{subject}': no {fact}")]
    MissingData { subject: String, fact: &'static str },
}
