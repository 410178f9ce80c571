//! Repository profile error types.

use thiserror::Error;

/// Errors that can occur while building a repository profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// A fact required to build the profile was not supplied.
    #[error("Missing data for repository '{repository}': no {fact}")]
    MissingData {
        /// Repository the facts belong to.
        repository: String,
        /// Name of the missing fact (e.g. "file listing").
        fact: &'static str,
    },
}
