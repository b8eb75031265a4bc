//! Repository fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching repositories.
#[derive(Debug, Error)]
pub enum FetchError {
    /// GitHub API error.
    #[error("Failed to fetch repositories: {0}")]
    GitHubError(#[from] octocrab::Error),
}
