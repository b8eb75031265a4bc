//! README storage error types.

use thiserror::Error;

/// Errors that can occur while reading or writing the local README.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to read the README.
    #[error("Failed to read README file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the README.
    #[error("Failed to write README file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while committing the README to GitHub.
#[derive(Debug, Error)]
pub enum CommitError {
    /// GitHub API error.
    #[error("Failed to commit changes: {0}")]
    GitHubError(#[from] octocrab::Error),
}
