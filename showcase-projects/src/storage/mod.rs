//! README persistence.
//!
//! Reads and writes the local README, and optionally commits it back to the
//! repository through the GitHub contents API.

mod commit;
mod error;
mod status;

pub use commit::{commit_readme, CommitRequest, DEFAULT_BRANCH};
pub use error::{CommitError, StorageError};
pub use status::CommitStatus;

use std::io::ErrorKind;
use std::path::Path;
use tracing::{error, info, warn};

/// Document used when the README does not exist yet.
pub const DEFAULT_README: &str = "# Welcome to my GitHub Profile! 👋

<!-- SHOWCASE-START -->
<!-- SHOWCASE-END -->

Thanks for visiting my profile!
";

/// Reads the README at `path`.
///
/// A missing file is not an error: [`DEFAULT_README`] is returned instead so
/// the showcase can be spliced into a fresh document.
///
/// # Errors
///
/// Returns [`StorageError::ReadError`] for any failure other than the file
/// not existing.
pub async fn read_readme(path: &Path) -> Result<String, StorageError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            info!(path = %path.display(), "Successfully read README file");
            Ok(content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "README file not found. Creating a new one.");
            Ok(DEFAULT_README.to_string())
        }
        Err(e) => Err(StorageError::ReadError {
            path: path.display().to_string(),
            source: e,
        }),
    }
}

/// Writes `content` to the README at `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`StorageError::WriteError`] if the file cannot be written.
pub async fn write_readme(path: &Path, content: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent).await;
    }

    match tokio::fs::write(path, content).await {
        Ok(()) => {
            info!(path = %path.display(), "Successfully wrote README file");
            Ok(())
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to write README file");
            Err(StorageError::WriteError {
                path: path.display().to_string(),
                source: e,
            })
        }
    }
}

/// Creates `dir` and its parents.
///
/// Failures are logged and otherwise ignored.
pub async fn ensure_directory_exists(dir: &Path) {
    if let Err(e) = tokio::fs::create_dir_all(dir).await {
        info!(path = %dir.display(), error = %e, "Could not create directory, assuming it exists");
    }
}
