//! Committing the README through the GitHub contents API.

use super::{CommitError, CommitStatus};
use octocrab::models::repos::Content;
use octocrab::Octocrab;
use tracing::{debug, error, info, info_span, Instrument};

/// Branch committed to when none is configured.
pub const DEFAULT_BRANCH: &str = "main";

/// A README commit to perform.
#[derive(Debug, Clone)]
pub struct CommitRequest {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Path of the file inside the repository.
    pub path: String,

    /// New file contents.
    pub content: String,

    /// Commit message.
    pub message: String,

    /// Branch to commit to.
    pub branch: String,
}

impl CommitRequest {
    /// Creates a request targeting [`DEFAULT_BRANCH`].
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            path: path.into(),
            content: content.into(),
            message: message.into(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }

    /// Sets the branch to commit to.
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }
}

/// Commits the README to the repository.
///
/// This function:
/// 1. Looks up the current file on the branch to obtain its SHA
/// 2. Creates the file, or updates it using that SHA as the concurrency token
///
/// A missing file is not an error; it is simply created.
///
/// # Errors
///
/// Returns [`CommitError`] if either API call fails. Nothing is retried.
pub async fn commit_readme(
    octocrab: &Octocrab,
    request: &CommitRequest,
) -> Result<CommitStatus, CommitError> {
    let span = info_span!(
        "commit_readme",
        repo = %format!("{}/{}", request.owner, request.repo),
        path = %request.path,
        branch = %request.branch
    );

    async {
        let repos = octocrab.repos(&request.owner, &request.repo);

        let existing_sha = match repos
            .get_content()
            .path(&request.path)
            .r#ref(&request.branch)
            .send()
            .await
        {
            Ok(contents) => file_sha(&contents.items),
            Err(e) if is_not_found(&e) => {
                info!("README file does not exist in repository. Creating new file.");
                None
            }
            Err(e) => {
                error!(error = %e, "Failed to look up current README");
                return Err(CommitError::from(e));
            }
        };
        debug!(sha = ?existing_sha, "Resolved current README");

        // The contents API base64-encodes the body for us.
        let sent = match &existing_sha {
            Some(sha) => repos
                .update_file(&request.path, &request.message, &request.content, sha)
                .branch(&request.branch)
                .send()
                .await
                .map(drop),
            None => repos
                .create_file(&request.path, &request.message, &request.content)
                .branch(&request.branch)
                .send()
                .await
                .map(drop),
        };

        if let Err(e) = sent {
            error!(error = %e, "Failed to commit changes");
            return Err(CommitError::from(e));
        }

        info!("Successfully committed changes");
        Ok(match existing_sha {
            Some(previous_sha) => CommitStatus::Updated { previous_sha },
            None => CommitStatus::Created,
        })
    }
    .instrument(span)
    .await
}

/// Returns the SHA if the lookup resolved to a single file.
///
/// Directory listings and non-file entries yield no SHA.
fn file_sha(items: &[Content]) -> Option<String> {
    match items {
        [item] if item.r#type == "file" => Some(item.sha.clone()),
        _ => None,
    }
}

/// Checks if an error is a GitHub 404 response.
fn is_not_found(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_request_defaults_to_main() {
        let request = CommitRequest::new("octo", "profile", "README.md", "body", "Update");
        assert_eq!(request.branch, "main");
        assert_eq!(request.owner, "octo");
        assert_eq!(request.path, "README.md");

        let request = request.with_branch("trunk");
        assert_eq!(request.branch, "trunk");
    }

    #[test]
    fn no_sha_without_entries() {
        assert_eq!(file_sha(&[]), None);
    }

    fn content_entry(path: &str, kind: &str) -> Content {
        serde_json::from_value(serde_json::json!({
            "type": kind,
            "encoding": "base64",
            "size": 12,
            "name": path,
            "path": path,
            "content": "IyBIZWxsbwo=",
            "sha": "3d21ec53a331a6f037a91c368710b99387d012c1",
            "url": format!("https://api.github.com/repos/octo/profile/contents/{path}"),
            "git_url": "https://api.github.com/repos/octo/profile/git/blobs/3d21ec53a331a6f037a91c368710b99387d012c1",
            "html_url": format!("https://github.com/octo/profile/blob/main/{path}"),
            "download_url": format!("https://raw.githubusercontent.com/octo/profile/main/{path}"),
            "_links": {
                "git": "https://api.github.com/repos/octo/profile/git/blobs/3d21ec53a331a6f037a91c368710b99387d012c1",
                "self": format!("https://api.github.com/repos/octo/profile/contents/{path}"),
                "html": format!("https://github.com/octo/profile/blob/main/{path}")
            }
        }))
        .unwrap()
    }

    #[test]
    fn single_file_yields_sha_whatever_its_reported_path() {
        let items = [content_entry("readme.md", "file")];
        assert_eq!(
            file_sha(&items),
            Some("3d21ec53a331a6f037a91c368710b99387d012c1".to_string())
        );
    }

    #[test]
    fn non_file_entries_yield_no_sha() {
        assert_eq!(file_sha(&[content_entry("docs", "dir")]), None);
        assert_eq!(
            file_sha(&[
                content_entry("a.md", "file"),
                content_entry("b.md", "file")
            ]),
            None
        );
    }
}
