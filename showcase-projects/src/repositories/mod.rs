//! Repository discovery using the GitHub list-repositories-for-user API.
//!
//! This module fetches a user's own repositories, keeps the ones tagged with
//! the showcase topic and normalizes them into [`Repository`] records.

mod error;
mod repository;

pub use error::FetchError;
pub use repository::Repository;

use octocrab::Octocrab;
use repository::RawRepository;
use serde::Serialize;
use tracing::{debug, error, info, info_span, Instrument};

/// Results per page for the repository listing. Only the first page is read.
const RESULTS_PER_PAGE: u8 = 100;

/// Query parameters for `GET /users/{username}/repos`.
#[derive(Debug, Serialize)]
struct ListUserReposParams<'a> {
    r#type: &'a str,
    sort: &'a str,
    per_page: u8,
}

/// Fetches the repositories owned by `username` that carry `topic`.
///
/// Repositories are returned most recently updated first, as GitHub lists
/// them. At most [`RESULTS_PER_PAGE`] candidates are considered before the
/// topic filter is applied.
///
/// # Arguments
///
/// * `octocrab` - Authenticated GitHub client
/// * `username` - Owner whose repositories are listed
/// * `topic` - Topic a repository must have to be kept
///
/// # Errors
///
/// Returns [`FetchError`] if the listing request fails.
pub async fn fetch_repositories_with_topic(
    octocrab: &Octocrab,
    username: &str,
    topic: &str,
) -> Result<Vec<Repository>, FetchError> {
    let span = info_span!("fetch_repositories", username = %username, topic = %topic);

    async {
        info!("Fetching repositories for user with topic");

        let route = format!("/users/{username}/repos");
        let params = ListUserReposParams {
            r#type: "owner",
            sort: "updated",
            per_page: RESULTS_PER_PAGE,
        };
        debug!(route = %route, "Listing repositories");

        let candidates: Vec<RawRepository> = match octocrab.get(&route, Some(&params)).await {
            Ok(candidates) => candidates,
            Err(e) => {
                error!(error = %e, "Failed to fetch repositories");
                return Err(FetchError::from(e));
            }
        };

        let repositories = select_with_topic(candidates, topic);
        info!(count = repositories.len(), "Found repositories with topic");
        Ok(repositories)
    }
    .instrument(span)
    .await
}

/// Keeps the candidates tagged with `topic`, preserving their order.
fn select_with_topic(candidates: Vec<RawRepository>, topic: &str) -> Vec<Repository> {
    candidates
        .into_iter()
        .filter(|repo| repo.has_topic(topic))
        .map(Repository::from)
        .collect()
}
