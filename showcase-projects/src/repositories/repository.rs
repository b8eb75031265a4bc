//! Repository records and their upstream representation.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A repository selected for the showcase.
///
/// Every optional upstream field has already been resolved to a default, so
/// renderers never need to care about what GitHub left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Repository description, if one is set.
    pub description: Option<String>,

    /// GitHub URL of the repository.
    pub html_url: String,

    /// Primary language, if GitHub detected one.
    pub language: Option<String>,

    /// Number of stargazers.
    pub stargazers_count: u32,

    /// Number of forks.
    pub forks_count: u32,

    /// Topics attached to the repository.
    pub topics: Vec<String>,

    /// Project homepage, if one is set.
    pub homepage: Option<String>,

    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl Repository {
    /// Returns the owner part of `full_name`, or an empty string.
    #[must_use]
    pub fn owner(&self) -> &str {
        self.full_name.split('/').next().unwrap_or_default()
    }
}

/// A repository as returned by the list-repositories-for-user endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawRepository {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: Option<u32>,
    pub forks_count: Option<u32>,
    pub topics: Option<Vec<String>>,
    pub homepage: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl RawRepository {
    /// Returns true if the repository is tagged with `topic`.
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics
            .as_ref()
            .is_some_and(|topics| topics.iter().any(|t| t == topic))
    }
}

impl From<RawRepository> for Repository {
    fn from(raw: RawRepository) -> Self {
        Self {
            name: raw.name,
            full_name: raw.full_name,
            description: non_empty(raw.description),
            html_url: raw.html_url,
            language: non_empty(raw.language),
            stargazers_count: raw.stargazers_count.unwrap_or(0),
            forks_count: raw.forks_count.unwrap_or(0),
            topics: raw.topics.unwrap_or_default(),
            homepage: non_empty(raw.homepage),
            updated_at: raw.updated_at.unwrap_or_else(Utc::now),
        }
    }
}

/// GitHub reports unset text fields as either `null` or `""`.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
