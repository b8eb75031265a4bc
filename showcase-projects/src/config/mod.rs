//! Action input parsing and validation.
//!
//! This module turns the raw key-value inputs of a workflow step into a
//! validated [`ActionInputs`].

mod error;

pub use error::InputError;

use crate::action::InputSource;
use crate::render::{Format, GeneratorOptions};
use crate::splice::{DEFAULT_END_MARKER, DEFAULT_START_MARKER};
use crate::storage::DEFAULT_BRANCH;
use std::path::PathBuf;
use tracing::debug;

/// Topic selected when none is configured.
pub const DEFAULT_TOPIC: &str = "showcase";

/// Showcase heading used when none is configured.
pub const DEFAULT_ACTION_TITLE: &str = "🚀 Showcase Projects";

/// README path used when none is configured.
pub const DEFAULT_README_PATH: &str = "README.md";

/// Commit message used when none is configured.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Update showcase projects";

/// Validated inputs of a workflow step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInputs {
    /// GitHub token used for API calls.
    pub token: String,

    /// User whose repositories are showcased.
    pub username: String,

    /// Topic a repository must carry to be showcased.
    pub topic: String,

    /// Rendering layout.
    pub format: Format,

    /// Path of the README to update.
    pub readme_path: PathBuf,

    /// Showcase heading.
    pub title: String,

    /// Maximum number of repositories rendered.
    pub max_repos: usize,

    /// Show repository descriptions.
    pub show_description: bool,

    /// Show primary languages.
    pub show_language: bool,

    /// Show stargazer counts.
    pub show_stars: bool,

    /// Show fork counts.
    pub show_forks: bool,

    /// Show topics.
    pub show_topics: bool,

    /// Commit message for the README update.
    pub commit_message: String,

    /// Marker opening the showcase section.
    pub start_marker: String,

    /// Marker closing the showcase section.
    pub end_marker: String,

    /// Whether to commit the README through the GitHub API.
    pub commit_changes: bool,

    /// Branch to commit to.
    pub branch: String,
}

impl ActionInputs {
    /// Reads and validates inputs from `source`, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if a required input is missing or a value
    /// cannot be parsed.
    pub fn load(source: &dyn InputSource) -> Result<Self, InputError> {
        let format_name = optional(source, "format", Format::Card.as_str());
        let format = Format::parse(&format_name);
        if format.as_str() != format_name {
            debug!(format = %format_name, "Unrecognized format, using card");
        }

        Ok(Self {
            token: required(source, "token")?,
            username: required(source, "username")?,
            topic: optional(source, "topic", DEFAULT_TOPIC),
            format,
            readme_path: PathBuf::from(optional(source, "readme_path", DEFAULT_README_PATH)),
            title: optional(source, "title", DEFAULT_ACTION_TITLE),
            max_repos: positive_integer(source, "max_repos", crate::render::DEFAULT_MAX_REPOS)?,
            show_description: boolean(source, "show_description", true)?,
            show_language: boolean(source, "show_language", true)?,
            show_stars: boolean(source, "show_stars", true)?,
            show_forks: boolean(source, "show_forks", true)?,
            show_topics: boolean(source, "show_topics", false)?,
            commit_message: optional(source, "commit_message", DEFAULT_COMMIT_MESSAGE),
            start_marker: optional(source, "start_marker", DEFAULT_START_MARKER),
            end_marker: optional(source, "end_marker", DEFAULT_END_MARKER),
            commit_changes: boolean(source, "commit_changes", true)?,
            branch: optional(source, "branch", DEFAULT_BRANCH),
        })
    }

    /// Returns the rendering options selected by these inputs.
    #[must_use]
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            format: self.format,
            title: self.title.clone(),
            show_description: self.show_description,
            show_language: self.show_language,
            show_stars: self.show_stars,
            show_forks: self.show_forks,
            show_topics: self.show_topics,
            max_repos: self.max_repos,
        }
    }
}

/// The repository a workflow runs in, as given by `GITHUB_REPOSITORY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryContext {
    /// Repository owner.
    pub owner: String,

    /// Repository name.
    pub repo: String,
}

impl RepositoryContext {
    /// Parses an `owner/repo` slug.
    #[must_use]
    pub fn parse(slug: &str) -> Option<Self> {
        let (owner, repo) = slug.trim().split_once('/')?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return None;
        }
        Some(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

fn required(source: &dyn InputSource, name: &'static str) -> Result<String, InputError> {
    source.get(name).ok_or(InputError::Missing { name })
}

fn optional(source: &dyn InputSource, name: &str, default: &str) -> String {
    source.get(name).unwrap_or_else(|| default.to_string())
}

/// Parses a boolean using the YAML 1.2 core schema spellings.
fn boolean(
    source: &dyn InputSource,
    name: &'static str,
    default: bool,
) -> Result<bool, InputError> {
    match source.get(name).as_deref() {
        None => Ok(default),
        Some("true" | "True" | "TRUE") => Ok(true),
        Some("false" | "False" | "FALSE") => Ok(false),
        Some(value) => Err(InputError::InvalidBoolean {
            name,
            value: value.to_string(),
        }),
    }
}

fn positive_integer(
    source: &dyn InputSource,
    name: &'static str,
    default: usize,
) -> Result<usize, InputError> {
    let Some(value) = source.get(name) else {
        return Ok(default);
    };

    match value.parse::<usize>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(InputError::InvalidNumber { name, value }),
    }
}
