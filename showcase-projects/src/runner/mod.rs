//! Orchestrates a showcase update run.
//!
//! A run is strictly sequential: fetch, render, splice, write, then commit.
//! Each step completes before the next one starts, and nothing is retried.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::action::Reporter;
use crate::config::ActionInputs;
use crate::render::render_on;
use crate::repositories::{fetch_repositories_with_topic, Repository};
use crate::splice::{splice, Placement, MARKERS_NOT_FOUND};
use crate::storage::{commit_readme, read_readme, write_readme, CommitRequest, CommitStatus};
use crate::summary::RunSummary;
use chrono::{Local, NaiveDate};
use octocrab::Octocrab;
use tracing::{info, warn};

/// Output holding the number of repositories found.
pub const REPOSITORIES_COUNT_OUTPUT: &str = "repositories_count";

/// Output holding the rendered showcase section.
pub const UPDATED_CONTENT_OUTPUT: &str = "updated_content";

/// A rendered showcase spliced into a README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeUpdate {
    /// The rendered showcase section.
    pub fragment: String,

    /// The README with the section spliced in.
    pub readme: String,

    /// How the section was placed.
    pub placement: Placement,

    /// Number of repositories rendered.
    pub rendered: usize,
}

/// Renders `repositories` and splices them into `current_readme`.
#[must_use]
pub fn prepare_update(
    inputs: &ActionInputs,
    repositories: &[Repository],
    current_readme: &str,
    date: NaiveDate,
) -> ReadmeUpdate {
    let options = inputs.generator_options();
    let fragment = render_on(repositories, &options, date);
    let spliced = splice(
        current_readme,
        &fragment,
        &inputs.start_marker,
        &inputs.end_marker,
    );

    ReadmeUpdate {
        fragment,
        readme: spliced.document,
        placement: spliced.placement,
        rendered: repositories.len().min(options.max_repos),
    }
}

/// Reports the warnings a prepared update calls for.
///
/// A fetch that matched nothing and a README without its markers each produce
/// one warning. The update itself is still written in both cases.
pub fn report_update(
    reporter: &dyn Reporter,
    topic: &str,
    repositories_found: usize,
    update: &ReadmeUpdate,
) {
    if repositories_found == 0 {
        reporter.warning(&format!("No repositories found with topic: {topic}"));
    }

    if update.placement == Placement::Appended {
        reporter.warning(MARKERS_NOT_FOUND);
    }

    reporter.info("Generated showcase content successfully");
}

/// Publishes the step outputs.
///
/// # Errors
///
/// Returns an error if the reporter cannot record an output.
pub fn publish_outputs(
    reporter: &dyn Reporter,
    repositories_count: usize,
    fragment: &str,
) -> std::io::Result<()> {
    reporter.set_output(REPOSITORIES_COUNT_OUTPUT, &repositories_count.to_string())?;
    reporter.set_output(UPDATED_CONTENT_OUTPUT, fragment)
}

/// Runs the showcase update.
pub struct Runner {
    config: RunnerConfig,
    octocrab: Octocrab,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let octocrab = Octocrab::builder()
            .personal_token(config.inputs().token.clone())
            .build()?;
        Ok(Self { config, octocrab })
    }

    /// Executes the full update flow.
    pub async fn run(&self, reporter: &dyn Reporter) -> Result<RunSummary, RunnerError> {
        let inputs = self.config.inputs();

        reporter.info("🚀 Starting Showcase Projects Action");
        info!(
            username = %inputs.username,
            topic = %inputs.topic,
            format = %inputs.format,
            readme_path = %inputs.readme_path.display(),
            max_repos = inputs.max_repos,
            commit_changes = inputs.commit_changes,
            dry_run = self.config.dry_run(),
            "Configuration"
        );

        let repositories =
            fetch_repositories_with_topic(&self.octocrab, &inputs.username, &inputs.topic).await?;

        let current = read_readme(&inputs.readme_path).await?;
        let update = prepare_update(inputs, &repositories, &current, Local::now().date_naive());
        report_update(reporter, &inputs.topic, repositories.len(), &update);

        let readme_changed = update.readme != current;

        let (readme_written, commit) = if self.config.dry_run() {
            print_dry_run_preview(inputs, &update, readme_changed);
            (
                false,
                CommitStatus::Skipped {
                    reason: "dry run".to_string(),
                },
            )
        } else {
            write_readme(&inputs.readme_path, &update.readme).await?;
            (true, self.commit(&update.readme, reporter).await?)
        };

        publish_outputs(reporter, repositories.len(), &update.fragment)?;
        reporter.info("✅ Showcase Projects Action completed successfully");

        Ok(RunSummary {
            repositories_found: repositories.len(),
            repositories_rendered: update.rendered,
            placement: update.placement,
            readme_changed,
            readme_written,
            commit,
            dry_run: self.config.dry_run(),
        })
    }

    /// Commits the README when requested and a target repository is known.
    async fn commit(
        &self,
        readme: &str,
        reporter: &dyn Reporter,
    ) -> Result<CommitStatus, RunnerError> {
        let inputs = self.config.inputs();

        if !inputs.commit_changes {
            return Ok(CommitStatus::Disabled);
        }

        let Some(repository) = self.config.repository() else {
            warn!("No repository context available");
            reporter.warning("GITHUB_REPOSITORY is not set. Skipping commit.");
            return Ok(CommitStatus::Skipped {
                reason: "no repository context".to_string(),
            });
        };

        let path = inputs.readme_path.to_string_lossy().replace('\\', "/");
        let request = CommitRequest::new(
            &repository.owner,
            &repository.repo,
            path.trim_start_matches("./"),
            readme,
            &inputs.commit_message,
        )
        .with_branch(&inputs.branch);

        let status = commit_readme(&self.octocrab, &request).await?;
        reporter.info("Changes committed and pushed successfully");
        Ok(status)
    }
}

fn print_dry_run_preview(inputs: &ActionInputs, update: &ReadmeUpdate, readme_changed: bool) {
    println!("\n[DRY RUN] README: {}", inputs.readme_path.display());
    println!("  Repositories rendered: {}", update.rendered);
    println!(
        "  Placement: {}",
        match update.placement {
            Placement::Replaced => "replace content between markers",
            Placement::Appended => "append new marker section",
        }
    );
    println!("  README would change: {readme_changed}");

    println!("\n  Rendered section:");
    for line in update.fragment.lines().take(10) {
        println!("    {line}");
    }
    if update.fragment.lines().count() > 10 {
        println!("    ...");
    }

    println!();
}
