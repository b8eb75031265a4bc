//! Runner configuration.

use crate::config::{ActionInputs, RepositoryContext};

/// Configuration for a showcase update run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Validated action inputs.
    inputs: ActionInputs,
    /// Repository the workflow runs in, used as the commit target.
    repository: Option<RepositoryContext>,
    /// Whether to preview changes without writing or committing.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(inputs: ActionInputs) -> Self {
        Self {
            inputs,
            repository: None,
            dry_run: false,
        }
    }

    /// Sets the repository to commit to.
    pub fn with_repository(mut self, repository: Option<RepositoryContext>) -> Self {
        self.repository = repository;
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the action inputs.
    pub fn inputs(&self) -> &ActionInputs {
        &self.inputs
    }

    /// Returns the repository to commit to, if known.
    pub fn repository(&self) -> Option<&RepositoryContext> {
        self.repository.as_ref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
