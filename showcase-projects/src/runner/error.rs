//! Runner error types.

use crate::action::Reporter;

/// Errors that can occur while running the action.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Action input errors.
    #[error(transparent)]
    Input(#[from] crate::config::InputError),

    /// Repository listing errors.
    #[error(transparent)]
    Fetch(#[from] crate::repositories::FetchError),

    /// Local README errors.
    #[error(transparent)]
    Storage(#[from] crate::storage::StorageError),

    /// README commit errors.
    #[error(transparent)]
    Commit(#[from] crate::storage::CommitError),

    /// Failed to publish an output.
    #[error("Failed to set output: {0}")]
    Output(#[from] std::io::Error),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}

impl RunnerError {
    /// Returns the message reported when a run fails with this error.
    #[must_use]
    pub fn failure_message(&self) -> String {
        format!("Action failed: {self}")
    }

    /// Marks the run as failed through `reporter`.
    pub fn report(&self, reporter: &dyn Reporter) {
        reporter.set_failed(&self.failure_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{MemoryReporter, Report};
    use crate::config::InputError;

    #[test]
    fn formats_failure_message() {
        let error = RunnerError::from(InputError::Missing { name: "token" });
        assert_eq!(
            error.failure_message(),
            "Action failed: Input required and not supplied: token"
        );
    }

    #[test]
    fn reports_failure_to_reporter() {
        let reporter = MemoryReporter::new();
        let error = RunnerError::from(InputError::Missing { name: "username" });

        error.report(&reporter);

        assert_eq!(
            reporter.reports(),
            vec![Report::Failed(
                "Action failed: Input required and not supplied: username".to_string()
            )]
        );
    }
}
