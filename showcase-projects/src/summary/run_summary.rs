//! Run summary types.

use crate::splice::Placement;
use crate::storage::CommitStatus;

/// Summary of a complete run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of repositories carrying the topic.
    pub repositories_found: usize,

    /// Number of repositories rendered after applying `max_repos`.
    pub repositories_rendered: usize,

    /// How the showcase was placed in the README.
    pub placement: Placement,

    /// Whether the README text changed.
    pub readme_changed: bool,

    /// Whether the README was written locally.
    pub readme_written: bool,

    /// Outcome of the commit step.
    pub commit: CommitStatus,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Returns true if the markers had to be appended.
    #[must_use]
    pub fn appended(&self) -> bool {
        self.placement == Placement::Appended
    }
}
