//! Commit status types.

/// Status of the README commit step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitStatus {
    /// Committing was not requested.
    Disabled,

    /// Committing was requested but not attempted.
    Skipped {
        /// Reason for skipping.
        reason: String,
    },

    /// The README did not exist on the branch and was created.
    Created,

    /// The existing README was updated.
    Updated {
        /// Blob SHA of the README that was replaced.
        previous_sha: String,
    },
}

impl CommitStatus {
    /// Returns the status as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Skipped { .. } => "skipped",
            Self::Created => "created",
            Self::Updated { .. } => "updated",
        }
    }

    /// Returns true if a commit was pushed.
    #[must_use]
    pub fn committed(&self) -> bool {
        matches!(self, Self::Created | Self::Updated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_commit_status_to_string() {
        assert_eq!(CommitStatus::Disabled.as_str(), "disabled");
        assert_eq!(
            CommitStatus::Skipped {
                reason: "dry run".to_string()
            }
            .as_str(),
            "skipped"
        );
        assert_eq!(CommitStatus::Created.as_str(), "created");
        assert_eq!(
            CommitStatus::Updated {
                previous_sha: "abc".to_string()
            }
            .as_str(),
            "updated"
        );
    }

    #[test]
    fn only_pushed_statuses_count_as_committed() {
        assert!(CommitStatus::Created.committed());
        assert!(CommitStatus::Updated {
            previous_sha: "abc".to_string()
        }
        .committed());
        assert!(!CommitStatus::Disabled.committed());
        assert!(!CommitStatus::Skipped {
            reason: String::new()
        }
        .committed());
    }
}
