//! Error types for devkit

use thiserror::Error;

/// Errors raised by the merge workflow and the git capability
#[derive(Debug, Error)]
pub enum Error {
    /// The working directory is not inside a git repository
    #[error("current directory is not a git repository")]
    NotARepository,

    /// Uncommitted, staged or untracked changes are present
    #[error("you have uncommitted changes; commit or stash them before merging")]
    DirtyWorkingTree,

    /// Target branch exists neither locally nor on the remote
    #[error("target branch \"{0}\" does not exist locally or remotely")]
    TargetBranchNotFound(String),

    /// Current branch already is the target branch
    #[error("cannot merge branch into itself: current branch is already \"{0}\"")]
    SelfMerge(String),

    /// Switching to the target branch failed
    #[error("failed to checkout branch \"{branch}\": {message}")]
    CheckoutFailed {
        /// Branch that could not be checked out
        branch: String,
        /// Underlying git message
        message: String,
    },

    /// Pulling the target branch failed
    #[error("failed to pull branch \"{branch}\": {message}")]
    PullFailed {
        /// Branch that could not be pulled
        branch: String,
        /// Underlying git message
        message: String,
    },

    /// Merge stopped on conflicts
    #[error("merge conflict detected in {} file(s)", .files.len())]
    MergeConflict {
        /// Conflicted paths, in the order git reported them
        files: Vec<String>,
    },

    /// Merge failed for a reason other than conflicts
    #[error("failed to merge: {message}")]
    MergeFailed {
        /// Underlying git message
        message: String,
    },

    /// Pushing the target branch failed
    #[error("failed to push branch \"{branch}\": {message}")]
    PushFailed {
        /// Branch that could not be pushed
        branch: String,
        /// Underlying git message
        message: String,
    },

    /// Returning to the source branch after a successful push failed
    #[error("failed to switch back to \"{branch}\": {message}")]
    CheckoutBackFailed {
        /// Source branch
        branch: String,
        /// Underlying git message
        message: String,
    },

    /// A git operation failed
    #[error("git {operation} failed: {message}")]
    Git {
        /// Operation name (e.g. "status", "checkout")
        operation: String,
        /// Underlying git message
        message: String,
    },

    /// Anything else
    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// Build a capability error for a git operation
    pub fn git(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Git {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Whether this error was raised before any repository mutation
    pub const fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::NotARepository
                | Self::DirtyWorkingTree
                | Self::TargetBranchNotFound(_)
                | Self::SelfMerge(_)
        )
    }

    /// The raw message of a capability error, or the full display otherwise
    pub fn message(&self) -> String {
        match self {
            Self::Git { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for devkit operations
pub type Result<T> = std::result::Result<T, Error>;
