//! Repository access for the merge workflow
//!
//! Wraps the primitive version-control operations the workflow needs behind
//! one trait, so the engine can run against the real `git` binary or an
//! in-memory mock.

mod git;
pub mod status;

pub use git::GitCli;

use crate::error::Result;
use crate::types::{MergeOutcome, RepositoryStatus};
use async_trait::async_trait;

/// Remote used for fetch, pull, push and the checkout fallback
pub const DEFAULT_REMOTE: &str = "origin";

/// Repository service trait for the merge workflow
///
/// Every call is awaited to completion before the workflow moves on; the
/// workflow never issues two calls concurrently.
#[async_trait]
pub trait RepositoryService: Send + Sync {
    /// True iff a status query succeeds in the working directory
    async fn is_repository(&self) -> bool;

    /// Checked-out branch name, `"HEAD"` when detached
    async fn current_branch(&self) -> Result<String>;

    /// Fresh working tree status
    async fn status(&self) -> Result<RepositoryStatus>;

    /// Whether `name` exists as a local branch or on the remote
    async fn branch_exists(&self, name: &str) -> Result<bool>;

    /// Check out `name`, falling back to a tracking branch from the remote
    ///
    /// When both attempts fail the error carries the local attempt's
    /// message.
    async fn checkout(&self, name: &str) -> Result<()>;

    /// Merge `source` into the checked-out branch
    ///
    /// Conflicts and other merge failures are reported through the
    /// returned [`MergeOutcome`]; `Err` means git could not be run at all.
    async fn merge(&self, source: &str) -> Result<MergeOutcome>;

    /// Push `name` to the remote
    async fn push(&self, name: &str) -> Result<()>;

    /// Refresh remote refs
    async fn fetch(&self) -> Result<()>;

    /// Pull `name` from the remote into the checked-out branch
    async fn pull(&self, name: &str) -> Result<()>;

    /// Remote this service talks to
    fn remote(&self) -> &str;
}
