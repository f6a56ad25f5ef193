//! Shared command context for CLI commands
//!
//! Resolves the working directory and binds the git service to it.

use devkit::error::{Error, Result};
use devkit::repo::GitCli;
use std::path::{Path, PathBuf};

/// Repository access for one command invocation
///
/// Holds no repository state: every query goes to git afresh.
pub struct CommandContext {
    /// Git service rooted at the working directory
    pub repo: GitCli,
    /// Resolved working directory
    pub workdir: PathBuf,
    /// Selected remote name
    pub remote_name: String,
}

impl CommandContext {
    /// Create a context for `path` using `remote`
    ///
    /// Fails if `path` is not an existing directory. Whether it is a git
    /// repository is left to the preflight checks.
    pub fn new(path: &Path, remote: &str) -> Result<Self> {
        let workdir = path
            .canonicalize()
            .map_err(|e| Error::Internal(format!("cannot open {}: {e}", path.display())))?;

        if !workdir.is_dir() {
            return Err(Error::Internal(format!(
                "{} is not a directory",
                workdir.display()
            )));
        }

        Ok(Self {
            repo: GitCli::with_remote(&workdir, remote),
            workdir,
            remote_name: remote.to_string(),
        })
    }
}
