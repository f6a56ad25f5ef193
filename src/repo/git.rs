//! Repository service backed by the `git` executable

use crate::error::{Error, Result};
use crate::repo::status::{branch_in_refs, is_conflict_message, parse_porcelain_status};
use crate::repo::{RepositoryService, DEFAULT_REMOTE};
use crate::types::{MergeOutcome, RepositoryStatus};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, trace};

/// Captured result of one git invocation
#[derive(Debug)]
struct GitOutput {
    success: bool,
    stdout: String,
    stderr: String,
}

impl GitOutput {
    /// Stderr if git wrote any, stdout otherwise
    fn message(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim().to_string()
        } else {
            stderr.to_string()
        }
    }

    /// Both streams, for callers that classify the failure by its text
    fn combined(&self) -> String {
        format!("{}\n{}", self.stdout.trim(), self.stderr.trim())
            .trim()
            .to_string()
    }

    fn into_result(self, operation: &str) -> Result<String> {
        if self.success {
            Ok(self.stdout)
        } else {
            Err(Error::git(operation, self.message()))
        }
    }
}

/// Git CLI service rooted at one working directory
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
    remote: String,
}

impl GitCli {
    /// Create a service for `workdir` talking to the default remote
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self::with_remote(workdir, DEFAULT_REMOTE)
    }

    /// Create a service for `workdir` talking to `remote`
    pub fn with_remote(workdir: impl Into<PathBuf>, remote: impl Into<String>) -> Self {
        Self {
            workdir: workdir.into(),
            remote: remote.into(),
        }
    }

    /// Working directory git runs in
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    async fn run(&self, operation: &str, args: &[&str]) -> Result<GitOutput> {
        debug!(operation, ?args, workdir = %self.workdir.display(), "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            // Never block on credential or editor prompts
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("GCM_INTERACTIVE", "never")
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| Error::git(operation, format!("failed to execute git: {e}")))?;

        let result = GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(operation, success = result.success, code = ?output.status.code(), "git finished");
        trace!(stdout = %result.stdout, stderr = %result.stderr);

        Ok(result)
    }
}

#[async_trait]
impl RepositoryService for GitCli {
    async fn is_repository(&self) -> bool {
        self.status().await.is_ok()
    }

    async fn current_branch(&self) -> Result<String> {
        Ok(self.status().await?.current_branch)
    }

    async fn status(&self) -> Result<RepositoryStatus> {
        let stdout = self
            .run(
                "status",
                &["-c", "core.quotePath=false", "status", "--porcelain=v1", "--branch"],
            )
            .await?
            .into_result("status")?;
        Ok(parse_porcelain_status(&stdout))
    }

    async fn branch_exists(&self, name: &str) -> Result<bool> {
        let refs = self
            .run(
                "branch",
                &["for-each-ref", "--format=%(refname)", "refs/heads", "refs/remotes"],
            )
            .await?
            .into_result("branch")?;
        Ok(branch_in_refs(&refs, name, &self.remote))
    }

    async fn checkout(&self, name: &str) -> Result<()> {
        let local = self.run("checkout", &["checkout", name]).await?;
        if local.success {
            return Ok(());
        }

        debug!(branch = name, "local checkout failed, trying remote");
        let start_point = format!("{}/{name}", self.remote);
        let remote = self
            .run("checkout", &["checkout", "-b", name, &start_point])
            .await?;
        if remote.success {
            return Ok(());
        }

        Err(Error::git("checkout", local.message()))
    }

    async fn merge(&self, source: &str) -> Result<MergeOutcome> {
        let output = self.run("merge", &["merge", "--no-edit", source]).await?;
        if output.success {
            return Ok(MergeOutcome::Success);
        }

        let message = output.combined();
        if is_conflict_message(&message) {
            let status = self.status().await?;
            return Ok(MergeOutcome::Conflict {
                files: status.conflicted,
            });
        }

        Ok(MergeOutcome::OtherFailure { message })
    }

    async fn push(&self, name: &str) -> Result<()> {
        self.run("push", &["push", &self.remote, name])
            .await?
            .into_result("push")?;
        Ok(())
    }

    async fn fetch(&self) -> Result<()> {
        self.run("fetch", &["fetch", &self.remote])
            .await?
            .into_result("fetch")?;
        Ok(())
    }

    async fn pull(&self, name: &str) -> Result<()> {
        self.run("pull", &["pull", "--no-rebase", "--no-edit", &self.remote, name])
            .await?
            .into_result("pull")?;
        Ok(())
    }

    fn remote(&self) -> &str {
        &self.remote
    }
}
