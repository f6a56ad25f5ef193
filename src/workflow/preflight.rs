//! Preflight checks - verify the workflow may safely begin
//!
//! Checks run in a fixed order and the first failure aborts. Only the fetch
//! touches the repository, and it refreshes remote refs rather than local
//! state.

use crate::error::{Error, Result};
use crate::repo::RepositoryService;
use crate::workflow::plan::quoted;
use crate::workflow::progress::{Phase, ProgressCallback};
use tracing::warn;

/// Run the preflight checks for merging into `target`
///
/// 1. the working directory is a repository
/// 2. the working tree is clean
/// 3. fetch from the remote (best effort, never aborts)
/// 4. the target branch exists locally or on the remote
pub async fn run_preflight_checks(
    repo: &dyn RepositoryService,
    target: &str,
    progress: &dyn ProgressCallback,
) -> Result<()> {
    progress.on_phase(Phase::Preflight).await;

    check_repository(repo, progress).await?;
    check_clean(repo, progress).await?;
    refresh_remote(repo, progress).await;
    check_target_exists(repo, target, progress).await
}

async fn check_repository(
    repo: &dyn RepositoryService,
    progress: &dyn ProgressCallback,
) -> Result<()> {
    progress.on_task_started("Checking Git repository...").await;
    if !repo.is_repository().await {
        progress.on_task_failed("Not a Git repository").await;
        return Err(Error::NotARepository);
    }
    progress.on_task_succeeded("Git repository detected").await;
    Ok(())
}

async fn check_clean(repo: &dyn RepositoryService, progress: &dyn ProgressCallback) -> Result<()> {
    progress
        .on_task_started("Checking working directory status...")
        .await;

    let status = match repo.status().await {
        Ok(status) => status,
        Err(e) => {
            progress.on_task_failed("Could not read working directory status").await;
            return Err(e);
        }
    };

    if !status.is_clean {
        progress.on_task_failed("Working directory is not clean").await;
        return Err(Error::DirtyWorkingTree);
    }
    progress.on_task_succeeded("Working directory is clean").await;
    Ok(())
}

async fn refresh_remote(repo: &dyn RepositoryService, progress: &dyn ProgressCallback) {
    let remote = repo.remote().to_string();
    progress
        .on_task_started(&format!("Fetching latest changes from {remote}..."))
        .await;

    match repo.fetch().await {
        Ok(()) => {
            progress
                .on_task_succeeded(&format!("Fetched latest changes from {remote}"))
                .await;
        }
        Err(e) => {
            warn!(remote = %remote, error = %e, "fetch failed, continuing");
            progress
                .on_warning(&format!("Failed to fetch from {remote}: {}", e.message()))
                .await;
        }
    }
}

async fn check_target_exists(
    repo: &dyn RepositoryService,
    target: &str,
    progress: &dyn ProgressCallback,
) -> Result<()> {
    let shown = quoted(target);
    progress
        .on_task_started(&format!("Checking if target branch {shown} exists..."))
        .await;

    let exists = match repo.branch_exists(target).await {
        Ok(exists) => exists,
        Err(e) => {
            warn!(branch = target, error = %e, "branch lookup failed");
            progress
                .on_warning(&format!("Could not check if branch exists: {}", e.message()))
                .await;
            false
        }
    };

    if !exists {
        progress
            .on_task_failed(&format!("Target branch {shown} does not exist"))
            .await;
        return Err(Error::TargetBranchNotFound(target.to_string()));
    }
    progress
        .on_task_succeeded(&format!("Target branch {shown} exists"))
        .await;
    Ok(())
}
