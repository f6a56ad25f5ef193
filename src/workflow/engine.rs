//! Top-level driver for one merge run

use crate::error::{Error, Result};
use crate::repo::RepositoryService;
use crate::types::{WorkflowOutcome, WorkflowRequest};
use crate::workflow::confirm::{pass_confirmation_gate, Confirmer};
use crate::workflow::execute::execute_workflow;
use crate::workflow::plan::create_workflow_plan;
use crate::workflow::preflight::run_preflight_checks;
use crate::workflow::progress::ProgressCallback;
use tracing::info;

/// Merge the current branch into `request.target_branch`
///
/// Preflight, self-merge check, plan, then either stop (dry run, declined
/// prompt) or execute. Nothing is mutated before the confirmation gate.
pub async fn run_merge_workflow(
    request: &WorkflowRequest,
    repo: &dyn RepositoryService,
    confirmer: &dyn Confirmer,
    progress: &dyn ProgressCallback,
) -> Result<WorkflowOutcome> {
    let target = request.target_branch.as_str();

    run_preflight_checks(repo, target, progress).await?;

    let source = repo.current_branch().await?;
    if source == target {
        return Err(Error::SelfMerge(source));
    }

    let plan = create_workflow_plan(&source, target, request.dry_run);
    progress.on_plan(&plan).await;

    if request.dry_run {
        progress
            .on_info("Dry run completed. No actual changes were made.")
            .await;
        return Ok(WorkflowOutcome::DryRun);
    }

    let decision = pass_confirmation_gate(request, confirmer, progress).await?;
    if !decision.proceeds() {
        return Ok(WorkflowOutcome::Cancelled);
    }

    info!(source = %source, target, "executing merge workflow");
    execute_workflow(&plan, repo, progress).await?;

    Ok(WorkflowOutcome::Completed)
}
