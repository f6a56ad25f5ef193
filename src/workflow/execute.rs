//! Workflow execution - effectful operations
//!
//! Takes a `WorkflowPlan` (created by the pure planning function) and walks
//! its steps against the repository, one at a time. The first failure stops
//! execution; failures that leave us on the target branch get a single
//! best-effort attempt to switch back to the source branch.

use crate::error::{Error, Result};
use crate::repo::RepositoryService;
use crate::types::{MergeOutcome, WorkflowStep};
use crate::workflow::plan::{quoted, WorkflowPlan};
use crate::workflow::progress::{ConflictReport, Phase, ProgressCallback};
use tracing::{debug, warn};

/// Result of workflow execution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Steps that completed, in order
    pub completed_steps: Vec<WorkflowStep>,
}

impl ExecutionResult {
    /// Check if every step of `plan` completed
    pub fn is_complete(&self, plan: &WorkflowPlan) -> bool {
        self.completed_steps == plan.steps
    }
}

/// Execute the workflow plan (EFFECTFUL)
///
/// Steps never run concurrently and none is retried. On failure the
/// original error is returned, even when the rollback checkout also fails.
pub async fn execute_workflow(
    plan: &WorkflowPlan,
    repo: &dyn RepositoryService,
    progress: &dyn ProgressCallback,
) -> Result<ExecutionResult> {
    progress.on_phase(Phase::Execute).await;

    let mut result = ExecutionResult::default();

    for &step in &plan.steps {
        progress.on_task_started(&running_message(plan, step)).await;
        debug!(step = %step, "running workflow step");

        match run_step(plan, step, repo).await {
            Ok(()) => {
                progress.on_task_succeeded(&done_message(plan, step)).await;
                result.completed_steps.push(step);
            }
            Err(err) => {
                progress.on_task_failed(&failed_message(step, &err)).await;

                if let Error::MergeConflict { files } = &err
                    && !files.is_empty()
                {
                    let report = ConflictReport::new(files.clone(), repo.remote(), &plan.target);
                    progress.on_conflict(&report).await;
                }

                if step.needs_rollback() {
                    roll_back(plan, repo, progress).await;
                }
                return Err(err);
            }
        }
    }

    progress
        .on_success(&format!(
            "Successfully merged {} into {}!",
            quoted(&plan.source),
            quoted(&plan.target)
        ))
        .await;
    progress
        .on_info("The changes have been pushed to the remote repository.")
        .await;

    Ok(result)
}

async fn run_step(plan: &WorkflowPlan, step: WorkflowStep, repo: &dyn RepositoryService) -> Result<()> {
    let source = &plan.source;
    let target = &plan.target;

    match step {
        WorkflowStep::SwitchToTarget => {
            repo.checkout(target)
                .await
                .map_err(|e| Error::CheckoutFailed {
                    branch: target.clone(),
                    message: e.message(),
                })
        }
        WorkflowStep::PullTarget => repo.pull(target).await.map_err(|e| Error::PullFailed {
            branch: target.clone(),
            message: e.message(),
        }),
        WorkflowStep::MergeSource => match repo.merge(source).await? {
            MergeOutcome::Success => Ok(()),
            MergeOutcome::Conflict { files } => Err(Error::MergeConflict { files }),
            MergeOutcome::OtherFailure { message } => Err(Error::MergeFailed { message }),
        },
        WorkflowStep::PushTarget => repo.push(target).await.map_err(|e| Error::PushFailed {
            branch: target.clone(),
            message: e.message(),
        }),
        WorkflowStep::SwitchBack => {
            repo.checkout(source)
                .await
                .map_err(|e| Error::CheckoutBackFailed {
                    branch: source.clone(),
                    message: e.message(),
                })
        }
    }
}

/// Single best-effort attempt to return to the source branch
async fn roll_back(plan: &WorkflowPlan, repo: &dyn RepositoryService, progress: &dyn ProgressCallback) {
    let source = quoted(&plan.source);
    match repo.checkout(&plan.source).await {
        Ok(()) => progress.on_info(&format!("Switched back to {source}")).await,
        Err(e) => {
            warn!(branch = %plan.source, error = %e, "rollback checkout failed");
            progress
                .on_warning(&format!("Failed to switch back to {source}: {}", e.message()))
                .await;
        }
    }
}

fn running_message(plan: &WorkflowPlan, step: WorkflowStep) -> String {
    let source = quoted(&plan.source);
    let target = quoted(&plan.target);
    match step {
        WorkflowStep::SwitchToTarget => format!("Switching to {target}..."),
        WorkflowStep::PullTarget => format!("Pulling latest changes for {target}..."),
        WorkflowStep::MergeSource => format!("Merging {source} into {target}..."),
        WorkflowStep::PushTarget => format!("Pushing {target} to remote..."),
        WorkflowStep::SwitchBack => format!("Switching back to {source}..."),
    }
}

fn done_message(plan: &WorkflowPlan, step: WorkflowStep) -> String {
    let source = quoted(&plan.source);
    let target = quoted(&plan.target);
    match step {
        WorkflowStep::SwitchToTarget => format!("Switched to {target}"),
        WorkflowStep::PullTarget => format!("Pulled latest changes for {target}"),
        WorkflowStep::MergeSource => format!("Merged {source} into {target}"),
        WorkflowStep::PushTarget => format!("Pushed {target} to remote"),
        WorkflowStep::SwitchBack => format!("Switched back to {source}"),
    }
}

fn failed_message(step: WorkflowStep, err: &Error) -> String {
    match err {
        Error::MergeConflict { .. } => "Merge failed: merge conflict detected".to_string(),
        _ => format!("Step {} ({step}) failed: {err}", step.number()),
    }
}
