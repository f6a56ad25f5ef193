//! Progress reporting for the merge workflow
//!
//! The engine reports what it is doing at every boundary through
//! [`ProgressCallback`]; rendering is up to the implementor.

use crate::workflow::plan::WorkflowPlan;
use async_trait::async_trait;

/// Workflow phase, announced before its first task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Repository, cleanliness, fetch and target checks
    Preflight,
    /// The five mutating steps
    Execute,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preflight => write!(f, "Pre-flight Checks"),
            Self::Execute => write!(f, "Executing Merge Workflow"),
        }
    }
}

/// Conflict details and the manual commands that finish the merge
///
/// Purely informational: the workflow runs none of these commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictReport {
    /// Conflicted paths, in the order git reported them
    pub files: Vec<String>,
    /// Commands to run after resolving the conflicts
    pub commands: Vec<String>,
}

impl ConflictReport {
    /// Build the report for a merge into `target` that will be pushed to `remote`
    pub fn new(files: Vec<String>, remote: &str, target: &str) -> Self {
        Self {
            files,
            commands: vec![
                "git add .".to_string(),
                "git commit".to_string(),
                format!("git push {remote} {target}"),
            ],
        }
    }
}

/// Receiver for workflow events
///
/// A task is a single check or step: it is started once and then either
/// succeeds or fails. Free-standing messages may arrive at any time.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// A new phase begins
    async fn on_phase(&self, phase: Phase);

    /// A check or step started
    async fn on_task_started(&self, message: &str);

    /// The running check or step finished
    async fn on_task_succeeded(&self, message: &str);

    /// The running check or step failed
    async fn on_task_failed(&self, message: &str);

    /// The plan that is about to run (or would run, for a dry run)
    async fn on_plan(&self, plan: &WorkflowPlan);

    /// A merge stopped on conflicts
    async fn on_conflict(&self, report: &ConflictReport);

    /// Informational message
    async fn on_info(&self, message: &str);

    /// Final success message
    async fn on_success(&self, message: &str);

    /// Non-fatal problem
    async fn on_warning(&self, message: &str);
}

/// Progress callback that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_task_started(&self, _message: &str) {}
    async fn on_task_succeeded(&self, _message: &str) {}
    async fn on_task_failed(&self, _message: &str) {}
    async fn on_plan(&self, _plan: &WorkflowPlan) {}
    async fn on_conflict(&self, _report: &ConflictReport) {}
    async fn on_info(&self, _message: &str) {}
    async fn on_success(&self, _message: &str) {}
    async fn on_warning(&self, _message: &str) {}
}
