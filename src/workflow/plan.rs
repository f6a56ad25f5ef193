//! Workflow planning - pure functions for creating merge plans
//!
//! No I/O happens here. The plan is shown to the user before anything is
//! mutated, and the executor walks the same steps.

use crate::types::WorkflowStep;

/// Merge plan - the ordered steps for one source/target pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowPlan {
    /// Branch being merged (the branch checked out when the run started)
    pub source: String,
    /// Branch receiving the merge
    pub target: String,
    /// Whether this plan is only presented
    pub dry_run: bool,
    /// Steps in execution order
    pub steps: Vec<WorkflowStep>,
}

impl WorkflowPlan {
    /// Heading for the plan listing
    pub fn title(&self) -> String {
        if self.dry_run {
            "Operation Plan (DRY RUN)".to_string()
        } else {
            "Operation Plan".to_string()
        }
    }

    /// Human description of a step of this plan
    pub fn describe(&self, step: WorkflowStep) -> String {
        let source = quoted(&self.source);
        let target = quoted(&self.target);
        match step {
            WorkflowStep::SwitchToTarget => format!("Switch from {source} to {target}"),
            WorkflowStep::PullTarget => format!("Pull latest changes for {target}"),
            WorkflowStep::MergeSource => format!("Merge {source} into {target}"),
            WorkflowStep::PushTarget => format!("Push {target} to remote"),
            WorkflowStep::SwitchBack => format!("Switch back to {source}"),
        }
    }

    /// Numbered plan lines, one per step
    pub fn lines(&self) -> Vec<String> {
        self.steps
            .iter()
            .map(|&step| format!("{}. {}", step.number(), self.describe(step)))
            .collect()
    }
}

impl std::fmt::Display for WorkflowPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title())?;
        for line in self.lines() {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

/// Branch name as shown in messages
pub fn quoted(branch: &str) -> String {
    format!("\"{branch}\"")
}

/// Create a workflow plan (PURE - no I/O, easily testable)
///
/// The five steps are always listed in the same order; `dry_run` only
/// changes how the plan is titled.
#[must_use]
pub fn create_workflow_plan(source: &str, target: &str, dry_run: bool) -> WorkflowPlan {
    WorkflowPlan {
        source: source.to_string(),
        target: target.to_string(),
        dry_run,
        steps: WorkflowStep::ALL.to_vec(),
    }
}
