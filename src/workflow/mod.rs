//! Merge workflow engine
//!
//! Gather, plan, gate, execute:
//! 1. Preflight - verify the repository may be touched (effectful, read-mostly)
//! 2. Plan - create `WorkflowPlan` (pure, testable)
//! 3. Gate - dry run stops here; otherwise confirm unless forced
//! 4. Execute - run the five steps, roll back on failure (effectful)

mod confirm;
mod engine;
mod execute;
mod plan;
mod preflight;
mod progress;

pub use confirm::{pass_confirmation_gate, Confirmer, GateDecision, CONFIRM_PROMPT};
pub use engine::run_merge_workflow;
pub use execute::{execute_workflow, ExecutionResult};
pub use plan::{create_workflow_plan, quoted, WorkflowPlan};
pub use preflight::run_preflight_checks;
pub use progress::{ConflictReport, NoopProgress, Phase, ProgressCallback};
