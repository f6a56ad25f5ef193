//! Confirmation gate - the last stop before anything is mutated

use crate::error::Result;
use crate::types::WorkflowRequest;
use crate::workflow::progress::ProgressCallback;

/// Question asked before executing the workflow
pub const CONFIRM_PROMPT: &str = "Do you want to proceed with the merge operation?";

/// Interactive yes/no prompt
pub trait Confirmer: Send + Sync {
    /// Ask `prompt`; `default` is the answer when the user just hits enter
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// What the gate decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// User answered yes
    Proceed,
    /// `--force` skipped the prompt
    Forced,
    /// User answered no
    Cancelled,
}

impl GateDecision {
    /// Whether execution may continue
    pub const fn proceeds(self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

/// Decide whether the workflow may start mutating the repository
///
/// Not reached for dry runs. With `force` no prompt is shown; otherwise a
/// single prompt defaulting to "no" is asked.
pub async fn pass_confirmation_gate(
    request: &WorkflowRequest,
    confirmer: &dyn Confirmer,
    progress: &dyn ProgressCallback,
) -> Result<GateDecision> {
    if request.force {
        progress
            .on_warning("Force flag detected. Skipping confirmation.")
            .await;
        return Ok(GateDecision::Forced);
    }

    if confirmer.confirm(CONFIRM_PROMPT, false)? {
        Ok(GateDecision::Proceed)
    } else {
        progress.on_info("Operation cancelled by user.").await;
        Ok(GateDecision::Cancelled)
    }
}
