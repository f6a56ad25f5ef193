//! Merge command - merge the current branch into a target branch

use crate::cli::CliProgress;
use crate::cli::context::CommandContext;
use devkit::error::{Error, Result};
use devkit::types::{WorkflowOutcome, WorkflowRequest};
use devkit::workflow::{run_merge_workflow, Confirmer};
use dialoguer::Confirm;
use std::path::Path;
use tracing::debug;

/// Options for the merge command
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Dry run - show what would be done without making changes
    pub dry_run: bool,
    /// Skip the confirmation prompt
    pub force: bool,
}

/// Yes/no prompt on the terminal
struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::Internal(format!("Failed to read confirmation: {e}")))
    }
}

/// Run the merge command
pub async fn run_merge(
    path: &Path,
    remote: &str,
    target_branch: &str,
    options: MergeOptions,
) -> Result<WorkflowOutcome> {
    let ctx = CommandContext::new(path, remote)?;
    debug!(
        workdir = %ctx.workdir.display(),
        remote = %ctx.remote_name,
        target = target_branch,
        "starting merge command"
    );

    let request = WorkflowRequest {
        target_branch: target_branch.to_string(),
        dry_run: options.dry_run,
        force: options.force,
    };

    let progress = CliProgress::new();
    run_merge_workflow(&request, &ctx.repo, &TerminalConfirmer, &progress).await
}
