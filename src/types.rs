//! Core types for devkit

/// A single merge request, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowRequest {
    /// Branch the current branch is merged into
    pub target_branch: String,
    /// Preflight and plan only, no mutation
    pub dry_run: bool,
    /// Skip the confirmation prompt
    pub force: bool,
}

impl WorkflowRequest {
    /// Create a request with both flags off
    pub fn new(target_branch: impl Into<String>) -> Self {
        Self {
            target_branch: target_branch.into(),
            dry_run: false,
            force: false,
        }
    }
}

/// Snapshot of the working tree
///
/// Produced fresh by every status query. Never cache it across workflow
/// steps: the working tree can change between checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryStatus {
    /// Checked-out branch, `"HEAD"` when detached
    pub current_branch: String,
    /// No staged, modified or untracked files
    pub is_clean: bool,
    /// Commits ahead of upstream
    pub ahead: u32,
    /// Commits behind upstream
    pub behind: u32,
    /// Unmerged paths, in the order git reported them
    pub conflicted: Vec<String>,
}

/// Result of a merge attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Merge completed
    Success,
    /// Merge stopped on conflicts
    Conflict {
        /// Conflicted paths, in reported order
        files: Vec<String>,
    },
    /// Merge failed for another reason
    OtherFailure {
        /// Raw git message
        message: String,
    },
}

impl MergeOutcome {
    /// Check if the merge completed
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// One step of the merge workflow, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WorkflowStep {
    /// Check out the target branch
    SwitchToTarget,
    /// Pull the target branch from the remote
    PullTarget,
    /// Merge the source branch into the target
    MergeSource,
    /// Push the target branch
    PushTarget,
    /// Return to the source branch
    SwitchBack,
}

impl WorkflowStep {
    /// All steps in execution order
    pub const ALL: [Self; 5] = [
        Self::SwitchToTarget,
        Self::PullTarget,
        Self::MergeSource,
        Self::PushTarget,
        Self::SwitchBack,
    ];

    /// 1-based position in the workflow
    pub const fn number(self) -> usize {
        self as usize + 1
    }

    /// Whether a failure at this step leaves us on the target branch
    ///
    /// Failing to switch to the target changes nothing, and failing to
    /// switch back is already the rollback action.
    pub const fn needs_rollback(self) -> bool {
        matches!(self, Self::PullTarget | Self::MergeSource | Self::PushTarget)
    }
}

impl std::fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SwitchToTarget => write!(f, "switch to target"),
            Self::PullTarget => write!(f, "pull target"),
            Self::MergeSource => write!(f, "merge source"),
            Self::PushTarget => write!(f, "push target"),
            Self::SwitchBack => write!(f, "switch back"),
        }
    }
}

/// How a workflow run ended without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// All five steps ran
    Completed,
    /// Dry run: plan shown, nothing changed
    DryRun,
    /// User declined the confirmation prompt
    Cancelled,
}
