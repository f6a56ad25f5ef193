//! Shared test helpers

#![allow(dead_code, unused_imports)]

mod recorders;
mod temp_repo;

pub use mock_repo::{MockRepositoryService, RepoCall};
pub use recorders::{Event, MockConfirmer, RecordingProgress};
pub use temp_repo::{git, TempGitRepo};

use devkit::types::WorkflowRequest;

/// Request merging into `target` with the given flags
pub fn request(target: &str, dry_run: bool, force: bool) -> WorkflowRequest {
    WorkflowRequest {
        target_branch: target.to_string(),
        dry_run,
        force,
    }
}

/// `feature-x` checked out and clean, `main` known only on the remote
pub fn feature_x_with_remote_main() -> MockRepositoryService {
    let mock = MockRepositoryService::on_branch("feature-x");
    mock.add_remote_branch("main");
    mock
}
