//! devkit - merge the current branch into a target branch and push it
//!
//! The library holds the merge workflow engine and the git capability it
//! drives. The `devkit` binary is a thin CLI on top.

pub mod error;
pub mod repo;
pub mod types;
pub mod workflow;
