//! Command-line glue around the merge workflow

pub mod context;
pub mod merge;
pub mod progress;
pub mod style;

pub use merge::{run_merge, MergeOptions};
pub use progress::CliProgress;
