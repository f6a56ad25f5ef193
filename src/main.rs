//! devkit CLI entry point

mod cli;

use crate::cli::style::{cross, Stylize};
use crate::cli::{run_merge, MergeOptions};
use anstream::eprintln;
use clap::{ArgAction, Parser, Subcommand};
use devkit::repo::DEFAULT_REMOTE;
use devkit::types::WorkflowOutcome;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "devkit",
    version,
    about = "A CLI tool to simplify dev workflow",
    arg_required_else_help = true
)]
struct Cli {
    /// Path to the repository working directory
    #[arg(long, global = true, default_value = ".")]
    path: PathBuf,

    /// Remote to fetch from, pull from and push to
    #[arg(long, global = true, default_value = DEFAULT_REMOTE)]
    remote: String,

    /// Diagnostic logging on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge current branch into target branch
    Merge {
        /// Target branch to merge into
        target_branch: String,

        /// Show what would be done without executing
        #[arg(short, long)]
        dry_run: bool,

        /// Force merge without confirmation (use with caution)
        #[arg(short, long)]
        force: bool,
    },
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "error",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("devkit={level}")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<WorkflowOutcome> {
    match cli.command {
        Commands::Merge {
            target_branch,
            dry_run,
            force,
        } => {
            let options = MergeOptions { dry_run, force };
            let outcome = run_merge(&cli.path, &cli.remote, &target_branch, options).await?;
            Ok(outcome)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Help and version go to stdout; every usage error exits with 1
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(outcome) => {
            tracing::debug!(?outcome, "merge command finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{} {}",
                cross(),
                format!("Merge operation failed: {e:#}").error()
            );
            ExitCode::FAILURE
        }
    }
}
