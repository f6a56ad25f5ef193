//! Console rendering of workflow progress

use crate::cli::style::{arrow, check, cross, info, spinner_style, warning, Stylize};
use anstream::println;
use async_trait::async_trait;
use devkit::workflow::{quoted, ConflictReport, Phase, ProgressCallback, WorkflowPlan};
use indicatif::ProgressBar;
use std::sync::Mutex;
use std::time::Duration;

const SEPARATOR_WIDTH: usize = 50;

/// Progress callback that prints to the terminal
///
/// Running tasks show a spinner; finished tasks are printed as plain lines
/// on stdout so the log survives when stdout is not a terminal.
#[derive(Default)]
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create a progress renderer with no running task
    pub fn new() -> Self {
        Self::default()
    }

    fn start_spinner(&self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));

        if let Some(previous) = self.replace_spinner(Some(spinner)) {
            previous.finish_and_clear();
        }
    }

    /// Clear the running spinner, if any, before printing a line
    fn clear_spinner(&self) {
        if let Some(spinner) = self.replace_spinner(None) {
            spinner.finish_and_clear();
        }
    }

    fn replace_spinner(&self, next: Option<ProgressBar>) -> Option<ProgressBar> {
        match self.spinner.lock() {
            Ok(mut guard) => std::mem::replace(&mut *guard, next),
            Err(poisoned) => std::mem::replace(&mut *poisoned.into_inner(), next),
        }
    }
}

fn print_header(title: &str) {
    println!();
    println!("{}", title.header());
    println!("{}", "─".repeat(SEPARATOR_WIDTH).muted());
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        self.clear_spinner();
        let icon = match phase {
            Phase::Preflight => "🔍",
            Phase::Execute => "🚀",
        };
        print_header(&format!("{icon} {phase}"));
    }

    async fn on_task_started(&self, message: &str) {
        self.start_spinner(message);
    }

    async fn on_task_succeeded(&self, message: &str) {
        self.clear_spinner();
        println!("{} {message}", check());
    }

    async fn on_task_failed(&self, message: &str) {
        self.clear_spinner();
        println!("{} {}", cross(), message.error());
    }

    async fn on_plan(&self, plan: &WorkflowPlan) {
        self.clear_spinner();
        print_header(&format!("📋 {}", plan.title()));
        for line in plan.lines() {
            println!("{} {line}", arrow());
        }
        println!();
        println!("{} Source branch: {}", info(), quoted(&plan.source).accent());
        println!("{} Target branch: {}", info(), quoted(&plan.target).accent());
    }

    async fn on_conflict(&self, report: &ConflictReport) {
        self.clear_spinner();
        println!(
            "{} {}",
            cross(),
            "Merge conflicts detected in the following files:".error()
        );
        for file in &report.files {
            println!("{}   - {}", cross(), file.error());
        }
        println!("{} Please resolve conflicts manually and run:", info());
        for command in &report.commands {
            println!("{} {}", info(), format!("$ {command}").muted());
        }
    }

    async fn on_info(&self, message: &str) {
        self.clear_spinner();
        println!("{} {message}", info());
    }

    async fn on_success(&self, message: &str) {
        self.clear_spinner();
        println!();
        println!("{} {}", check(), format!("🎉 {message}").success());
    }

    async fn on_warning(&self, message: &str) {
        self.clear_spinner();
        println!("{} {}", warning(), message.warn());
    }
}
