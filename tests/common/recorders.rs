//! Recording doubles for the confirmation prompt and progress reporting

#![allow(dead_code)]

use async_trait::async_trait;
use devkit::error::{Error, Result};
use devkit::workflow::{ConflictReport, Confirmer, Phase, ProgressCallback, WorkflowPlan};
use std::sync::Mutex;

/// Confirmer with a fixed answer that records every prompt
pub struct MockConfirmer {
    answer: Option<bool>,
    prompts: Mutex<Vec<(String, bool)>>,
}

impl MockConfirmer {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: Some(answer),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Confirmer whose prompt fails, as with a closed terminal
    pub fn broken() -> Self {
        Self {
            answer: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<(String, bool)> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl Confirmer for MockConfirmer {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), default));
        self.answer
            .ok_or_else(|| Error::Internal("Failed to read confirmation: not a terminal".into()))
    }
}

/// One reported event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Phase(Phase),
    TaskStarted(String),
    TaskSucceeded(String),
    TaskFailed(String),
    Plan(WorkflowPlan),
    Conflict(ConflictReport),
    Info(String),
    Success(String),
    Warning(String),
}

/// Progress callback that keeps every event in order
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<Event>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Warning(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Info(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn started_tasks(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::TaskStarted(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn conflicts(&self) -> Vec<ConflictReport> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Conflict(report) => Some(report),
                _ => None,
            })
            .collect()
    }

    pub fn plans(&self) -> Vec<WorkflowPlan> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Plan(plan) => Some(plan),
                _ => None,
            })
            .collect()
    }

    /// Position of the first event matching `pred`
    pub fn position(&self, pred: impl Fn(&Event) -> bool) -> Option<usize> {
        self.events().iter().position(pred)
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_phase(&self, phase: Phase) {
        self.push(Event::Phase(phase));
    }

    async fn on_task_started(&self, message: &str) {
        self.push(Event::TaskStarted(message.to_string()));
    }

    async fn on_task_succeeded(&self, message: &str) {
        self.push(Event::TaskSucceeded(message.to_string()));
    }

    async fn on_task_failed(&self, message: &str) {
        self.push(Event::TaskFailed(message.to_string()));
    }

    async fn on_plan(&self, plan: &WorkflowPlan) {
        self.push(Event::Plan(plan.clone()));
    }

    async fn on_conflict(&self, report: &ConflictReport) {
        self.push(Event::Conflict(report.clone()));
    }

    async fn on_info(&self, message: &str) {
        self.push(Event::Info(message.to_string()));
    }

    async fn on_success(&self, message: &str) {
        self.push(Event::Success(message.to_string()));
    }

    async fn on_warning(&self, message: &str) {
        self.push(Event::Warning(message.to_string()));
    }
}
