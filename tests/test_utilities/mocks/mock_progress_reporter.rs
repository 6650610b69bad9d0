use metadata_rules::prelude::*;
use std::sync::{Arc, Mutex};

/// What the use case told the user, in order
#[derive(Debug, Clone, PartialEq)]
pub enum ReportedEvent {
    Message(String),
    Progress { current: usize, total: usize, file: Option<String> },
    Warning(String),
    Completion(String),
}

/// Mock ProgressReporter recording every event; clones share the log
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ReportedEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Files announced through progress updates, in processing order
    pub fn processed_files(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportedEvent::Progress { file, .. } => file,
                _ => None,
            })
            .collect()
    }

    /// Per-component `📝` rewrite summaries
    pub fn rewrite_summaries(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportedEvent::Message(m) if m.starts_with('📝') => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn completion(&self) -> Option<String> {
        self.events().into_iter().find_map(|event| match event {
            ReportedEvent::Completion(m) => Some(m),
            _ => None,
        })
    }

    fn record(&self, event: ReportedEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(ReportedEvent::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.record(ReportedEvent::Progress {
            current,
            total,
            file: message.map(str::to_string),
        });
    }

    fn report_warning(&self, message: &str) {
        self.record(ReportedEvent::Warning(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.record(ReportedEvent::Completion(message.to_string()));
    }
}
