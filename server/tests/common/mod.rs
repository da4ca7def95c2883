//! Shared helpers for the server's integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use todo_core::{DuplicateIdPolicy, LogSink, Severity, TodoStore};
use todo_server::AppState;

/// One captured log call.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub severity: Severity,
    pub message: String,
    pub error: Option<String>,
}

/// Log sink that keeps every line for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<Line>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<Line> {
        self.lines.lock().unwrap().clone()
    }

    pub fn at(&self, severity: Severity) -> Vec<Line> {
        self.lines()
            .into_iter()
            .filter(|l| l.severity == severity)
            .collect()
    }
}

impl LogSink for RecordingSink {
    fn log(&self, severity: Severity, message: &str, error: Option<&(dyn std::error::Error + 'static)>) {
        self.lines.lock().unwrap().push(Line {
            severity,
            message: message.to_string(),
            error: error.map(|e| e.to_string()),
        });
    }
}

pub struct Harness {
    pub state: AppState,
    pub store: Arc<TodoStore>,
    pub sink: Arc<RecordingSink>,
}

pub fn harness() -> Harness {
    harness_with(DuplicateIdPolicy::Allow)
}

pub fn harness_with(policy: DuplicateIdPolicy) -> Harness {
    let store = Arc::new(TodoStore::with_policy(policy));
    let sink = Arc::new(RecordingSink::default());
    let state = AppState::new(store.clone(), sink.clone());
    Harness { state, store, sink }
}
