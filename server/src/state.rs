//! Shared state handed to every handler.

use std::sync::Arc;

use todo_core::{DuplicateIdPolicy, LogSink, TodoStore, TracingSink};

/// The store and the log sink, both shared by reference across requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TodoStore>,
    pub log: Arc<dyn LogSink>,
}

impl AppState {
    pub fn new(store: Arc<TodoStore>, log: Arc<dyn LogSink>) -> Self {
        Self { store, log }
    }

    /// An empty store logging through `tracing`.
    pub fn in_memory(duplicate_ids: DuplicateIdPolicy) -> Self {
        Self::new(
            Arc::new(TodoStore::with_policy(duplicate_ids)),
            Arc::new(TracingSink),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(DuplicateIdPolicy::default())
    }
}
