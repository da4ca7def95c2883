//! Domain types for the todo service.
//!
//! # Design
//! `TodoRecord` is both the stored value and the wire shape. Missing JSON
//! fields decode to their defaults so a body like `{"id": 3}` is accepted as
//! `{id: 3, name: null, isComplete: false}`.

use serde::{Deserialize, Serialize};

/// Identifier of a todo record. Supplied by the caller on create.
pub type TodoId = i32;

/// A single todo entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TodoRecord {
    pub id: TodoId,
    pub name: Option<String>,
    pub is_complete: bool,
}

impl TodoRecord {
    pub fn new(id: TodoId, name: impl Into<String>, is_complete: bool) -> Self {
        Self {
            id,
            name: Some(name.into()),
            is_complete,
        }
    }
}

/// What `TodoStore::insert` does when a live record already uses the id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateIdPolicy {
    /// Append anyway. Lookups and updates then see the first-inserted record;
    /// delete removes every record carrying the id.
    #[default]
    Allow,
    /// Refuse the insert with `StoreError::DuplicateId`.
    Reject,
}
