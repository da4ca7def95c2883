//! Error types for the record store.
//!
//! # Design
//! Absence is not an error: lookups return `Option` and missing-id mutations
//! are silent no-ops. The variants here are the only ways a store call can
//! fail.

use thiserror::Error;

use crate::types::TodoId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A writer panicked while holding the lock; the collection may be
    /// half-mutated and is no longer trusted.
    #[error("todo store lock poisoned")]
    Poisoned,

    /// Insert refused under `DuplicateIdPolicy::Reject`.
    #[error("a todo item with ID {0} already exists")]
    DuplicateId(TodoId),
}
