//! In-memory owner of all live todo records.
//!
//! # Design
//! - Records live in a `Vec` so `list_all` preserves insertion order and a
//!   delete never reorders survivors.
//! - Every call takes the single `RwLock` for its whole duration, so no reader
//!   observes a half-applied mutation. `list_all` clones under the read guard
//!   and hands back a consistent snapshot.
//! - The lock is never held across an `.await`; all operations are
//!   synchronous and bounded.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::StoreError;
use crate::types::{DuplicateIdPolicy, TodoId, TodoRecord};

#[derive(Debug, Default)]
pub struct TodoStore {
    records: RwLock<Vec<TodoRecord>>,
    duplicate_ids: DuplicateIdPolicy,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(duplicate_ids: DuplicateIdPolicy) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            duplicate_ids,
        }
    }

    pub fn policy(&self) -> DuplicateIdPolicy {
        self.duplicate_ids
    }

    /// Every live record, in the order it was first inserted.
    pub fn list_all(&self) -> Result<Vec<TodoRecord>, StoreError> {
        Ok(self.read()?.clone())
    }

    /// The first live record with `id`, if any.
    pub fn get_by_id(&self, id: TodoId) -> Result<Option<TodoRecord>, StoreError> {
        Ok(self.read()?.iter().find(|r| r.id == id).cloned())
    }

    /// Append `record` as given. Whether an existing id is refused depends on
    /// the store's `DuplicateIdPolicy`.
    pub fn insert(&self, record: TodoRecord) -> Result<(), StoreError> {
        let mut records = self.write()?;
        if self.duplicate_ids == DuplicateIdPolicy::Reject
            && records.iter().any(|r| r.id == record.id)
        {
            return Err(StoreError::DuplicateId(record.id));
        }
        records.push(record);
        Ok(())
    }

    /// Overwrite `name` and `is_complete` of the record matching `record.id`.
    ///
    /// The stored id never changes. Returns whether a record matched; a miss
    /// leaves the collection untouched and is not an error.
    pub fn update(&self, record: &TodoRecord) -> Result<bool, StoreError> {
        let mut records = self.write()?;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                existing.name = record.name.clone();
                existing.is_complete = record.is_complete;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every record with `id` and return how many went. Zero is fine.
    pub fn delete(&self, id: TodoId) -> Result<usize, StoreError> {
        let mut records = self.write()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(before - records.len())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<TodoRecord>>, StoreError> {
        self.records.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<TodoRecord>>, StoreError> {
        self.records.write().map_err(|_| StoreError::Poisoned)
    }
}
