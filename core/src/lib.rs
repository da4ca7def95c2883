//! Record store and logging capability for the todo service.
//!
//! # Overview
//! `TodoStore` owns the single in-memory collection of `TodoRecord`s and
//! answers list/get/insert/update/delete keyed by an integer id. It knows
//! nothing about HTTP; the server crate maps requests onto it.
//!
//! # Design
//! - The store is an ordinary value shared by `Arc`, never a global.
//! - Lookups return `Option`; update and delete on a missing id are silent
//!   no-ops. Only lock poisoning and a refused duplicate are errors.
//! - `LogSink` is the narrow logging capability handlers are given.

pub mod error;
pub mod log;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use log::{LogSink, Severity, TracingSink};
pub use store::TodoStore;
pub use types::{DuplicateIdPolicy, TodoId, TodoRecord};
