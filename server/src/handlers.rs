//! Request handlers: one store call per route.
//!
//! Each CRUD handler logs exactly one line on its normal path. Any fault (a store
//! error or an extractor rejection) is logged at error severity with the
//! operation and id, then returned unchanged for `ApiError::into_response`.
//! Update and delete confirm success whether or not a record matched.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde::Serialize;
use todo_core::{LogSink, StoreError, TodoId, TodoRecord};

use crate::error::ApiError;
use crate::state::AppState;

type PathId = Result<Path<TodoId>, PathRejection>;
type RecordBody = Result<Json<TodoRecord>, JsonRejection>;

/// Log `err` with `context` and hand it back for propagation.
fn fault(log: &dyn LogSink, context: &str, err: impl Into<ApiError>) -> ApiError {
    let err = err.into();
    log.error(context, &err);
    err
}

pub async fn read_all(State(state): State<AppState>) -> Result<Json<Vec<TodoRecord>>, ApiError> {
    let todos = state
        .store
        .list_all()
        .map_err(|e| fault(&*state.log, "An error occurred while fetching todos.", e))?;

    state.log.info("User interacted with todo data.");
    Ok(Json(todos))
}

pub async fn read_by_id(
    State(state): State<AppState>,
    id: PathId,
) -> Result<Json<TodoRecord>, ApiError> {
    let Path(id) = id.map_err(|e| {
        fault(&*state.log, "An error occurred while reading the todo ID to fetch.", e)
    })?;

    let todo = state.store.get_by_id(id).map_err(|e| {
        fault(
            &*state.log,
            &format!("An error occurred while fetching todo with ID {id}."),
            e,
        )
    })?;

    state.log.info(&format!("Fetched data with ID : {id}."));
    todo.map(Json).ok_or(ApiError::NotFound(id))
}

pub async fn create(State(state): State<AppState>, body: RecordBody) -> Result<Json<TodoRecord>, ApiError> {
    let Json(todo) = body
        .map_err(|e| fault(&*state.log, "An error occurred while creating a new todo.", e))?;

    match state.store.insert(todo.clone()) {
        Ok(()) => {}
        // an expected outcome under the reject policy, not a fault
        Err(e @ StoreError::DuplicateId(_)) => return Err(e.into()),
        Err(e) => {
            return Err(fault(
                &*state.log,
                "An error occurred while creating a new todo.",
                e,
            ))
        }
    }

    state
        .log
        .info(&format!("Added new todo item with ID {}.", todo.id));
    Ok(Json(todo))
}

pub async fn update(
    State(state): State<AppState>,
    id: PathId,
    body: RecordBody,
) -> Result<String, ApiError> {
    let Path(id) = id.map_err(|e| {
        fault(&*state.log, "An error occurred while reading the todo ID to update.", e)
    })?;
    let context = format!("An error occurred while updating todo with ID {id}.");
    let Json(todo) = body.map_err(|e| fault(&*state.log, &context, e))?;

    if id != todo.id {
        return Err(ApiError::IdMismatch {
            path: id,
            body: todo.id,
        });
    }

    let matched = state
        .store
        .update(&todo)
        .map_err(|e| fault(&*state.log, &context, e))?;
    tracing::debug!(id, matched, "update applied");

    let message = format!("Updated todo item with ID {}.", todo.id);
    state.log.info(&message);
    Ok(message)
}

pub async fn delete(State(state): State<AppState>, id: PathId) -> Result<String, ApiError> {
    let Path(id) = id.map_err(|e| {
        fault(&*state.log, "An error occurred while reading the todo ID to delete.", e)
    })?;

    let removed = state.store.delete(id).map_err(|e| {
        fault(
            &*state.log,
            &format!("An error occurred while deleting todo with ID {id}."),
            e,
        )
    })?;
    tracing::debug!(id, removed, "delete applied");

    let message = format!("Deleted todo item with ID {id}.");
    state.log.info(&message);
    Ok(message)
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub records: usize,
}

pub async fn health(State(state): State<AppState>) -> Result<Json<Health>, ApiError> {
    let records = state
        .store
        .len()
        .map_err(|e| fault(&*state.log, "An error occurred while checking health.", e))?;
    Ok(Json(Health {
        status: "ok",
        records,
    }))
}
