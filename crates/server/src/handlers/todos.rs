//! Handlers for `/todos`. Mutations address records by path id.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use mockbase_core::{CreateTodo, RecordId, Todo, TodoPatch};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /todos`
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "todos": state.todos.list() }))
}

/// `POST /todos`
pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(draft) = payload?;
    let todo = state.todos.create(draft)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// `PATCH /todos/{id}`
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<RecordId>,
    payload: Result<Json<TodoPatch>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Json(patch) = payload?;
    let todo = state.todos.update(&id, patch)?;
    Ok(Json(todo))
}

/// `DELETE /todos/{id}`
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<RecordId>,
) -> Result<StatusCode, ApiError> {
    state.todos.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
