//! Handlers for the task endpoints.
//!
//! Handlers only unwrap the request and wrap the response; validation and
//! effective-category resolution live in [`tasklist_db::services::TaskService`].

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use tasklist_core::types::DbId;
use tasklist_db::models::task::{CreateTask, UpdateTaskCompletion};

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::response::{Envelope, MSG_DELETED, MSG_SUCCESS};
use crate::state::AppState;

/// GET /api/tasks
///
/// List all tasks, newest first, each with its effective category and color.
pub async fn list_tasks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tasks = state.tasks.list_tasks().await?;

    Ok(Json(Envelope::data(tasks)))
}

/// POST /api/tasks
pub async fn create_task(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTask>,
) -> AppResult<impl IntoResponse> {
    let task = state.tasks.create_task(&input).await?;

    Ok(Json(Envelope::data(task)))
}

/// PUT /api/tasks/{id}
///
/// Set the completion flag. An unknown id is not an error; it reports
/// `changes: 0`.
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    JsonBody(input): JsonBody<UpdateTaskCompletion>,
) -> AppResult<impl IntoResponse> {
    let changes = state.tasks.set_completed(task_id, input.completed).await?;

    Ok(Json(Envelope::changes(MSG_SUCCESS, changes)))
}

/// DELETE /api/tasks/{id}
///
/// Reports `changes: 0` when the task does not exist.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let changes = state.tasks.delete_task(task_id).await?;

    Ok(Json(Envelope::changes(MSG_DELETED, changes)))
}
