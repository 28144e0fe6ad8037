//! Route definitions for tasks, mounted at `/api/tasks`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// ```text
/// GET    /          -> list_tasks
/// POST   /          -> create_task
/// PUT    /{id}      -> update_task
/// DELETE /{id}      -> delete_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list_tasks).post(tasks::create_task))
        .route("/{id}", put(tasks::update_task).delete(tasks::delete_task))
}
