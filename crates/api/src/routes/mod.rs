pub mod categories;
pub mod health;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tasks                 list, create
/// /tasks/{id}            set completion (PUT), delete
///
/// /categories            list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tasks", tasks::router())
        .nest("/categories", categories::router())
}
