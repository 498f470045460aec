pub mod health;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                        list, create
/// /projects/{id}                   get_by_id
/// /projects/{id}/interactions      add_interaction
/// /projects/{id}/tasks             add_task
/// /tasks/{id}                      update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
}
