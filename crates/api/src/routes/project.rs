//! Route definitions for the `/projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create
/// GET    /{id}                  -> get_by_id
/// POST   /{id}/interactions     -> add_interaction
/// POST   /{id}/tasks            -> add_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", get(project::get_by_id))
        .route("/{id}/interactions", post(project::add_interaction))
        .route("/{id}/tasks", post(project::add_task))
}
