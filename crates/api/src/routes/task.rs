use axum::routing::put;
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", put(task::update))
}
