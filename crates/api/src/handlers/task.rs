//! Handlers for the `/tasks` resource.

use agency_core::projects::request::TaskRequest;
use agency_core::projects::view::TaskView;
use agency_core::types::EntityId;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /api/v1/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<TaskRequest>,
) -> AppResult<Json<DataResponse<TaskView>>> {
    let task = state.projects.update_task(id, input).await?;
    Ok(Json(DataResponse { data: task }))
}
