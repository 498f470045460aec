//! Handlers for the `/projects` resource and its interactions and tasks.

use agency_core::projects::model::ProjectFilter;
use agency_core::projects::request::{CreateInteractionRequest, CreateProjectRequest, TaskRequest};
use agency_core::projects::view::{InteractionView, ProjectDetails, ProjectView, TaskView};
use agency_core::types::EntityId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<ProjectDetails>)> {
    let details = state.projects.create_project(input).await?;
    Ok((StatusCode::CREATED, Json(details)))
}

/// GET /api/v1/projects?name=&campaign=&client=&offset=&size=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> AppResult<Json<DataResponse<Vec<ProjectView>>>> {
    let projects = state.projects.get_projects(&filter).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<ProjectDetails>> {
    let details = state.projects.get_project_by_id(id).await?;
    Ok(Json(details))
}

/// POST /api/v1/projects/{id}/interactions
pub async fn add_interaction(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<CreateInteractionRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<InteractionView>>)> {
    let interaction = state.projects.add_interaction(id, input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: interaction })))
}

/// POST /api/v1/projects/{id}/tasks
pub async fn add_task(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<TaskRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<TaskView>>)> {
    let task = state.projects.add_task(id, input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}
