//! HTTP-level integration tests for the project endpoints.
//!
//! Requests go straight to the router through `tower::ServiceExt`, with the
//! service backed by a seeded in-memory store.

mod common;

use std::sync::Arc;

use agency_core::projects::memory::InMemoryStore;
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, get, post_json, put_json};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn project_body(name: &str) -> Value {
    json!({
        "name": name,
        "start": "2025-01-01T00:00:00Z",
        "end": "2025-06-01T00:00:00Z",
        "client": 3,
        "campaign_type": 2,
    })
}

fn task_body(name: &str, status: i64, user: i64) -> Value {
    json!({
        "name": name,
        "due_date": Utc::now() + Duration::days(7),
        "status": status,
        "user": user,
    })
}

async fn create_project(store: &Arc<InMemoryStore>, name: &str) -> String {
    let app = common::build_test_app_with(store.clone());
    let response = post_json(app, "/api/v1/projects", project_body(name)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_project_returns_201_with_resolved_references() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/projects", project_body("Campaign A")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Campaign A");
    assert_eq!(json["data"]["client"]["name"], "Ana Torres");
    assert_eq!(json["data"]["campaign_type"]["name"], "PPC");
    assert_eq!(json["interactions"], json!([]));
    assert_eq!(json["tasks"], json!([]));
}

#[tokio::test]
async fn duplicate_project_name_returns_400() {
    let store = Arc::new(InMemoryStore::seeded());
    create_project(&store, "Campaign A").await;

    let app = common::build_test_app_with(store);
    let response = post_json(app, "/api/v1/projects", project_body("Campaign A")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "A project with the same name already exists.");
}

#[tokio::test]
async fn end_before_start_returns_400() {
    let store = Arc::new(InMemoryStore::seeded());
    let app = common::build_test_app_with(store.clone());
    let mut body = project_body("Backwards");
    body["end"] = json!("2024-12-31T00:00:00Z");

    let response = post_json(app, "/api/v1/projects", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Project end date can't be earlier than the start date."
    );
    assert_eq!(store.store_calls(), 0);
}

#[tokio::test]
async fn unknown_client_serializes_as_null() {
    let app = common::build_test_app();
    let mut body = project_body("Orphan");
    body["client"] = json!(999);

    let response = post_json(app, "/api/v1/projects", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["client"].is_null());
}

#[tokio::test]
async fn malformed_body_is_rejected_before_the_service() {
    let store = Arc::new(InMemoryStore::seeded());
    let app = common::build_test_app_with(store.clone());

    let response = post_json(app, "/api/v1/projects", json!({"name": "No dates"})).await;

    assert!(response.status().is_client_error());
    assert_eq!(store.store_calls(), 0);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_missing_project_returns_404() {
    let app = common::build_test_app();
    let response = get(
        app,
        "/api/v1/projects/00000000-0000-0000-0000-000000000001",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn get_with_non_uuid_id_returns_400() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/projects/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_projects_filters_by_name_and_wraps_in_data() {
    let store = Arc::new(InMemoryStore::seeded());
    create_project(&store, "Summer Launch").await;
    create_project(&store, "Winter Launch").await;

    let app = common::build_test_app_with(store);
    let response = get(app, "/api/v1/projects?name=summer").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Summer Launch");
}

#[tokio::test]
async fn list_projects_pages_with_offset_and_size() {
    let store = Arc::new(InMemoryStore::seeded());
    for name in ["One", "Two", "Three"] {
        create_project(&store, name).await;
    }

    let app = common::build_test_app_with(store.clone());
    let response = get(app, "/api/v1/projects?offset=0&size=2").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app_with(store);
    let response = get(app, "/api/v1/projects?offset=2&size=2").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Interactions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_interaction_returns_201_and_appears_on_project() {
    let store = Arc::new(InMemoryStore::seeded());
    let id = create_project(&store, "Campaign A").await;

    let app = common::build_test_app_with(store.clone());
    let response = post_json(
        app,
        &format!("/api/v1/projects/{id}/interactions"),
        json!({
            "notes": "Kickoff call",
            "date": "2025-01-10T15:00:00Z",
            "interaction_type": 1,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["interaction_type"]["name"], "Initial Meeting");
    assert_eq!(json["data"]["project_id"], id.as_str());

    let app = common::build_test_app_with(store);
    let json = body_json(get(app, &format!("/api/v1/projects/{id}")).await).await;
    assert_eq!(json["interactions"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn add_interaction_with_blank_notes_makes_no_store_calls() {
    let store = Arc::new(InMemoryStore::seeded());
    let id = create_project(&store, "Campaign A").await;
    let calls_before = store.store_calls();

    let app = common::build_test_app_with(store.clone());
    let response = post_json(
        app,
        &format!("/api/v1/projects/{id}/interactions"),
        json!({
            "notes": "   ",
            "date": "2025-01-10T15:00:00Z",
            "interaction_type": 1,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Notes cannot be null or empty.");
    assert_eq!(store.store_calls(), calls_before);
}

#[tokio::test]
async fn add_interaction_to_missing_project_returns_404() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/projects/00000000-0000-0000-0000-000000000001/interactions",
        json!({
            "notes": "Kickoff call",
            "date": "2025-01-10T15:00:00Z",
            "interaction_type": 1,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_task_with_past_due_date_returns_400() {
    let store = Arc::new(InMemoryStore::seeded());
    let id = create_project(&store, "Campaign A").await;

    let app = common::build_test_app_with(store);
    let mut body = task_body("Draft brief", 1, 1);
    body["due_date"] = json!(Utc::now() - Duration::days(1));
    let response = post_json(app, &format!("/api/v1/projects/{id}/tasks"), body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Due date can't be null or in the past.");
}

#[tokio::test]
async fn update_missing_task_returns_404_without_writes() {
    let store = Arc::new(InMemoryStore::seeded());
    let app = common::build_test_app_with(store.clone());

    let response = put_json(
        app,
        "/api/v1/tasks/00000000-0000-0000-0000-000000000001",
        task_body("Ghost", 1, 1),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.store_writes(), 0);
}

#[tokio::test]
async fn add_then_update_task_is_reflected_on_project() {
    let store = Arc::new(InMemoryStore::seeded());
    let id = create_project(&store, "Campaign A").await;

    let app = common::build_test_app_with(store.clone());
    let response = post_json(
        app,
        &format!("/api/v1/projects/{id}/tasks"),
        task_body("Draft brief", 1, 1),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert!(created["data"]["updated_at"].is_null());
    let task_id = created["data"]["id"].as_str().unwrap().to_string();

    let app = common::build_test_app_with(store.clone());
    let response = put_json(
        app,
        &format!("/api/v1/tasks/{task_id}"),
        task_body("Final brief", 4, 5),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["name"], "Final brief");
    assert_eq!(updated["data"]["status"]["name"], "Done");
    assert_eq!(updated["data"]["user_assigned"]["name"], "Jazmin Fernandez");
    assert!(updated["data"]["updated_at"].is_string());

    let app = common::build_test_app_with(store);
    let json = body_json(get(app, &format!("/api/v1/projects/{id}")).await).await;
    let tasks = json["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["name"], "Final brief");
}
