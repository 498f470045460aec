//! Inbound request shapes.
//!
//! Scalar fields default when absent so that a missing value reaches
//! [`super::validation`] and is reported with a descriptive message instead
//! of failing deserialization.

use serde::Deserialize;

use crate::types::{DbId, Timestamp};

/// Body of a create-project request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub name: String,
    pub start: Timestamp,
    pub end: Timestamp,
    #[serde(default)]
    pub client: DbId,
    #[serde(default)]
    pub campaign_type: DbId,
}

/// Body of an add-interaction request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInteractionRequest {
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub date: Option<Timestamp>,
    #[serde(default)]
    pub interaction_type: DbId,
}

/// Body shared by add-task and update-task requests.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub due_date: Option<Timestamp>,
    #[serde(default)]
    pub status: DbId,
    #[serde(default)]
    pub user: DbId,
}
