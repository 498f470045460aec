//! Stored entities and the read-only reference records they point at.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, EntityId, Timestamp};

/// A project row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub client_id: DbId,
    pub campaign_type_id: DbId,
    pub created_at: Timestamp,
    /// Set whenever an interaction or task is added to the project.
    pub updated_at: Option<Timestamp>,
}

/// A note or event recorded against a project. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: EntityId,
    pub project_id: EntityId,
    pub notes: String,
    pub date: Timestamp,
    pub interaction_type_id: DbId,
}

/// A unit of work assigned to a user within a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntityId,
    pub project_id: EntityId,
    pub name: String,
    pub due_date: Timestamp,
    pub status_id: DbId,
    pub assigned_to: DbId,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// A project loaded together with its children.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectAggregate {
    pub project: Project,
    pub interactions: Vec<Interaction>,
    pub tasks: Vec<Task>,
}

/// Filters and paging for project listings. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectFilter {
    pub name: Option<String>,
    pub campaign: Option<DbId>,
    pub client: Option<DbId>,
    pub offset: Option<i64>,
    pub size: Option<i64>,
}

// ---------------------------------------------------------------------------
// Reference records
// ---------------------------------------------------------------------------

/// Generic `{ id, name }` lookup record (campaign types, task statuses,
/// interaction types).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRecord {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
}
