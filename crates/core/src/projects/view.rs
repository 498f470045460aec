//! Display-ready shapes returned to callers.
//!
//! A view pairs a stored entity with the reference records it points at.
//! References that did not resolve serialize as `null`.

use serde::Serialize;

use crate::types::{EntityId, Timestamp};

use super::model::{Client, Interaction, NamedRecord, Project, Task, User};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectView {
    pub id: EntityId,
    pub name: String,
    pub start: Timestamp,
    pub end: Timestamp,
    pub client: Option<Client>,
    pub campaign_type: Option<NamedRecord>,
}

impl ProjectView {
    pub fn new(
        project: &Project,
        client: Option<Client>,
        campaign_type: Option<NamedRecord>,
    ) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            start: project.start_date,
            end: project.end_date,
            client,
            campaign_type,
        }
    }
}

/// A project with its interactions and tasks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetails {
    pub data: ProjectView,
    pub interactions: Vec<InteractionView>,
    pub tasks: Vec<TaskView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionView {
    pub id: EntityId,
    pub notes: String,
    pub date: Timestamp,
    pub project_id: EntityId,
    pub interaction_type: Option<NamedRecord>,
}

impl InteractionView {
    pub fn new(interaction: &Interaction, interaction_type: Option<NamedRecord>) -> Self {
        Self {
            id: interaction.id,
            notes: interaction.notes.clone(),
            date: interaction.date,
            project_id: interaction.project_id,
            interaction_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskView {
    pub id: EntityId,
    pub name: String,
    pub due_date: Timestamp,
    pub project_id: EntityId,
    pub status: Option<NamedRecord>,
    pub user_assigned: Option<User>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl TaskView {
    pub fn new(task: &Task, status: Option<NamedRecord>, user_assigned: Option<User>) -> Self {
        Self {
            id: task.id,
            name: task.name.clone(),
            due_date: task.due_date,
            project_id: task.project_id,
            status,
            user_assigned,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}
