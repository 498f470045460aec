//! Project, interaction and task rows.

use agency_core::projects::model::{Interaction, Project, Task};
use agency_core::types::{DbId, EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: EntityId,
    pub name: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub client_id: DbId,
    pub campaign_type_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            start_date: project.start_date,
            end_date: project.end_date,
            client_id: project.client_id,
            campaign_type_id: project.campaign_type_id,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            start_date: row.start_date,
            end_date: row.end_date,
            client_id: row.client_id,
            campaign_type_id: row.campaign_type_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// A row from the `interactions` table.
#[derive(Debug, Clone, FromRow)]
pub struct InteractionRow {
    pub id: EntityId,
    pub project_id: EntityId,
    pub notes: String,
    pub date: Timestamp,
    pub interaction_type_id: DbId,
}

impl From<&Interaction> for InteractionRow {
    fn from(interaction: &Interaction) -> Self {
        Self {
            id: interaction.id,
            project_id: interaction.project_id,
            notes: interaction.notes.clone(),
            date: interaction.date,
            interaction_type_id: interaction.interaction_type_id,
        }
    }
}

impl From<InteractionRow> for Interaction {
    fn from(row: InteractionRow) -> Self {
        Self {
            id: row.id,
            project_id: row.project_id,
            notes: row.notes,
            date: row.date,
            interaction_type_id: row.interaction_type_id,
        }
    }
}

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: EntityId,
    pub project_id: EntityId,
    pub name: String,
    pub due_date: Timestamp,
    pub status_id: DbId,
    pub assigned_to: DbId,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            project_id: task.project_id,
            name: task.name.clone(),
            due_date: task.due_date,
            status_id: task.status_id,
            assigned_to: task.assigned_to,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: row.id,
            project_id: row.project_id,
            name: row.name,
            due_date: row.due_date,
            status_id: row.status_id,
            assigned_to: row.assigned_to,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
