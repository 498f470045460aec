//! PostgreSQL adapter for the project store and lookup resolvers.
//!
//! Every sqlx failure is surfaced as [`CoreError::Storage`] with the
//! underlying `sqlx::Error` as its source.

use agency_core::error::{CoreError, CoreResult};
use agency_core::paging::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use agency_core::projects::model::{
    Client, Interaction, NamedRecord, Project, ProjectAggregate, ProjectFilter, Task, User,
};
use agency_core::projects::ports::{
    CampaignTypeResolver, ClientResolver, HealthProbe, InteractionTypeResolver, ProjectCommand,
    ProjectQuery, TaskQuery, TaskStatusResolver, UserResolver,
};
use agency_core::types::{DbId, EntityId};
use async_trait::async_trait;

use crate::models::project::{InteractionRow, ProjectRow, TaskRow};
use crate::repositories::{InteractionRepo, LookupRepo, ProjectRepo, TaskRepo};
use crate::DbPool;

/// Implements every store and resolver port over one connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Store ports
// ---------------------------------------------------------------------------

#[async_trait]
impl ProjectQuery for PgStore {
    async fn get_project_by_id(&self, id: EntityId) -> CoreResult<Option<ProjectAggregate>> {
        let Some(project) = ProjectRepo::find_by_id(&self.pool, id)
            .await
            .map_err(CoreError::storage)?
        else {
            return Ok(None);
        };
        let interactions = InteractionRepo::list_by_project(&self.pool, id)
            .await
            .map_err(CoreError::storage)?;
        let tasks = TaskRepo::list_by_project(&self.pool, id)
            .await
            .map_err(CoreError::storage)?;

        Ok(Some(ProjectAggregate {
            project: project.into(),
            interactions: interactions.into_iter().map(Interaction::from).collect(),
            tasks: tasks.into_iter().map(Task::from).collect(),
        }))
    }

    async fn get_project_by_name(&self, name: &str) -> CoreResult<Option<Project>> {
        let row = ProjectRepo::find_by_name(&self.pool, name)
            .await
            .map_err(CoreError::storage)?;
        Ok(row.map(Project::from))
    }

    async fn list_projects(&self, filter: &ProjectFilter) -> CoreResult<Vec<Project>> {
        let limit = clamp_limit(filter.size, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
        let offset = clamp_offset(filter.offset);
        let rows = ProjectRepo::list(
            &self.pool,
            filter.name.as_deref(),
            filter.campaign,
            filter.client,
            limit,
            offset,
        )
        .await
        .map_err(CoreError::storage)?;
        tracing::debug!(limit, offset, returned = rows.len(), "Listed projects");
        Ok(rows.into_iter().map(Project::from).collect())
    }
}

#[async_trait]
impl TaskQuery for PgStore {
    async fn get_task_by_id(&self, id: EntityId) -> CoreResult<Option<Task>> {
        let row = TaskRepo::find_by_id(&self.pool, id)
            .await
            .map_err(CoreError::storage)?;
        Ok(row.map(Task::from))
    }
}

#[async_trait]
impl ProjectCommand for PgStore {
    async fn insert_project(&self, project: &Project) -> CoreResult<()> {
        ProjectRepo::create(&self.pool, &ProjectRow::from(project))
            .await
            .map_err(CoreError::storage)?;
        Ok(())
    }

    async fn update_project(&self, project: &Project) -> CoreResult<()> {
        ProjectRepo::update(&self.pool, &ProjectRow::from(project))
            .await
            .map_err(CoreError::storage)?
            .ok_or_else(|| CoreError::not_found("Project", project.id))?;
        Ok(())
    }

    async fn add_interaction(&self, interaction: &Interaction) -> CoreResult<()> {
        InteractionRepo::create(&self.pool, &InteractionRow::from(interaction))
            .await
            .map_err(CoreError::storage)?;
        Ok(())
    }

    async fn insert_task(&self, task: &Task) -> CoreResult<()> {
        TaskRepo::create(&self.pool, &TaskRow::from(task))
            .await
            .map_err(CoreError::storage)?;
        Ok(())
    }

    async fn replace_task(&self, task: &Task) -> CoreResult<()> {
        TaskRepo::replace(&self.pool, &TaskRow::from(task))
            .await
            .map_err(CoreError::storage)?
            .ok_or_else(|| CoreError::not_found("Task", task.id))?;
        Ok(())
    }
}

#[async_trait]
impl HealthProbe for PgStore {
    async fn ping(&self) -> CoreResult<()> {
        crate::health_check(&self.pool)
            .await
            .map_err(CoreError::storage)
    }
}

// ---------------------------------------------------------------------------
// Resolvers
// ---------------------------------------------------------------------------

#[async_trait]
impl ClientResolver for PgStore {
    async fn get_client_by_id(&self, id: DbId) -> CoreResult<Option<Client>> {
        let row = LookupRepo::find_client(&self.pool, id)
            .await
            .map_err(CoreError::storage)?;
        Ok(row.map(Client::from))
    }
}

#[async_trait]
impl CampaignTypeResolver for PgStore {
    async fn get_campaign_type_by_id(&self, id: DbId) -> CoreResult<Option<NamedRecord>> {
        let row = LookupRepo::find_campaign_type(&self.pool, id)
            .await
            .map_err(CoreError::storage)?;
        Ok(row.map(NamedRecord::from))
    }
}

#[async_trait]
impl TaskStatusResolver for PgStore {
    async fn get_task_status_by_id(&self, id: DbId) -> CoreResult<Option<NamedRecord>> {
        let row = LookupRepo::find_task_status(&self.pool, id)
            .await
            .map_err(CoreError::storage)?;
        Ok(row.map(NamedRecord::from))
    }
}

#[async_trait]
impl InteractionTypeResolver for PgStore {
    async fn get_interaction_type_by_id(&self, id: DbId) -> CoreResult<Option<NamedRecord>> {
        let row = LookupRepo::find_interaction_type(&self.pool, id)
            .await
            .map_err(CoreError::storage)?;
        Ok(row.map(NamedRecord::from))
    }
}

#[async_trait]
impl UserResolver for PgStore {
    async fn get_user_by_id(&self, id: DbId) -> CoreResult<Option<User>> {
        let row = LookupRepo::find_user(&self.pool, id)
            .await
            .map_err(CoreError::storage)?;
        Ok(row.map(User::from))
    }
}
