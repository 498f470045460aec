//! Contracts the aggregate service depends on.
//!
//! The store is split into a query side ([`ProjectQuery`], [`TaskQuery`])
//! and a command side ([`ProjectCommand`]). Lookup resolvers are read-only
//! and return `None` for unknown ids; deciding what an absent record means
//! is left to the caller.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{DbId, EntityId};

use super::model::{
    Client, Interaction, NamedRecord, Project, ProjectAggregate, ProjectFilter, Task, User,
};

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Load a project together with its interactions and tasks.
    async fn get_project_by_id(&self, id: EntityId) -> CoreResult<Option<ProjectAggregate>>;

    /// Exact, case-sensitive name match.
    async fn get_project_by_name(&self, name: &str) -> CoreResult<Option<Project>>;

    /// Filtered, paged listing. Paging defaults are applied by the store.
    async fn list_projects(&self, filter: &ProjectFilter) -> CoreResult<Vec<Project>>;
}

#[async_trait]
pub trait TaskQuery: Send + Sync {
    async fn get_task_by_id(&self, id: EntityId) -> CoreResult<Option<Task>>;
}

#[async_trait]
pub trait ProjectCommand: Send + Sync {
    /// Insert a new project. The caller assigns the id.
    async fn insert_project(&self, project: &Project) -> CoreResult<()>;

    /// Overwrite every mutable column of an existing project.
    async fn update_project(&self, project: &Project) -> CoreResult<()>;

    /// Append an interaction to its project.
    async fn add_interaction(&self, interaction: &Interaction) -> CoreResult<()>;

    /// Create path: write a new task under the caller-generated id.
    async fn insert_task(&self, task: &Task) -> CoreResult<()>;

    /// Strict update path: fails with `NotFound` when no task has `task.id`,
    /// otherwise overwrites the stored row.
    async fn replace_task(&self, task: &Task) -> CoreResult<()>;
}

/// Reachability check for the backing store.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn ping(&self) -> CoreResult<()>;
}

// ---------------------------------------------------------------------------
// Lookup resolvers
// ---------------------------------------------------------------------------

#[async_trait]
pub trait ClientResolver: Send + Sync {
    async fn get_client_by_id(&self, id: DbId) -> CoreResult<Option<Client>>;
}

#[async_trait]
pub trait CampaignTypeResolver: Send + Sync {
    async fn get_campaign_type_by_id(&self, id: DbId) -> CoreResult<Option<NamedRecord>>;
}

#[async_trait]
pub trait TaskStatusResolver: Send + Sync {
    async fn get_task_status_by_id(&self, id: DbId) -> CoreResult<Option<NamedRecord>>;
}

#[async_trait]
pub trait InteractionTypeResolver: Send + Sync {
    async fn get_interaction_type_by_id(&self, id: DbId) -> CoreResult<Option<NamedRecord>>;
}

#[async_trait]
pub trait UserResolver: Send + Sync {
    async fn get_user_by_id(&self, id: DbId) -> CoreResult<Option<User>>;
}

/// The five resolvers the service enriches views with.
#[derive(Clone)]
pub struct Lookups {
    pub clients: Arc<dyn ClientResolver>,
    pub campaign_types: Arc<dyn CampaignTypeResolver>,
    pub task_statuses: Arc<dyn TaskStatusResolver>,
    pub interaction_types: Arc<dyn InteractionTypeResolver>,
    pub users: Arc<dyn UserResolver>,
}

impl Lookups {
    /// Use one backend for every resolver.
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: ClientResolver
            + CampaignTypeResolver
            + TaskStatusResolver
            + InteractionTypeResolver
            + UserResolver
            + 'static,
    {
        Self {
            clients: backend.clone(),
            campaign_types: backend.clone(),
            task_statuses: backend.clone(),
            interaction_types: backend.clone(),
            users: backend,
        }
    }
}
