//! In-process implementation of every store and resolver port.
//!
//! Backs the service in unit tests and router-level tests. Store calls
//! (query and command, not resolvers) are counted so tests can assert that
//! a request was rejected before touching storage.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::paging::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::types::{DbId, EntityId};

use super::model::{
    Client, Interaction, NamedRecord, Project, ProjectAggregate, ProjectFilter, Task, User,
};
use super::ports::{
    CampaignTypeResolver, ClientResolver, HealthProbe, InteractionTypeResolver, ProjectCommand,
    ProjectQuery, TaskQuery, TaskStatusResolver, UserResolver,
};

#[derive(Default)]
pub struct InMemoryStore {
    projects: RwLock<Vec<Project>>,
    interactions: RwLock<Vec<Interaction>>,
    tasks: RwLock<Vec<Task>>,

    clients: RwLock<HashMap<DbId, Client>>,
    campaign_types: RwLock<HashMap<DbId, NamedRecord>>,
    task_statuses: RwLock<HashMap<DbId, NamedRecord>>,
    interaction_types: RwLock<HashMap<DbId, NamedRecord>>,
    users: RwLock<HashMap<DbId, User>>,

    reads: AtomicUsize,
    writes: AtomicUsize,
}

fn named(id: DbId, name: &str) -> NamedRecord {
    NamedRecord {
        id,
        name: name.to_string(),
    }
}

impl InMemoryStore {
    /// A store pre-populated with the same reference data the database
    /// migrations seed.
    pub fn seeded() -> Self {
        let clients = [
            (1, "Laura Gómez", "Gómez Retail"),
            (2, "Martín Ruiz", "Ruiz & Asociados"),
            (3, "Ana Torres", "Torres Foods"),
            (4, "Diego Fernández", "Fernández Motors"),
            (5, "Sofía Pérez", "Pérez Travel"),
        ]
        .into_iter()
        .map(|(id, name, company): (DbId, &str, &str)| {
            let client = Client {
                id,
                name: name.to_string(),
                email: format!("contact{id}@example.com"),
                company: company.to_string(),
                phone: format!("+54 11 5555-000{id}"),
                address: format!("Av. Siempre Viva {id}00"),
            };
            (id, client)
        })
        .collect();

        let campaign_types = [
            (1, "SEO"),
            (2, "PPC"),
            (3, "Social Media"),
            (4, "Email Marketing"),
        ]
        .into_iter()
        .map(|(id, name)| (id, named(id, name)))
        .collect();

        let task_statuses = [
            (1, "Pending"),
            (2, "In Progress"),
            (3, "Blocked"),
            (4, "Done"),
            (5, "Cancelled"),
        ]
        .into_iter()
        .map(|(id, name)| (id, named(id, name)))
        .collect();

        let interaction_types = [
            (1, "Initial Meeting"),
            (2, "Phone Call"),
            (3, "Email"),
            (4, "Presentation of Results"),
        ]
        .into_iter()
        .map(|(id, name)| (id, named(id, name)))
        .collect();

        let users = [
            (1, "Joe Done"),
            (2, "Nill Amstrong"),
            (3, "Marlyn Morales"),
            (4, "Antony Orué"),
            (5, "Jazmin Fernandez"),
        ]
        .into_iter()
        .map(|(id, name): (DbId, &str)| {
            let user = User {
                id,
                name: name.to_string(),
                email: format!("user{id}@agency.example"),
            };
            (id, user)
        })
        .collect();

        Self {
            clients: RwLock::new(clients),
            campaign_types: RwLock::new(campaign_types),
            task_statuses: RwLock::new(task_statuses),
            interaction_types: RwLock::new(interaction_types),
            users: RwLock::new(users),
            ..Self::default()
        }
    }

    /// Number of query-side store calls made so far.
    pub fn store_reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of command-side store calls made so far.
    pub fn store_writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Total store calls, reads and writes.
    pub fn store_calls(&self) -> usize {
        self.store_reads() + self.store_writes()
    }

    fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// Store ports
// ---------------------------------------------------------------------------

#[async_trait]
impl ProjectQuery for InMemoryStore {
    async fn get_project_by_id(&self, id: EntityId) -> CoreResult<Option<ProjectAggregate>> {
        self.record_read();
        let Some(project) = self.projects.read().await.iter().find(|p| p.id == id).cloned()
        else {
            return Ok(None);
        };
        let interactions = self
            .interactions
            .read()
            .await
            .iter()
            .filter(|i| i.project_id == id)
            .cloned()
            .collect();
        let tasks = self
            .tasks
            .read()
            .await
            .iter()
            .filter(|t| t.project_id == id)
            .cloned()
            .collect();
        Ok(Some(ProjectAggregate {
            project,
            interactions,
            tasks,
        }))
    }

    async fn get_project_by_name(&self, name: &str) -> CoreResult<Option<Project>> {
        self.record_read();
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn list_projects(&self, filter: &ProjectFilter) -> CoreResult<Vec<Project>> {
        self.record_read();
        let needle = filter.name.as_ref().map(|n| n.to_lowercase());
        let mut matching: Vec<Project> = self
            .projects
            .read()
            .await
            .iter()
            .filter(|p| {
                needle
                    .as_ref()
                    .map_or(true, |n| p.name.to_lowercase().contains(n.as_str()))
            })
            .filter(|p| filter.campaign.map_or(true, |c| p.campaign_type_id == c))
            .filter(|p| filter.client.map_or(true, |c| p.client_id == c))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let limit = clamp_limit(filter.size, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE) as usize;
        let offset = clamp_offset(filter.offset) as usize;
        Ok(matching.into_iter().skip(offset).take(limit).collect())
    }
}

#[async_trait]
impl TaskQuery for InMemoryStore {
    async fn get_task_by_id(&self, id: EntityId) -> CoreResult<Option<Task>> {
        self.record_read();
        Ok(self.tasks.read().await.iter().find(|t| t.id == id).cloned())
    }
}

#[async_trait]
impl ProjectCommand for InMemoryStore {
    async fn insert_project(&self, project: &Project) -> CoreResult<()> {
        self.record_write();
        let mut projects = self.projects.write().await;
        if projects.iter().any(|p| p.name == project.name) {
            return Err(CoreError::Conflict(format!(
                "Project name '{}' is already taken",
                project.name
            )));
        }
        projects.push(project.clone());
        Ok(())
    }

    async fn update_project(&self, project: &Project) -> CoreResult<()> {
        self.record_write();
        let mut projects = self.projects.write().await;
        let stored = projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or_else(|| CoreError::not_found("Project", project.id))?;
        *stored = project.clone();
        Ok(())
    }

    async fn add_interaction(&self, interaction: &Interaction) -> CoreResult<()> {
        self.record_write();
        self.interactions.write().await.push(interaction.clone());
        Ok(())
    }

    async fn insert_task(&self, task: &Task) -> CoreResult<()> {
        self.record_write();
        self.tasks.write().await.push(task.clone());
        Ok(())
    }

    async fn replace_task(&self, task: &Task) -> CoreResult<()> {
        self.record_write();
        let mut tasks = self.tasks.write().await;
        let stored = tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(|| CoreError::not_found("Task", task.id))?;
        *stored = task.clone();
        Ok(())
    }
}

#[async_trait]
impl HealthProbe for InMemoryStore {
    async fn ping(&self) -> CoreResult<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Resolvers
// ---------------------------------------------------------------------------

#[async_trait]
impl ClientResolver for InMemoryStore {
    async fn get_client_by_id(&self, id: DbId) -> CoreResult<Option<Client>> {
        Ok(self.clients.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl CampaignTypeResolver for InMemoryStore {
    async fn get_campaign_type_by_id(&self, id: DbId) -> CoreResult<Option<NamedRecord>> {
        Ok(self.campaign_types.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl TaskStatusResolver for InMemoryStore {
    async fn get_task_status_by_id(&self, id: DbId) -> CoreResult<Option<NamedRecord>> {
        Ok(self.task_statuses.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl InteractionTypeResolver for InMemoryStore {
    async fn get_interaction_type_by_id(&self, id: DbId) -> CoreResult<Option<NamedRecord>> {
        Ok(self.interaction_types.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl UserResolver for InMemoryStore {
    async fn get_user_by_id(&self, id: DbId) -> CoreResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }
}
