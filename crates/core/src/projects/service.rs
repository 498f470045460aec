//! Project aggregate service.
//!
//! Each operation runs the same pipeline: validate the request, read from
//! the store, write, then resolve reference records for the response.
//! Request validation always completes before the first store call.
//!
//! Adding an interaction or task writes the child and then touches the
//! parent's `updated_at` as a second, independent store call. There is no
//! transaction around the pair: if the second write fails the child stays
//! committed and the error is returned unchanged.

use std::sync::Arc;

use chrono::Utc;
use futures::future::try_join_all;
use futures::try_join;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::{DbId, EntityId};

use super::model::{Interaction, Project, ProjectFilter, Task};
use super::ports::{
    CampaignTypeResolver, ClientResolver, InteractionTypeResolver, Lookups, ProjectCommand,
    ProjectQuery, TaskQuery, TaskStatusResolver, UserResolver,
};
use super::request::{CreateInteractionRequest, CreateProjectRequest, TaskRequest};
use super::validation::{
    validate_interaction_request, validate_project_request, validate_task_request,
    MSG_DUPLICATE_PROJECT,
};
use super::view::{InteractionView, ProjectDetails, ProjectView, TaskView};

/// Orchestrates the project store and lookup resolvers.
///
/// Cheap to clone; every collaborator sits behind an `Arc`.
#[derive(Clone)]
pub struct ProjectService {
    projects: Arc<dyn ProjectQuery>,
    tasks: Arc<dyn TaskQuery>,
    commands: Arc<dyn ProjectCommand>,
    lookups: Lookups,
}

impl ProjectService {
    pub fn new(
        projects: Arc<dyn ProjectQuery>,
        tasks: Arc<dyn TaskQuery>,
        commands: Arc<dyn ProjectCommand>,
        lookups: Lookups,
    ) -> Self {
        Self {
            projects,
            tasks,
            commands,
            lookups,
        }
    }

    /// Wire every port to a single backend.
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: ProjectQuery
            + TaskQuery
            + ProjectCommand
            + ClientResolver
            + CampaignTypeResolver
            + TaskStatusResolver
            + InteractionTypeResolver
            + UserResolver
            + 'static,
    {
        Self::new(
            backend.clone(),
            backend.clone(),
            backend.clone(),
            Lookups::from_backend(backend),
        )
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Create a project. Names must be unique (exact match).
    pub async fn create_project(
        &self,
        request: CreateProjectRequest,
    ) -> CoreResult<ProjectDetails> {
        validate_project_request(&request)?;

        if self
            .projects
            .get_project_by_name(&request.name)
            .await?
            .is_some()
        {
            return Err(CoreError::Validation(MSG_DUPLICATE_PROJECT.to_string()));
        }

        let project = Project {
            id: Uuid::new_v4(),
            name: request.name,
            start_date: request.start,
            end_date: request.end,
            client_id: request.client,
            campaign_type_id: request.campaign_type,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.commands.insert_project(&project).await?;

        tracing::info!(
            project_id = %project.id,
            name = %project.name,
            client_id = project.client_id,
            campaign_type_id = project.campaign_type_id,
            "Project created"
        );

        Ok(ProjectDetails {
            data: self.project_view(&project).await?,
            interactions: Vec::new(),
            tasks: Vec::new(),
        })
    }

    /// Load a project with every interaction and task, fully enriched.
    pub async fn get_project_by_id(&self, id: EntityId) -> CoreResult<ProjectDetails> {
        let aggregate = self
            .projects
            .get_project_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Project", id))?;

        let (data, interactions, tasks) = try_join!(
            self.project_view(&aggregate.project),
            try_join_all(aggregate.interactions.iter().map(|i| self.interaction_view(i))),
            try_join_all(aggregate.tasks.iter().map(|t| self.task_view(t))),
        )?;

        Ok(ProjectDetails {
            data,
            interactions,
            tasks,
        })
    }

    /// List projects matching `filter`, each enriched with its client and
    /// campaign type.
    pub async fn get_projects(&self, filter: &ProjectFilter) -> CoreResult<Vec<ProjectView>> {
        let projects = self.projects.list_projects(filter).await?;
        try_join_all(projects.iter().map(|p| self.project_view(p))).await
    }

    /// Record an interaction against a project and touch the project's
    /// update timestamp.
    pub async fn add_interaction(
        &self,
        project_id: EntityId,
        request: CreateInteractionRequest,
    ) -> CoreResult<InteractionView> {
        let date = validate_interaction_request(&request)?;

        let mut project = self.require_project(project_id).await?;

        let interaction_type = self
            .lookups
            .interaction_types
            .get_interaction_type_by_id(request.interaction_type)
            .await?
            .ok_or_else(|| CoreError::not_found("Interaction type", request.interaction_type))?;

        let interaction = Interaction {
            id: Uuid::new_v4(),
            project_id,
            notes: request.notes,
            date,
            interaction_type_id: request.interaction_type,
        };
        self.commands.add_interaction(&interaction).await?;

        project.updated_at = Some(Utc::now());
        self.commands.update_project(&project).await?;

        tracing::info!(
            project_id = %project_id,
            interaction_id = %interaction.id,
            interaction_type_id = interaction.interaction_type_id,
            "Interaction added"
        );

        Ok(InteractionView::new(&interaction, Some(interaction_type)))
    }

    /// Add a task to a project and touch the project's update timestamp.
    pub async fn add_task(
        &self,
        project_id: EntityId,
        request: TaskRequest,
    ) -> CoreResult<TaskView> {
        let now = Utc::now();
        let due_date = validate_task_request(&request, now)?;

        let mut project = self.require_project(project_id).await?;

        let task = Task {
            id: Uuid::new_v4(),
            project_id,
            name: request.name,
            due_date,
            status_id: request.status,
            assigned_to: request.user,
            created_at: now,
            updated_at: None,
        };
        self.commands.insert_task(&task).await?;

        project.updated_at = Some(now);
        self.commands.update_project(&project).await?;

        tracing::info!(
            project_id = %project_id,
            task_id = %task.id,
            status_id = task.status_id,
            assigned_to = task.assigned_to,
            "Task added"
        );

        self.task_view(&task).await
    }

    /// Overwrite a task's name, due date, status and assignee.
    ///
    /// The parent project's update timestamp is left as is.
    pub async fn update_task(
        &self,
        task_id: EntityId,
        request: TaskRequest,
    ) -> CoreResult<TaskView> {
        let now = Utc::now();
        let due_date = validate_task_request(&request, now)?;

        let mut task = self
            .tasks
            .get_task_by_id(task_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Task", task_id))?;

        task.name = request.name;
        task.due_date = due_date;
        task.status_id = request.status;
        task.assigned_to = request.user;
        task.updated_at = Some(now);

        self.commands.replace_task(&task).await?;

        tracing::info!(
            task_id = %task.id,
            project_id = %task.project_id,
            status_id = task.status_id,
            assigned_to = task.assigned_to,
            "Task updated"
        );

        self.task_view(&task).await
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn require_project(&self, id: EntityId) -> CoreResult<Project> {
        self.projects
            .get_project_by_id(id)
            .await?
            .map(|aggregate| aggregate.project)
            .ok_or_else(|| CoreError::not_found("Project", id))
    }

    async fn project_view(&self, project: &Project) -> CoreResult<ProjectView> {
        let (client, campaign_type) = try_join!(
            self.lookups.clients.get_client_by_id(project.client_id),
            self.lookups
                .campaign_types
                .get_campaign_type_by_id(project.campaign_type_id),
        )?;
        Ok(ProjectView::new(
            project,
            unresolved_is_logged(client, "Client", project.client_id),
            unresolved_is_logged(campaign_type, "Campaign type", project.campaign_type_id),
        ))
    }

    async fn interaction_view(&self, interaction: &Interaction) -> CoreResult<InteractionView> {
        let interaction_type = self
            .lookups
            .interaction_types
            .get_interaction_type_by_id(interaction.interaction_type_id)
            .await?;
        Ok(InteractionView::new(
            interaction,
            unresolved_is_logged(
                interaction_type,
                "Interaction type",
                interaction.interaction_type_id,
            ),
        ))
    }

    async fn task_view(&self, task: &Task) -> CoreResult<TaskView> {
        let (status, user) = try_join!(
            self.lookups.task_statuses.get_task_status_by_id(task.status_id),
            self.lookups.users.get_user_by_id(task.assigned_to),
        )?;
        Ok(TaskView::new(
            task,
            unresolved_is_logged(status, "Task status", task.status_id),
            unresolved_is_logged(user, "User", task.assigned_to),
        ))
    }
}

/// Pass a resolver result through, warning when the reference is dangling.
fn unresolved_is_logged<T>(record: Option<T>, entity: &'static str, id: DbId) -> Option<T> {
    if record.is_none() {
        tracing::warn!(entity, id, "Reference record not found");
    }
    record
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
