//! Repository for the `tasks` table.

use agency_core::types::EntityId;
use sqlx::PgPool;

use crate::models::project::TaskRow;

const COLUMNS: &str =
    "id, project_id, name, due_date, status_id, assigned_to, created_at, updated_at";

/// Tasks have two write paths: [`TaskRepo::create`] for new rows and
/// [`TaskRepo::replace`] for overwriting an existing one.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a task under its caller-assigned id.
    pub async fn create(pool: &PgPool, task: &TaskRow) -> Result<TaskRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskRow>(&query)
            .bind(task.id)
            .bind(task.project_id)
            .bind(&task.name)
            .bind(task.due_date)
            .bind(task.status_id)
            .bind(task.assigned_to)
            .bind(task.created_at)
            .bind(task.updated_at)
            .fetch_one(pool)
            .await
    }

    /// Find a task by id.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<TaskRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All tasks of a project, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: EntityId,
    ) -> Result<Vec<TaskRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE project_id = $1
             ORDER BY created_at ASC, id"
        );
        sqlx::query_as::<_, TaskRow>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the mutable columns of an existing task.
    ///
    /// `project_id` and `created_at` are never changed. Returns `None` if no
    /// row with the given id exists.
    pub async fn replace(pool: &PgPool, task: &TaskRow) -> Result<Option<TaskRow>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                name = $2,
                due_date = $3,
                status_id = $4,
                assigned_to = $5,
                updated_at = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskRow>(&query)
            .bind(task.id)
            .bind(&task.name)
            .bind(task.due_date)
            .bind(task.status_id)
            .bind(task.assigned_to)
            .bind(task.updated_at)
            .fetch_optional(pool)
            .await
    }
}
