//! Repository for the `projects` table.

use agency_core::types::{DbId, EntityId};
use sqlx::PgPool;

use crate::models::project::ProjectRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, start_date, end_date, client_id, campaign_type_id, created_at, updated_at";

/// Provides insert, lookup, listing and update for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project under its caller-assigned id, returning the row.
    pub async fn create(pool: &PgPool, project: &ProjectRow) -> Result<ProjectRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(project.id)
            .bind(&project.name)
            .bind(project.start_date)
            .bind(project.end_date)
            .bind(project.client_id)
            .bind(project.campaign_type_id)
            .bind(project.created_at)
            .bind(project.updated_at)
            .fetch_one(pool)
            .await
    }

    /// Find a project by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: EntityId,
    ) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by exact (case-sensitive) name.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE name = $1");
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List projects with optional name, campaign type and client filters,
    /// most recently created first.
    ///
    /// `name` matches as a case-insensitive literal substring; `%` and `_`
    /// carry no pattern meaning.
    pub async fn list(
        pool: &PgPool,
        name: Option<&str>,
        campaign_type_id: Option<DbId>,
        client_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProjectRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE ($1::TEXT IS NULL OR strpos(lower(name), lower($1)) > 0)
               AND ($2::BIGINT IS NULL OR campaign_type_id = $2)
               AND ($3::BIGINT IS NULL OR client_id = $3)
             ORDER BY created_at DESC, id
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(name)
            .bind(campaign_type_id)
            .bind(client_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every mutable column of a project.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        project: &ProjectRow,
    ) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = $2,
                start_date = $3,
                end_date = $4,
                client_id = $5,
                campaign_type_id = $6,
                updated_at = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(project.id)
            .bind(&project.name)
            .bind(project.start_date)
            .bind(project.end_date)
            .bind(project.client_id)
            .bind(project.campaign_type_id)
            .bind(project.updated_at)
            .fetch_optional(pool)
            .await
    }
}
