//! Repository for the `interactions` table.

use agency_core::types::EntityId;
use sqlx::PgPool;

use crate::models::project::InteractionRow;

const COLUMNS: &str = "id, project_id, notes, date, interaction_type_id";

/// Interactions are append-only: there is no update or delete.
pub struct InteractionRepo;

impl InteractionRepo {
    /// Insert an interaction, returning the stored row.
    pub async fn create(
        pool: &PgPool,
        interaction: &InteractionRow,
    ) -> Result<InteractionRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO interactions ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InteractionRow>(&query)
            .bind(interaction.id)
            .bind(interaction.project_id)
            .bind(&interaction.notes)
            .bind(interaction.date)
            .bind(interaction.interaction_type_id)
            .fetch_one(pool)
            .await
    }

    /// All interactions of a project, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: EntityId,
    ) -> Result<Vec<InteractionRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM interactions
             WHERE project_id = $1
             ORDER BY date ASC, id"
        );
        sqlx::query_as::<_, InteractionRow>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
