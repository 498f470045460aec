//! Read-only queries over the lookup tables.

use agency_core::types::DbId;
use sqlx::PgPool;

use crate::models::lookup::{ClientRow, NamedRow, UserRow};

pub struct LookupRepo;

impl LookupRepo {
    pub async fn find_client(pool: &PgPool, id: DbId) -> Result<Option<ClientRow>, sqlx::Error> {
        sqlx::query_as::<_, ClientRow>(
            "SELECT id, name, email, company, phone, address FROM clients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_campaign_type(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<NamedRow>, sqlx::Error> {
        sqlx::query_as::<_, NamedRow>("SELECT id, name FROM campaign_types WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_task_status(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<NamedRow>, sqlx::Error> {
        sqlx::query_as::<_, NamedRow>("SELECT id, name FROM task_statuses WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_interaction_type(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<NamedRow>, sqlx::Error> {
        sqlx::query_as::<_, NamedRow>("SELECT id, name FROM interaction_types WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_user(pool: &PgPool, id: DbId) -> Result<Option<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
