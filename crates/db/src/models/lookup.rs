//! Lookup-table rows: clients, users, and the `{ id, name }` tables.

use agency_core::projects::model::{Client, NamedRecord, User};
use agency_core::types::DbId;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ClientRow {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub address: String,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            company: row.company,
            phone: row.phone,
            address: row.address,
        }
    }
}

/// Row shape shared by `campaign_types`, `task_statuses` and
/// `interaction_types`.
#[derive(Debug, Clone, FromRow)]
pub struct NamedRow {
    pub id: DbId,
    pub name: String,
}

impl From<NamedRow> for NamedRecord {
    fn from(row: NamedRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}
