/// Lookup-table primary keys (clients, campaign types, statuses, users) are
/// PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Projects, interactions and tasks are keyed by UUIDs generated in the
/// service layer before the row is written.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
