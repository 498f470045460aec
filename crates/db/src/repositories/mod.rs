//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod interaction_repo;
pub mod lookup_repo;
pub mod project_repo;
pub mod task_repo;

pub use interaction_repo::InteractionRepo;
pub use lookup_repo::LookupRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
