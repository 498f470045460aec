//! Domain core for the agency projects service.
//!
//! Holds the entity and view-model types, request validation, the store and
//! resolver ports, and the [`projects::ProjectService`] that orchestrates
//! them. Nothing here depends on a particular database or transport.

pub mod error;
pub mod paging;
pub mod projects;
pub mod types;
