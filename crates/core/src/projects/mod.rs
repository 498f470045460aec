//! Project aggregate: a project plus its interactions and tasks.
//!
//! - [`model`]: stored entities and lookup records
//! - [`request`]: inbound request shapes
//! - [`validation`]: pure request checks
//! - [`view`]: enriched response shapes
//! - [`ports`]: store and resolver contracts
//! - [`service`]: the aggregate service
//! - [`memory`]: in-process implementation of every port

pub mod memory;
pub mod model;
pub mod ports;
pub mod request;
pub mod service;
pub mod validation;
pub mod view;

pub use service::ProjectService;
