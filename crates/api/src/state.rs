use std::sync::Arc;

use agency_core::projects::ports::HealthProbe;
use agency_core::projects::ProjectService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Project aggregate service.
    pub projects: Arc<ProjectService>,
    /// Backing store reachability, reported by `/health`.
    pub health: Arc<dyn HealthProbe>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(
        projects: ProjectService,
        health: Arc<dyn HealthProbe>,
        config: ServerConfig,
    ) -> Self {
        Self {
            projects: Arc::new(projects),
            health,
            config: Arc::new(config),
        }
    }
}
