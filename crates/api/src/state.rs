use std::sync::Arc;

use acrely_notify::DispatchCoordinator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used by the health check).
    pub pool: acrely_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The event dispatch coordinator with its injected collaborators.
    pub dispatcher: Arc<DispatchCoordinator>,
}
