use std::sync::Arc;

use tasklist_db::services::{CategoryService, TaskService};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool and services are handles to shared data).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tasklist_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Category operations.
    pub categories: CategoryService,
    /// Task operations.
    pub tasks: TaskService,
}

impl AppState {
    /// Build the state, handing each service its own clone of the pool.
    pub fn new(pool: tasklist_db::DbPool, config: ServerConfig) -> Self {
        Self {
            categories: CategoryService::new(pool.clone()),
            tasks: TaskService::new(pool.clone()),
            config: Arc::new(config),
            pool,
        }
    }
}
