use std::sync::Arc;

use cartera_db::models::project::Project;
use cartera_db::models::race::Race;
use cartera_db::DbPool;
use mongodb::Collection;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once at startup. Cheaply cloneable: the pool is reference
/// counted and the configuration sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The single process-wide MongoDB client pool.
    pub pool: DbPool,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }

    /// Typed handle on the configured projects collection.
    pub fn projects(&self) -> Collection<Project> {
        self.pool.collection(&self.config.mongo.projects_collection)
    }

    /// Typed handle on the configured races collection.
    pub fn races(&self) -> Collection<Race> {
        self.pool.collection(&self.config.mongo.races_collection)
    }
}
