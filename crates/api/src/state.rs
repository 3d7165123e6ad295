use std::sync::Arc;

use marquee_core::viewership::StatsService;
use marquee_db::store::PgViewershipStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything non-trivial sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: marquee_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractors).
    pub config: Arc<ServerConfig>,
    /// View/vote/stats engine bound to the PostgreSQL store.
    pub stats: Arc<StatsService<PgViewershipStore>>,
}

impl AppState {
    pub fn new(pool: marquee_db::DbPool, config: ServerConfig) -> Self {
        let stats = StatsService::new(PgViewershipStore::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            stats: Arc::new(stats),
        }
    }
}
