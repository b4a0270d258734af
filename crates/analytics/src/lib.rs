//! ReelScout Analytics Service
//!
//! Production-company dashboards over the catalog, forum activity and
//! watchlist saves.

pub mod config;
pub mod dashboard;
pub mod repository;
pub mod server;

pub use config::DashboardConfig;
pub use dashboard::{ContentTableRow, CountEntry, DashboardResult, DashboardService, WeeklyCount};
pub use repository::{
    ContentRepository, ForumRepository, InMemoryStore, PostgresContentRepository,
    PostgresForumRepository, PostgresWatchlistRepository, WatchlistRepository,
};
pub use server::{configure_routes, DashboardState};

use reelscout_core::DatabasePool;
use std::sync::Arc;

/// Wire the Postgres-backed dashboard service
pub fn init_service(db: &DatabasePool, config: DashboardConfig) -> Arc<DashboardService> {
    let pool = db.pool().clone();

    Arc::new(
        DashboardService::new(
            Arc::new(PostgresContentRepository::new(pool.clone())),
            Arc::new(PostgresForumRepository::new(pool.clone())),
            Arc::new(PostgresWatchlistRepository::new(pool)),
        )
        .with_config(config),
    )
}
