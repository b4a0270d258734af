pub mod auth;
pub mod handlers;

pub use handlers::{get_dashboard, health, readiness};

use actix_web::web;
use reelscout_core::DatabasePool;
use std::sync::Arc;

use crate::dashboard::DashboardService;

/// Application state shared across handlers
pub struct DashboardState {
    pub dashboard_service: Arc<DashboardService>,
    pub jwt_secret: String,
    /// Checked by the readiness probe; `None` when running without Postgres
    pub database: Option<DatabasePool>,
}

/// Configure application routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health))
        .route("/ready", web::get().to(handlers::readiness))
        .service(web::scope("/api/v1").route(
            "/production-companies/{id}/dashboard",
            web::get().to(handlers::get_dashboard),
        ));
}
