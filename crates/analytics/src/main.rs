//! Analytics Service - Production company dashboards
//!
//! Port: 8087

use actix_web::{web, App, HttpServer};
use reelscout_analytics::{configure_routes, DashboardConfig, DashboardState};
use reelscout_core::{
    init_logging, load_dotenv, AuthConfig, ConfigLoader, DatabaseConfig, DatabasePool, LogConfig,
    ServiceConfig,
};
use tracing::{info, warn};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let service_config = ServiceConfig::from_env()?;
    service_config.validate()?;

    init_logging(&LogConfig::new(
        "analytics-service",
        service_config.log_level.clone(),
    ))?;

    let db_config = DatabaseConfig::from_env()?;
    db_config.validate()?;

    let auth_config = AuthConfig::from_env()?;
    auth_config.validate()?;
    if auth_config.is_insecure_default() {
        warn!("Running with the development JWT secret");
    }

    let dashboard_config = DashboardConfig::load()?;

    let bind_addr = service_config.bind_addr();
    info!(%bind_addr, "Starting Analytics Service");

    let database = DatabasePool::new(&db_config).await?;
    let dashboard_service = reelscout_analytics::init_service(&database, dashboard_config);

    let state = web::Data::new(DashboardState {
        dashboard_service,
        jwt_secret: auth_config.jwt_secret,
        database: Some(database),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(configure_routes)
            .wrap(actix_web::middleware::Logger::default())
    })
    .workers(service_config.workers)
    .client_request_timeout(service_config.request_timeout)
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
