use actix_web::{web, HttpRequest, HttpResponse};
use reelscout_core::models::ProductionCompanyId;
use reelscout_core::ReelScoutError;
use tracing::{error, info, warn};

use super::auth::{authenticate, authorize_dashboard};
use super::DashboardState;

/// GET /api/v1/production-companies/{id}/dashboard
///
/// Returns the full dashboard for the company. Admins may read any company;
/// production company accounts only their own.
pub async fn get_dashboard(
    req: HttpRequest,
    state: web::Data<DashboardState>,
    path: web::Path<ProductionCompanyId>,
) -> Result<HttpResponse, ReelScoutError> {
    let company_id = path.into_inner();

    let claims = authenticate(&req, &state.jwt_secret)?;
    authorize_dashboard(&claims, company_id)?;

    if company_id <= 0 {
        return Err(ReelScoutError::ValidationError(format!(
            "Invalid production company id: {}",
            company_id
        )));
    }

    info!(company_id, user = %claims.sub, "Fetching dashboard");

    let dashboard = state
        .dashboard_service
        .build_dashboard(company_id)
        .await
        .map_err(|e| {
            error!(company_id, error = %e, "Failed to build dashboard");
            e
        })?;

    Ok(HttpResponse::Ok().json(dashboard))
}

/// GET /health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "analytics-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /ready
///
/// Reports pool statistics alongside the database check.
pub async fn readiness(state: web::Data<DashboardState>) -> HttpResponse {
    let Some(db) = &state.database else {
        return HttpResponse::Ok().json(serde_json::json!({
            "status": "ready"
        }));
    };

    let pool = db.stats();
    if db.is_healthy().await {
        HttpResponse::Ok().json(serde_json::json!({
            "status": "ready",
            "pool": pool
        }))
    } else {
        warn!(pool_size = pool.size, "Database unreachable");
        HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "not_ready",
            "database": "unreachable",
            "pool": pool
        }))
    }
}
