//! Bearer token checks for dashboard access

use actix_web::HttpRequest;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use reelscout_core::models::{ProductionCompanyId, Role};
use reelscout_core::ReelScoutError;
use serde::{Deserialize, Serialize};

/// Claims issued by the account service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub role: String,
    /// Set for accounts promoted to a production company
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_company_id: Option<ProductionCompanyId>,
}

/// Decode and validate the bearer token on the request
pub fn authenticate(req: &HttpRequest, jwt_secret: &str) -> Result<Claims, ReelScoutError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ReelScoutError::Unauthorized("Missing authorization header".into()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ReelScoutError::Unauthorized("Invalid authorization format".into()))?;

    let decoding_key = DecodingKey::from_secret(jwt_secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|_| ReelScoutError::Unauthorized("Invalid token".into()))?;

    Ok(token_data.claims)
}

/// Admins see every dashboard; production companies only their own
pub fn authorize_dashboard(
    claims: &Claims,
    company_id: ProductionCompanyId,
) -> Result<(), ReelScoutError> {
    let role = Role::parse(&claims.role)
        .ok_or_else(|| ReelScoutError::Unauthorized(format!("Unknown role '{}'", claims.role)))?;

    match role {
        Role::Admin => Ok(()),
        Role::ProductionCompany if claims.production_company_id == Some(company_id) => Ok(()),
        Role::ProductionCompany => Err(ReelScoutError::Forbidden(
            "Dashboard belongs to another production company".into(),
        )),
        Role::User | Role::Critic => Err(ReelScoutError::Forbidden(format!(
            "Role '{}' cannot read production company dashboards",
            role.as_str()
        ))),
    }
}
