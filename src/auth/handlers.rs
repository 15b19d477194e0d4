use actix_web::{error::JsonPayloadError, web, HttpResponse};
use tracing::{info, error, warn};

use crate::auth::service::{LoginRequest, SignupRequest};
use crate::error::AppError;
use crate::AppState;

pub async fn signup(
    req: web::Json<SignupRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    info!("Received signup request for email: {}", req.email.as_deref().unwrap_or_default());
    match state.auth_service.signup(&req).await {
        Ok(response) => Ok(HttpResponse::Created().json(response)),
        Err(e) => {
            if e.is_internal() {
                error!("Error during signup: {}", e);
            }
            Err(e)
        }
    }
}

pub async fn login(
    req: web::Json<LoginRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let email = req.email.as_deref().unwrap_or_default();
    info!("Received login request for email: {}", email);
    match state.auth_service.login(&req).await {
        Ok(response) => {
            info!("Login successful for email: {}", email);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            if e.is_internal() {
                error!(email = %email, error = %e, "Error during login");
            }
            Err(e)
        }
    }
}

pub const INVALID_BODY: &str = "Invalid request body";

/// Largest JSON body accepted on the auth routes.
pub const JSON_BODY_LIMIT: usize = 16 * 1024;

/// Unparseable JSON is a 400 with a generic message. Size and content-type
/// failures keep actix's own status codes.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| match err {
            JsonPayloadError::Deserialize(e) => {
                warn!("Rejected malformed request body: {}", e);
                AppError::ValidationError(INVALID_BODY.to_string()).into()
            }
            other => {
                warn!("Rejected request body: {}", other);
                other.into()
            }
        })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .app_data(json_config())
            .route("/signup", web::post().to(signup))
            .route("/login", web::post().to(login)),
    );
}
