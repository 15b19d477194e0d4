pub mod auth;
pub mod config;
pub mod db;
pub mod error;

use std::sync::Arc;
use std::time::Duration;
use actix_web::{web, HttpResponse};
use tracing::info;

pub use error::AppError;
pub type Result<T> = std::result::Result<T, AppError>;
pub use config::{Settings, StoreBackend};

pub use auth::{AuthService, BcryptHasher, JwtSigner};
pub use db::{DbOperations, InMemoryUserStore, User, UserStore};

/// Health check endpoint handler
/// Returns a JSON response with server status and timestamp
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Registers the health probe and the auth routes.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .configure(auth::handlers::configure);
}

/// Application state shared across all workers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub async fn new(config: &Settings) -> Result<Self> {
        let users: Arc<dyn UserStore> = match config.database.backend {
            StoreBackend::Postgres => {
                let db = DbOperations::new_with_options(
                    &config.database.url,
                    config.database.max_connections,
                    Duration::from_secs(5),
                )
                .await?;
                db.migrate().await?;
                info!("Connected to PostgreSQL user store");
                Arc::new(db)
            }
            StoreBackend::Memory => {
                info!("Using in-memory user store; records will not survive a restart");
                Arc::new(InMemoryUserStore::new())
            }
        };

        Self::with_store(users, config)
    }

    pub fn with_store(users: Arc<dyn UserStore>, config: &Settings) -> Result<Self> {
        let auth_service = AuthService::new(
            users,
            Arc::new(BcryptHasher),
            Arc::new(JwtSigner),
            &config.auth,
        )?;

        Ok(Self {
            auth_service: Arc::new(auth_service),
        })
    }
}
