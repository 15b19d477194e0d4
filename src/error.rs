use thiserror::Error;
use actix_web::{ResponseError, HttpResponse, http::StatusCode};
use serde_json::json;

/// Message returned for every failure whose cause must stay server-side.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    AuthError(#[from] AuthError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    ConflictError(String),
}

impl AppError {
    /// True for failures the caller only ever sees as a generic 500.
    pub fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Message safe to hand back to the client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg) | AppError::ConflictError(msg) => msg.clone(),
            AppError::AuthError(e) => e.to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::DatabaseError(DatabaseError::Duplicate)
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                AppError::DatabaseError(DatabaseError::ConnectionError(err.to_string()))
            }
            _ => AppError::DatabaseError(DatabaseError::QueryError(err.to_string())),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::DatabaseError(DatabaseError::MigrationError(err.to_string()))
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AppError::InternalError(format!("password hashing failed: {}", err))
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::InternalError(format!("token signing failed: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("blocking task failed: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let response = json!({
            "message": self.public_message(),
            "success": false
        });
        HttpResponse::build(self.status_code()).json(response)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthError(AuthError::InvalidCredentials) => StatusCode::FORBIDDEN,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error("Duplicate record")]
    Duplicate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use std::io;

    #[test]
    fn test_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::InternalError(_)));

        let config_err = config::ConfigError::NotFound(String::from("key not found"));
        let app_err: AppError = config_err.into();
        assert!(matches!(app_err, AppError::ConfigError(_)));

        let db_err = sqlx::Error::RowNotFound;
        let app_err: AppError = db_err.into();
        assert!(matches!(app_err, AppError::DatabaseError(DatabaseError::QueryError(_))));

        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(app_err, AppError::DatabaseError(DatabaseError::ConnectionError(_))));

        let app_err: AppError = bcrypt::BcryptError::CostNotAllowed(99).into();
        assert!(matches!(app_err, AppError::InternalError(_)));
    }

    #[test]
    fn test_error_status_codes() {
        let err = AppError::AuthError(AuthError::InvalidCredentials);
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);

        let err = AppError::ValidationError("invalid input".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = AppError::ConflictError("taken".to_string());
        assert_eq!(err.status_code(), StatusCode::CONFLICT);

        let err = AppError::ConfigError("JWT secret missing".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::DatabaseError(DatabaseError::Duplicate);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.is_internal());
    }

    #[test]
    fn test_error_display() {
        let err = AppError::ValidationError("test error".to_string());
        assert_eq!(err.to_string(), "Validation error: test error");

        let err = AppError::AuthError(AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "Authentication error: Invalid credentials");

        let err = AppError::DatabaseError(DatabaseError::Duplicate);
        assert_eq!(err.to_string(), "Database error: Duplicate record");
    }

    #[actix_web::test]
    async fn test_internal_details_are_hidden() {
        let err = AppError::DatabaseError(DatabaseError::ConnectionError(
            "connection refused at 10.0.0.5:5432".to_string(),
        ));
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
        assert_eq!(json["success"], false);
        assert!(!String::from_utf8_lossy(&body).contains("10.0.0.5"));
    }

    #[actix_web::test]
    async fn test_invalid_credentials_body() {
        let response = AppError::AuthError(AuthError::InvalidCredentials).error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Invalid credentials");
        assert_eq!(json["success"], false);
    }
}
