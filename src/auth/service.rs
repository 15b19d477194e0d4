use std::sync::Arc;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::password::PasswordHasher;
use crate::auth::token::TokenSigner;
use crate::config::AuthConfig;
use crate::db::{NewUser, UserStore};
use crate::error::{AppError, AuthError, DatabaseError};

pub const SIGNUP_FIELDS_REQUIRED: &str = "All fields are required";
pub const LOGIN_FIELDS_REQUIRED: &str = "Email and password are required";
pub const USER_EXISTS: &str = "User already exists, you can login";

#[derive(Debug, Default, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SignupResponse {
    pub message: String,
    pub success: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub message: String,
    pub success: bool,
    pub token: String,
    pub email: String,
    pub name: String,
}

/// Treats absent and empty values alike.
fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    signer: Arc<dyn TokenSigner>,
    jwt_secret: Option<String>,
    token_ttl: Duration,
    hash_cost: u32,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        signer: Arc<dyn TokenSigner>,
        config: &AuthConfig,
    ) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self {
            users,
            hasher,
            signer,
            jwt_secret: config.jwt_secret.clone(),
            token_ttl: config.token_ttl()?,
            hash_cost: config.bcrypt_cost,
        })
    }

    pub async fn signup(&self, req: &SignupRequest) -> Result<SignupResponse, AppError> {
        let (Some(name), Some(email), Some(password)) =
            (required(&req.name), required(&req.email), required(&req.password))
        else {
            return Err(AppError::ValidationError(SIGNUP_FIELDS_REQUIRED.to_string()));
        };

        if self.users.find_user_by_email(email).await?.is_some() {
            warn!("Signup rejected, account already exists for email: {}", email);
            return Err(AppError::ConflictError(USER_EXISTS.to_string()));
        }

        let password_hash = self.hasher.hash(password, self.hash_cost).await?;
        let new_user = NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        };

        match self.users.create_user(new_user).await {
            Ok(user) => {
                info!("Created user {} for email: {}", user.id, user.email);
                Ok(SignupResponse {
                    message: "Signup successful".to_string(),
                    success: true,
                })
            }
            // Lost a race with a concurrent signup for the same email.
            Err(AppError::DatabaseError(DatabaseError::Duplicate)) => {
                warn!("Signup rejected by unique constraint for email: {}", email);
                Err(AppError::ConflictError(USER_EXISTS.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, AppError> {
        let (Some(email), Some(password)) = (required(&req.email), required(&req.password)) else {
            return Err(AppError::ValidationError(LOGIN_FIELDS_REQUIRED.to_string()));
        };

        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            AppError::ConfigError("JWT secret is not configured".to_string())
        })?;

        let Some(user) = self.users.find_user_by_email(email).await? else {
            warn!("Login failed, no account for email: {}", email);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self.hasher.verify(password, &user.password).await? {
            warn!("Login failed, password mismatch for email: {}", email);
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.signer.sign(user.id, &user.email, secret, self.token_ttl)?;
        info!("Issued session token for user {}", user.id);

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            success: true,
            token,
            email: user.email,
            name: user.name,
        })
    }
}
