use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Session tokens expire this long after issuance unless configured otherwise.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,   // User ID
    pub email: String,
    pub iat: i64,      // Issued at
    pub exp: i64,      // Expiration time
}

impl Claims {
    pub fn new(user_id: Uuid, email: &str, expires_in: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        }
    }

    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.sub)
            .map_err(|e| AppError::InternalError(format!("malformed subject claim: {}", e)))
    }
}

/// Signs and checks session tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenSigner: Send + Sync {
    /// Issues a token for `user_id`/`email` expiring `expires_in` from now.
    fn sign(
        &self,
        user_id: Uuid,
        email: &str,
        secret: &str,
        expires_in: Duration,
    ) -> Result<String, AppError>;

    fn verify(&self, token: &str, secret: &str) -> Result<Claims, AppError>;
}

/// HS256 JSON Web Tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtSigner;

impl TokenSigner for JwtSigner {
    fn sign(
        &self,
        user_id: Uuid,
        email: &str,
        secret: &str,
        expires_in: Duration,
    ) -> Result<String, AppError> {
        let claims = Claims::new(user_id, email, expires_in);
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )?;

        Ok(token)
    }

    fn verify(&self, token: &str, secret: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )?;

        Ok(data.claims)
    }
}
