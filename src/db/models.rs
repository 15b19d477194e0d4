use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Bcrypt hash, never the plaintext password.
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by signup; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    pub fn new(new_user: NewUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password: new_user.password_hash,
            created_at: Utc::now(),
        }
    }
}
