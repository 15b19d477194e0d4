use std::ops::RangeInclusive;

use async_trait::async_trait;

use crate::error::AppError;

/// Bcrypt cost used when configuration does not override it.
pub const DEFAULT_HASH_COST: u32 = 10;

/// Costs bcrypt accepts.
pub const HASH_COST_RANGE: RangeInclusive<u32> = 4..=31;

/// One-way salted password hashing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str, cost: u32) -> Result<String, AppError>;

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError>;
}

/// Bcrypt on the blocking pool so hashing never stalls the executor.
#[derive(Debug, Clone, Copy, Default)]
pub struct BcryptHasher;

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash(&self, password: &str, cost: u32) -> Result<String, AppError> {
        let password = password.to_owned();
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hashed)
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
        Ok(matches)
    }
}
