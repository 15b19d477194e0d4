use async_trait::async_trait;

use crate::db::models::{NewUser, User};
use crate::error::AppError;

/// Persistent user records keyed by email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns `None` when no record carries this email.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Inserts a record. Implementations reject a second record for the same
    /// email with [`crate::error::DatabaseError::Duplicate`].
    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError>;
}
