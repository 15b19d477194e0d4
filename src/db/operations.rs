use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::db::models::{NewUser, User};
use crate::db::store::UserStore;
use crate::error::AppError;

const USER_COLUMNS: &str = "id, name, email, password, created_at";

/// PostgreSQL-backed [`UserStore`].
pub struct DbOperations {
    pool: Arc<PgPool>,
}

impl DbOperations {
    pub async fn new_with_options(
        url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(url)
            .await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Applies the embedded migrations, creating the `users` table and its
    /// unique email constraint.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations").run(self.pool.as_ref()).await?;
        info!("Database migrations applied");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UserStore for DbOperations {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = User::new(new_user);
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, name, email, password, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.created_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(user)
    }
}
