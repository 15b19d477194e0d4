use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::models::{NewUser, User};
use crate::db::store::UserStore;
use crate::error::{AppError, DatabaseError};

/// Process-local store. Records are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        if users.contains_key(&new_user.email) {
            return Err(DatabaseError::Duplicate.into());
        }

        let user = User::new(new_user);
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }
}
