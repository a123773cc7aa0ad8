//! In-memory Repository
//!
//! `HashMap` behind a `tokio::sync::RwLock`. Used by router tests and by
//! anyone wiring the service without a database.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::login::Login;
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        if users.contains_key(user.login.as_str()) {
            return Err(AuthError::UserExists);
        }
        users.insert(user.login.as_str().to_string(), user.clone());
        Ok(())
    }

    async fn find_by_login(&self, login: &str) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(login).cloned())
    }

    async fn exists_by_login(&self, login: &Login) -> AuthResult<bool> {
        Ok(self.users.read().await.contains_key(login.as_str()))
    }
}
