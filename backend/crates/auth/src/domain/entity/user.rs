//! User Entity
//!
//! A registered account. Immutable once created.

use chrono::{DateTime, SubsecRound, Utc};

use crate::domain::value_object::{login::Login, user_password::UserPassword};

#[derive(Debug, Clone)]
pub struct User {
    /// Unique identity key
    pub login: Login,
    /// Argon2id hash, never serialized
    pub password: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(login: Login, password: UserPassword) -> Self {
        Self {
            login,
            password,
            // TIMESTAMPTZ keeps microseconds
            created_at: Utc::now().trunc_subsecs(6),
        }
    }
}
