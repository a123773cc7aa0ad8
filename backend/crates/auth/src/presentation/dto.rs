//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /register` and `POST /login`
#[derive(Clone, Deserialize)]
pub struct CredentialsRequest {
    pub login: String,
    pub password: String,
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Register response
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub login: String,
    pub created_at: DateTime<Utc>,
}
