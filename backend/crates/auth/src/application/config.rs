//! Application Configuration
//!
//! Configuration for the Auth application layer.

use chrono::Duration;
use platform::token::DEFAULT_TOKEN_TTL;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 key for bearer tokens
    pub token_secret: Vec<u8>,
    /// Token lifetime (5 minutes)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    pub fn new(token_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: token_secret.into(),
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        }
    }

    pub fn with_pepper(mut self, pepper: Option<Vec<u8>>) -> Self {
        self.password_pepper = pepper.filter(|p| !p.is_empty());
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    pub fn secret(&self) -> &[u8] {
        &self.token_secret
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
