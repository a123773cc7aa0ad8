//! Identity
//!
//! The caller resolved from a verified bearer token. Lives for one request
//! (stored in request extensions) and is never persisted.

use chrono::{DateTime, Utc};
use platform::token::TokenClaims;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub login: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            issued_at: claims.issued_at(),
            expires_at: claims.expires_at(),
            login: claims.login,
        }
    }
}
