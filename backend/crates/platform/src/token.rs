//! Bearer Tokens
//!
//! HS256-signed JWTs carrying the caller's login. Verification rejects
//! a bad signature, a malformed token, or an expired one; there is no
//! leeway on `exp`.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token lifetime used by the API
pub const DEFAULT_TOKEN_TTL: Duration = Duration::minutes(5);

#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing failed (bad key material, serialization)
    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Token expired")]
    Expired,

    /// Bad signature, wrong algorithm, or not a JWT at all
    #[error("Token invalid: {0}")]
    Invalid(String),
}

/// Claims embedded in every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub login: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

impl TokenClaims {
    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or_default()
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }
}

/// Sign a token for `login` that expires `ttl` after now
pub fn issue_token(login: &str, secret: &[u8], ttl: Duration) -> Result<String, TokenError> {
    issue_token_at(login, secret, ttl, Utc::now())
}

/// Sign a token as if it had been issued at `now`
pub fn issue_token_at(
    login: &str,
    secret: &[u8],
    ttl: Duration,
    now: DateTime<Utc>,
) -> Result<String, TokenError> {
    let claims = TokenClaims {
        login: login.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Verify a token and return its claims
///
/// Callers branch on token presence first: an empty string is simply an
/// invalid token here.
pub fn verify_token(token: &str, secret: &[u8]) -> Result<TokenClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_exp = true;

    decode::<TokenClaims>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(e.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    #[test]
    fn test_issue_then_verify_returns_login() {
        let token = issue_token("user1", SECRET, DEFAULT_TOKEN_TTL).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();

        assert_eq!(claims.login, "user1");
        assert_eq!(claims.exp - claims.iat, 300);
        assert_eq!(claims.expires_at() - claims.issued_at(), DEFAULT_TOKEN_TTL);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let issued = Utc::now() - Duration::minutes(6);
        let token = issue_token_at("user1", SECRET, DEFAULT_TOKEN_TTL, issued).unwrap();

        assert!(matches!(
            verify_token(&token, SECRET),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_token_still_valid_inside_window() {
        let issued = Utc::now() - Duration::minutes(4);
        let token = issue_token_at("user1", SECRET, DEFAULT_TOKEN_TTL, issued).unwrap();
        assert!(verify_token(&token, SECRET).is_ok());
    }

    #[test]
    fn test_other_secret_is_rejected() {
        let token = issue_token("user1", SECRET, DEFAULT_TOKEN_TTL).unwrap();
        assert!(matches!(
            verify_token(&token, b"another-secret"),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let token = issue_token("user1", SECRET, DEFAULT_TOKEN_TTL).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = issue_token("admin", b"attacker", DEFAULT_TOKEN_TTL).unwrap();
        let forged_payload = forged.split('.').nth(1).unwrap().to_string();
        parts[1] = &forged_payload;

        assert!(verify_token(&parts.join("."), SECRET).is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            verify_token("not-a-token", SECRET),
            Err(TokenError::Invalid(_))
        ));
        assert!(matches!(verify_token("", SECRET), Err(TokenError::Invalid(_))));
    }
}
