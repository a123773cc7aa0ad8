//! Authorization Gate
//!
//! Decides, per request and without any stored state, what happens to a
//! request given its raw `Authorization` header value. The header carries
//! the bare token (no `Bearer ` prefix); surrounding whitespace is ignored
//! and an empty value counts as no token.
//!
//! | policy \ token           | none        | valid           | invalid |
//! |--------------------------|-------------|-----------------|---------|
//! | `RejectIfAuthenticated`  | anonymous   | already authed  | 400     |
//! | `RequireAuthenticated`   | 401         | identity        | 400     |
//! | `OptionalAuthenticated`  | anonymous   | identity        | 400     |

use platform::token::verify_token;

use crate::domain::entity::identity::Identity;
use crate::error::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// Login: an authenticated caller is turned away with 208
    RejectIfAuthenticated,
    /// Protected writes
    RequireAuthenticated,
    /// Public reads that personalize when a caller is known
    OptionalAuthenticated,
}

/// What the header turned out to hold
#[derive(Debug)]
pub enum TokenState {
    NoToken,
    Valid(Identity),
    Invalid,
}

#[derive(Debug)]
pub enum GateOutcome {
    ProceedWithIdentity(Identity),
    ProceedAnonymous,
    Reject(AuthError),
    AlreadyAuthorized,
}

/// Classify a raw header value
pub fn inspect_token(header: Option<&str>, secret: &[u8]) -> TokenState {
    let token = header.map(str::trim).unwrap_or_default();
    if token.is_empty() {
        return TokenState::NoToken;
    }

    match verify_token(token, secret) {
        Ok(claims) => TokenState::Valid(claims.into()),
        Err(e) => {
            tracing::debug!(error = %e, "Bearer token failed verification");
            TokenState::Invalid
        }
    }
}

impl AuthPolicy {
    pub fn decide(self, state: TokenState) -> GateOutcome {
        match (self, state) {
            (_, TokenState::Invalid) => GateOutcome::Reject(AuthError::InvalidToken),

            (AuthPolicy::RejectIfAuthenticated, TokenState::Valid(_)) => {
                GateOutcome::AlreadyAuthorized
            }
            (AuthPolicy::RejectIfAuthenticated, TokenState::NoToken) => {
                GateOutcome::ProceedAnonymous
            }

            (AuthPolicy::RequireAuthenticated, TokenState::Valid(identity)) => {
                GateOutcome::ProceedWithIdentity(identity)
            }
            (AuthPolicy::RequireAuthenticated, TokenState::NoToken) => {
                GateOutcome::Reject(AuthError::MissingToken)
            }

            (AuthPolicy::OptionalAuthenticated, TokenState::Valid(identity)) => {
                GateOutcome::ProceedWithIdentity(identity)
            }
            (AuthPolicy::OptionalAuthenticated, TokenState::NoToken) => {
                GateOutcome::ProceedAnonymous
            }
        }
    }
}

/// Inspect the header and apply `policy`
pub fn evaluate(policy: AuthPolicy, header: Option<&str>, secret: &[u8]) -> GateOutcome {
    policy.decide(inspect_token(header, secret))
}
