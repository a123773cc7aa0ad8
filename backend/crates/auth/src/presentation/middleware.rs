//! Auth Middleware
//!
//! One `from_fn_with_state` middleware per gate policy. Each reads the raw
//! `Authorization` header, applies the policy, and on success stores the
//! resolved [`Identity`] in request extensions for the extractors in
//! [`super::extract`].

use axum::Json;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::gate::{AuthPolicy, GateOutcome, evaluate};
use crate::domain::entity::identity::Identity;
use crate::error::AuthError;

/// Body of the 208 response sent to already authenticated callers
pub const ALREADY_AUTHORIZED: &str = "already authorized";

/// Turns away callers that already hold a valid token (login)
pub async fn reject_if_authenticated(
    State(config): State<Arc<AuthConfig>>,
    req: Request,
    next: Next,
) -> Response {
    apply(AuthPolicy::RejectIfAuthenticated, &config, req, next).await
}

/// Requires a valid token
pub async fn require_authenticated(
    State(config): State<Arc<AuthConfig>>,
    req: Request,
    next: Next,
) -> Response {
    apply(AuthPolicy::RequireAuthenticated, &config, req, next).await
}

/// Resolves the caller when a token is presented, passes anonymous callers through
pub async fn optional_authenticated(
    State(config): State<Arc<AuthConfig>>,
    req: Request,
    next: Next,
) -> Response {
    apply(AuthPolicy::OptionalAuthenticated, &config, req, next).await
}

async fn apply(policy: AuthPolicy, config: &AuthConfig, mut req: Request, next: Next) -> Response {
    let outcome = match req.headers().get(header::AUTHORIZATION) {
        None => evaluate(policy, None, config.secret()),
        Some(value) => match value.to_str() {
            Ok(raw) => evaluate(policy, Some(raw), config.secret()),
            // Non-ASCII header bytes cannot be a JWT
            Err(_) => GateOutcome::Reject(AuthError::InvalidToken),
        },
    };

    match outcome {
        GateOutcome::ProceedWithIdentity(identity) => {
            tracing::debug!(login = %identity.login, ?policy, "Request authenticated");
            req.extensions_mut().insert::<Identity>(identity);
            next.run(req).await
        }
        GateOutcome::ProceedAnonymous => next.run(req).await,
        GateOutcome::AlreadyAuthorized => {
            tracing::debug!("Authenticated caller hit a reject-if-authenticated route");
            (StatusCode::ALREADY_REPORTED, Json(ALREADY_AUTHORIZED)).into_response()
        }
        GateOutcome::Reject(err) => err.into_response(),
    }
}
