//! Identity Extractors
//!
//! Read what the gate middleware left in request extensions.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::entity::identity::Identity;
use crate::error::AuthError;

/// The authenticated caller; rejects with 401 when the route was not gated
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentUser)
            .ok_or(AuthError::MissingToken)
    }
}

/// The caller if one was resolved, `None` for anonymous requests
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<Identity>);

impl MaybeUser {
    pub fn login(&self) -> Option<&str> {
        self.0.as_ref().map(|identity| identity.login.as_str())
    }
}

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(parts.extensions.get::<Identity>().cloned()))
    }
}
