//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{CredentialsRequest, RegisterResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Unwrap a JSON body, turning extractor rejections into a 400
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AuthResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AuthError::InvalidPayload(rejection.body_text()))
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<RegisterResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let req = json_body(payload)?;
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            login: req.login,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            login: output.login,
            created_at: output.created_at,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
///
/// Responds with the bare token as a JSON string.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<Json<String>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let req = json_body(payload)?;
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            login: req.login,
            password: req.password,
        })
        .await?;

    Ok(Json(output.token))
}
