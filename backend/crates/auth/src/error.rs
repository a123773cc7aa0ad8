//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::CredentialError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login or password breaks a registration rule
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Login already registered
    #[error("user with this login already exists")]
    UserExists,

    /// No account with this login
    #[error("wrong user login")]
    UserLoginWrong,

    /// Account exists but the password does not match
    #[error("wrong user password")]
    UserWrongPassword,

    /// Route requires a token and none was presented
    #[error("unauthorized")]
    MissingToken,

    /// A token was presented but is malformed, forged, or expired
    #[error("invalid JWT token, authorize")]
    InvalidToken,

    /// Request body is not the expected JSON
    #[error("invalid data format")]
    InvalidPayload(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error (hashing, signing)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingToken => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
            _ => ErrorKind::BadRequest,
        }
    }

    /// Machine-readable code sent to clients
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::Credential(e) => e.code(),
            AuthError::UserExists => "USER_EXISTS",
            AuthError::UserLoginWrong => "USER_LOGIN_WRONG",
            AuthError::UserWrongPassword => "USER_WRONG_PASSWORD",
            AuthError::MissingToken => "UNAUTHORIZED",
            AuthError::InvalidToken => "INVALID_TOKEN",
            AuthError::InvalidPayload(_) => "INVALID_DATA_FORMAT",
            AuthError::Database(_) | AuthError::Internal(_) => "INTERNAL",
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string()).with_code(self.code())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::UserLoginWrong | AuthError::UserWrongPassword => {
                tracing::warn!(code = self.code(), "Failed login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected invalid bearer token");
            }
            AuthError::InvalidPayload(detail) => {
                tracing::debug!(detail = %detail, "Unreadable auth request body");
            }
            _ => {
                tracing::debug!(code = self.code(), error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Storage failures keep the kernel mapping (pool exhaustion is 503)
            AuthError::Database(e) => AppError::from(e).with_code("INTERNAL").into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}
