//! Ads Error Types
//!
//! Advertisement-specific error variants that render through
//! `kernel::error::AppError`, the same way `auth::AuthError` does.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::AdvertisementError;

/// Ads-specific result type alias
pub type AdsResult<T> = Result<T, AdsError>;

#[derive(Debug, Error)]
pub enum AdsError {
    /// A field breaks an advertisement rule
    #[error(transparent)]
    Validation(#[from] AdvertisementError),

    /// Listing query parameters cannot be parsed or are out of range
    #[error("invalid filter params: {0}")]
    InvalidFilter(String),

    /// Request body is not the expected JSON
    #[error("invalid data format")]
    InvalidPayload(String),

    /// Token names an owner the users table no longer has
    #[error("unauthorized")]
    UnknownOwner,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AdsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdsError::UnknownOwner => StatusCode::UNAUTHORIZED,
            AdsError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdsError::UnknownOwner => ErrorKind::Unauthorized,
            AdsError::Database(_) => ErrorKind::InternalServerError,
            _ => ErrorKind::BadRequest,
        }
    }

    /// Machine-readable code sent to clients
    pub fn code(&self) -> &'static str {
        match self {
            AdsError::Validation(e) => e.code(),
            AdsError::InvalidFilter(_) => "INVALID_FILTER",
            AdsError::InvalidPayload(_) => "INVALID_DATA_FORMAT",
            AdsError::UnknownOwner => "UNAUTHORIZED",
            AdsError::Database(_) => "INTERNAL",
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string()).with_code(self.code())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AdsError::Database(e) => {
                tracing::error!(error = %e, "Ads database error");
            }
            AdsError::UnknownOwner => {
                tracing::warn!("Advertisement owner missing from users");
            }
            AdsError::InvalidPayload(detail) => {
                tracing::debug!(detail = %detail, "Unreadable advertisement body");
            }
            _ => {
                tracing::debug!(code = self.code(), error = %self, "Ads error");
            }
        }
    }
}

impl IntoResponse for AdsError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Storage failures keep the kernel mapping (pool exhaustion is 503)
            AdsError::Database(e) => AppError::from(e).with_code("INTERNAL").into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}
