//! Error conversions
//!
//! Maps storage errors onto [`AppError`] and renders [`AppError`] as an
//! HTTP problem document.

use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// PostgreSQL `unique_violation`
#[cfg(feature = "sqlx")]
pub const PG_UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL `foreign_key_violation`
#[cfg(feature = "sqlx")]
pub const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

#[cfg(feature = "sqlx")]
fn has_sqlstate(err: &sqlx::Error, sqlstate: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(sqlstate),
        _ => false,
    }
}

/// 一意制約違反かどうかを判定
///
/// 事前の存在チェックをすり抜けた同時登録はここで検出される。
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    has_sqlstate(err, PG_UNIQUE_VIOLATION)
}

/// 外部キー制約違反かどうかを判定
///
/// 参照先の行が存在しない挿入（削除済みユーザー名義の広告など）。
#[cfg(feature = "sqlx")]
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    has_sqlstate(err, PG_FOREIGN_KEY_VIOLATION)
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        // Constraint violations stay 500 here; callers that expect one map it
        // to their own error before it reaches this conversion.
        let kind = match &err {
            sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => ErrorKind::ServiceUnavailable,
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                // Class 53: Insufficient Resources, Class 57: Operator Intervention
                Some(code) if code.starts_with("53") || code.starts_with("57") => {
                    ErrorKind::ServiceUnavailable
                }
                _ => ErrorKind::InternalServerError,
            },
            _ => ErrorKind::InternalServerError,
        };
        AppError::new(kind, "Database error").with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // 5xx の詳細はログ側にのみ残す
        let detail = if self.is_server_error() {
            "internal server error"
        } else {
            self.message()
        };

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "code": self.code(),
            "detail": detail,
        });

        (status, Json(body)).into_response()
    }
}

/// テスト用の疑似データベースエラー
///
/// 実 DB なしで SQLSTATE ごとの分岐を検証するために使う。
#[cfg(all(feature = "sqlx", any(test, feature = "testing")))]
pub mod testing {
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind as DbErrorKind};

    /// SQLSTATE だけを持つデータベースエラー
    #[derive(Debug)]
    pub struct SqlStateError {
        code: &'static str,
    }

    impl SqlStateError {
        /// `code` を返す `sqlx::Error::Database` を生成
        pub fn with_code(code: &'static str) -> sqlx::Error {
            sqlx::Error::Database(Box::new(Self { code }))
        }
    }

    impl fmt::Display for SqlStateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "database error (SQLSTATE {})", self.code)
        }
    }

    impl StdError for SqlStateError {}

    impl DatabaseError for SqlStateError {
        fn message(&self) -> &str {
            "database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> DbErrorKind {
            match self.code {
                super::PG_UNIQUE_VIOLATION => DbErrorKind::UniqueViolation,
                super::PG_FOREIGN_KEY_VIOLATION => DbErrorKind::ForeignKeyViolation,
                _ => DbErrorKind::Other,
            }
        }
    }
}
