//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use sqlx::PgPool;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{login::Login, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// The `users.login` primary key settles registrations that both passed
/// `exists_by_login`.
fn insert_error(err: sqlx::Error) -> AuthError {
    if is_unique_violation(&err) {
        AuthError::UserExists
    } else {
        AuthError::Database(err)
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                login,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3)
            "#,
        )
        .bind(user.login.as_str())
        .bind(user.password.as_phc_string())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(())
    }

    async fn find_by_login(&self, login: &str) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                login,
                password_hash,
                created_at
            FROM users
            WHERE login = $1
            "#,
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_login(&self, login: &Login) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE login = $1)",
        )
        .bind(login.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    login: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        Ok(User {
            login: Login::from_trusted(self.login),
            password: UserPassword::from_phc_string(self.password_hash)?,
            created_at: self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::conversions::testing::SqlStateError;

    #[test]
    fn test_unique_violation_is_user_exists() {
        let err = insert_error(SqlStateError::with_code("23505"));
        assert!(matches!(err, AuthError::UserExists));
        assert_eq!(err.code(), "USER_EXISTS");
    }

    #[test]
    fn test_other_insert_failures_stay_internal() {
        let err = insert_error(SqlStateError::with_code("23503"));
        assert!(matches!(err, AuthError::Database(_)));
        assert_eq!(err.code(), "INTERNAL");
    }
}
