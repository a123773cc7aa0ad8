//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_password::UserPassword, validate_credentials};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub login: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub login: String,
    pub created_at: DateTime<Utc>,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let (login, raw_password) = validate_credentials(input.login, input.password)?;

        // Fast path for the common case; the primary key catches races
        if self.user_repo.exists_by_login(&login).await? {
            return Err(AuthError::UserExists);
        }

        let password = UserPassword::from_raw(&raw_password, self.config.pepper())?;
        let user = User::new(login, password);

        self.user_repo.create(&user).await?;

        tracing::info!(login = %user.login, "User registered");

        Ok(RegisterOutput {
            login: user.login.into_inner(),
            created_at: user.created_at,
        })
    }
}
