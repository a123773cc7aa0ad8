//! Login Use Case
//!
//! Checks a login/password pair and issues a bearer token.

use std::sync::Arc;

use platform::token::issue_token;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_password::RawPassword;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub login: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub login: String,
    /// Signed bearer token, valid for `AuthConfig::token_ttl`
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user = self
            .user_repo
            .find_by_login(&input.login)
            .await?
            .ok_or(AuthError::UserLoginWrong)?;

        let raw_password = RawPassword::presented(input.password);
        if !user.password.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::UserWrongPassword);
        }

        let token = issue_token(user.login.as_str(), self.config.secret(), self.config.token_ttl)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(login = %user.login, "User logged in");

        Ok(LoginOutput {
            login: user.login.into_inner(),
            token,
        })
    }
}
