//! Value Object Module

pub mod login;
pub mod user_password;

use thiserror::Error;

use login::Login;
use user_password::RawPassword;

/// Credential validation failures, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("login must contain at least 3 characters")]
    ShortLogin,
    #[error("login must contain at most 25 characters")]
    LongLogin,
    #[error("login may contain only letters and digits")]
    WrongLoginSymbols,
    #[error("password must contain at least 8 characters")]
    ShortPassword,
    #[error("password must contain at most 25 characters")]
    LongPassword,
    #[error("password may contain only letters and digits")]
    WrongPasswordSymbols,
}

impl CredentialError {
    /// Machine-readable code sent to clients
    pub fn code(&self) -> &'static str {
        match self {
            CredentialError::ShortLogin => "SHORT_LOGIN",
            CredentialError::LongLogin => "LONG_LOGIN",
            CredentialError::WrongLoginSymbols => "WRONG_LOGIN_SYMBOLS",
            CredentialError::ShortPassword => "SHORT_PASSWORD",
            CredentialError::LongPassword => "LONG_PASSWORD",
            CredentialError::WrongPasswordSymbols => "WRONG_PASSWORD_SYMBOLS",
        }
    }
}

/// Validate a login/password pair for registration
///
/// Login rules are checked before password rules; the first failure wins.
pub fn validate_credentials(
    login: String,
    password: String,
) -> Result<(Login, RawPassword), CredentialError> {
    let login = Login::new(login)?;
    let password = RawPassword::new(password)?;
    Ok((login, password))
}
