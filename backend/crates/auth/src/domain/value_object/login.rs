//! Login Value Object
//!
//! A login is the user's unique identity key: it is the primary key of
//! `users`, the `login` claim of every token, and the owner reference on
//! advertisements.
//!
//! ## Invariants
//! - Length: 3-25 Unicode code points
//! - Only letters and numbers from any script (`^[\p{L}\p{N}]+$`)
//! - Stored exactly as entered (no trimming, no case folding)

use serde::Serialize;
use std::fmt;

use kernel::text::{LengthCheck, check_length, is_letters_and_numbers};

use crate::domain::value_object::CredentialError;

/// Minimum login length (in code points)
pub const LOGIN_MIN_LENGTH: usize = 3;

/// Maximum login length (in code points)
pub const LOGIN_MAX_LENGTH: usize = 25;

/// Validated login
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Login(String);

impl Login {
    pub fn new(raw: impl Into<String>) -> Result<Self, CredentialError> {
        let raw = raw.into();

        match check_length(&raw, LOGIN_MIN_LENGTH, LOGIN_MAX_LENGTH) {
            LengthCheck::TooShort => return Err(CredentialError::ShortLogin),
            LengthCheck::TooLong => return Err(CredentialError::LongLogin),
            LengthCheck::Ok => {}
        }

        if !is_letters_and_numbers(&raw) {
            return Err(CredentialError::WrongLoginSymbols);
        }

        Ok(Self(raw))
    }

    /// Rebuild from a trusted source (database row, verified token)
    pub(crate) fn from_trusted(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Login {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
