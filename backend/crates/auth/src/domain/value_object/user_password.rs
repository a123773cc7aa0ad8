//! User Password Value Object
//!
//! Domain rules for passwords on top of `platform::password`.
//!
//! ## Rules (registration)
//! - Length: 8-25 Unicode code points
//! - Only letters and numbers from any script
//!
//! Login attempts skip the rules: a password that could never have been
//! registered simply fails verification.

use std::fmt;

use kernel::text::{LengthCheck, check_length, is_letters_and_numbers};
use platform::password::{ClearTextPassword, HashedPassword, PasswordHashError};

use crate::domain::value_object::CredentialError;
use crate::error::{AuthError, AuthResult};

/// Minimum password length (in code points)
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum password length (in code points)
pub const PASSWORD_MAX_LENGTH: usize = 25;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password, enforcing registration rules
    pub fn new(raw: String) -> Result<Self, CredentialError> {
        match check_length(&raw, PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH) {
            LengthCheck::TooShort => return Err(CredentialError::ShortPassword),
            LengthCheck::TooLong => return Err(CredentialError::LongPassword),
            LengthCheck::Ok => {}
        }

        if !is_letters_and_numbers(&raw) {
            return Err(CredentialError::WrongPasswordSymbols);
        }

        Ok(Self(ClearTextPassword::new(raw)))
    }

    /// Wrap a password presented at login, without registration rules
    pub fn presented(raw: String) -> Self {
        Self(ClearTextPassword::new(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password
    ///
    /// ## Arguments
    /// * `raw` - The validated raw password
    /// * `pepper` - Optional application-wide secret
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AuthResult<Self> {
        raw.inner()
            .hash(pepper)
            .map(Self)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AuthResult<Self> {
        HashedPassword::from_phc_string(phc_string)
            .map(Self)
            .map_err(|e: PasswordHashError| {
                AuthError::Internal(format!("Stored password hash unreadable: {}", e))
            })
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    ///
    /// ## Arguments
    /// * `raw` - The raw password to verify
    /// * `pepper` - Must match the pepper used during hashing
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
