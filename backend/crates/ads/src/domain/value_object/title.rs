//! Title Value Object
//!
//! ## Invariants
//! - Length: 3-50 Unicode code points
//! - Only letters and numbers from any script (no spaces)

use std::fmt;

use kernel::text::{LengthCheck, check_length, is_letters_and_numbers};

use crate::domain::value_object::AdvertisementError;

/// Minimum title length (in code points)
pub const TITLE_MIN_LENGTH: usize = 3;

/// Maximum title length (in code points)
pub const TITLE_MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(raw: impl Into<String>) -> Result<Self, AdvertisementError> {
        let raw = raw.into();

        match check_length(&raw, TITLE_MIN_LENGTH, TITLE_MAX_LENGTH) {
            LengthCheck::TooShort => return Err(AdvertisementError::ShortTitle),
            LengthCheck::TooLong => return Err(AdvertisementError::LongTitle),
            LengthCheck::Ok => {}
        }

        if !is_letters_and_numbers(&raw) {
            return Err(AdvertisementError::WrongTitleSymbols);
        }

        Ok(Self(raw))
    }

    /// Rebuild from a stored value
    pub fn from_trusted(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
