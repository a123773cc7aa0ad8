//! Description Value Object
//!
//! Free text of 1-500 Unicode code points. Any characters are allowed.

use std::fmt;

use kernel::text::{LengthCheck, check_length};

use crate::domain::value_object::AdvertisementError;

pub const DESCRIPTION_MIN_LENGTH: usize = 1;
pub const DESCRIPTION_MAX_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    pub fn new(raw: impl Into<String>) -> Result<Self, AdvertisementError> {
        let raw = raw.into();

        match check_length(&raw, DESCRIPTION_MIN_LENGTH, DESCRIPTION_MAX_LENGTH) {
            LengthCheck::TooShort => Err(AdvertisementError::ShortDescription),
            LengthCheck::TooLong => Err(AdvertisementError::LongDescription),
            LengthCheck::Ok => Ok(Self(raw)),
        }
    }

    pub fn from_trusted(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
