//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided id is not a valid UUID.
    InvalidId(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The numeric area code is outside 10..=99.
    AreaCodeOutOfRange(i64),

    /// The region name is not one of the known regions.
    UnknownRegion(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "Invalid id: {}", id),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::AreaCodeOutOfRange(code) => {
                write!(f, "Area code out of range (10-99): {}", code)
            }
            Self::UnknownRegion(region) => write!(f, "Unknown region: {}", region),
        }
    }
}

impl std::error::Error for ValidationError {}
