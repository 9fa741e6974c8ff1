//! AreaCodeNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;

/// Valid two-digit area codes.
pub const AREA_CODE_RANGE: RangeInclusive<i64> = 10..=99;

/// A two-digit telephone area code (DDD), guaranteed to lie in 10..=99.
///
/// # Example
///
/// ```
/// use contact_directory::domain::AreaCodeNumber;
///
/// assert_eq!(AreaCodeNumber::new(11).unwrap().value(), 11);
/// assert!(AreaCodeNumber::new(100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AreaCodeNumber(u8);

impl AreaCodeNumber {
    /// Create a new AreaCodeNumber, validating the range.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::AreaCodeOutOfRange` outside 10..=99.
    pub fn new(code: impl Into<i64>) -> Result<Self, ValidationError> {
        let code = code.into();
        if !AREA_CODE_RANGE.contains(&code) {
            return Err(ValidationError::AreaCodeOutOfRange(code));
        }
        Ok(Self(code as u8))
    }

    /// Get the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Serialize for AreaCodeNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AreaCodeNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = i64::deserialize(deserializer)?;
        AreaCodeNumber::new(code).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for AreaCodeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds() {
        assert!(AreaCodeNumber::new(9).is_err());
        assert!(AreaCodeNumber::new(10).is_ok());
        assert!(AreaCodeNumber::new(99).is_ok());
        assert!(AreaCodeNumber::new(100).is_err());
        assert!(AreaCodeNumber::new(-11).is_err());
    }

    #[test]
    fn test_out_of_range_error_carries_value() {
        assert_eq!(
            AreaCodeNumber::new(100),
            Err(ValidationError::AreaCodeOutOfRange(100))
        );
    }

    #[test]
    fn test_deserialization_checks_range() {
        let ok: AreaCodeNumber = serde_json::from_str("21").unwrap();
        assert_eq!(ok.value(), 21);
        assert!(serde_json::from_str::<AreaCodeNumber>("7").is_err());
    }
}
