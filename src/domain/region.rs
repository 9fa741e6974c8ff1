//! Geographic regions that area codes belong to.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the five geographic regions an area code can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    North,
    Northeast,
    CentralWest,
    Southeast,
    South,
}

impl Region {
    /// All regions, in declaration order.
    pub const ALL: [Region; 5] = [
        Region::North,
        Region::Northeast,
        Region::CentralWest,
        Region::Southeast,
        Region::South,
    ];

    /// Display name used in response records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::Northeast => "Northeast",
            Region::CentralWest => "Central-West",
            Region::Southeast => "Southeast",
            Region::South => "South",
        }
    }
}

impl FromStr for Region {
    type Err = ValidationError;

    /// Parse a region name, case-insensitively.
    ///
    /// Accepts the display name, the display name without its hyphen, and the
    /// Portuguese region names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != ' ' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "north" | "norte" => Ok(Region::North),
            "northeast" | "nordeste" => Ok(Region::Northeast),
            "centralwest" | "centrooeste" => Ok(Region::CentralWest),
            "southeast" | "sudeste" => Ok(Region::Southeast),
            "south" | "sul" => Ok(Region::South),
            _ => Err(ValidationError::UnknownRegion(s.to_string())),
        }
    }
}

impl Serialize for Region {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
