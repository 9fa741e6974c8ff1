//! Area code (DDD) entity and its request/response shapes.

use crate::domain::{AreaCodeId, AreaCodeNumber, Region, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered area code and the region it belongs to.
///
/// Area codes are immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCode {
    /// Unique identifier
    pub id: AreaCodeId,

    /// Two-digit code, unique across all area codes
    pub code: AreaCodeNumber,

    /// Region the code belongs to
    pub region: Region,

    /// When the area code was registered
    pub registered_at: DateTime<Utc>,

    /// User that registered the area code
    pub user_id: UserId,
}

impl AreaCode {
    /// Create a new area code with a fresh id, registered now.
    pub fn new(code: AreaCodeNumber, region: Region, user_id: UserId) -> Self {
        Self {
            id: AreaCodeId::new(),
            code,
            region,
            registered_at: Utc::now(),
            user_id,
        }
    }
}

/// Request to register an area code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCodeRequest {
    /// Numeric code as submitted; range is checked by the use case
    pub area_code: i64,

    /// Region the code belongs to
    pub region: Region,
}

/// Area code as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaCodeRecord {
    pub area_code_id: AreaCodeId,
    pub area_code: AreaCodeNumber,
    pub region: Region,
}

impl From<&AreaCode> for AreaCodeRecord {
    fn from(area_code: &AreaCode) -> Self {
        Self {
            area_code_id: area_code.id,
            area_code: area_code.code,
            region: area_code.region,
        }
    }
}
