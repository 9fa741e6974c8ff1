//! Contact entity and its request/response shapes.

use super::area_code::AreaCode;
use crate::domain::{
    AreaCodeId, AreaCodeNumber, ContactId, EmailAddress, PhoneNumber, Region, UserId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact in the directory.
///
/// The pair (`area_code_id`, `phone_number`) is unique across all contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier for the contact
    pub id: ContactId,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Local phone number (without area code)
    pub phone_number: PhoneNumber,

    /// Email address
    pub email: EmailAddress,

    /// Area code the phone number is registered under
    pub area_code_id: AreaCodeId,

    /// When the contact was registered; pages are ordered by this
    pub registered_at: DateTime<Utc>,

    /// User that registered the contact
    pub user_id: UserId,
}

impl Contact {
    /// Full name of the contact ("first last").
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Request to register or update a contact.
///
/// Fields are raw as submitted; the validation pipeline decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    /// Numeric area code (DDD)
    pub area_code: i64,
    pub phone_number: String,
    pub email: String,
}

impl ContactRequest {
    /// Create a request from its parts.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        area_code: i64,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            area_code,
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }
}

/// A contact annotated with its area code and region, as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    pub contact_id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub area_code: AreaCodeNumber,
    pub region: Region,
    pub email: String,
    pub phone: String,
}

impl ContactRecord {
    /// Join a contact with its resolved area code.
    pub fn from_parts(contact: &Contact, area_code: &AreaCode) -> Self {
        Self {
            contact_id: contact.id,
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            area_code: area_code.code,
            region: area_code.region,
            email: contact.email.as_str().to_string(),
            phone: contact.phone_number.as_str().to_string(),
        }
    }
}
