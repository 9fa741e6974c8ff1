//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! entity ids, area codes, regions, email addresses, and phone numbers.
//! These value objects validate at construction time and prevent invalid
//! data from being represented in the system.

pub mod area_code;
pub mod email;
pub mod errors;
pub mod ids;
pub mod phone;
pub mod region;

pub use area_code::AreaCodeNumber;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use ids::{AreaCodeId, ContactId, UserId};
pub use phone::PhoneNumber;
pub use region::Region;
