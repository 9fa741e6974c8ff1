//! Data models for the contact directory.
//!
//! This module contains the stored entities (contacts and area codes), the
//! inbound request shapes, the outbound response records, and pagination.

pub mod area_code;
pub mod contact;
pub mod page;

pub use area_code::{AreaCode, AreaCodeRecord, AreaCodeRequest};
pub use contact::{Contact, ContactRecord, ContactRequest};
pub use page::{normalize_pagination, PageRequest, PageWindow};
