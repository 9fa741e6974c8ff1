//! Application service layer.
//!
//! Services hold the use cases and orchestrate lookups, validation, and
//! units of work. They return plain records and typed errors to whatever
//! delivery layer sits on top.

mod aggregator;
mod area_code_service;
mod contact_service;
mod contact_validation;
mod region_lookup;

pub use aggregator::ContactAggregator;
pub use area_code_service::{AreaCodeService, AreaCodeServiceImpl};
pub use contact_service::{ContactService, ContactServiceImpl};
pub use contact_validation::{ContactValidator, ValidatedContact, ValidationResult};
pub use region_lookup::RegionLookupService;
