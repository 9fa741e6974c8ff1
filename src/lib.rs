//! Contact Directory - contacts tagged with a phone area code (DDD) and its region.
//!
//! This library holds the core of a contact directory: registration, update,
//! deletion, and paginated recovery of contacts, each annotated with the
//! region of its area code.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (ids, area codes, regions, phones, emails)
//! - **models**: Stored entities, request shapes, response records, pagination
//! - **error**: Custom error types and the violation message catalogue
//! - **config**: Configuration management from environment variables
//! - **repositories**: Read/write ports, scoped handles, unit of work, in-memory store
//! - **services**: Region lookup, page aggregation, validation, and the use cases
//! - **metrics**: Counters for mutations, pages, and lookups
//! - **seed**: JSON seed files applied through the use cases

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use domain::{AreaCodeId, AreaCodeNumber, ContactId, Region, UserId};
pub use error::{ConfigError, DirectoryError, DirectoryResult};
pub use metrics::{Metrics, MetricsSummary, PageTimer};
pub use models::{
    AreaCode, AreaCodeRecord, AreaCodeRequest, Contact, ContactRecord, ContactRequest,
    PageRequest, PageWindow,
};
pub use repositories::InMemoryStore;
pub use seed::{SeedData, SeedReport};
pub use services::{AreaCodeService, AreaCodeServiceImpl, ContactService, ContactServiceImpl};
