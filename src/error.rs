//! Error types for the contact directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling,
//! plus the catalogue of user-visible violation messages.

use thiserror::Error;

/// Human-readable violation messages reported to callers.
pub mod messages {
    pub const BLANK_FIRST_NAME: &str = "first name must not be blank";
    pub const BLANK_LAST_NAME: &str = "last name must not be blank";
    pub const BLANK_PHONE_NUMBER: &str = "phone number must not be blank";
    pub const INVALID_PHONE_NUMBER: &str = "phone number is invalid";
    pub const BLANK_EMAIL: &str = "email must not be blank";
    pub const INVALID_EMAIL: &str = "email is invalid";
    pub const DDD_NOT_FOUND: &str = "area code not found";
    pub const DDD_OUT_OF_RANGE: &str = "area code must be between 10 and 99";
    pub const DDD_ALREADY_REGISTERED: &str = "area code already registered";
    pub const CONTACT_ALREADY_REGISTERED: &str = "contact already registered";
    pub const CONTACT_NOT_FOUND: &str = "contact not found";
}

/// Errors produced by the directory core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// One or more validation violations, always the complete list
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Area code or contact not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Write would break a uniqueness invariant
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A repository port failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// The unit of work could not be committed
    #[error("Commit failed: {0}")]
    CommitFailed(String),
}

impl DirectoryError {
    /// Shorthand for the area-code-not-found failure.
    pub fn ddd_not_found() -> Self {
        Self::NotFound(messages::DDD_NOT_FOUND.to_string())
    }

    /// Shorthand for the contact-not-found failure.
    pub fn contact_not_found() -> Self {
        Self::NotFound(messages::CONTACT_NOT_FOUND.to_string())
    }

    /// Itemized messages for delivery to the caller.
    ///
    /// Validation failures yield every violation; all other kinds yield one item.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(violations) => violations.clone(),
            Self::NotFound(msg)
            | Self::Conflict(msg)
            | Self::Storage(msg)
            | Self::CommitFailed(msg) => vec![msg.clone()],
        }
    }

    /// Whether this error represents a "not found" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Seed file could not be read
    #[error("Failed to read seed file {path}: {reason}")]
    SeedFile { path: String, reason: String },

    /// Seed file is not valid JSON for the expected shape
    #[error("Seed file parse error: {0}")]
    SeedParse(#[from] serde_json::Error),
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
