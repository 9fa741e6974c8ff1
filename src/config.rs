//! Configuration management for the contact directory.
//!
//! Values come from environment variables. An optional `.env` file is loaded
//! silently so that nothing is written to stdout, which carries the report.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Page size used when the caller gives none (default: 10)
    pub default_page_size: u64,

    /// Upper bound on concurrent area code lookups per page (default: 32)
    pub max_concurrent_lookups: usize,

    /// Optional JSON seed file applied at startup
    pub seed_file: Option<String>,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DIRECTORY_DEFAULT_PAGE_SIZE`: page size when none is given (default: 10)
    /// - `DIRECTORY_MAX_CONCURRENT_LOOKUPS`: fan-out bound, at least 1 (default: 32)
    /// - `DIRECTORY_SEED_FILE`: path of a JSON seed file (default: none)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let default_page_size = Self::parse_env_u64("DIRECTORY_DEFAULT_PAGE_SIZE", 10)?;
        if default_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DIRECTORY_DEFAULT_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let max_concurrent_lookups = Self::parse_env_usize("DIRECTORY_MAX_CONCURRENT_LOOKUPS", 32)?;
        if max_concurrent_lookups == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DIRECTORY_MAX_CONCURRENT_LOOKUPS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let seed_file = env::var("DIRECTORY_SEED_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty());

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            default_page_size,
            max_concurrent_lookups,
            seed_file,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_page_size: 10,
            max_concurrent_lookups: 32,
            seed_file: None,
            log_level: "info".to_string(),
        }
    }
}
