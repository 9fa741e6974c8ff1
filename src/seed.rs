//! Startup seed data.
//!
//! A seed file is a JSON document listing area codes and contacts. It is
//! applied through the use cases, so every entry is validated exactly like a
//! live request.

use crate::domain::{Region, UserId};
use crate::error::{ConfigError, ConfigResult, DirectoryError, DirectoryResult};
use crate::models::{AreaCodeRequest, ContactRequest};
use crate::services::{AreaCodeService, ContactService};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// An area code entry in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedAreaCode {
    pub code: i64,
    pub region: Region,
}

/// Contents of a seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub area_codes: Vec<SeedAreaCode>,
    pub contacts: Vec<ContactRequest>,
}

/// Outcome of applying a seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct SeedReport {
    pub area_codes_registered: usize,
    pub contacts_registered: usize,
    pub rejected: usize,
}

impl SeedData {
    /// Parse seed data from a JSON string.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a seed file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::SeedFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// Register every area code, then every contact, on behalf of `user_id`.
    ///
    /// Entries rejected by validation are logged and counted; any other
    /// failure stops the seed.
    pub async fn apply(
        &self,
        area_codes: &dyn AreaCodeService,
        contacts: &dyn ContactService,
        user_id: UserId,
    ) -> DirectoryResult<SeedReport> {
        let mut report = SeedReport::default();

        for entry in &self.area_codes {
            let request = AreaCodeRequest {
                area_code: entry.code,
                region: entry.region,
            };
            match area_codes.register(request, user_id).await {
                Ok(_) => report.area_codes_registered += 1,
                Err(e) if is_rejection(&e) => {
                    warn!(code = entry.code, error = %e, "Seed area code skipped");
                    report.rejected += 1;
                }
                Err(e) => return Err(e),
            }
        }

        for request in &self.contacts {
            match contacts.register(request.clone(), user_id).await {
                Ok(_) => report.contacts_registered += 1,
                Err(e) if is_rejection(&e) => {
                    warn!(
                        name = %format!("{} {}", request.first_name, request.last_name),
                        error = %e,
                        "Seed contact skipped"
                    );
                    report.rejected += 1;
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            area_codes = report.area_codes_registered,
            contacts = report.contacts_registered,
            rejected = report.rejected,
            "Seed applied"
        );
        Ok(report)
    }
}

fn is_rejection(err: &DirectoryError) -> bool {
    matches!(err, DirectoryError::Validation(_) | DirectoryError::Conflict(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        let seed = SeedData::from_json(
            r#"{
                "area_codes": [{"code": 11, "region": "Southeast"}, {"code": 71, "region": "nordeste"}],
                "contacts": [{
                    "first_name": "John",
                    "last_name": "Cena",
                    "area_code": 11,
                    "phone_number": "94400-8791",
                    "email": "john@email.com"
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(seed.area_codes.len(), 2);
        assert_eq!(seed.area_codes[1].region, Region::Northeast);
        assert_eq!(seed.contacts[0].area_code, 11);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let seed = SeedData::from_json("{}").unwrap();
        assert_eq!(seed, SeedData::default());
    }

    #[test]
    fn test_bad_seed_is_a_parse_error() {
        assert!(matches!(
            SeedData::from_json(r#"{"area_codes": [{"code": "x"}]}"#),
            Err(ConfigError::SeedParse(_))
        ));
        assert!(matches!(
            SeedData::from_file("/nonexistent/seed.json"),
            Err(ConfigError::SeedFile { .. })
        ));
    }
}
