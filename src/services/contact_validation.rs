//! Contact request validation.
//!
//! Every check runs and appends to a [`ValidationResult`]; the request is
//! rejected only after all of them have run, with the complete list.

use crate::domain::{EmailAddress, PhoneNumber};
use crate::error::{messages, DirectoryError, DirectoryResult};
use crate::models::{AreaCode, ContactRequest};
use crate::repositories::ContactReadRepository;
use crate::services::region_lookup::RegionLookupService;
use std::sync::Arc;

/// Ordered accumulator of violation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    violations: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a violation.
    pub fn add(&mut self, message: impl Into<String>) {
        self.violations.push(message.into());
    }

    /// Append `message` unless `ok` holds.
    pub fn check(&mut self, ok: bool, message: &str) {
        if !ok {
            self.add(message);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    /// `Ok` when nothing was recorded, otherwise one aggregate failure.
    pub fn into_result(self) -> DirectoryResult<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(DirectoryError::Validation(self.violations))
        }
    }
}

/// A request that passed validation, with its area code resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContact {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: PhoneNumber,
    pub email: EmailAddress,
    pub area_code: AreaCode,
}

/// Validates contact registration and update requests.
#[derive(Clone)]
pub struct ContactValidator {
    lookup: RegionLookupService,
    contacts: Arc<dyn ContactReadRepository>,
}

impl ContactValidator {
    pub fn new(lookup: RegionLookupService, contacts: Arc<dyn ContactReadRepository>) -> Self {
        Self { lookup, contacts }
    }

    /// Structural and area code checks.
    ///
    /// Violations are reported in field order: first name, last name, phone,
    /// email, area code. Storage failures during the area code lookup are
    /// returned as-is rather than recorded as a violation.
    pub async fn validate(&self, request: &ContactRequest) -> DirectoryResult<ValidatedContact> {
        let mut result = ValidationResult::new();

        let first_name = request.first_name.trim();
        result.check(!first_name.is_empty(), messages::BLANK_FIRST_NAME);

        let last_name = request.last_name.trim();
        result.check(!last_name.is_empty(), messages::BLANK_LAST_NAME);

        let phone_number = if request.phone_number.trim().is_empty() {
            result.add(messages::BLANK_PHONE_NUMBER);
            None
        } else {
            let parsed = PhoneNumber::new(request.phone_number.as_str()).ok();
            result.check(parsed.is_some(), messages::INVALID_PHONE_NUMBER);
            parsed
        };

        let email = if request.email.trim().is_empty() {
            result.add(messages::BLANK_EMAIL);
            None
        } else {
            let parsed = EmailAddress::new(request.email.as_str()).ok();
            result.check(parsed.is_some(), messages::INVALID_EMAIL);
            parsed
        };

        let area_code = match self.lookup.find_by_code(request.area_code).await {
            Ok(area_code) => Some(area_code),
            Err(e) if e.is_not_found() => {
                result.add(messages::DDD_NOT_FOUND);
                None
            }
            Err(e) => return Err(e),
        };

        // each missing value has already recorded its violation
        let (Some(phone_number), Some(email), Some(area_code)) = (phone_number, email, area_code)
        else {
            return Err(DirectoryError::Validation(result.violations));
        };
        result.into_result()?;

        Ok(ValidatedContact {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone_number,
            email,
            area_code,
        })
    }

    /// [`validate`](Self::validate) followed by the duplicate check used on
    /// registration.
    pub async fn validate_new(&self, request: &ContactRequest) -> DirectoryResult<ValidatedContact> {
        let validated = self.validate(request).await?;

        if self
            .contacts
            .exists_by_area_code_and_phone(validated.area_code.id, &validated.phone_number)
            .await?
        {
            return Err(DirectoryError::Conflict(
                messages::CONTACT_ALREADY_REGISTERED.to_string(),
            ));
        }

        Ok(validated)
    }
}

impl std::fmt::Debug for ContactValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactValidator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AreaCodeNumber, Region, UserId};
    use crate::metrics::Metrics;
    use crate::repositories::{InMemoryStore, UnitOfWorkFactory};

    #[test]
    fn test_validation_result_accumulates_in_order() {
        let mut result = ValidationResult::new();
        result.check(true, "never");
        result.check(false, "first");
        result.add("second");

        assert!(!result.is_valid());
        assert_eq!(result.violations(), ["first", "second"]);
        assert_eq!(
            result.into_result().unwrap_err(),
            DirectoryError::Validation(vec!["first".to_string(), "second".to_string()])
        );
        assert!(ValidationResult::new().into_result().is_ok());
    }

    async fn validator() -> ContactValidator {
        let store = InMemoryStore::new();
        let mut uow = store.unit_of_work_factory().begin().await.unwrap();
        uow.area_codes()
            .add(AreaCode::new(
                AreaCodeNumber::new(11).unwrap(),
                Region::Southeast,
                UserId::new(),
            ))
            .await
            .unwrap();
        uow.commit().await.unwrap();

        let lookup = RegionLookupService::new(Arc::new(store.area_code_factory()), Metrics::new());
        ContactValidator::new(lookup, Arc::new(store.contact_repository()))
    }

    #[tokio::test]
    async fn test_valid_request_is_trimmed_and_resolved() {
        let validator = validator().await;
        let request = ContactRequest::new("  John ", "Cena", 11, " 94400-8791 ", "john@email.com");

        let validated = validator.validate(&request).await.unwrap();
        assert_eq!(validated.first_name, "John");
        assert_eq!(validated.phone_number.as_str(), "94400-8791");
        assert_eq!(validated.area_code.region, Region::Southeast);
    }

    #[tokio::test]
    async fn test_every_violation_is_reported_once() {
        let validator = validator().await;
        let request = ContactRequest::new(" ", "", 14, "99-0000", "");

        let err = validator.validate(&request).await.unwrap_err();
        assert_eq!(
            err.messages(),
            vec![
                messages::BLANK_FIRST_NAME,
                messages::BLANK_LAST_NAME,
                messages::INVALID_PHONE_NUMBER,
                messages::BLANK_EMAIL,
                messages::DDD_NOT_FOUND,
            ]
        );
    }

    #[tokio::test]
    async fn test_only_unknown_area_code() {
        let validator = validator().await;
        let request = ContactRequest::new("John", "Cena", 14, "94400-8791", "john@email.com");

        let err = validator.validate(&request).await.unwrap_err();
        assert_eq!(err, DirectoryError::Validation(vec![messages::DDD_NOT_FOUND.to_string()]));
    }
}
