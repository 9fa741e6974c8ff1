//! Contact service layer.
//!
//! Registration, update, deletion, and paginated recovery of contacts.

use crate::config::Config;
use crate::domain::{ContactId, Region, UserId};
use crate::error::{DirectoryError, DirectoryResult};
use crate::metrics::Metrics;
use crate::models::{Contact, ContactRecord, ContactRequest, PageRequest};
use crate::repositories::{AreaCodeRepositoryFactory, ContactReadRepository, UnitOfWorkFactory};
use crate::services::aggregator::ContactAggregator;
use crate::services::contact_validation::{ContactValidator, ValidatedContact};
use crate::services::region_lookup::RegionLookupService;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Register a new contact owned by `user_id`.
    ///
    /// Fails with every validation violation at once, or with a conflict when
    /// the (area code, phone) pair is already taken.
    async fn register(&self, request: ContactRequest, user_id: UserId) -> DirectoryResult<ContactId>;

    /// Replace the name, phone, email, and area code of an existing contact.
    async fn update(&self, id: ContactId, request: ContactRequest) -> DirectoryResult<()>;

    /// Delete a contact. Returns `false` if it did not exist.
    async fn delete(&self, id: ContactId) -> DirectoryResult<bool>;

    /// Get a single contact annotated with its region.
    async fn recover_by_id(&self, id: ContactId) -> DirectoryResult<ContactRecord>;

    /// Get one page of all contacts in registration order.
    async fn recover_all(&self, page: PageRequest) -> DirectoryResult<Vec<ContactRecord>>;

    /// Get one page of the contacts whose area code belongs to `region`.
    async fn recover_by_region(
        &self,
        region: Region,
        page: PageRequest,
    ) -> DirectoryResult<Vec<ContactRecord>>;

    /// Get one page of the contacts registered under a numeric area code.
    async fn recover_by_area_code(
        &self,
        area_code: i64,
        page: PageRequest,
    ) -> DirectoryResult<Vec<ContactRecord>>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    contacts: Arc<dyn ContactReadRepository>,
    units: Arc<dyn UnitOfWorkFactory>,
    lookup: RegionLookupService,
    validator: ContactValidator,
    aggregator: ContactAggregator,
    default_page_size: u64,
    metrics: Metrics,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(
        contacts: Arc<dyn ContactReadRepository>,
        area_codes: Arc<dyn AreaCodeRepositoryFactory>,
        units: Arc<dyn UnitOfWorkFactory>,
        config: &Config,
        metrics: Metrics,
    ) -> Self {
        let lookup = RegionLookupService::new(area_codes, metrics.clone());
        let validator = ContactValidator::new(lookup.clone(), contacts.clone());
        let aggregator =
            ContactAggregator::new(lookup.clone(), config.max_concurrent_lookups, metrics.clone());

        Self {
            contacts,
            units,
            lookup,
            validator,
            aggregator,
            default_page_size: config.default_page_size,
            metrics,
        }
    }

    /// Count and log a rejected request before handing the error back.
    fn rejected(&self, err: DirectoryError) -> DirectoryError {
        match &err {
            DirectoryError::Validation(violations) => {
                self.metrics.record_validation_failure();
                warn!(violations = violations.len(), "Contact request rejected");
            }
            DirectoryError::Conflict(reason) => {
                self.metrics.record_validation_failure();
                warn!(%reason, "Contact request conflicts with an existing contact");
            }
            _ => {}
        }
        err
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    #[instrument(skip(self, request), fields(user_id = %user_id))]
    async fn register(&self, request: ContactRequest, user_id: UserId) -> DirectoryResult<ContactId> {
        let ValidatedContact {
            first_name,
            last_name,
            phone_number,
            email,
            area_code,
        } = self
            .validator
            .validate_new(&request)
            .await
            .map_err(|e| self.rejected(e))?;

        let contact = Contact {
            id: ContactId::new(),
            first_name,
            last_name,
            phone_number,
            email,
            area_code_id: area_code.id,
            registered_at: Utc::now(),
            user_id,
        };
        let id = contact.id;

        let mut uow = self.units.begin().await?;
        uow.contacts().add(contact).await?;
        uow.commit().await.map_err(|e| self.rejected(e))?;

        self.metrics.record_contact_registered();
        info!(contact_id = %id, area_code = %area_code.code, "Contact registered");
        Ok(id)
    }

    #[instrument(skip(self, request), fields(contact_id = %id))]
    async fn update(&self, id: ContactId, request: ContactRequest) -> DirectoryResult<()> {
        let validated = self
            .validator
            .validate(&request)
            .await
            .map_err(|e| self.rejected(e))?;

        let existing = self
            .contacts
            .by_id(id)
            .await?
            .ok_or_else(DirectoryError::contact_not_found)?;

        let contact = Contact {
            id,
            first_name: validated.first_name,
            last_name: validated.last_name,
            phone_number: validated.phone_number,
            email: validated.email,
            area_code_id: validated.area_code.id,
            registered_at: existing.registered_at,
            user_id: existing.user_id,
        };

        let mut uow = self.units.begin().await?;
        uow.contacts().update(contact).await?;
        uow.commit().await.map_err(|e| self.rejected(e))?;

        self.metrics.record_contact_updated();
        info!("Contact updated");
        Ok(())
    }

    #[instrument(skip(self), fields(contact_id = %id))]
    async fn delete(&self, id: ContactId) -> DirectoryResult<bool> {
        let Some(contact) = self.contacts.by_id(id).await? else {
            debug!("Contact to delete does not exist");
            return Ok(false);
        };

        let mut uow = self.units.begin().await?;
        uow.contacts().remove(contact).await?;
        uow.commit().await?;

        self.metrics.record_contact_deleted();
        info!("Contact deleted");
        Ok(true)
    }

    #[instrument(skip(self), fields(contact_id = %id))]
    async fn recover_by_id(&self, id: ContactId) -> DirectoryResult<ContactRecord> {
        let contact = self
            .contacts
            .by_id(id)
            .await?
            .ok_or_else(DirectoryError::contact_not_found)?;
        let area_code = self.lookup.find_by_id(contact.area_code_id).await?;
        Ok(ContactRecord::from_parts(&contact, &area_code))
    }

    #[instrument(skip(self, page))]
    async fn recover_all(&self, page: PageRequest) -> DirectoryResult<Vec<ContactRecord>> {
        let window = page.resolve(self.default_page_size);
        let contacts = self.contacts.page(window).await?;
        debug!(page = window.number(), size = window.size(), found = contacts.len(), "Contacts page loaded");
        self.aggregator.aggregate(contacts).await
    }

    #[instrument(skip(self, page), fields(region = %region))]
    async fn recover_by_region(
        &self,
        region: Region,
        page: PageRequest,
    ) -> DirectoryResult<Vec<ContactRecord>> {
        let window = page.resolve(self.default_page_size);
        let area_code_ids = self.lookup.ids_by_region(region).await?;
        if area_code_ids.is_empty() {
            debug!("Region has no area codes");
            return Ok(Vec::new());
        }

        let contacts = self
            .contacts
            .page_by_area_code_ids(&area_code_ids, window)
            .await?;
        self.aggregator.aggregate(contacts).await
    }

    #[instrument(skip(self, page))]
    async fn recover_by_area_code(
        &self,
        area_code: i64,
        page: PageRequest,
    ) -> DirectoryResult<Vec<ContactRecord>> {
        let window = page.resolve(self.default_page_size);
        let area_code = self.lookup.find_by_code(area_code).await?;
        let contacts = self
            .contacts
            .page_by_area_code_ids(&[area_code.id], window)
            .await?;
        self.aggregator.aggregate(contacts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AreaCodeNumber;
    use crate::error::messages;
    use crate::models::AreaCode;
    use crate::repositories::InMemoryStore;

    async fn service() -> (InMemoryStore, ContactServiceImpl) {
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

        let service = ContactServiceImpl::new(
            Arc::new(store.contact_repository()),
            Arc::new(store.area_code_factory()),
            Arc::new(store.unit_of_work_factory()),
            &Config::default(),
            Metrics::new(),
        );
        (store, service)
    }

    #[tokio::test]
    async fn test_register_then_recover_by_id() {
        let (_store, service) = service().await;
        let request = ContactRequest::new("John", "Cena", 11, "94400-8791", "john@email.com");

        let id = service.register(request, UserId::new()).await.unwrap();
        let record = service.recover_by_id(id).await.unwrap();

        assert_eq!(record.first_name, "John");
        assert_eq!(record.region, Region::Southeast);
        assert_eq!(record.phone, "94400-8791");
    }

    #[tokio::test]
    async fn test_recover_by_id_missing() {
        let (_store, service) = service().await;
        assert_eq!(
            service.recover_by_id(ContactId::new()).await.unwrap_err(),
            DirectoryError::NotFound(messages::CONTACT_NOT_FOUND.to_string())
        );
    }

    #[tokio::test]
    async fn test_rejections_are_counted() {
        let (_store, service) = service().await;
        let request = ContactRequest::new("", "Cena", 11, "94400-8791", "john@email.com");

        assert!(service.register(request, UserId::new()).await.is_err());
        assert_eq!(service.metrics.validation_failures_total(), 1);
        assert_eq!(service.metrics.contacts_registered_total(), 0);
    }
}
