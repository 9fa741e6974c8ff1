//! Shared setup for the directory integration tests.

use crate::mocks::{MockAreaCodeFactory, RecordingUnitOfWorkFactory};
use contact_directory::models::{AreaCodeRequest, ContactRequest};
use contact_directory::{
    AreaCodeId, AreaCodeService, AreaCodeServiceImpl, Config, ContactServiceImpl, InMemoryStore,
    Metrics, Region, UserId,
};
use std::sync::Arc;

/// A directory over an in-memory store, wired through the call-tracking mocks.
#[allow(dead_code)]
pub struct Directory {
    pub store: InMemoryStore,
    pub units: RecordingUnitOfWorkFactory,
    pub lookups: MockAreaCodeFactory,
    pub metrics: Metrics,
    pub contacts: ContactServiceImpl,
    pub area_codes: AreaCodeServiceImpl,
    pub user_id: UserId,
}

#[allow(dead_code)]
impl Directory {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let store = InMemoryStore::new();
        let units = RecordingUnitOfWorkFactory::new(Arc::new(store.unit_of_work_factory()));
        let lookups = MockAreaCodeFactory::new(Arc::new(store.area_code_factory()));
        let metrics = Metrics::new();

        let contacts = ContactServiceImpl::new(
            Arc::new(store.contact_repository()),
            Arc::new(lookups.clone()),
            Arc::new(units.clone()),
            &config,
            metrics.clone(),
        );
        let area_codes = AreaCodeServiceImpl::new(
            Arc::new(lookups.clone()),
            Arc::new(units.clone()),
            &config,
            metrics.clone(),
        );

        Self {
            store,
            units,
            lookups,
            metrics,
            contacts,
            area_codes,
            user_id: UserId::new(),
        }
    }

    /// Register an area code, panicking on failure.
    pub async fn area_code(&self, code: i64, region: Region) -> AreaCodeId {
        self.area_codes
            .register(AreaCodeRequest { area_code: code, region }, self.user_id)
            .await
            .unwrap()
    }

    /// Register the area codes most tests rely on, then forget those calls.
    pub async fn with_default_area_codes(self) -> Self {
        self.area_code(11, Region::Southeast).await;
        self.area_code(21, Region::Southeast).await;
        self.area_code(71, Region::Northeast).await;
        self.area_code(61, Region::CentralWest).await;
        self.units.reset_call_counts();
        self.lookups.reset_call_counts();
        self
    }
}

/// A valid request under the given area code.
#[allow(dead_code)]
pub fn contact_request(first_name: &str, area_code: i64, phone: &str) -> ContactRequest {
    ContactRequest::new(
        first_name,
        "Silva",
        area_code,
        phone,
        format!("{}@email.com", first_name.to_lowercase()),
    )
}

/// The request used throughout the registration tests.
#[allow(dead_code)]
pub fn john_cena() -> ContactRequest {
    ContactRequest::new("John", "Cena", 11, "94400-8791", "john@email.com")
}
