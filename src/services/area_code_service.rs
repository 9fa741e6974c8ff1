//! Area code service layer.

use crate::config::Config;
use crate::domain::{AreaCodeId, AreaCodeNumber, Region, UserId};
use crate::error::{messages, DirectoryError, DirectoryResult};
use crate::metrics::Metrics;
use crate::models::{AreaCode, AreaCodeRecord, AreaCodeRequest, PageRequest};
use crate::repositories::{AreaCodeRepositoryFactory, UnitOfWorkFactory};
use crate::services::contact_validation::ValidationResult;
use crate::services::region_lookup::RegionLookupService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Area code service trait for business operations.
#[async_trait]
pub trait AreaCodeService: Send + Sync {
    /// Register a new area code owned by `user_id`.
    async fn register(&self, request: AreaCodeRequest, user_id: UserId) -> DirectoryResult<AreaCodeId>;

    /// Get one page of all area codes, ordered by numeric code.
    async fn recover_all(&self, page: PageRequest) -> DirectoryResult<Vec<AreaCodeRecord>>;

    /// Get every area code of a region, ordered by numeric code.
    async fn recover_by_region(&self, region: Region) -> DirectoryResult<Vec<AreaCodeRecord>>;
}

/// Default implementation of AreaCodeService.
pub struct AreaCodeServiceImpl {
    lookup: RegionLookupService,
    units: Arc<dyn UnitOfWorkFactory>,
    default_page_size: u64,
    metrics: Metrics,
}

impl AreaCodeServiceImpl {
    /// Create a new area code service.
    pub fn new(
        area_codes: Arc<dyn AreaCodeRepositoryFactory>,
        units: Arc<dyn UnitOfWorkFactory>,
        config: &Config,
        metrics: Metrics,
    ) -> Self {
        Self {
            lookup: RegionLookupService::new(area_codes, metrics.clone()),
            units,
            default_page_size: config.default_page_size,
            metrics,
        }
    }
}

#[async_trait]
impl AreaCodeService for AreaCodeServiceImpl {
    #[instrument(skip(self, request), fields(area_code = request.area_code, region = %request.region))]
    async fn register(&self, request: AreaCodeRequest, user_id: UserId) -> DirectoryResult<AreaCodeId> {
        let mut result = ValidationResult::new();

        let code = AreaCodeNumber::new(request.area_code).ok();
        result.check(code.is_some(), messages::DDD_OUT_OF_RANGE);

        if let Some(code) = code {
            let existing = self.lookup.try_find_by_code(code).await?;
            result.check(existing.is_none(), messages::DDD_ALREADY_REGISTERED);
        }

        let Some(code) = code.filter(|_| result.is_valid()) else {
            self.metrics.record_validation_failure();
            warn!(violations = result.violations().len(), "Area code request rejected");
            return Err(DirectoryError::Validation(result.violations().to_vec()));
        };

        let area_code = AreaCode::new(code, request.region, user_id);
        let id = area_code.id;

        let mut uow = self.units.begin().await?;
        uow.area_codes().add(area_code).await?;
        uow.commit().await?;

        self.metrics.record_area_code_registered();
        info!(area_code_id = %id, "Area code registered");
        Ok(id)
    }

    #[instrument(skip(self, page))]
    async fn recover_all(&self, page: PageRequest) -> DirectoryResult<Vec<AreaCodeRecord>> {
        let window = page.resolve(self.default_page_size);
        let area_codes = self.lookup.page(window).await?;
        Ok(area_codes.iter().map(AreaCodeRecord::from).collect())
    }

    #[instrument(skip(self), fields(region = %region))]
    async fn recover_by_region(&self, region: Region) -> DirectoryResult<Vec<AreaCodeRecord>> {
        let area_codes = self.lookup.list_by_region(region).await?;
        Ok(area_codes.iter().map(AreaCodeRecord::from).collect())
    }
}
