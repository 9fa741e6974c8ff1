//! Area code and region resolution through scoped handles.
//!
//! Every call acquires its own handle from the factory and drops it before
//! returning, so lookups can run from concurrent branches without sharing a
//! session.

use crate::domain::{AreaCodeId, AreaCodeNumber, Region};
use crate::error::{DirectoryError, DirectoryResult};
use crate::metrics::Metrics;
use crate::models::{AreaCode, PageWindow};
use crate::repositories::AreaCodeRepositoryFactory;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Resolves area codes by number, id, or region.
#[derive(Clone)]
pub struct RegionLookupService {
    factory: Arc<dyn AreaCodeRepositoryFactory>,
    metrics: Metrics,
}

impl RegionLookupService {
    /// Create a new lookup service over a handle factory.
    pub fn new(factory: Arc<dyn AreaCodeRepositoryFactory>, metrics: Metrics) -> Self {
        Self { factory, metrics }
    }

    /// Resolve a numeric area code.
    ///
    /// Unknown codes, including values outside 10-99, fail with the
    /// "area code not found" error.
    #[instrument(skip(self))]
    pub async fn find_by_code(&self, code: i64) -> DirectoryResult<AreaCode> {
        let Ok(number) = AreaCodeNumber::new(code) else {
            self.metrics.record_lookup(false);
            debug!(code, "Area code outside the valid range");
            return Err(DirectoryError::ddd_not_found());
        };

        match self.try_find_by_code(number).await? {
            Some(area_code) => Ok(area_code),
            None => {
                debug!(code, "Area code not registered");
                Err(DirectoryError::ddd_not_found())
            }
        }
    }

    /// Resolve a numeric area code, reporting absence as `None`.
    pub async fn try_find_by_code(&self, code: AreaCodeNumber) -> DirectoryResult<Option<AreaCode>> {
        let handle = self.factory.create().await?;
        let found = handle.by_code(code).await;
        self.metrics
            .record_lookup(matches!(found, Ok(Some(_))));
        found
    }

    /// Resolve an area code by id.
    ///
    /// A miss means the area code vanished under a contact referencing it.
    pub async fn find_by_id(&self, id: AreaCodeId) -> DirectoryResult<AreaCode> {
        let handle = self.factory.create().await?;
        let found = handle.by_id(id).await;
        self.metrics.record_lookup(matches!(found, Ok(Some(_))));

        match found? {
            Some(area_code) => Ok(area_code),
            None => {
                warn!(area_code_id = %id, "Area code referenced by a contact is missing");
                Err(DirectoryError::NotFound(format!("area code {} not found", id)))
            }
        }
    }

    /// Ids of every area code in a region, ordered by numeric code.
    #[instrument(skip(self), fields(region = %region))]
    pub async fn ids_by_region(&self, region: Region) -> DirectoryResult<Vec<AreaCodeId>> {
        let handle = self.factory.create().await?;
        let ids = handle.ids_by_region(region).await?;
        self.metrics.record_lookup(true);
        debug!(count = ids.len(), "Resolved region filter");
        Ok(ids)
    }

    /// Every area code in a region, ordered by numeric code.
    pub async fn list_by_region(&self, region: Region) -> DirectoryResult<Vec<AreaCode>> {
        let handle = self.factory.create().await?;
        let area_codes = handle.list_by_region(region).await?;
        self.metrics.record_lookup(true);
        Ok(area_codes)
    }

    /// One page of all area codes, ordered by numeric code.
    pub async fn page(&self, window: PageWindow) -> DirectoryResult<Vec<AreaCode>> {
        let handle = self.factory.create().await?;
        handle.page(window).await
    }
}

impl std::fmt::Debug for RegionLookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionLookupService").finish_non_exhaustive()
    }
}
