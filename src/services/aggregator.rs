//! Page aggregation: joins contacts with their area code and region.

use crate::error::{DirectoryError, DirectoryResult};
use crate::metrics::{Metrics, PageTimer};
use crate::models::{Contact, ContactRecord};
use crate::services::region_lookup::RegionLookupService;
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

/// Turns a page of contacts into annotated records.
///
/// Each contact resolves its area code through its own scoped handle, with at
/// most `max_concurrent` lookups in flight. Results are written back by input
/// position, so the output order always matches the page order no matter which
/// lookup finishes first.
#[derive(Clone, Debug)]
pub struct ContactAggregator {
    lookup: RegionLookupService,
    max_concurrent: usize,
    metrics: Metrics,
}

impl ContactAggregator {
    /// Create a new aggregator. A bound of 0 is treated as 1.
    pub fn new(lookup: RegionLookupService, max_concurrent: usize, metrics: Metrics) -> Self {
        Self {
            lookup,
            max_concurrent: max_concurrent.max(1),
            metrics,
        }
    }

    /// Resolve every contact of a page.
    ///
    /// Fails the whole page on the first failed lookup; lookups still in
    /// flight are dropped and release their handles.
    pub async fn aggregate(&self, contacts: Vec<Contact>) -> DirectoryResult<Vec<ContactRecord>> {
        if contacts.is_empty() {
            return Ok(Vec::new());
        }

        let timer = PageTimer::new(self.metrics.clone());
        let total = contacts.len();
        let lookup = &self.lookup;

        let mut slots: Vec<Option<ContactRecord>> = vec![None; total];
        let mut resolved = stream::iter(contacts.into_iter().enumerate())
            .map(|(position, contact)| async move {
                let area_code = lookup.find_by_id(contact.area_code_id).await?;
                Ok::<_, DirectoryError>((position, ContactRecord::from_parts(&contact, &area_code)))
            })
            .buffer_unordered(self.max_concurrent);

        while let Some(result) = resolved.next().await {
            match result {
                Ok((position, record)) => slots[position] = Some(record),
                Err(e) => {
                    warn!(page_len = total, error = %e, "Page aggregation failed");
                    return Err(e);
                }
            }
        }

        let records: Vec<ContactRecord> = slots.into_iter().flatten().collect();
        if records.len() != total {
            return Err(DirectoryError::Storage(format!(
                "resolved {} of {} contacts",
                records.len(),
                total
            )));
        }

        timer.complete();
        debug!(page_len = total, "Page aggregated");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AreaCodeId, AreaCodeNumber, ContactId, EmailAddress, PhoneNumber, Region, UserId};
    use crate::models::AreaCode;
    use crate::repositories::{InMemoryStore, UnitOfWorkFactory};
    use chrono::Utc;
    use std::sync::Arc;

    fn contact(area_code_id: AreaCodeId, first_name: &str, phone: &str) -> Contact {
        Contact {
            id: ContactId::new(),
            first_name: first_name.to_string(),
            last_name: "Silva".to_string(),
            phone_number: PhoneNumber::new(phone).unwrap(),
            email: EmailAddress::new("silva@email.com").unwrap(),
            area_code_id,
            registered_at: Utc::now(),
            user_id: UserId::new(),
        }
    }

    async fn setup() -> (InMemoryStore, ContactAggregator, Vec<AreaCode>) {
        let store = InMemoryStore::new();
        let codes = vec![
            AreaCode::new(AreaCodeNumber::new(11).unwrap(), Region::Southeast, UserId::new()),
            AreaCode::new(AreaCodeNumber::new(71).unwrap(), Region::Northeast, UserId::new()),
        ];
        let mut uow = store.unit_of_work_factory().begin().await.unwrap();
        for code in &codes {
            uow.area_codes().add(code.clone()).await.unwrap();
        }
        uow.commit().await.unwrap();

        let metrics = Metrics::new();
        let lookup = RegionLookupService::new(Arc::new(store.area_code_factory()), metrics.clone());
        (store, ContactAggregator::new(lookup, 2, metrics), codes)
    }

    #[tokio::test]
    async fn test_empty_page_is_empty() {
        let (store, aggregator, _) = setup().await;
        assert!(aggregator.aggregate(Vec::new()).await.unwrap().is_empty());
        assert_eq!(store.handles_created(), 0);
    }

    #[tokio::test]
    async fn test_preserves_order_and_bounds_concurrency() {
        let (store, aggregator, codes) = setup().await;
        let page = vec![
            contact(codes[0].id, "Ana", "1111-0001"),
            contact(codes[1].id, "Bia", "1111-0002"),
            contact(codes[0].id, "Caio", "1111-0003"),
            contact(codes[1].id, "Davi", "1111-0004"),
        ];

        let records = aggregator.aggregate(page).await.unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.first_name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bia", "Caio", "Davi"]);
        assert_eq!(records[1].region, Region::Northeast);
        assert_eq!(records[2].area_code.value(), 11);

        assert_eq!(store.open_handles(), 0);
        assert!(store.peak_open_handles() <= 2);
    }

    #[tokio::test]
    async fn test_missing_area_code_fails_the_page() {
        let (store, aggregator, codes) = setup().await;
        let page = vec![
            contact(codes[0].id, "Ana", "1111-0001"),
            contact(AreaCodeId::new(), "Bia", "1111-0002"),
        ];

        assert!(aggregator.aggregate(page).await.unwrap_err().is_not_found());
        assert_eq!(store.open_handles(), 0);
    }
}
