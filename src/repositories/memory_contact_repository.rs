use async_trait::async_trait;
use crate::domain::{AreaCodeId, ContactId, PhoneNumber};
use crate::error::DirectoryResult;
use crate::models::{Contact, PageWindow};
use crate::repositories::memory_store::InMemoryStore;
use crate::repositories::traits::ContactReadRepository;
use std::collections::HashSet;

/// Contact read repository over an [`InMemoryStore`].
///
/// Queries read a consistent snapshot of committed data; staged writes in an
/// open unit of work are not visible here.
#[derive(Clone, Debug)]
pub struct InMemoryContactRepository {
    store: InMemoryStore,
}

impl InMemoryContactRepository {
    /// Create a new InMemoryContactRepository over the given store.
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContactReadRepository for InMemoryContactRepository {
    async fn page(&self, window: PageWindow) -> DirectoryResult<Vec<Contact>> {
        let state = self.store.state.read().await;
        Ok(window.slice(&state.contacts_ordered(|_| true)))
    }

    async fn page_by_area_code_ids(
        &self,
        area_code_ids: &[AreaCodeId],
        window: PageWindow,
    ) -> DirectoryResult<Vec<Contact>> {
        if area_code_ids.is_empty() {
            return Ok(Vec::new());
        }

        let wanted: HashSet<AreaCodeId> = area_code_ids.iter().copied().collect();
        let state = self.store.state.read().await;
        let matches = state.contacts_ordered(|c| wanted.contains(&c.area_code_id));
        Ok(window.slice(&matches))
    }

    async fn by_id(&self, id: ContactId) -> DirectoryResult<Option<Contact>> {
        Ok(self.store.state.read().await.contact(id))
    }

    async fn exists_by_area_code_and_phone(
        &self,
        area_code_id: AreaCodeId,
        phone: &PhoneNumber,
    ) -> DirectoryResult<bool> {
        Ok(self
            .store
            .state
            .read()
            .await
            .phone_taken(area_code_id, phone, None))
    }
}
