use async_trait::async_trait;
use crate::domain::{AreaCodeId, AreaCodeNumber, Region};
use crate::error::DirectoryResult;
use crate::models::{AreaCode, PageWindow};
use crate::repositories::memory_store::InMemoryStore;
use crate::repositories::scope::ScopedHandle;
use crate::repositories::traits::{
    AreaCodeHandle, AreaCodeReadRepository, AreaCodeRepositoryFactory,
};
use std::sync::atomic::Ordering;

/// Area code read repository over an [`InMemoryStore`].
#[derive(Clone, Debug)]
pub struct InMemoryAreaCodeRepository {
    store: InMemoryStore,
}

impl InMemoryAreaCodeRepository {
    /// Create a new InMemoryAreaCodeRepository over the given store.
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AreaCodeReadRepository for InMemoryAreaCodeRepository {
    async fn by_code(&self, code: AreaCodeNumber) -> DirectoryResult<Option<AreaCode>> {
        Ok(self.store.state.read().await.area_code_by_number(code))
    }

    async fn ids_by_region(&self, region: Region) -> DirectoryResult<Vec<AreaCodeId>> {
        let state = self.store.state.read().await;
        Ok(state.area_codes_in(region).into_iter().map(|a| a.id).collect())
    }

    async fn list_by_region(&self, region: Region) -> DirectoryResult<Vec<AreaCode>> {
        Ok(self.store.state.read().await.area_codes_in(region))
    }

    async fn by_id(&self, id: AreaCodeId) -> DirectoryResult<Option<AreaCode>> {
        Ok(self.store.state.read().await.area_code(id))
    }

    async fn page(&self, window: PageWindow) -> DirectoryResult<Vec<AreaCode>> {
        let state = self.store.state.read().await;
        Ok(window.slice(&state.area_codes_ordered(|_| true)))
    }
}

/// Hands out [`InMemoryAreaCodeRepository`] handles and tracks how many are open.
#[derive(Clone, Debug)]
pub struct InMemoryAreaCodeRepositoryFactory {
    store: InMemoryStore,
}

impl InMemoryAreaCodeRepositoryFactory {
    /// Create a new factory over the given store.
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AreaCodeRepositoryFactory for InMemoryAreaCodeRepositoryFactory {
    async fn create(&self) -> DirectoryResult<AreaCodeHandle> {
        let open = self.store.acquire_handle();
        let repo: Box<dyn AreaCodeReadRepository> =
            Box::new(InMemoryAreaCodeRepository::new(self.store.clone()));

        Ok(ScopedHandle::new(repo, move || {
            open.fetch_sub(1, Ordering::SeqCst);
        }))
    }
}
