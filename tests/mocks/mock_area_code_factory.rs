use async_trait::async_trait;
use contact_directory::domain::{AreaCodeId, AreaCodeNumber, Region};
use contact_directory::error::{DirectoryError, DirectoryResult};
use contact_directory::models::{AreaCode, PageWindow};
use contact_directory::repositories::{
    AreaCodeHandle, AreaCodeReadRepository, AreaCodeRepositoryFactory, ScopedHandle,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scoped handle factory with per-id latency and failure injection.
///
/// Wraps a real factory. Id lookups can be delayed to shuffle the completion
/// order of concurrent lookups, or made to fail outright. Tracks open handles
/// and the order in which id lookups completed.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockAreaCodeFactory {
    inner: Arc<dyn AreaCodeRepositoryFactory>,
    delays: Arc<Mutex<HashMap<AreaCodeId, Duration>>>,
    failing: Arc<Mutex<HashSet<AreaCodeId>>>,
    resolved: Arc<Mutex<Vec<AreaCodeId>>>,
    open: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockAreaCodeFactory {
    /// Create a new mock around a real factory.
    pub fn new(inner: Arc<dyn AreaCodeRepositoryFactory>) -> Self {
        Self {
            inner,
            delays: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(Mutex::new(HashSet::new())),
            resolved: Arc::new(Mutex::new(Vec::new())),
            open: Arc::new(AtomicUsize::new(0)),
            peak: Arc::new(AtomicUsize::new(0)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Delay id lookups of one area code.
    pub fn set_delay(&self, id: AreaCodeId, delay: Duration) {
        self.delays.lock().unwrap().insert(id, delay);
    }

    /// Make id lookups of one area code fail with a storage error.
    pub fn fail_on(&self, id: AreaCodeId) {
        self.failing.lock().unwrap().insert(id);
    }

    /// Ids whose lookup completed, in completion order.
    pub fn resolved_order(&self) -> Vec<AreaCodeId> {
        self.resolved.lock().unwrap().clone()
    }

    /// Handles handed out and not yet dropped.
    pub fn open_handles(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }

    /// Most handles open at the same time.
    pub fn peak_open_handles(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl AreaCodeRepositoryFactory for MockAreaCodeFactory {
    async fn create(&self) -> DirectoryResult<AreaCodeHandle> {
        self.track_call("create");
        let inner = self.inner.create().await?;

        let open = self.open.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(open, Ordering::SeqCst);

        let repo: Box<dyn AreaCodeReadRepository> = Box::new(DelayedAreaCodeRepository {
            inner,
            mock: self.clone(),
        });
        let open = self.open.clone();
        Ok(ScopedHandle::new(repo, move || {
            open.fetch_sub(1, Ordering::SeqCst);
        }))
    }
}

struct DelayedAreaCodeRepository {
    inner: AreaCodeHandle,
    mock: MockAreaCodeFactory,
}

#[async_trait]
impl AreaCodeReadRepository for DelayedAreaCodeRepository {
    async fn by_code(&self, code: AreaCodeNumber) -> DirectoryResult<Option<AreaCode>> {
        self.mock.track_call("by_code");
        self.inner.by_code(code).await
    }

    async fn ids_by_region(&self, region: Region) -> DirectoryResult<Vec<AreaCodeId>> {
        self.mock.track_call("ids_by_region");
        self.inner.ids_by_region(region).await
    }

    async fn list_by_region(&self, region: Region) -> DirectoryResult<Vec<AreaCode>> {
        self.mock.track_call("list_by_region");
        self.inner.list_by_region(region).await
    }

    async fn by_id(&self, id: AreaCodeId) -> DirectoryResult<Option<AreaCode>> {
        self.mock.track_call("by_id");

        let delay = self.mock.delays.lock().unwrap().get(&id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.mock.failing.lock().unwrap().contains(&id) {
            return Err(DirectoryError::Storage(format!(
                "injected lookup failure for {}",
                id
            )));
        }

        let found = self.inner.by_id(id).await?;
        self.mock.resolved.lock().unwrap().push(id);
        Ok(found)
    }

    async fn page(&self, window: PageWindow) -> DirectoryResult<Vec<AreaCode>> {
        self.mock.track_call("page");
        self.inner.page(window).await
    }
}
