use async_trait::async_trait;
use contact_directory::error::{DirectoryError, DirectoryResult};
use contact_directory::models::{AreaCode, Contact};
use contact_directory::repositories::{
    AreaCodeWriteRepository, ContactWriteRepository, UnitOfWork, UnitOfWorkFactory,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Unit of work factory that records every port call.
///
/// Wraps a real factory so that committed writes still land in the store.
/// Calls are recorded in order, so tests can check both how often and in
/// which sequence the ports were used.
#[allow(dead_code)]
#[derive(Clone)]
pub struct RecordingUnitOfWorkFactory {
    inner: Arc<dyn UnitOfWorkFactory>,
    calls: Arc<Mutex<Vec<String>>>,
    fail_commit: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl RecordingUnitOfWorkFactory {
    /// Create a new recorder around a real factory.
    pub fn new(inner: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self {
            inner,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_commit: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every later commit fail without applying anything.
    pub fn fail_commits(&self, fail: bool) {
        self.fail_commit.store(fail, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let calls = self.calls.lock().unwrap();
        calls.iter().filter(|c| c.as_str() == method).count()
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn track_call(calls: &Mutex<Vec<String>>, method: &str) {
        calls.lock().unwrap().push(method.to_string());
    }
}

#[async_trait]
impl UnitOfWorkFactory for RecordingUnitOfWorkFactory {
    async fn begin(&self) -> DirectoryResult<Box<dyn UnitOfWork>> {
        Self::track_call(&self.calls, "begin");
        let inner = self.inner.begin().await?;
        Ok(Box::new(RecordingUnitOfWork {
            inner,
            calls: self.calls.clone(),
            fail_commit: self.fail_commit.load(Ordering::SeqCst),
        }))
    }
}

struct RecordingUnitOfWork {
    inner: Box<dyn UnitOfWork>,
    calls: Arc<Mutex<Vec<String>>>,
    fail_commit: bool,
}

#[async_trait]
impl ContactWriteRepository for RecordingUnitOfWork {
    async fn add(&mut self, contact: Contact) -> DirectoryResult<()> {
        RecordingUnitOfWorkFactory::track_call(&self.calls, "add");
        self.inner.contacts().add(contact).await
    }

    async fn update(&mut self, contact: Contact) -> DirectoryResult<()> {
        RecordingUnitOfWorkFactory::track_call(&self.calls, "update");
        self.inner.contacts().update(contact).await
    }

    async fn remove(&mut self, contact: Contact) -> DirectoryResult<()> {
        RecordingUnitOfWorkFactory::track_call(&self.calls, "remove");
        self.inner.contacts().remove(contact).await
    }
}

#[async_trait]
impl AreaCodeWriteRepository for RecordingUnitOfWork {
    async fn add(&mut self, area_code: AreaCode) -> DirectoryResult<()> {
        RecordingUnitOfWorkFactory::track_call(&self.calls, "add_area_code");
        self.inner.area_codes().add(area_code).await
    }
}

#[async_trait]
impl UnitOfWork for RecordingUnitOfWork {
    fn contacts(&mut self) -> &mut dyn ContactWriteRepository {
        self
    }

    fn area_codes(&mut self) -> &mut dyn AreaCodeWriteRepository {
        self
    }

    async fn commit(self: Box<Self>) -> DirectoryResult<()> {
        let this = *self;
        RecordingUnitOfWorkFactory::track_call(&this.calls, "commit");
        if this.fail_commit {
            return Err(DirectoryError::CommitFailed(
                "injected commit failure".to_string(),
            ));
        }
        this.inner.commit().await
    }
}
