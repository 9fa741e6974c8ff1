use async_trait::async_trait;
use crate::error::DirectoryResult;
use crate::models::{AreaCode, Contact};
use crate::repositories::memory_store::{InMemoryStore, Mutation};
use crate::repositories::traits::{
    AreaCodeWriteRepository, ContactWriteRepository, UnitOfWork, UnitOfWorkFactory,
};

/// Unit of work over an [`InMemoryStore`].
///
/// Writes are staged in order and applied to a copy of the store state at
/// commit; the copy replaces the live state only if every write succeeds.
#[derive(Debug)]
pub struct InMemoryUnitOfWork {
    store: InMemoryStore,
    staged: Vec<Mutation>,
}

impl InMemoryUnitOfWork {
    fn new(store: InMemoryStore) -> Self {
        Self {
            store,
            staged: Vec::new(),
        }
    }

    /// Number of writes staged so far.
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }
}

#[async_trait]
impl ContactWriteRepository for InMemoryUnitOfWork {
    async fn add(&mut self, contact: Contact) -> DirectoryResult<()> {
        self.staged.push(Mutation::AddContact(contact));
        Ok(())
    }

    async fn update(&mut self, contact: Contact) -> DirectoryResult<()> {
        self.staged.push(Mutation::UpdateContact(contact));
        Ok(())
    }

    async fn remove(&mut self, contact: Contact) -> DirectoryResult<()> {
        self.staged.push(Mutation::RemoveContact(contact.id));
        Ok(())
    }
}

#[async_trait]
impl AreaCodeWriteRepository for InMemoryUnitOfWork {
    async fn add(&mut self, area_code: AreaCode) -> DirectoryResult<()> {
        self.staged.push(Mutation::AddAreaCode(area_code));
        Ok(())
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    fn contacts(&mut self) -> &mut dyn ContactWriteRepository {
        self
    }

    fn area_codes(&mut self) -> &mut dyn AreaCodeWriteRepository {
        self
    }

    async fn commit(self: Box<Self>) -> DirectoryResult<()> {
        let mut this = self;
        let staged = std::mem::take(&mut this.staged);
        let count = staged.len();

        let mut state = this.store.state.write().await;
        let mut next = state.clone();
        for mutation in staged {
            next.apply(mutation)?;
        }
        *state = next;

        tracing::debug!(writes = count, "Unit of work committed");
        Ok(())
    }
}

impl Drop for InMemoryUnitOfWork {
    fn drop(&mut self) {
        if !self.staged.is_empty() {
            tracing::debug!(
                writes = self.staged.len(),
                "Unit of work dropped without commit; staged writes discarded"
            );
        }
    }
}

/// Begins [`InMemoryUnitOfWork`]s over a shared store.
#[derive(Clone, Debug)]
pub struct InMemoryUnitOfWorkFactory {
    store: InMemoryStore,
}

impl InMemoryUnitOfWorkFactory {
    /// Create a new factory over the given store.
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UnitOfWorkFactory for InMemoryUnitOfWorkFactory {
    async fn begin(&self) -> DirectoryResult<Box<dyn UnitOfWork>> {
        Ok(Box::new(InMemoryUnitOfWork::new(self.store.clone())))
    }
}
