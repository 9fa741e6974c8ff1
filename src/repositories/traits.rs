use crate::domain::{AreaCodeId, AreaCodeNumber, ContactId, PhoneNumber, Region};
use crate::error::DirectoryResult;
use crate::models::{AreaCode, Contact, PageWindow};
use crate::repositories::scope::ScopedHandle;
use async_trait::async_trait;

/// Read-side access to contacts.
///
/// Every page is ordered by registration time ascending; insertion order
/// breaks ties.
#[async_trait]
pub trait ContactReadRepository: Send + Sync {
    /// Retrieve one page of all contacts.
    async fn page(&self, window: PageWindow) -> DirectoryResult<Vec<Contact>>;

    /// Retrieve one page of contacts registered under any of the given area codes.
    async fn page_by_area_code_ids(
        &self,
        area_code_ids: &[AreaCodeId],
        window: PageWindow,
    ) -> DirectoryResult<Vec<Contact>>;

    /// Retrieve a single contact by id.
    async fn by_id(&self, id: ContactId) -> DirectoryResult<Option<Contact>>;

    /// Whether a contact already uses this phone number under this area code.
    async fn exists_by_area_code_and_phone(
        &self,
        area_code_id: AreaCodeId,
        phone: &PhoneNumber,
    ) -> DirectoryResult<bool>;
}

/// Write-side access to contacts. Writes are staged until the owning
/// [`UnitOfWork`] commits.
#[async_trait]
pub trait ContactWriteRepository: Send {
    /// Stage a new contact.
    async fn add(&mut self, contact: Contact) -> DirectoryResult<()>;

    /// Stage a full replacement of an existing contact (matched by id).
    async fn update(&mut self, contact: Contact) -> DirectoryResult<()>;

    /// Stage removal of a contact.
    async fn remove(&mut self, contact: Contact) -> DirectoryResult<()>;
}

/// Read-side access to area codes, handed out as short-lived scoped handles.
#[async_trait]
pub trait AreaCodeReadRepository: Send + Sync {
    /// Retrieve an area code by its numeric value.
    async fn by_code(&self, code: AreaCodeNumber) -> DirectoryResult<Option<AreaCode>>;

    /// Ids of all area codes in a region, ordered by numeric code.
    async fn ids_by_region(&self, region: Region) -> DirectoryResult<Vec<AreaCodeId>>;

    /// All area codes in a region, ordered by numeric code.
    async fn list_by_region(&self, region: Region) -> DirectoryResult<Vec<AreaCode>>;

    /// Retrieve an area code by id.
    async fn by_id(&self, id: AreaCodeId) -> DirectoryResult<Option<AreaCode>>;

    /// Retrieve one page of all area codes, ordered by numeric code.
    async fn page(&self, window: PageWindow) -> DirectoryResult<Vec<AreaCode>>;
}

/// Write-side access to area codes.
#[async_trait]
pub trait AreaCodeWriteRepository: Send {
    /// Stage a new area code.
    async fn add(&mut self, area_code: AreaCode) -> DirectoryResult<()>;
}

/// A scoped area code repository; released when dropped.
pub type AreaCodeHandle = ScopedHandle<dyn AreaCodeReadRepository>;

/// Hands out scoped area code handles.
///
/// Each call returns a fresh handle owned by the caller. Handles must not be
/// shared between concurrent tasks.
#[async_trait]
pub trait AreaCodeRepositoryFactory: Send + Sync {
    async fn create(&self) -> DirectoryResult<AreaCodeHandle>;
}

/// Transactional commit scope for a single operation.
///
/// Writes made through [`contacts`](UnitOfWork::contacts) and
/// [`area_codes`](UnitOfWork::area_codes) become durable together on
/// [`commit`](UnitOfWork::commit). Dropping a unit of work without committing
/// discards everything staged in it.
#[async_trait]
pub trait UnitOfWork: Send {
    /// Contact writes staged in this unit of work.
    fn contacts(&mut self) -> &mut dyn ContactWriteRepository;

    /// Area code writes staged in this unit of work.
    fn area_codes(&mut self) -> &mut dyn AreaCodeWriteRepository;

    /// Apply all staged writes atomically. Consumes the unit of work.
    async fn commit(self: Box<Self>) -> DirectoryResult<()>;
}

/// Begins a new unit of work per operation.
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    async fn begin(&self) -> DirectoryResult<Box<dyn UnitOfWork>>;
}
