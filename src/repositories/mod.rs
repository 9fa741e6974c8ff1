mod memory_area_code_repository;
mod memory_contact_repository;
mod memory_store;
mod memory_unit_of_work;
pub mod scope;
mod traits;

pub use memory_area_code_repository::{
    InMemoryAreaCodeRepository, InMemoryAreaCodeRepositoryFactory,
};
pub use memory_contact_repository::InMemoryContactRepository;
pub use memory_store::InMemoryStore;
pub use memory_unit_of_work::{InMemoryUnitOfWork, InMemoryUnitOfWorkFactory};
pub use scope::ScopedHandle;
pub use traits::{
    AreaCodeHandle, AreaCodeReadRepository, AreaCodeRepositoryFactory, AreaCodeWriteRepository,
    ContactReadRepository, ContactWriteRepository, UnitOfWork, UnitOfWorkFactory,
};
