//! Shared in-memory backing store.
//!
//! All in-memory repositories, handle factories, and units of work created from
//! one [`InMemoryStore`] see the same data. Writes only land through
//! [`StoreState::apply`], which the unit of work runs against a copy of the
//! state and swaps in on success.

use crate::domain::{AreaCodeId, AreaCodeNumber, ContactId, PhoneNumber, Region};
use crate::error::{messages, DirectoryError, DirectoryResult};
use crate::models::{AreaCode, Contact};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::memory_area_code_repository::InMemoryAreaCodeRepositoryFactory;
use super::memory_contact_repository::InMemoryContactRepository;
use super::memory_unit_of_work::InMemoryUnitOfWorkFactory;

/// A staged write, applied at commit.
#[derive(Debug, Clone)]
pub(crate) enum Mutation {
    AddContact(Contact),
    UpdateContact(Contact),
    RemoveContact(ContactId),
    AddAreaCode(AreaCode),
}

#[derive(Debug, Clone)]
struct StoredContact {
    // Insertion sequence; tie-break for equal registration timestamps.
    seq: u64,
    contact: Contact,
}

/// Snapshot of everything the store holds.
#[derive(Debug, Clone, Default)]
pub(crate) struct StoreState {
    contacts: HashMap<ContactId, StoredContact>,
    area_codes: HashMap<AreaCodeId, AreaCode>,
    next_seq: u64,
}

impl StoreState {
    /// Contacts matching `filter`, in registration order.
    pub(crate) fn contacts_ordered<F>(&self, filter: F) -> Vec<Contact>
    where
        F: Fn(&Contact) -> bool,
    {
        let mut stored: Vec<&StoredContact> = self
            .contacts
            .values()
            .filter(|s| filter(&s.contact))
            .collect();
        stored.sort_by(|a, b| {
            a.contact
                .registered_at
                .cmp(&b.contact.registered_at)
                .then(a.seq.cmp(&b.seq))
        });
        stored.into_iter().map(|s| s.contact.clone()).collect()
    }

    pub(crate) fn contact(&self, id: ContactId) -> Option<Contact> {
        self.contacts.get(&id).map(|s| s.contact.clone())
    }

    /// Whether some contact other than `except` holds this phone under this area code.
    pub(crate) fn phone_taken(
        &self,
        area_code_id: AreaCodeId,
        phone: &PhoneNumber,
        except: Option<ContactId>,
    ) -> bool {
        let digits = phone.digits_only();
        self.contacts.values().any(|s| {
            Some(s.contact.id) != except
                && s.contact.area_code_id == area_code_id
                && s.contact.phone_number.digits_only() == digits
        })
    }

    /// Area codes matching `filter`, ordered by numeric code.
    pub(crate) fn area_codes_ordered<F>(&self, filter: F) -> Vec<AreaCode>
    where
        F: Fn(&AreaCode) -> bool,
    {
        let mut codes: Vec<AreaCode> = self
            .area_codes
            .values()
            .filter(|a| filter(a))
            .cloned()
            .collect();
        codes.sort_by_key(|a| a.code);
        codes
    }

    pub(crate) fn area_code(&self, id: AreaCodeId) -> Option<AreaCode> {
        self.area_codes.get(&id).cloned()
    }

    pub(crate) fn area_code_by_number(&self, code: AreaCodeNumber) -> Option<AreaCode> {
        self.area_codes.values().find(|a| a.code == code).cloned()
    }

    pub(crate) fn area_codes_in(&self, region: Region) -> Vec<AreaCode> {
        self.area_codes_ordered(|a| a.region == region)
    }

    /// Apply one staged write, enforcing the store's uniqueness invariants.
    pub(crate) fn apply(&mut self, mutation: Mutation) -> DirectoryResult<()> {
        match mutation {
            Mutation::AddContact(contact) => {
                if self.contacts.contains_key(&contact.id) {
                    return Err(DirectoryError::Conflict(format!(
                        "contact id {} already exists",
                        contact.id
                    )));
                }
                if self.phone_taken(contact.area_code_id, &contact.phone_number, None) {
                    return Err(DirectoryError::Conflict(
                        messages::CONTACT_ALREADY_REGISTERED.to_string(),
                    ));
                }
                let seq = self.next_seq;
                self.next_seq += 1;
                self.contacts
                    .insert(contact.id, StoredContact { seq, contact });
            }
            Mutation::UpdateContact(contact) => {
                if !self.contacts.contains_key(&contact.id) {
                    return Err(DirectoryError::contact_not_found());
                }
                if self.phone_taken(
                    contact.area_code_id,
                    &contact.phone_number,
                    Some(contact.id),
                ) {
                    return Err(DirectoryError::Conflict(
                        messages::CONTACT_ALREADY_REGISTERED.to_string(),
                    ));
                }
                if let Some(stored) = self.contacts.get_mut(&contact.id) {
                    stored.contact = contact;
                }
            }
            Mutation::RemoveContact(id) => {
                self.contacts
                    .remove(&id)
                    .ok_or_else(DirectoryError::contact_not_found)?;
            }
            Mutation::AddAreaCode(area_code) => {
                if self.area_code_by_number(area_code.code).is_some()
                    || self.area_codes.contains_key(&area_code.id)
                {
                    return Err(DirectoryError::Conflict(
                        messages::DDD_ALREADY_REGISTERED.to_string(),
                    ));
                }
                self.area_codes.insert(area_code.id, area_code);
            }
        }
        Ok(())
    }
}

/// In-memory store backing every repository port.
///
/// Cloning is cheap and yields a handle to the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    pub(crate) state: Arc<RwLock<StoreState>>,
    open_handles: Arc<AtomicUsize>,
    peak_open_handles: Arc<AtomicUsize>,
    handles_created: Arc<AtomicUsize>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Contact read repository over this store.
    pub fn contact_repository(&self) -> InMemoryContactRepository {
        InMemoryContactRepository::new(self.clone())
    }

    /// Scoped area code handle factory over this store.
    pub fn area_code_factory(&self) -> InMemoryAreaCodeRepositoryFactory {
        InMemoryAreaCodeRepositoryFactory::new(self.clone())
    }

    /// Unit of work factory over this store.
    pub fn unit_of_work_factory(&self) -> InMemoryUnitOfWorkFactory {
        InMemoryUnitOfWorkFactory::new(self.clone())
    }

    /// Number of contacts currently stored.
    pub async fn contact_count(&self) -> usize {
        self.state.read().await.contacts.len()
    }

    /// Number of area codes currently stored.
    pub async fn area_code_count(&self) -> usize {
        self.state.read().await.area_codes.len()
    }

    /// Scoped handles acquired and not yet released.
    pub fn open_handles(&self) -> usize {
        self.open_handles.load(Ordering::SeqCst)
    }

    /// Highest number of handles open at the same time.
    pub fn peak_open_handles(&self) -> usize {
        self.peak_open_handles.load(Ordering::SeqCst)
    }

    /// Total scoped handles ever acquired.
    pub fn handles_created(&self) -> usize {
        self.handles_created.load(Ordering::SeqCst)
    }

    pub(crate) fn acquire_handle(&self) -> Arc<AtomicUsize> {
        let open = self.open_handles.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_open_handles.fetch_max(open, Ordering::SeqCst);
        self.handles_created.fetch_add(1, Ordering::SeqCst);
        self.open_handles.clone()
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("open_handles", &self.open_handles())
            .field("handles_created", &self.handles_created())
            .finish()
    }
}
