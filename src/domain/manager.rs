use super::snapshot::{self, STORAGE_KEY};
use super::*;

use log::{info, warn};
use std::collections::HashSet;

/// Owns the authoritative contact list and keeps the storage slot in step
/// with it after every successful mutation.
///
/// The only way to get a store is [`ContactStore::initialize`], which is also
/// the only time storage is read.
pub struct ContactStore {
    contacts: Vec<Contact>,
    storage: Box<dyn KeyValueStorage>,
    // every id loaded or handed out so far, deleted ones included
    issued: HashSet<Uuid>,
}

impl ContactStore {
    pub fn initialize(storage: Box<dyn KeyValueStorage>) -> Self {
        let raw = match storage.get(STORAGE_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "could not read {STORAGE_KEY} from {} storage, starting empty: {e}",
                    storage.get_medium()
                );
                None
            }
        };

        let contacts = snapshot::decode(raw.as_deref());
        let issued = contacts.iter().map(Contact::id).collect();

        info!(
            "contact store ready with {} contacts ({} storage)",
            contacts.len(),
            storage.get_medium()
        );

        Self {
            contacts,
            storage,
            issued,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: Uuid) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn storage_medium(&self) -> &str {
        self.storage.get_medium()
    }

    pub fn create(&mut self, name: &str, phone: &str) -> Result<Contact, AppError> {
        let (name, phone) = validation::normalize_fields(name, phone, validation::CREATE_REQ)?;

        let contact = Contact::new(self.fresh_id(), name, phone);
        self.contacts.push(contact.clone());
        info!("created contact {}", contact.id());

        self.persist()?;
        Ok(contact)
    }

    /// Replaces name and phone of the contact with `id`, keeping its position.
    ///
    /// Blank input is rejected before the id is looked up, so an unknown id
    /// paired with blank input reports `Validation`, not `NotFound`.
    pub fn update(
        &mut self,
        id: Uuid,
        new_name: &str,
        new_phone: &str,
    ) -> Result<Contact, AppError> {
        let (name, phone) =
            validation::normalize_fields(new_name, new_phone, validation::UPDATE_REQ)?;

        let Some(contact) = self.contacts.iter_mut().find(|c| c.id() == id) else {
            return Err(AppError::NotFound(format!("Contact {id}")));
        };

        contact.set_fields(name, phone);
        let updated = contact.clone();
        info!("updated contact {id}");

        self.persist()?;
        Ok(updated)
    }

    /// Removes the contact with `id`. An unknown id leaves the list as it is.
    pub fn delete(&mut self, id: Uuid) -> Result<(), AppError> {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id() != id);

        if self.contacts.len() < before {
            info!("deleted contact {id}");
        }

        self.persist()
    }

    pub fn clear_all(&mut self) -> Result<(), AppError> {
        info!("clearing {} contacts", self.contacts.len());
        self.contacts.clear();
        self.persist()
    }

    fn fresh_id(&mut self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.issued.insert(id) {
                return id;
            }
        }
    }

    // Full list every time; the in-memory change stays applied if this fails.
    fn persist(&self) -> Result<(), AppError> {
        let data = snapshot::encode(&self.contacts)?;
        self.storage.set(STORAGE_KEY, &data).inspect_err(|e| {
            warn!(
                "could not write {STORAGE_KEY} to {} storage: {e}",
                self.storage.get_medium()
            )
        })
    }
}
