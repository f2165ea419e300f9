use super::*;
use serde::{Deserialize, Serialize};

/// One person's contact record.
///
/// Fields are only reachable through accessors so a `Contact` held by the
/// store always carries a trimmed, non-empty name and phone.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Contact {
    #[serde(default = "Uuid::new_v4")] // Older snapshots may hold records without id.
    id: Uuid,

    name: String,
    phone: String,
}

impl Contact {
    pub(crate) fn new(id: Uuid, name: String, phone: String) -> Self {
        Contact { id, name, phone }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub(crate) fn set_fields(&mut self, name: String, phone: String) {
        self.name = name;
        self.phone = phone;
    }

    /// Re-applies the store invariant to a record read from storage.
    pub(crate) fn normalized(self) -> Result<Self, AppError> {
        let (name, phone) =
            validation::normalize_fields(&self.name, &self.phone, validation::UPDATE_REQ)?;
        Ok(Contact::new(self.id, name, phone))
    }
}
