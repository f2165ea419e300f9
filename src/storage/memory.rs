use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::*;

/// In-process storage. Clones share the same slots, so a second store
/// initialized from a clone sees what the first one persisted.
#[derive(Debug, Clone, Default)]
pub struct MemStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a slot directly, bypassing any store.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStorage for MemStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
