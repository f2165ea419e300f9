//! Persisted form of the contact list.
//!
//! The list is stored as a JSON array of `{"id", "name", "phone"}` objects
//! under [`STORAGE_KEY`]. Reading is tolerant: anything that is not a usable
//! array loads as an empty list, and unusable records are dropped one by one.

use std::collections::HashSet;

use super::*;
use log::{debug, warn};
use serde_json::Value;

pub const STORAGE_KEY: &str = "contacts_v1";

pub fn encode(contacts: &[Contact]) -> Result<String, AppError> {
    Ok(serde_json::to_string(contacts)?)
}

pub fn decode(raw: Option<&str>) -> Vec<Contact> {
    let Some(data) = raw else {
        debug!("no snapshot under {STORAGE_KEY}, starting empty");
        return Vec::new();
    };

    // serde_json errors on empty input
    if data.trim().is_empty() {
        return Vec::new();
    }

    let value: Value = match serde_json::from_str(data) {
        Ok(value) => value,
        Err(e) => {
            warn!("snapshot under {STORAGE_KEY} is not valid JSON, starting empty: {e}");
            return Vec::new();
        }
    };

    let Value::Array(records) = value else {
        warn!("snapshot under {STORAGE_KEY} is not an array, starting empty");
        return Vec::new();
    };

    let mut seen: HashSet<Uuid> = HashSet::with_capacity(records.len());
    let mut contacts = Vec::with_capacity(records.len());

    for (position, record) in records.into_iter().enumerate() {
        let contact = match serde_json::from_value::<Contact>(record)
            .map_err(AppError::from)
            .and_then(Contact::normalized)
        {
            Ok(contact) => contact,
            Err(e) => {
                warn!("skipping snapshot record {position}: {e}");
                continue;
            }
        };

        if !seen.insert(contact.id()) {
            warn!(
                "skipping snapshot record {position}: duplicate id {}",
                contact.id()
            );
            continue;
        }

        contacts.push(contact);
    }

    debug!("loaded {} contacts from {STORAGE_KEY}", contacts.len());
    contacts
}
