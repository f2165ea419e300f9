//! Presentation layer over [`ContactStore`].
//!
//! Holds the single error slot and the edit toggle, forwards user actions to
//! the store and renders the current list. Nothing here mutates the list
//! other than through the store's operations.

use crate::domain::{Contact, ContactStore};
use crate::errors::AppError;
use log::debug;
use uuid::Uuid;

pub const EMPTY_LIST: &str = "No contacts yet.";

/// One visible error message, overwritten by each failure and cleared by
/// each success.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatusLine {
    message: Option<String>,
}

impl StatusLine {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

pub struct Presenter<'a> {
    store: &'a mut ContactStore,
    status: StatusLine,
    editing: Option<Uuid>,
}

impl<'a> Presenter<'a> {
    pub fn new(store: &'a mut ContactStore) -> Self {
        Self {
            store,
            status: StatusLine::default(),
            editing: None,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        self.store.contacts()
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    /// Shows a failure that happened outside the store, e.g. bad user input.
    pub fn report(&mut self, err: &AppError) {
        self.status.show(err.to_string());
    }

    pub fn submit(&mut self, name: &str, phone: &str) -> Option<Contact> {
        let outcome = self.store.create(name, phone);
        self.settle(outcome)
    }

    /// Puts the row for `id` into edit mode. Any other row leaves edit mode.
    pub fn begin_edit(&mut self, id: Uuid) -> bool {
        if self.store.get(id).is_none() {
            self.status.show(AppError::NotFound(format!("Contact {id}")).to_string());
            return false;
        }

        self.editing = Some(id);
        self.status.clear();
        true
    }

    /// Saves the row in edit mode. On failure the row stays in edit mode.
    pub fn save_edit(&mut self, name: &str, phone: &str) -> Option<Contact> {
        let Some(id) = self.editing else {
            self.status.show("no contact is being edited");
            return None;
        };

        let outcome = self.store.update(id, name, phone);
        let saved = self.settle(outcome);
        if saved.is_some() {
            self.editing = None;
        }
        saved
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn delete(&mut self, id: Uuid) -> bool {
        if self.editing == Some(id) {
            self.editing = None;
        }
        let outcome = self.store.delete(id);
        self.settle(outcome).is_some()
    }

    pub fn clear_all(&mut self) -> bool {
        self.editing = None;
        let outcome = self.store.clear_all();
        self.settle(outcome).is_some()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(message) = self.status.message() {
            out.push_str(&format!("! {message}\n"));
        }
        out.push_str(&render_contacts(self.store.contacts(), self.editing));
        out
    }

    fn settle<T>(&mut self, outcome: Result<T, AppError>) -> Option<T> {
        match outcome {
            Ok(value) => {
                self.status.clear();
                Some(value)
            }
            Err(e) => {
                debug!("action failed: {e}");
                self.status.show(e.to_string());
                None
            }
        }
    }
}

pub fn render_contacts(contacts: &[Contact], editing: Option<Uuid>) -> String {
    if contacts.is_empty() {
        return format!("{EMPTY_LIST}\n");
    }

    let mut out = String::new();
    for (mut i, c) in contacts.iter().enumerate() {
        i += 1;
        let marker = if editing == Some(c.id()) { "*" } else { " " };
        out.push_str(&format!(
            "{i:>3}.{marker}{:<20} {:<15} {}\n",
            c.name(),
            c.phone(),
            c.id()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStorage;

    fn store() -> ContactStore {
        ContactStore::initialize(Box::new(MemStorage::new()))
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let mut store = store();
        let presenter = Presenter::new(&mut store);

        assert_eq!(presenter.render(), "No contacts yet.\n");
    }

    #[test]
    fn failure_sets_status_and_success_clears_it() {
        let mut store = store();
        let mut presenter = Presenter::new(&mut store);

        assert!(presenter.submit(" ", "555").is_none());
        assert_eq!(
            presenter.status().message(),
            Some("Validation failed: both name and phone are required")
        );
        assert!(presenter.render().starts_with("! Validation failed"));

        assert!(presenter.submit("Ana", "123").is_some());
        assert_eq!(presenter.status().message(), None);
        assert!(presenter.render().contains("Ana"));
    }

    #[test]
    fn later_failure_overwrites_message() {
        let mut store = store();
        let mut presenter = Presenter::new(&mut store);

        presenter.submit("", "");
        presenter.begin_edit(Uuid::nil());

        assert_eq!(
            presenter.status().message(),
            Some("Contact 00000000-0000-0000-0000-000000000000 Not found")
        );
    }

    #[test]
    fn failed_save_keeps_edit_mode() {
        let mut store = store();
        let mut presenter = Presenter::new(&mut store);
        let ana = presenter.submit("Ana", "123").unwrap();

        assert!(presenter.begin_edit(ana.id()));
        assert!(presenter.save_edit("Ana", " ").is_none());
        assert_eq!(presenter.editing(), Some(ana.id()));
        assert!(presenter.render().contains("  1.*Ana"));

        let saved = presenter.save_edit("Ana B", "999").unwrap();
        assert_eq!(saved.id(), ana.id());
        assert_eq!(presenter.editing(), None);
        assert_eq!(presenter.status().message(), None);
    }

    #[test]
    fn begin_edit_clears_error_and_rejects_unknown_rows() {
        let mut store = store();
        let mut presenter = Presenter::new(&mut store);
        let ana = presenter.submit("Ana", "123").unwrap();

        assert!(!presenter.begin_edit(Uuid::nil()));
        assert!(presenter.status().message().is_some());

        assert!(presenter.begin_edit(ana.id()));
        assert_eq!(presenter.status().message(), None);
    }

    #[test]
    fn save_without_edit_mode_reports_error() {
        let mut store = store();
        let mut presenter = Presenter::new(&mut store);

        assert!(presenter.save_edit("Ana", "1").is_none());
        assert_eq!(
            presenter.status().message(),
            Some("no contact is being edited")
        );
    }

    #[test]
    fn delete_and_clear_reset_status_and_edit_mode() {
        let mut store = store();
        let mut presenter = Presenter::new(&mut store);
        let ana = presenter.submit("Ana", "123").unwrap();
        presenter.submit("Bo", "456");

        presenter.begin_edit(ana.id());
        presenter.submit("", "");
        assert!(presenter.delete(ana.id()));
        assert_eq!(presenter.editing(), None);
        assert_eq!(presenter.status().message(), None);

        assert!(presenter.clear_all());
        assert!(presenter.contacts().is_empty());
        assert_eq!(presenter.render(), "No contacts yet.\n");
    }

    #[test]
    fn rows_are_numbered_in_insertion_order() {
        let mut store = store();
        let mut presenter = Presenter::new(&mut store);
        presenter.submit("Ana", "123");
        presenter.submit("Bo", "456");

        let rendered = presenter.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("  1. Ana"));
        assert!(lines[1].starts_with("  2. Bo"));
    }
}
