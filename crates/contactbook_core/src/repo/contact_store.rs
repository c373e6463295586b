//! In-memory contact store.
//!
//! # Responsibility
//! - Own the authoritative, insertion-ordered contact list.
//! - Emit a change event to subscribers before each mutating call returns.
//!
//! # Invariants
//! - `add` never fails and always allocates a fresh id.
//! - `update`/`remove` on a missing id fail with `NotFound` and leave the
//!   list untouched.
//! - Subscribers are notified synchronously, after the mutation is applied.

use crate::model::contact::{Contact, ContactFields, ContactId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for direct misuse with an id that is not present.
///
/// Under correct controller use this does not occur; the selection layer
/// checks referential integrity before issuing store calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    NotFound(ContactId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Change notification emitted after each successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(ContactId),
    Updated(ContactId),
    Removed(ContactId),
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Insertion-ordered, in-memory contact collection.
#[derive(Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    listeners: Vec<Listener>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot in insertion order.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    /// Looks up one contact by id.
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    /// Appends a new contact with a freshly generated id and returns it.
    pub fn add(&mut self, fields: ContactFields) -> Contact {
        let contact = Contact::new(fields);
        self.contacts.push(contact.clone());
        debug!("event=contact_added module=core id={}", contact.id);
        self.notify(StoreEvent::Added(contact.id));
        contact
    }

    /// Replaces the record with matching id, keeping the same id.
    pub fn update(&mut self, id: ContactId, fields: ContactFields) -> StoreResult<Contact> {
        let Some(slot) = self.contacts.iter_mut().find(|contact| contact.id == id) else {
            return Err(StoreError::NotFound(id));
        };
        *slot = Contact::with_id(id, fields);
        let updated = slot.clone();
        debug!("event=contact_updated module=core id={id}");
        self.notify(StoreEvent::Updated(id));
        Ok(updated)
    }

    /// Deletes the record with matching id.
    pub fn remove(&mut self, id: ContactId) -> StoreResult<()> {
        let Some(index) = self.contacts.iter().position(|contact| contact.id == id) else {
            return Err(StoreError::NotFound(id));
        };
        self.contacts.remove(index);
        debug!("event=contact_removed module=core id={id}");
        self.notify(StoreEvent::Removed(id));
        Ok(())
    }

    /// Registers a synchronous change listener.
    ///
    /// Listeners run inside the mutating call, so dependent state can
    /// re-derive itself before the next render pass.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, event: StoreEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}
