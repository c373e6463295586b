//! Form draft model.
//!
//! # Responsibility
//! - Own the transient editable draft for the add/edit form.
//!
//! # Invariants
//! - A draft exists only while the form is open (`Adding`/`Editing`).
//! - The draft is rebuilt on mode entry and never re-synced mid-edit, so
//!   external changes to the underlying record cannot clobber in-progress
//!   input.
//! - No validation happens here; presence is enforced at submit time.

use crate::model::contact::{Contact, ContactField, ContactFields};

/// Working copy of the form fields, rebuilt on each form-mode entry.
#[derive(Debug, Default)]
pub struct ContactFormModel {
    draft: Option<ContactFields>,
}

impl ContactFormModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft, present only while a form mode is active.
    pub fn draft(&self) -> Option<&ContactFields> {
        self.draft.as_ref()
    }

    /// Entering `Adding`: reset to blank fields.
    pub fn open_blank(&mut self) {
        self.draft = Some(ContactFields::default());
    }

    /// Entering `Editing`: copy the targeted contact's current fields.
    pub fn open_prefilled(&mut self, contact: &Contact) {
        self.draft = Some(contact.fields());
    }

    /// In-place field edit. Returns `false` when no form mode is active.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Drops the draft without persisting it. Used on cancel and after a
    /// successful submit; the draft is never kept across form sessions.
    pub fn discard(&mut self) {
        self.draft = None;
    }
}
