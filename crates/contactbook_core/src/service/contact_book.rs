//! Contact book facade.
//!
//! # Responsibility
//! - Own store, selection and form as one explicit state container.
//! - Funnel every user intent through the selection controller and expose
//!   the query/command surface consumed by the view layer.
//!
//! # Invariants
//! - A store mutation completes before the mode transition it enables is
//!   committed, so observers never see a mode referencing data that was
//!   not successfully written.
//! - A mode never references an id absent from the store.
//! - Rejected commands leave store, mode and draft untouched.

use crate::model::contact::{Contact, ContactField, ContactFields, ContactId};
use crate::repo::contact_store::{ContactStore, StoreError, StoreEvent};
use crate::service::form::ContactFormModel;
use crate::service::selection::{InvalidTransition, SelectionController, UiMode};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CommandResult = Result<(), CommandError>;

/// Rejection surface for user intents.
///
/// None of these crash the process; each one means the requested transition
/// was refused and all state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Target contact id is not in the store.
    NotFound(ContactId),
    /// A required field is blank at submit time. The form stays open with
    /// the draft untouched so the view can signal the user.
    ValidationRejected(ContactField),
    /// Event not legal in the current mode.
    InvalidTransition(InvalidTransition),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::ValidationRejected(field) => {
                write!(f, "required field `{field}` is blank")
            }
            Self::InvalidTransition(rejected) => write!(f, "{rejected}"),
        }
    }
}

impl Error for CommandError {}

impl From<StoreError> for CommandError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::NotFound(id),
        }
    }
}

impl From<InvalidTransition> for CommandError {
    fn from(value: InvalidTransition) -> Self {
        Self::InvalidTransition(value)
    }
}

/// Single state container for the contact manager core.
///
/// Commands take `&mut self`, so each intent runs to completion before the
/// next one is accepted; the core is single-threaded and synchronous.
#[derive(Default)]
pub struct ContactBook {
    store: ContactStore,
    selection: SelectionController,
    form: ContactFormModel,
}

impl ContactBook {
    /// Empty store, mode `Empty`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the two canonical example contacts.
    pub fn with_seed() -> Self {
        let mut book = Self::new();
        book.store
            .add(ContactFields::new("Sandra", "08035458211", "sandra@gmail.com"));
        book.store
            .add(ContactFields::new("Henry", "08035458211", "Henry1980@gmail.com"));
        book
    }

    /// Read-only contact snapshot in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        self.store.list()
    }

    pub fn mode(&self) -> UiMode {
        self.selection.mode()
    }

    /// Current form draft; `None` unless the form is open.
    pub fn draft(&self) -> Option<&ContactFields> {
        self.form.draft()
    }

    /// Registers a view-layer listener for store change events.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.store.subscribe(listener);
    }

    /// Selects a contact, or toggles the selection off when the contact is
    /// already being viewed. Rejected while the form is open.
    pub fn select_contact(&mut self, id: ContactId) -> CommandResult {
        if self.store.get(id).is_none() {
            return Err(CommandError::NotFound(id));
        }
        self.selection.select(id)?;
        Ok(())
    }

    /// Opens the add form with a blank draft. The Add control is disabled
    /// outside `Empty`, so any other mode rejects the event.
    pub fn click_add(&mut self) -> CommandResult {
        self.selection.begin_add()?;
        self.form.open_blank();
        Ok(())
    }

    /// Opens the edit form prefilled from the viewed contact.
    pub fn click_edit(&mut self) -> CommandResult {
        let mode = self.selection.mode();
        let UiMode::Viewing(id) = mode else {
            return Err(InvalidTransition { event: "edit", mode }.into());
        };
        let Some(contact) = self.store.get(id) else {
            return Err(CommandError::NotFound(id));
        };
        self.form.open_prefilled(contact);
        self.selection.begin_edit()?;
        Ok(())
    }

    /// Edits a single draft field in place. Legal only while the form is
    /// open; no validation happens until submit.
    pub fn set_draft_field(
        &mut self,
        field: ContactField,
        value: impl Into<String>,
    ) -> CommandResult {
        if !self.form.set_field(field, value) {
            let mode = self.selection.mode();
            return Err(InvalidTransition { event: "set_field", mode }.into());
        }
        Ok(())
    }

    /// Saves the draft: appends a new contact when `Adding`, replaces the
    /// targeted record when `Editing`. A blank required field rejects the
    /// submit with no mutation, leaving the form open and untouched.
    pub fn submit_form(&mut self) -> CommandResult {
        let mode = self.selection.mode();
        let Some(draft) = self.form.draft() else {
            return Err(InvalidTransition { event: "submit", mode }.into());
        };
        if let Some(field) = draft.first_blank_field() {
            return Err(CommandError::ValidationRejected(field));
        }

        let fields = draft.clone();
        match mode {
            UiMode::Adding => {
                self.store.add(fields);
            }
            UiMode::Editing(id) => {
                self.store.update(id, fields)?;
            }
            mode => return Err(InvalidTransition { event: "submit", mode }.into()),
        }

        // Mutation has landed; only now close the form and commit the mode.
        self.form.discard();
        self.selection.form_saved();
        Ok(())
    }

    /// Closes the form and discards the draft. Always returns to `Empty`.
    pub fn cancel(&mut self) -> CommandResult {
        self.selection.cancel()?;
        self.form.discard();
        Ok(())
    }

    /// Deletes the viewed contact. The removal is applied first and the
    /// mode reconciled in the same command, so `Viewing` never dangles.
    pub fn click_delete(&mut self) -> CommandResult {
        let mode = self.selection.mode();
        let UiMode::Viewing(id) = mode else {
            return Err(InvalidTransition { event: "delete", mode }.into());
        };
        self.store.remove(id)?;
        self.selection.target_removed(id);
        Ok(())
    }
}
