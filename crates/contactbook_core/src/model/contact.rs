//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record owned by the store.
//! - Provide the field bundle shared by add/update input and the form draft.
//!
//! # Invariants
//! - `id` is stable and never reused for another contact.
//! - Required-field presence is checked only at submit time; field setters
//!   accept any value, including blank.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a contact record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ContactId = Uuid;

/// Names one editable form field.
///
/// Used to address a single field in `set_draft_field` and to report which
/// required field was blank when a submit is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Phone,
    Email,
}

impl Display for ContactField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
        };
        write!(f, "{name}")
    }
}

/// Mutable field bundle of a contact.
///
/// Doubles as the form draft's backing storage; it carries no identity of
/// its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Returns the first required field that is blank, if any.
    ///
    /// Presence is the only validation this model performs; format checks
    /// are out of scope.
    pub fn first_blank_field(&self) -> Option<ContactField> {
        if self.name.is_empty() {
            Some(ContactField::Name)
        } else if self.phone.is_empty() {
            Some(ContactField::Phone)
        } else if self.email.is_empty() {
            Some(ContactField::Email)
        } else {
            None
        }
    }

    /// Replaces a single field value in place.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        match field {
            ContactField::Name => self.name = value.into(),
            ContactField::Phone => self.phone = value.into(),
            ContactField::Email => self.email = value.into(),
        }
    }
}

/// Canonical contact record.
///
/// Created only through `ContactStore::add`; field mutation happens through
/// whole-record replacement in `ContactStore::update`, keeping the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Stable global ID used for selection targeting.
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    /// Creates a new contact with a generated stable ID.
    pub fn new(fields: ContactFields) -> Self {
        Self::with_id(Uuid::new_v4(), fields)
    }

    /// Creates a contact with a caller-provided stable ID.
    ///
    /// Used by `ContactStore::update` to keep identity across replacement,
    /// and by tests that need deterministic ids.
    pub fn with_id(id: ContactId, fields: ContactFields) -> Self {
        Self {
            id,
            name: fields.name,
            phone: fields.phone,
            email: fields.email,
        }
    }

    /// Copies the mutable fields out of this record.
    ///
    /// The form model uses this to prefill a draft on edit entry.
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Contact, ContactField, ContactFields};

    #[test]
    fn first_blank_field_reports_in_declaration_order() {
        let blank = ContactFields::default();
        assert_eq!(blank.first_blank_field(), Some(ContactField::Name));

        let no_phone = ContactFields::new("Ada", "", "ada@example.com");
        assert_eq!(no_phone.first_blank_field(), Some(ContactField::Phone));

        let no_email = ContactFields::new("Ada", "555", "");
        assert_eq!(no_email.first_blank_field(), Some(ContactField::Email));

        let complete = ContactFields::new("Ada", "555", "ada@example.com");
        assert_eq!(complete.first_blank_field(), None);
    }

    #[test]
    fn set_replaces_single_field() {
        let mut fields = ContactFields::new("Ada", "555", "ada@example.com");
        fields.set(ContactField::Phone, "0800");
        assert_eq!(fields.phone, "0800");
        assert_eq!(fields.name, "Ada");
        assert_eq!(fields.email, "ada@example.com");
    }

    #[test]
    fn fields_roundtrip_through_record() {
        let fields = ContactFields::new("Ada", "555", "ada@example.com");
        let contact = Contact::new(fields.clone());
        assert_eq!(contact.fields(), fields);
    }
}
