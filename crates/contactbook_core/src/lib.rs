//! Core domain logic for the contact book.
//! This crate is the single source of truth for selection/edit invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactField, ContactFields, ContactId};
pub use repo::contact_store::{ContactStore, StoreError, StoreEvent, StoreResult};
pub use service::contact_book::{CommandError, CommandResult, ContactBook};
pub use service::form::ContactFormModel;
pub use service::selection::{InvalidTransition, SelectionController, UiMode};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
