//! Domain model for the contact book.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every contact is identified by a stable `ContactId`.
//! - Removal is a hard delete; there are no tombstones in this core.

pub mod contact;
