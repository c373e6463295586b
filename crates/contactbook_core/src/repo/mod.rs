//! Storage layer for the contact book.
//!
//! # Responsibility
//! - Own the authoritative contact collection behind a small CRUD API.
//! - Keep list ordering and change notification inside one boundary.
//!
//! # Invariants
//! - Mutating APIs return semantic errors (`NotFound`) rather than
//!   panicking on absent ids.

pub mod contact_store;
