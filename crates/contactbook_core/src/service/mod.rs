//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store access into the selection/edit state machine.
//! - Keep the view layer decoupled from storage details.

pub mod contact_book;
pub mod form;
pub mod selection;
