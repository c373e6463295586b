//! Selection state machine.
//!
//! # Responsibility
//! - Own the current UI mode and mediate every transition between modes.
//! - Reject events that are not legal in the current mode, with no state
//!   change.
//!
//! # Invariants
//! - Exactly one mode is active at any time.
//! - The controller holds contact ids only, never records; referential
//!   integrity against the store is checked by `ContactBook` before select
//!   and edit transitions.

use crate::model::contact::ContactId;
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Exclusive UI activity context.
///
/// `Viewing`/`Editing` carry the id of the targeted contact. A mode must
/// never reference an id that is absent from the store; removal of the
/// target transitions to `Empty` within the same command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "target")]
pub enum UiMode {
    #[default]
    Empty,
    Viewing(ContactId),
    Adding,
    Editing(ContactId),
}

impl UiMode {
    /// Id of the targeted contact, when one is referenced.
    pub fn target(&self) -> Option<ContactId> {
        match self {
            Self::Viewing(id) | Self::Editing(id) => Some(*id),
            Self::Empty | Self::Adding => None,
        }
    }

    /// Whether the add/edit form is open.
    pub fn form_open(&self) -> bool {
        matches!(self, Self::Adding | Self::Editing(_))
    }
}

impl Display for UiMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Viewing(id) => write!(f, "viewing({id})"),
            Self::Adding => write!(f, "adding"),
            Self::Editing(id) => write!(f, "editing({id})"),
        }
    }
}

/// An event that is not legal in the current mode.
///
/// The transition is rejected and the mode is left unchanged; callers
/// surface this to the view so disabled controls stay observably inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTransition {
    pub event: &'static str,
    pub mode: UiMode,
}

impl Display for InvalidTransition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` is not allowed while mode is {}", self.event, self.mode)
    }
}

impl Error for InvalidTransition {}

/// Owns the current `UiMode` and applies the transition table.
#[derive(Debug, Default)]
pub struct SelectionController {
    mode: UiMode,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    /// Selecting the current target toggles back to `Empty`; selecting from
    /// `Empty` or another `Viewing` target switches to `Viewing(id)`.
    /// Rejected while the form is open.
    pub fn select(&mut self, id: ContactId) -> Result<UiMode, InvalidTransition> {
        let next = match self.mode {
            UiMode::Viewing(current) if current == id => UiMode::Empty,
            UiMode::Empty | UiMode::Viewing(_) => UiMode::Viewing(id),
            mode => return Err(InvalidTransition { event: "select", mode }),
        };
        self.transition(next);
        Ok(next)
    }

    /// Opens the add form. Legal only from `Empty`; the Add control is
    /// disabled whenever a contact is targeted or the form is open.
    pub fn begin_add(&mut self) -> Result<(), InvalidTransition> {
        match self.mode {
            UiMode::Empty => {
                self.transition(UiMode::Adding);
                Ok(())
            }
            mode => Err(InvalidTransition { event: "add", mode }),
        }
    }

    /// Opens the edit form for the viewed contact.
    pub fn begin_edit(&mut self) -> Result<ContactId, InvalidTransition> {
        match self.mode {
            UiMode::Viewing(id) => {
                self.transition(UiMode::Editing(id));
                Ok(id)
            }
            mode => Err(InvalidTransition { event: "edit", mode }),
        }
    }

    /// Closes the form without saving. Specified policy: always returns to
    /// `Empty`, clearing the selection even when editing.
    pub fn cancel(&mut self) -> Result<(), InvalidTransition> {
        match self.mode {
            UiMode::Adding | UiMode::Editing(_) => {
                self.transition(UiMode::Empty);
                Ok(())
            }
            mode => Err(InvalidTransition { event: "cancel", mode }),
        }
    }

    /// Commits a successful save. Called only after the store mutation has
    /// completed, so observers never see the mode change before the data.
    pub fn form_saved(&mut self) {
        if self.mode.form_open() {
            self.transition(UiMode::Empty);
        }
    }

    /// Reconciles the mode after a removal: a mode may never keep pointing
    /// at an id that left the store.
    pub fn target_removed(&mut self, id: ContactId) {
        if self.mode.target() == Some(id) {
            self.transition(UiMode::Empty);
        }
    }

    fn transition(&mut self, next: UiMode) {
        debug!(
            "event=mode_transition module=core from={} to={}",
            self.mode, next
        );
        self.mode = next;
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectionController, UiMode};
    use uuid::Uuid;

    fn id(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    #[test]
    fn select_toggles_same_target_off() {
        let mut controller = SelectionController::new();
        assert_eq!(controller.select(id(1)).unwrap(), UiMode::Viewing(id(1)));
        assert_eq!(controller.select(id(1)).unwrap(), UiMode::Empty);
    }

    #[test]
    fn select_switches_between_targets() {
        let mut controller = SelectionController::new();
        controller.select(id(1)).unwrap();
        assert_eq!(controller.select(id(2)).unwrap(), UiMode::Viewing(id(2)));
    }

    #[test]
    fn select_is_rejected_while_form_open() {
        let mut controller = SelectionController::new();
        controller.begin_add().unwrap();
        let err = controller.select(id(1)).unwrap_err();
        assert_eq!(err.event, "select");
        assert_eq!(controller.mode(), UiMode::Adding);
    }

    #[test]
    fn begin_add_is_legal_only_from_empty() {
        let mut controller = SelectionController::new();
        controller.begin_add().unwrap();
        assert_eq!(controller.mode(), UiMode::Adding);

        let mut viewing = SelectionController::new();
        viewing.select(id(1)).unwrap();
        assert!(viewing.begin_add().is_err());
        assert_eq!(viewing.mode(), UiMode::Viewing(id(1)));
    }

    #[test]
    fn begin_edit_requires_viewing_and_keeps_target() {
        let mut controller = SelectionController::new();
        assert!(controller.begin_edit().is_err());

        controller.select(id(7)).unwrap();
        assert_eq!(controller.begin_edit().unwrap(), id(7));
        assert_eq!(controller.mode(), UiMode::Editing(id(7)));
    }

    #[test]
    fn cancel_always_returns_to_empty() {
        let mut adding = SelectionController::new();
        adding.begin_add().unwrap();
        adding.cancel().unwrap();
        assert_eq!(adding.mode(), UiMode::Empty);

        let mut editing = SelectionController::new();
        editing.select(id(3)).unwrap();
        editing.begin_edit().unwrap();
        editing.cancel().unwrap();
        assert_eq!(editing.mode(), UiMode::Empty);

        let mut idle = SelectionController::new();
        assert!(idle.cancel().is_err());
    }

    #[test]
    fn target_removed_clears_only_matching_target() {
        let mut controller = SelectionController::new();
        controller.select(id(4)).unwrap();
        controller.target_removed(id(5));
        assert_eq!(controller.mode(), UiMode::Viewing(id(4)));
        controller.target_removed(id(4));
        assert_eq!(controller.mode(), UiMode::Empty);
    }
}
