//! Modal overlay slot
//!
//! At most one modal is open at a time. Opening a modal while another is
//! showing replaces it; closing is unconditional and idempotent.

use crate::action::Action;
use tracing::debug;

/// Footer button that currently has focus in a confirm dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalButton {
    Cancel,
    #[default]
    Confirm,
}

impl ModalButton {
    pub fn toggle(self) -> Self {
        match self {
            ModalButton::Cancel => ModalButton::Confirm,
            ModalButton::Confirm => ModalButton::Cancel,
        }
    }
}

/// Generic confirmation dialog: title, body and the action bound to Confirm
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmModal {
    pub title: String,
    pub body: Vec<String>,
    pub on_confirm: Action,
    pub focus: ModalButton,
}

impl ConfirmModal {
    pub fn new(title: impl Into<String>, body: Vec<String>, on_confirm: Action) -> Self {
        Self {
            title: title.into(),
            body,
            on_confirm,
            focus: ModalButton::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Confirm(ConfirmModal),
    /// Keyboard shortcut reference
    Help,
}

/// Something that can display one modal overlay
pub trait ModalHost {
    fn show_modal(&mut self, modal: Modal);
    fn close_modal(&mut self);
    fn is_open(&self) -> bool;
}

/// Single-slot modal container
#[derive(Debug, Default)]
pub struct ModalSlot {
    current: Option<Modal>,
}

impl ModalSlot {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn top(&self) -> Option<&Modal> {
        self.current.as_ref()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.current.as_mut()
    }
}

impl ModalHost for ModalSlot {
    fn show_modal(&mut self, modal: Modal) {
        if self.is_open() {
            debug!("replacing open modal");
        }
        self.current = Some(modal);
    }

    fn close_modal(&mut self) {
        self.current = None;
    }

    fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirm(title: &str) -> Modal {
        Modal::Confirm(ConfirmModal::new(title, vec![], Action::ForceQuit))
    }

    #[test]
    fn test_open_then_close() {
        let mut slot = ModalSlot::new();
        assert!(!slot.is_open());

        slot.show_modal(confirm("Quit?"));
        assert!(slot.is_open());
        assert_eq!(slot.top(), Some(&confirm("Quit?")));

        slot.close_modal();
        assert!(!slot.is_open());
        assert!(slot.top().is_none());
    }

    #[test]
    fn test_close_without_modal_is_noop() {
        let mut slot = ModalSlot::new();
        slot.close_modal();
        slot.close_modal();
        assert!(!slot.is_open());
    }

    #[test]
    fn test_second_open_replaces_first() {
        let mut slot = ModalSlot::new();
        slot.show_modal(confirm("first"));
        slot.show_modal(Modal::Help);
        assert_eq!(slot.top(), Some(&Modal::Help));

        slot.close_modal();
        assert!(!slot.is_open());
    }

    #[test]
    fn test_top_mut_changes_focus() {
        let mut slot = ModalSlot::new();
        slot.show_modal(confirm("Delete?"));

        if let Some(Modal::Confirm(modal)) = slot.top_mut() {
            modal.focus = modal.focus.toggle();
        }

        match slot.top() {
            Some(Modal::Confirm(modal)) => assert_eq!(modal.focus, ModalButton::Cancel),
            other => panic!("unexpected modal: {:?}", other),
        }
    }
}
