//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::{BatchAction, Section};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for toast timers
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next row / sidebar entry
    NextItem,
    /// Move to previous row / sidebar entry
    PrevItem,
    /// Jump to first row on the page
    FirstItem,
    /// Jump to last row on the page
    LastItem,
    /// Show the next page of rows
    NextPage,
    /// Show the previous page of rows
    PrevPage,
    /// Switch focus between sidebar and table
    SwitchFocus,
    /// Activate the sidebar entry under the cursor
    ActivateNav,
    /// Load a section into the table
    SelectSection(Section),

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the checkbox of the row under the cursor
    ToggleRow,
    /// Toggle the "select all" checkbox of the current page
    ToggleSelectAll,
    /// Uncheck everything, across all pages
    ClearSelection,

    // ─────────────────────────────────────────────────────────────────────────
    // Batch Actions
    // ─────────────────────────────────────────────────────────────────────────
    /// Ask for confirmation before a batch action
    RequestBatch(BatchAction),
    /// Apply a batch action to the selected rows
    ApplyBatch(BatchAction),
    /// Export selected rows to HTML
    ExportSelection,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Run the action bound to the modal's Confirm button
    ConfirmModal,
    /// Move focus between Cancel and Confirm
    ModalFocusNext,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::SwitchFocus => write!(f, "SwitchFocus"),
            Action::ActivateNav => write!(f, "ActivateNav"),
            Action::SelectSection(section) => write!(f, "SelectSection({})", section.slug()),
            Action::ToggleRow => write!(f, "ToggleRow"),
            Action::ToggleSelectAll => write!(f, "ToggleSelectAll"),
            Action::ClearSelection => write!(f, "ClearSelection"),
            Action::RequestBatch(batch) => write!(f, "RequestBatch({})", batch.verb()),
            Action::ApplyBatch(batch) => write!(f, "ApplyBatch({})", batch.verb()),
            Action::ExportSelection => write!(f, "ExportSelection"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::ModalFocusNext => write!(f, "ModalFocusNext"),
        }
    }
}
