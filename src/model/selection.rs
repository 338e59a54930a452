//! Multi-row selection for batch actions
//!
//! The selection set outlives a single page of rows: checking rows on page 1,
//! moving to page 2 and checking more keeps all of them selected. The page
//! itself (checkboxes, master checkbox, batch bar) is reached through the
//! `SelectionView` trait so the logic here never depends on a terminal.

use super::row::RowId;
use std::collections::BTreeSet;
use tracing::debug;

/// Tri-state of the "select all" checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MasterState {
    #[default]
    Unchecked,
    Indeterminate,
    Checked,
}

impl MasterState {
    pub fn from_counts(checked: usize, total: usize) -> Self {
        if total > 0 && checked == total {
            MasterState::Checked
        } else if checked > 0 {
            MasterState::Indeterminate
        } else {
            MasterState::Unchecked
        }
    }

    pub fn is_checked(&self) -> bool {
        *self == MasterState::Checked
    }
}

/// The current page's checkboxes and selection summary widgets
pub trait SelectionView {
    /// Ids of the rows on the current page, in display order
    fn row_ids(&self) -> Vec<RowId>;
    fn is_checked(&self, id: RowId) -> bool;
    fn set_checked(&mut self, id: RowId, checked: bool);
    fn set_master(&mut self, state: MasterState);
    fn show_batch_bar(&mut self, count: usize);
    fn hide_batch_bar(&mut self);
}

/// Set of selected row ids, kept in ascending order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<RowId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: RowId) -> bool {
        self.ids.insert(id)
    }

    pub fn remove(&mut self, id: RowId) -> bool {
        self.ids.remove(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> Vec<RowId> {
        self.ids.iter().copied().collect()
    }
}

/// Owns the selection set and keeps a `SelectionView` in sync with it
#[derive(Debug, Default)]
pub struct SelectionManager {
    set: SelectionSet,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self {
            set: SelectionSet::new(),
        }
    }

    pub fn set(&self) -> &SelectionSet {
        &self.set
    }

    /// Drop the set without touching any view (a new page starts empty)
    pub fn reset(&mut self) {
        self.set.clear();
    }

    /// Apply the master checkbox to every row on the page
    pub fn toggle_select_all(&mut self, view: &mut impl SelectionView, checked: bool) {
        for id in view.row_ids() {
            view.set_checked(id, checked);
            if checked {
                self.set.insert(id);
            } else {
                self.set.remove(id);
            }
        }
        self.update_selection(view);
    }

    /// Flip one row's checkbox, then resync
    pub fn toggle_row(&mut self, view: &mut impl SelectionView, id: RowId) {
        let checked = view.is_checked(id);
        view.set_checked(id, !checked);
        self.update_selection(view);
    }

    /// Pull the page's checkbox states into the set and refresh the summary.
    ///
    /// Ids not on the current page are left alone.
    pub fn update_selection(&mut self, view: &mut impl SelectionView) {
        let ids = view.row_ids();
        let mut checked = 0;
        for &id in &ids {
            if view.is_checked(id) {
                checked += 1;
                self.set.insert(id);
            } else {
                self.set.remove(id);
            }
        }

        if !ids.is_empty() {
            view.set_master(MasterState::from_counts(checked, ids.len()));
        }

        if self.set.is_empty() {
            view.hide_batch_bar();
        } else {
            view.show_batch_bar(self.set.len());
        }

        debug!(
            page_checked = checked,
            page_total = ids.len(),
            selected = self.set.len(),
            "selection updated"
        );
    }

    /// Selected ids across all pages, or the page's checked boxes when the
    /// set is empty
    pub fn selected_ids(&self, view: &impl SelectionView) -> Vec<RowId> {
        if !self.set.is_empty() {
            return self.set.ids();
        }
        view.row_ids()
            .into_iter()
            .filter(|&id| view.is_checked(id))
            .collect()
    }

    /// Uncheck everything and empty the set
    pub fn clear_selection(&mut self, view: &mut impl SelectionView) {
        for id in view.row_ids() {
            view.set_checked(id, false);
        }
        view.set_master(MasterState::Unchecked);
        self.set.clear();
        self.update_selection(view);
    }
}
