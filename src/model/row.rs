//! Row data shown in the list screen, and pagination over it

use serde::{Deserialize, Serialize};

/// Integer identifier of a row
pub type RowId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    #[serde(default)]
    pub cells: Vec<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Message shipped with a row file, shown as a toast when the section opens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    /// `success`, `error` or `warning`; anything else shows as success
    #[serde(default)]
    pub severity: String,
}

/// Headers plus rows for one section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSet {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<Notice>,
}

impl RowSet {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            headers,
            rows,
            notices: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Rows whose id is in `ids`, in row order
    pub fn rows_with_ids(&self, ids: &[RowId]) -> Vec<&Row> {
        self.rows.iter().filter(|row| ids.contains(&row.id)).collect()
    }

    /// Apply a batch action, returning how many rows it touched
    pub fn apply(&mut self, action: BatchAction, ids: &[RowId]) -> usize {
        match action {
            BatchAction::Delete => {
                let before = self.rows.len();
                self.rows.retain(|row| !ids.contains(&row.id));
                before - self.rows.len()
            }
            BatchAction::Enable | BatchAction::Disable => {
                let enabled = action == BatchAction::Enable;
                let mut touched = 0;
                for row in self.rows.iter_mut().filter(|row| ids.contains(&row.id)) {
                    row.enabled = enabled;
                    touched += 1;
                }
                touched
            }
        }
    }
}

/// Bulk operations offered by the batch bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchAction {
    Delete,
    Enable,
    Disable,
}

impl BatchAction {
    pub fn verb(&self) -> &'static str {
        match self {
            BatchAction::Delete => "Delete",
            BatchAction::Enable => "Enable",
            BatchAction::Disable => "Disable",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            BatchAction::Delete => "Deleted",
            BatchAction::Enable => "Enabled",
            BatchAction::Disable => "Disabled",
        }
    }
}

/// Page index over a row list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Index range of the current page
    pub fn range(&self, total: usize) -> std::ops::Range<usize> {
        let start = (self.page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn next(&mut self, total: usize) -> bool {
        if self.page + 1 < self.page_count(total) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Pull the page back inside bounds after rows were removed
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.min(self.page_count(total) - 1);
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rowset(ids: &[RowId]) -> RowSet {
        RowSet::new(
            vec!["Name".to_string()],
            ids.iter()
                .map(|&id| Row {
                    id,
                    cells: vec![format!("row {}", id)],
                    enabled: true,
                })
                .collect(),
        )
    }

    #[test]
    fn test_pager_ranges() {
        let mut pager = Pager::new(2);
        assert_eq!(pager.page_count(5), 3);
        assert_eq!(pager.range(5), 0..2);
        assert!(pager.next(5));
        assert!(pager.next(5));
        assert_eq!(pager.range(5), 4..5);
        assert!(!pager.next(5));
        assert!(pager.prev());
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_pager_empty_has_one_page() {
        let mut pager = Pager::new(10);
        assert_eq!(pager.page_count(0), 1);
        assert_eq!(pager.range(0), 0..0);
        assert!(!pager.next(0));
        assert!(!pager.prev());
    }

    #[test]
    fn test_pager_clamp_after_delete() {
        let mut pager = Pager::new(2);
        pager.next(6);
        pager.next(6);
        pager.clamp(3);
        assert_eq!(pager.page(), 1);
        pager.clamp(0);
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let pager = Pager::new(0);
        assert_eq!(pager.page_count(3), 3);
    }

    #[test]
    fn test_apply_delete() {
        let mut rows = rowset(&[1, 2, 3]);
        assert_eq!(rows.apply(BatchAction::Delete, &[1, 3, 9]), 2);
        assert_eq!(rows.rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_apply_disable_and_enable() {
        let mut rows = rowset(&[1, 2]);
        assert_eq!(rows.apply(BatchAction::Disable, &[2]), 1);
        assert!(rows.rows[0].enabled);
        assert!(!rows.rows[1].enabled);
        assert_eq!(rows.apply(BatchAction::Enable, &[2]), 1);
        assert!(rows.rows[1].enabled);
    }

    #[test]
    fn test_rows_with_ids_keeps_row_order() {
        let rows = rowset(&[4, 5, 6]);
        let picked: Vec<_> = rows.rows_with_ids(&[6, 4]).iter().map(|r| r.id).collect();
        assert_eq!(picked, vec![4, 6]);
    }
}
