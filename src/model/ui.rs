//! UI state - presentation state separate from row data

/// Panel that receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Sidebar,
    #[default]
    Table,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Table,
            Focus::Table => Focus::Sidebar,
        }
    }
}
