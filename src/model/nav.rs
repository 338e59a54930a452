//! Sidebar navigation groups
//!
//! Groups are built once at startup with every group expanded. Activating a
//! group header flips its `collapsed` flag; nothing is remembered across runs.

/// A list screen reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Accounts,
    LoginLogs,
    Phones,
    BrowserEnvs,
    Nodes,
    Channels,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Section::Accounts => "Accounts",
            Section::LoginLogs => "Login Logs",
            Section::Phones => "Phones",
            Section::BrowserEnvs => "Browser Envs",
            Section::Nodes => "Nodes",
            Section::Channels => "Channels",
        }
    }

    /// File stem used by file-backed row sources
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Accounts => "accounts",
            Section::LoginLogs => "login_logs",
            Section::Phones => "phones",
            Section::BrowserEnvs => "browser_envs",
            Section::Nodes => "nodes",
            Section::Channels => "channels",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    pub title: String,
    pub sections: Vec<Section>,
    pub collapsed: bool,
}

impl NavGroup {
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            title: title.into(),
            sections,
            collapsed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }
}

/// One visible line of the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Group(usize),
    Item(usize, Section),
}

#[derive(Debug, Clone)]
pub struct NavTree {
    pub groups: Vec<NavGroup>,
    cursor: usize,
}

impl Default for NavTree {
    fn default() -> Self {
        Self::init(vec![
            NavGroup::new("Accounts", vec![Section::Accounts, Section::LoginLogs]),
            NavGroup::new(
                "Resources",
                vec![Section::Phones, Section::BrowserEnvs, Section::Nodes],
            ),
            NavGroup::new("YouTube", vec![Section::Channels]),
        ])
    }
}

impl NavTree {
    pub fn init(mut groups: Vec<NavGroup>) -> Self {
        for group in &mut groups {
            group.collapsed = false;
        }
        Self { groups, cursor: 0 }
    }

    /// Entries currently visible, headers included
    pub fn entries(&self) -> Vec<NavEntry> {
        let mut entries = Vec::new();
        for (index, group) in self.groups.iter().enumerate() {
            entries.push(NavEntry::Group(index));
            if !group.collapsed {
                entries.extend(group.sections.iter().map(|&s| NavEntry::Item(index, s)));
            }
        }
        entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<NavEntry> {
        self.entries().get(self.cursor).copied()
    }

    pub fn next(&mut self) {
        let len = self.entries().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn previous(&mut self) {
        let len = self.entries().len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    pub fn toggle_group(&mut self, index: usize) {
        if let Some(group) = self.groups.get_mut(index) {
            group.toggle();
        }
        let len = self.entries().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Activate the entry under the cursor.
    ///
    /// Headers toggle their group and return `None`; items return their
    /// section.
    pub fn activate(&mut self) -> Option<Section> {
        match self.current()? {
            NavEntry::Group(index) => {
                self.toggle_group(index);
                None
            }
            NavEntry::Item(_, section) => Some(section),
        }
    }

    /// Move the cursor onto `section` if it is visible
    pub fn focus_section(&mut self, section: Section) {
        if let Some(pos) = self
            .entries()
            .iter()
            .position(|e| matches!(e, NavEntry::Item(_, s) if *s == section))
        {
            self.cursor = pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_expands_all_groups() {
        let mut group = NavGroup::new("A", vec![Section::Accounts]);
        group.collapsed = true;
        let tree = NavTree::init(vec![group]);
        assert!(tree.groups.iter().all(|g| !g.collapsed));
        assert_eq!(tree.entries().len(), 2);
    }

    #[test]
    fn test_activate_header_toggles_collapsed() {
        let mut tree = NavTree::default();
        assert_eq!(tree.current(), Some(NavEntry::Group(0)));

        assert_eq!(tree.activate(), None);
        assert!(tree.groups[0].collapsed);
        assert!(!tree.entries().contains(&NavEntry::Item(0, Section::Accounts)));

        assert_eq!(tree.activate(), None);
        assert!(!tree.groups[0].collapsed);
    }

    #[test]
    fn test_activate_item_returns_section() {
        let mut tree = NavTree::default();
        tree.next();
        assert_eq!(tree.activate(), Some(Section::Accounts));
        tree.next();
        assert_eq!(tree.activate(), Some(Section::LoginLogs));
    }

    #[test]
    fn test_cursor_wraps() {
        let mut tree = NavTree::default();
        let len = tree.entries().len();
        tree.previous();
        assert_eq!(tree.cursor(), len - 1);
        tree.next();
        assert_eq!(tree.cursor(), 0);
    }

    #[test]
    fn test_collapse_last_group_clamps_cursor() {
        let mut tree = NavTree::default();
        tree.focus_section(Section::Channels);
        let group = tree.groups.len() - 1;
        tree.toggle_group(group);
        assert_eq!(tree.current(), Some(NavEntry::Group(group)));
    }

    #[test]
    fn test_focus_section() {
        let mut tree = NavTree::default();
        tree.focus_section(Section::Nodes);
        assert_eq!(tree.current(), Some(NavEntry::Item(1, Section::Nodes)));
    }
}
