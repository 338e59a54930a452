//! Sidebar with collapsible navigation groups

use crate::action::Action;
use crate::component::Component;
use crate::model::{NavEntry, NavTree, Section};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct SidebarComponent {
    pub tree: NavTree,
    /// Section currently loaded in the table
    pub active: Section,
    /// Whether the sidebar has keyboard focus
    pub focused: bool,
    list_state: ListState,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new(NavTree::default())
    }
}

impl SidebarComponent {
    pub fn new(tree: NavTree) -> Self {
        Self {
            tree,
            active: Section::Accounts,
            focused: false,
            list_state: ListState::default(),
        }
    }

    /// Activate the entry under the cursor, returning the follow-up action
    pub fn activate(&mut self) -> Option<Action> {
        self.tree.activate().map(Action::SelectSection)
    }
}

impl Component for SidebarComponent {
    fn init(&mut self) -> Result<()> {
        self.tree.focus_section(self.active);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ActivateNav),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextItem => self.tree.next(),
            Action::PrevItem => self.tree.previous(),
            Action::ActivateNav => return Ok(self.activate()),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let items: Vec<ListItem> = self
            .tree
            .entries()
            .into_iter()
            .map(|entry| match entry {
                NavEntry::Group(index) => {
                    let group = &self.tree.groups[index];
                    let arrow = if group.collapsed { "▸" } else { "▾" };
                    ListItem::new(Line::from(Span::styled(
                        format!("{} {}", arrow, group.title),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )))
                }
                NavEntry::Item(_, section) => {
                    let style = if section == self.active {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    ListItem::new(Line::from(Span::styled(
                        format!("   {}", section.name()),
                        style,
                    )))
                }
            })
            .collect();

        let border_color = if self.focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let highlight = if self.focused {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Menu ")
                    .border_style(Style::default().fg(border_color)),
            )
            .highlight_style(highlight);

        self.list_state.select(Some(self.tree.cursor()));
        frame.render_stateful_widget(list, area, &mut self.list_state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_focuses_active_section() {
        let mut sidebar = SidebarComponent::default();
        sidebar.active = Section::Phones;
        sidebar.init().unwrap();
        assert_eq!(
            sidebar.tree.current(),
            Some(NavEntry::Item(1, Section::Phones))
        );
    }

    #[test]
    fn test_activate_item_emits_select_section() {
        let mut sidebar = SidebarComponent::default();
        sidebar.update(Action::NextItem).unwrap();
        let action = sidebar.update(Action::ActivateNav).unwrap();
        assert_eq!(action, Some(Action::SelectSection(Section::Accounts)));
    }

    #[test]
    fn test_activate_header_collapses_group() {
        let mut sidebar = SidebarComponent::default();
        let action = sidebar.update(Action::ActivateNav).unwrap();
        assert_eq!(action, None);
        assert!(sidebar.tree.groups[0].collapsed);
    }
}
