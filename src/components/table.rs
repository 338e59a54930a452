//! Page table component
//!
//! Renders one page of rows with a checkbox column and a "select all" box in
//! the header. It is the `SelectionView` the selection manager works against:
//! the checkboxes here are the page's state, the selection set lives in the
//! manager.

use crate::action::Action;
use crate::component::Component;
use crate::model::selection::SelectionSet;
use crate::model::{MasterState, Row, RowId, SelectionView};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row as TableRow, Table, TableState},
    Frame,
};

/// One row on the page together with its checkbox
#[derive(Debug, Clone)]
struct PageRow {
    row: Row,
    checked: bool,
}

/// Which page of how many is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub page_count: usize,
    pub total_rows: usize,
}

pub struct PageTable {
    title: String,
    headers: Vec<String>,
    rows: Vec<PageRow>,
    state: TableState,
    master: MasterState,
    /// Selection count shown in the batch bar; `None` hides the bar
    batch_count: Option<usize>,
    info: PageInfo,
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTable {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            headers: Vec::new(),
            rows: Vec::new(),
            state: TableState::default(),
            master: MasterState::Unchecked,
            batch_count: None,
            info: PageInfo::default(),
        }
    }

    /// Replace the page contents.
    ///
    /// Checkboxes start checked for rows already in `selection`, so returning
    /// to a page shows what was picked there before.
    pub fn load_page(
        &mut self,
        title: &str,
        headers: &[String],
        rows: &[Row],
        selection: &SelectionSet,
        info: PageInfo,
    ) {
        self.title = title.to_string();
        self.headers = headers.to_vec();
        self.rows = rows
            .iter()
            .map(|row| PageRow {
                row: row.clone(),
                checked: selection.contains(row.id),
            })
            .collect();
        self.info = info;
        self.master = MasterState::Unchecked;

        let selected = self
            .state
            .selected()
            .map(|i| i.min(self.rows.len().saturating_sub(1)));
        self.state
            .select(if self.rows.is_empty() { None } else { selected.or(Some(0)) });
    }

    pub fn cursor_id(&self) -> Option<RowId> {
        let index = self.state.selected()?;
        self.rows.get(index).map(|r| r.row.id)
    }

    pub fn master(&self) -> MasterState {
        self.master
    }

    pub fn batch_count(&self) -> Option<usize> {
        self.batch_count
    }

    pub fn info(&self) -> PageInfo {
        self.info
    }

    pub fn next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = self.state.selected().map_or(0, |i| (i + 1) % self.rows.len());
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let len = self.rows.len();
        let i = self.state.selected().map_or(0, |i| (i + len - 1) % len);
        self.state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.state.select(Some(self.rows.len() - 1));
        }
    }

    fn checkbox(checked: bool) -> &'static str {
        if checked {
            "[x]"
        } else {
            "[ ]"
        }
    }

    fn master_checkbox(&self) -> &'static str {
        match self.master {
            MasterState::Checked => "[x]",
            MasterState::Indeterminate => "[-]",
            MasterState::Unchecked => "[ ]",
        }
    }
}

impl SelectionView for PageTable {
    fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|r| r.row.id).collect()
    }

    fn is_checked(&self, id: RowId) -> bool {
        self.rows.iter().any(|r| r.row.id == id && r.checked)
    }

    fn set_checked(&mut self, id: RowId, checked: bool) {
        for page_row in self.rows.iter_mut().filter(|r| r.row.id == id) {
            page_row.checked = checked;
        }
    }

    fn set_master(&mut self, state: MasterState) {
        self.master = state;
    }

    fn show_batch_bar(&mut self, count: usize) {
        self.batch_count = Some(count);
    }

    fn hide_batch_bar(&mut self) {
        self.batch_count = None;
    }
}

impl Component for PageTable {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => Some(Action::NextPage),
            KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => Some(Action::PrevPage),
            KeyCode::Char(' ') => Some(Action::ToggleRow),
            KeyCode::Char('a') => Some(Action::ToggleSelectAll),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextItem => self.next(),
            Action::PrevItem => self.previous(),
            Action::FirstItem => self.select_first(),
            Action::LastItem => self.select_last(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let title = format!(
            " {} · page {}/{} · {} rows ",
            self.title,
            self.info.page + 1,
            self.info.page_count.max(1),
            self.info.total_rows
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray));

        if self.rows.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No rows",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(empty, area);
            return Ok(());
        }

        let header_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let mut header_cells = vec![
            Cell::from(self.master_checkbox()),
            Cell::from("ID"),
        ];
        header_cells.extend(self.headers.iter().map(|h| Cell::from(h.clone())));
        header_cells.push(Cell::from("Enabled"));
        let header = TableRow::new(header_cells).style(header_style);

        let rows: Vec<TableRow> = self
            .rows
            .iter()
            .map(|page_row| {
                let row_style = if page_row.checked {
                    Style::default().fg(Color::Green)
                } else if !page_row.row.enabled {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::White)
                };
                let mut cells = vec![
                    Cell::from(Self::checkbox(page_row.checked)),
                    Cell::from(page_row.row.id.to_string()),
                ];
                cells.extend(page_row.row.cells.iter().map(|c| Cell::from(c.clone())));
                cells.push(Cell::from(if page_row.row.enabled { "yes" } else { "no" }));
                TableRow::new(cells).style(row_style)
            })
            .collect();

        let mut widths = vec![Constraint::Length(3), Constraint::Length(6)];
        widths.extend(self.headers.iter().map(|_| Constraint::Fill(1)));
        widths.push(Constraint::Length(7));

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(table, area, &mut self.state);
        Ok(())
    }
}
