//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components. It owns
//! the selection manager, the toast stack and the modal slot, and hands the
//! page table to the selection manager as its `SelectionView`.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_confirm_dialog, draw_main_screen, handle_confirm_key, HelpDialog, PageInfo, PageTable,
    ScreenContext, SidebarComponent,
};
use crate::config::Config;
use crate::model::ui::Focus;
use crate::model::{
    BatchAction, ConfirmModal, Modal, ModalHost, ModalSlot, NotificationSink, Pager, RowSet,
    RowId, Section, SelectionManager, Severity, ToastId, ToastStack,
};
use crate::services::{self, RowSource};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    pub config: Config,

    /// Where rows come from
    pub source: Box<dyn RowSource>,

    /// All rows of the active section
    pub rows: RowSet,

    /// Current page within `rows`
    pub pager: Pager,

    /// Selected row ids, across pages of the active section
    pub selection: SelectionManager,

    /// Live toast notifications
    pub toasts: ToastStack,

    /// Modal overlay slot
    pub modals: ModalSlot,

    /// Panel receiving navigation keys
    pub focus: Focus,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Last "select at least one row" warning, replaced instead of stacked
    selection_warning: Option<ToastId>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub sidebar: SidebarComponent,
    pub table: PageTable,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance
    pub fn new(config: Config, source: Box<dyn RowSource>) -> App {
        let toasts = ToastStack::new(config.toast_display(), config.toast_exit());
        let pager = Pager::new(config.page_size);
        App {
            config,
            source,
            rows: RowSet::default(),
            pager,
            selection: SelectionManager::new(),
            toasts,
            modals: ModalSlot::new(),
            focus: Focus::Table,
            should_quit: false,
            selection_warning: None,
            sidebar: SidebarComponent::default(),
            table: PageTable::new(),
            help_dialog: HelpDialog::default(),
        }
    }

    /// Switch to a section. This is a new page: toasts of the old one are
    /// dropped and the selection starts empty.
    fn load_section(&mut self, section: Section) {
        self.toasts.clear();
        self.selection.reset();
        self.pager.reset();
        self.sidebar.active = section;

        match self.source.load(section) {
            Ok(rows) => {
                info!(section = section.slug(), rows = rows.len(), "section loaded");
                for notice in &rows.notices {
                    self.toasts.show_toast(
                        notice.message.clone(),
                        Severity::from_tag(&notice.severity),
                    );
                }
                self.rows = rows;
            }
            Err(e) => {
                warn!(section = section.slug(), error = %e, "failed to load rows");
                self.rows = RowSet::default();
                self.toasts.show_toast(e.to_string(), Severity::Error);
            }
        }

        self.show_page();
    }

    /// Render the pager's current page into the table and resync the
    /// selection summary
    fn show_page(&mut self) {
        let total = self.rows.len();
        let range = self.pager.range(total);
        let info = PageInfo {
            page: self.pager.page(),
            page_count: self.pager.page_count(total),
            total_rows: total,
        };

        self.table.load_page(
            self.sidebar.active.name(),
            &self.rows.headers,
            &self.rows.rows[range],
            self.selection.set(),
            info,
        );
        self.selection.update_selection(&mut self.table);
    }

    fn require_selection(&mut self) -> Option<Vec<RowId>> {
        let ids = self.selection.selected_ids(&self.table);
        if ids.is_empty() {
            if let Some(previous) = self.selection_warning.take() {
                self.toasts.cancel(previous);
            }
            let id = self
                .toasts
                .show_toast("Select at least one row".to_string(), Severity::Warning);
            self.selection_warning = Some(id);
            None
        } else {
            Some(ids)
        }
    }

    fn request_batch(&mut self, batch: BatchAction) {
        let Some(ids) = self.require_selection() else {
            return;
        };

        let mut body = vec![format!(
            "{} {} selected row(s)?",
            batch.verb(),
            ids.len()
        )];
        if batch == BatchAction::Delete {
            body.push("This cannot be undone.".to_string());
        }

        self.modals.show_modal(Modal::Confirm(ConfirmModal::new(
            format!("{} rows", batch.verb()),
            body,
            Action::ApplyBatch(batch),
        )));
    }

    fn apply_batch(&mut self, batch: BatchAction) {
        let ids = self.selection.selected_ids(&self.table);
        let touched = self.rows.apply(batch, &ids);
        info!(action = batch.verb(), selected = ids.len(), touched, "batch applied");

        self.modals.close_modal();
        self.selection.clear_selection(&mut self.table);
        self.pager.clamp(self.rows.len());
        self.show_page();

        self.toasts.show_toast(
            format!("{} {} row(s)", batch.past_tense(), touched),
            Severity::Success,
        );
    }

    fn export_selection(&mut self) {
        let Some(ids) = self.require_selection() else {
            return;
        };

        let section = self.sidebar.active;
        let rows = self.rows.rows_with_ids(&ids);
        let result = services::export_rows(
            Path::new(&self.config.export_dir),
            section,
            &self.rows.headers,
            &rows,
            Local::now(),
        );

        match result {
            Ok(path) => {
                let message = format!("Exported {} row(s) to {}", rows.len(), path.display());
                self.toasts.show_toast(message, Severity::Success);
            }
            Err(e) => {
                warn!(error = %e, "export failed");
                self.toasts.show_toast(e.to_string(), Severity::Error);
            }
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.sidebar.focused = focus == Focus::Sidebar;
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.sidebar.init()?;
        self.load_section(self.sidebar.active);
        info!(source = %self.source.describe(), "admin console ready");
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        let action = match self.focus {
            Focus::Sidebar => self.sidebar.handle_key_event(key)?,
            Focus::Table => self.table.handle_key_event(key)?,
        };
        Ok(action.or_else(|| self.handle_global_key_event(key)))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => self.toasts.tick(Instant::now()),
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem | Action::PrevItem => match self.focus {
                Focus::Sidebar => return self.sidebar.update(action),
                Focus::Table => return self.table.update(action),
            },
            Action::FirstItem | Action::LastItem => return self.table.update(action),
            Action::NextPage => {
                if self.pager.next(self.rows.len()) {
                    self.show_page();
                }
            }
            Action::PrevPage => {
                if self.pager.prev() {
                    self.show_page();
                }
            }
            Action::SwitchFocus => self.set_focus(self.focus.toggle()),
            Action::ActivateNav => return self.sidebar.update(action),
            Action::SelectSection(section) => {
                self.load_section(section);
                self.set_focus(Focus::Table);
            }

            // ─────────────────────────────────────────────────────────────────
            // Selection
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleRow => {
                if let Some(id) = self.table.cursor_id() {
                    self.selection.toggle_row(&mut self.table, id);
                }
            }
            Action::ToggleSelectAll => {
                // Clicking an indeterminate master checks it
                let checked = !self.table.master().is_checked();
                self.selection.toggle_select_all(&mut self.table, checked);
            }
            Action::ClearSelection => {
                self.selection.clear_selection(&mut self.table);
            }

            // ─────────────────────────────────────────────────────────────────
            // Batch Actions
            // ─────────────────────────────────────────────────────────────────
            Action::RequestBatch(batch) => self.request_batch(batch),
            Action::ApplyBatch(batch) => self.apply_batch(batch),
            Action::ExportSelection => self.export_selection(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.show_modal(Modal::Confirm(ConfirmModal::new(
                    "Quit?",
                    vec!["Are you sure you want to quit?".to_string()],
                    Action::ForceQuit,
                )));
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.show_modal(Modal::Help);
            }
            Action::CloseModal => self.modals.close_modal(),
            Action::ConfirmModal => {
                // The bound action decides whether the modal closes
                if let Some(Modal::Confirm(modal)) = self.modals.top() {
                    return Ok(Some(modal.on_confirm.clone()));
                }
            }
            Action::ModalFocusNext => {
                if let Some(Modal::Confirm(modal)) = self.modals.top_mut() {
                    modal.focus = modal.focus.toggle();
                }
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let source = self.source.describe();
        let ctx = ScreenContext {
            source: &source,
            toasts: &self.toasts,
        };
        draw_main_screen(frame, area, &mut self.sidebar, &mut self.table, &ctx)?;

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            match modal {
                Modal::Confirm(confirm) => draw_confirm_dialog(frame, area, &confirm),
                Modal::Help => self.help_dialog.draw(frame, area)?,
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::Confirm(confirm) => Ok(handle_confirm_key(confirm, key)),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    /// Keys that work regardless of which panel has focus
    fn handle_global_key_event(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchFocus),
            KeyCode::Esc if self.table.batch_count().is_some() => Some(Action::ClearSelection),
            KeyCode::Char('d') => Some(Action::RequestBatch(BatchAction::Delete)),
            KeyCode::Char('e') => Some(Action::RequestBatch(BatchAction::Enable)),
            KeyCode::Char('u') => Some(Action::RequestBatch(BatchAction::Disable)),
            KeyCode::Char('x') => Some(Action::ExportSelection),
            _ => None,
        }
    }
}
