//! Keyboard shortcut reference, opened with `?`

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Clear, Paragraph},
    Frame,
};

const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j / ↓", "Next row / menu entry"),
            ("k / ↑", "Previous row / menu entry"),
            ("g / G", "First / last row on page"),
            ("n / →", "Next page"),
            ("p / ←", "Previous page"),
            ("Tab", "Switch between menu and table"),
            ("Enter", "Open section / fold menu group"),
        ],
    ),
    (
        "Selection",
        &[
            ("Space", "Toggle row checkbox"),
            ("a", "Toggle all rows on this page"),
            ("Esc", "Clear selection on every page"),
        ],
    ),
    (
        "Batch Actions",
        &[
            ("d", "Delete selected rows"),
            ("e", "Enable selected rows"),
            ("u", "Disable selected rows"),
            ("x", "Export selected rows to HTML"),
        ],
    ),
    (
        "Dialogs",
        &[
            ("y / n", "Confirm / cancel"),
            ("← → Tab", "Move between buttons"),
            ("?", "Show this help"),
            ("q", "Quit"),
        ],
    ),
];

#[derive(Default)]
pub struct HelpDialog {
    /// First visible line; clamped on draw
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                return Ok(Some(Action::CloseModal))
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_offset += 1,
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1)
            }
            KeyCode::PageDown => self.scroll_offset += 10,
            KeyCode::PageUp => self.scroll_offset = self.scroll_offset.saturating_sub(10),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = build_help_content();
        let popup = centered_popup(area, 56, (content.len() as u16 + 2).min(area.height));
        let visible = popup.height.saturating_sub(2) as usize;
        self.scroll_offset = self.scroll_offset.min(content.len().saturating_sub(visible));

        let more_below = self.scroll_offset + visible < content.len();
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Keyboard Shortcuts ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        if more_below {
            block = block.title(
                Title::from(" j ↓ more ")
                    .position(ratatui::widgets::block::Position::Bottom)
                    .alignment(Alignment::Right),
            );
        }

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(content)
                .block(block)
                .scroll((self.scroll_offset as u16, 0)),
            popup,
        );
        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (title, keys) in SHORTCUTS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {}", title), heading)));
        for (key, description) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:12}", key), key_style),
                Span::raw(*description),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn press(dialog: &mut HelpDialog, code: KeyCode) -> Option<Action> {
        dialog
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_close_keys() {
        let mut dialog = HelpDialog::default();
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('?')] {
            assert_eq!(press(&mut dialog, code), Some(Action::CloseModal));
        }
    }

    #[test]
    fn test_scroll_does_not_underflow() {
        let mut dialog = HelpDialog::default();
        press(&mut dialog, KeyCode::Up);
        assert_eq!(dialog.scroll_offset, 0);
        press(&mut dialog, KeyCode::Down);
        assert_eq!(dialog.scroll_offset, 1);
    }

    #[test]
    fn test_draw_clamps_scroll() {
        let mut dialog = HelpDialog {
            scroll_offset: 500,
        };
        let mut terminal = Terminal::new(TestBackend::new(80, 50)).unwrap();
        terminal
            .draw(|frame| dialog.draw(frame, frame.area()).unwrap())
            .unwrap();
        // Everything fits in 50 rows, so there is nothing to scroll
        assert_eq!(dialog.scroll_offset, 0);
    }

    #[test]
    fn test_help_lists_batch_keys() {
        let text: String = build_help_content()
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Export selected rows to HTML"));
        assert!(text.contains("Clear selection on every page"));
    }
}
