//! Generic confirmation dialog
//!
//! Header with title and close hint, free-form body, footer with Cancel and
//! Confirm. The dialog never runs the bound action itself; it emits
//! `ConfirmModal` and the app dispatches whatever the modal carries.

use crate::action::Action;
use crate::components::centered_popup;
use crate::model::{ConfirmModal, ModalButton};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Map a key press inside the dialog to an action
pub fn handle_confirm_key(modal: &ConfirmModal, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ConfirmModal),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
        KeyCode::Enter => match modal.focus {
            ModalButton::Confirm => Some(Action::ConfirmModal),
            ModalButton::Cancel => Some(Action::CloseModal),
        },
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            Some(Action::ModalFocusNext)
        }
        KeyCode::Char('h') | KeyCode::Char('l') => Some(Action::ModalFocusNext),
        _ => None,
    }
}

fn button(label: &str, focused: bool, color: Color) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Span::styled(format!("[ {} ]", label), style)
}

pub fn draw_confirm_dialog(frame: &mut Frame, area: Rect, modal: &ConfirmModal) {
    let width = 60.min(area.width.saturating_sub(4)).max(20);
    let height = (modal.body.len() as u16 + 6).min(area.height);
    let popup_area = centered_popup(area, width, height);

    frame.render_widget(Clear, popup_area);

    let mut content: Vec<Line> = vec![Line::from("")];
    content.extend(modal.body.iter().map(|line| {
        Line::from(Span::styled(
            line.clone(),
            Style::default().fg(Color::White),
        ))
    }));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        button("Cancel", modal.focus == ModalButton::Cancel, Color::Yellow),
        Span::raw("   "),
        button("Confirm", modal.focus == ModalButton::Confirm, Color::Green),
    ]));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(format!(" {} ", modal.title))
                .title(Title::from(" Esc ✕ ").alignment(Alignment::Right))
                .title_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn modal() -> ConfirmModal {
        ConfirmModal::new(
            "Delete rows",
            vec!["Delete 3 selected rows?".to_string()],
            Action::ForceQuit,
        )
    }

    #[test]
    fn test_enter_follows_focus() {
        let mut m = modal();
        assert_eq!(
            handle_confirm_key(&m, key(KeyCode::Enter)),
            Some(Action::ConfirmModal)
        );
        m.focus = ModalButton::Cancel;
        assert_eq!(
            handle_confirm_key(&m, key(KeyCode::Enter)),
            Some(Action::CloseModal)
        );
    }

    #[test]
    fn test_shortcut_keys() {
        let m = modal();
        assert_eq!(handle_confirm_key(&m, key(KeyCode::Char('y'))), Some(Action::ConfirmModal));
        assert_eq!(handle_confirm_key(&m, key(KeyCode::Esc)), Some(Action::CloseModal));
        assert_eq!(handle_confirm_key(&m, key(KeyCode::Tab)), Some(Action::ModalFocusNext));
        assert_eq!(handle_confirm_key(&m, key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_draw_renders_title_body_and_buttons() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_confirm_dialog(frame, frame.area(), &modal()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Delete rows"));
        assert!(text.contains("Delete 3 selected rows?"));
        assert!(text.contains("[ Cancel ]"));
        assert!(text.contains("[ Confirm ]"));
    }
}
