//! Toast rendering, stacked in the top-right corner

use crate::components::layout::toast_area;
use crate::model::{Severity, Toast, ToastStack};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MIN_WIDTH: usize = 24;
const MAX_WIDTH: usize = 50;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
    }
}

/// Cut `text` to at most `max` display columns, adding an ellipsis if cut
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Box width for a toast: icon, padding and borders around the message
fn toast_width(toast: &Toast) -> usize {
    (toast.message.width() + 6).clamp(MIN_WIDTH, MAX_WIDTH)
}

pub fn draw_toasts(frame: &mut Frame, area: Rect, toasts: &ToastStack) {
    for (index, toast) in toasts.iter().enumerate() {
        let width = toast_width(toast);
        let Ok(index) = u16::try_from(index) else {
            break;
        };
        let Some(toast_rect) = toast_area(area, index, width as u16) else {
            break;
        };

        let color = severity_color(toast.severity);
        let (border_style, text_style) = if toast.is_leaving() {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )
        } else {
            (Style::default().fg(color), Style::default().fg(Color::White))
        };

        let message = truncate_to_width(&toast.message, (toast_rect.width as usize).saturating_sub(6));
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", toast.severity.icon()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(message, text_style),
        ]);

        frame.render_widget(Clear, toast_rect);
        frame.render_widget(
            Paragraph::new(line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            ),
            toast_rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    #[test]
    fn test_truncate_respects_wide_chars() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
        // Each CJK character is two columns wide
        assert_eq!(truncate_to_width("账号已删除成功", 6), "账号…");
    }

    #[test]
    fn test_draw_uses_severity_icon() {
        let mut toasts = ToastStack::default();
        let now = Instant::now();
        toasts.push_at("Saved".to_string(), Severity::from_tag("notice"), now);
        toasts.push_at("Failed".to_string(), Severity::Error, now);

        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_toasts(frame, frame.area(), &toasts))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("✔"));
        assert!(text.contains("Saved"));
        assert!(text.contains("✖"));
        assert!(text.contains("Failed"));
    }
}
