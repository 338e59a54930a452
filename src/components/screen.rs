//! Main screen composition
//!
//! Sidebar, page table, batch bar, status line and help bar, with toasts
//! drawn last so they float above everything except modals.

use crate::components::{calculate_main_layout, draw_toasts, PageTable, SidebarComponent};
use crate::component::Component;
use crate::model::ToastStack;
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Context needed for rendering the main screen
pub struct ScreenContext<'a> {
    pub source: &'a str,
    pub toasts: &'a ToastStack,
}

pub fn draw_main_screen(
    frame: &mut Frame,
    area: Rect,
    sidebar: &mut SidebarComponent,
    table: &mut PageTable,
    ctx: &ScreenContext,
) -> Result<()> {
    let layout = calculate_main_layout(area, table.batch_count().is_some());

    sidebar.draw(frame, layout.sidebar)?;
    table.draw(frame, layout.table)?;

    if let (Some(bar_area), Some(count)) = (layout.batch_bar, table.batch_count()) {
        render_batch_bar(frame, bar_area, count);
    }

    render_status_bar(frame, layout.status, sidebar, table, ctx);
    render_help_bar(frame, layout.help, table.batch_count().is_some());

    if !ctx.toasts.is_empty() {
        draw_toasts(frame, area, ctx.toasts);
    }
    Ok(())
}

fn key_span(key: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", key),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Selected count plus the bulk operations available on it
fn render_batch_bar(frame: &mut Frame, area: Rect, count: usize) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} selected ", count),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        key_span("d", Color::Red),
        Span::raw("Delete "),
        key_span("e", Color::Green),
        Span::raw("Enable "),
        key_span("u", Color::Yellow),
        Span::raw("Disable "),
        key_span("x", Color::Cyan),
        Span::raw("Export "),
        key_span("Esc", Color::DarkGray),
        Span::raw("Clear"),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Batch ")
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(paragraph, area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    sidebar: &SidebarComponent,
    table: &PageTable,
    ctx: &ScreenContext,
) {
    let info = table.info();
    let spans = vec![
        Span::styled(
            format!(" {} ", sidebar.active.name()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!(" page {}/{} ", info.page + 1, info.page_count.max(1)),
            Style::default().fg(Color::Black).bg(Color::Magenta),
        ),
        Span::raw(" "),
        Span::styled(
            format!("source: {}", ctx.source),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, has_selection: bool) {
    let mut spans = vec![
        key_span("q", Color::Yellow),
        Span::raw("Quit "),
        key_span("Tab", Color::Cyan),
        Span::raw("Menu "),
        key_span("Space", Color::Green),
        Span::raw("Select "),
        key_span("a", Color::Green),
        Span::raw("All "),
        key_span("n/p", Color::Cyan),
        Span::raw("Page "),
    ];
    if has_selection {
        spans.push(key_span("Esc", Color::Yellow));
        spans.push(Span::raw("Clear "));
    }
    spans.push(key_span("?", Color::White));
    spans.push(Span::raw("Help"));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::selection::SelectionSet;
    use crate::model::{Row, SelectionManager};
    use crate::components::PageInfo;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(table: &mut PageTable) -> String {
        let mut sidebar = SidebarComponent::default();
        let toasts = ToastStack::default();
        let ctx = ScreenContext {
            source: "demo data",
            toasts: &toasts,
        };
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_main_screen(frame, frame.area(), &mut sidebar, table, &ctx).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_batch_bar_follows_selection() {
        let rows: Vec<Row> = (1..=3)
            .map(|id| Row {
                id,
                cells: vec![format!("node-{}", id)],
                enabled: true,
            })
            .collect();
        let mut table = PageTable::new();
        table.load_page(
            "Nodes",
            &["Name".to_string()],
            &rows,
            &SelectionSet::new(),
            PageInfo {
                page: 0,
                page_count: 1,
                total_rows: 3,
            },
        );

        let text = screen_text(&mut table);
        assert!(!text.contains("selected"));
        assert!(text.contains("source: demo data"));

        let mut manager = SelectionManager::new();
        manager.toggle_select_all(&mut table, true);
        let text = screen_text(&mut table);
        assert!(text.contains("3 selected"));

        manager.clear_selection(&mut table);
        let text = screen_text(&mut table);
        assert!(!text.contains("selected"));
    }
}
