//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub sidebar: Rect,
    pub table: Rect,
    pub batch_bar: Option<Rect>,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect, show_batch_bar: bool) -> MainLayout {
    // Main vertical layout: content + status line + help bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    // Horizontal split: sidebar and content
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(main_chunks[0]);

    // Content: table with the batch bar underneath when rows are selected
    let (table, batch_bar) = if show_batch_bar {
        let content_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(horizontal_chunks[1]);
        (content_chunks[0], Some(content_chunks[1]))
    } else {
        (horizontal_chunks[1], None)
    };

    MainLayout {
        sidebar: horizontal_chunks[0],
        table,
        batch_bar,
        status: main_chunks[1],
        help: main_chunks[2],
    }
}

/// Area for the `index`-th toast stacked down from the top-right corner
pub fn toast_area(area: Rect, index: u16, width: u16) -> Option<Rect> {
    const TOAST_HEIGHT: u16 = 3;
    let width = width.min(area.width);
    let y = index
        .checked_mul(TOAST_HEIGHT)?
        .checked_add(area.y.saturating_add(1))?;
    if y.checked_add(TOAST_HEIGHT)? > area.y.saturating_add(area.height) {
        return None;
    }
    let x = area.x + area.width.saturating_sub(width.saturating_add(1));
    Some(Rect::new(x, y, width, TOAST_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_popup(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_popup(area, 40, 40), Rect::new(0, 0, 20, 10));
    }

    #[test]
    fn test_batch_bar_only_when_requested() {
        let area = Rect::new(0, 0, 100, 30);
        assert!(calculate_main_layout(area, false).batch_bar.is_none());

        let layout = calculate_main_layout(area, true);
        let bar = layout.batch_bar.unwrap();
        assert_eq!(bar.height, 3);
        assert_eq!(layout.table.height + bar.height, 28);
        assert_eq!(layout.sidebar.width, 24);
    }

    #[test]
    fn test_toast_area_stacks_and_stops_at_bottom() {
        let area = Rect::new(0, 0, 80, 10);
        assert_eq!(toast_area(area, 0, 30), Some(Rect::new(49, 1, 30, 3)));
        assert_eq!(toast_area(area, 1, 30), Some(Rect::new(49, 4, 30, 3)));
        assert_eq!(toast_area(area, 2, 30), Some(Rect::new(49, 7, 30, 3)));
        assert_eq!(toast_area(area, 3, 30), None);
    }

    #[test]
    fn test_toast_area_huge_index_does_not_overflow() {
        let area = Rect::new(0, 0, u16::MAX, u16::MAX);
        assert_eq!(toast_area(area, u16::MAX, 30), None);
        assert_eq!(toast_area(Rect::new(0, 10, 80, 10), 20_000, 30), None);
    }
}
