//! Layout calculations for the TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main application layout: tab bar, content, status bar
pub struct AppLayout {
    pub tabs: Rect,
    pub main: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(5),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: chunks[0],
            main: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Layout of a paginated list: optional sub-tabs, filter line, table, page bar
pub struct ListLayout {
    pub subtabs: Rect,
    pub filter: Rect,
    pub table: Rect,
    pub pages: Rect,
}

impl ListLayout {
    pub fn new(area: Rect, with_subtabs: bool) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(if with_subtabs { 1 } else { 0 }),
                Constraint::Length(1), // Filter
                Constraint::Min(3),    // Table
                Constraint::Length(1), // Page bar
            ])
            .split(area);

        Self {
            subtabs: chunks[0],
            filter: chunks[1],
            table: chunks[2],
            pages: chunks[3],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_rows() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.tabs.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.main.height, 20);
    }

    #[test]
    fn test_fixed_rect_is_clamped() {
        let area = centered_rect_fixed(60, 12, Rect::new(0, 0, 40, 10));
        assert_eq!(area, Rect::new(0, 0, 40, 10));

        let area = centered_rect_fixed(20, 4, Rect::new(0, 0, 40, 10));
        assert_eq!(area, Rect::new(10, 3, 20, 4));
    }
}
