use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub menu_panel: Rect,
    pub activity_log: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Horizontal: actions + menu | activity log
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(28),
            Constraint::Min(30),
        ])
        .split(main_chunks[0]);

    AppLayout {
        menu_panel: h_chunks[0],
        activity_log: h_chunks[1],
        status_bar: main_chunks[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_is_last_row() {
        let layout = compute_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.status_bar, Rect::new(0, 29, 100, 1));
        assert_eq!(layout.menu_panel.width, 28);
        assert_eq!(layout.activity_log.x, 29);
        assert_eq!(layout.activity_log.height, 29);
    }
}
