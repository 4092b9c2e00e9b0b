use crate::app::state::{AppState, LineKind};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Activity ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner_height = area.height.saturating_sub(2) as usize;
    let skip = state.activity.len().saturating_sub(inner_height);

    let lines: Vec<Line> = state
        .activity
        .iter()
        .skip(skip)
        .map(|l| {
            let style = match l.kind {
                LineKind::Info => Theme::info_line(),
                LineKind::Success => Theme::success_line(),
                LineKind::Error => Theme::error_line(),
            };
            Line::from(vec![
                Span::styled(format!("{} ", l.timestamp), Theme::timestamp()),
                Span::styled(l.text.as_str(), style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
