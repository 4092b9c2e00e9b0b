use crate::app::event::ActionKind;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Pizza shop ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(if state.busy.is_busy() {
            Theme::border_busy()
        } else {
            Theme::border()
        });

    let mut items: Vec<ListItem> = ActionKind::ALL
        .iter()
        .map(|kind| {
            let style = if state.in_flight.is_some() {
                Theme::dimmed()
            } else {
                Theme::info_line()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", kind.key()), Theme::key_hint()),
                Span::styled(kind.description(), style),
            ]))
        })
        .collect();
    items.push(ListItem::new(Line::from(vec![
        Span::styled(" q ", Theme::key_hint()),
        Span::styled("Quit", Theme::info_line()),
    ])));
    items.push(ListItem::new(""));

    if state.menu.is_empty() {
        items.push(ListItem::new(Span::styled(" No menu loaded", Theme::dimmed())));
    } else {
        for pizza in &state.menu {
            items.push(ListItem::new(Span::styled(
                format!(" • {}", pizza),
                Theme::success_line(),
            )));
        }
    }

    frame.render_widget(List::new(items).block(block), area);
}
