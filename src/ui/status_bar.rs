use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = Line::from(status_spans(state, area.width as usize));
    frame.render_widget(Paragraph::new(line), area);
}

fn status_spans(state: &AppState, width: usize) -> Vec<Span<'_>> {
    let mut parts: Vec<Span> = Vec::new();

    if state.busy.is_busy() {
        parts.push(Span::styled(format!(" {} ", state.spinner.frame()), Theme::spinner()));
        let running = state
            .in_flight
            .map(|k| k.description())
            .unwrap_or("Working");
        parts.push(Span::styled(format!("{}... ", running), Theme::status_bar()));
    } else {
        parts.push(Span::styled(" idle ", Theme::status_bar()));
    }

    if let Some(result) = &state.last_result {
        parts.push(Span::styled(format!("| result: {} ", result), Theme::status_bar()));
    }

    if let Some(error) = &state.last_error {
        parts.push(Span::styled(format!("| error: {} ", error), Theme::status_error()));
    }

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    parts.push(Span::styled(
        " ".repeat(width.saturating_sub(used)),
        Theme::status_bar(),
    ));
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::event::ActionKind;
    use crate::config::AppConfig;
    use crate::guard::BusyState;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_idle_status() {
        let state = AppState::new(AppConfig::default());
        let line = text(&status_spans(&state, 40));
        assert!(line.starts_with(" idle "));
        assert_eq!(line.chars().count(), 40);
    }

    #[test]
    fn test_busy_status_shows_spinner() {
        let mut state = AppState::new(AppConfig::default());
        state.begin(ActionKind::PlaceOrder);
        state.set_busy(BusyState::Busy);
        state.last_error = Some("boom".into());
        let line = text(&status_spans(&state, 80));
        assert!(line.starts_with(" ⠋ Place order... "));
        assert!(line.contains("| error: boom"));
    }
}
