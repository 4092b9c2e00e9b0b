use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_busy() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn info_line() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn success_line() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn error_line() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn spinner() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Color::LightRed).bg(Color::DarkGray)
    }
}
