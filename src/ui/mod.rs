mod activity_log;
mod layout;
mod menu_panel;
pub mod spinner;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());

    menu_panel::render(frame, app_layout.menu_panel, state);
    activity_log::render(frame, app_layout.activity_log, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
