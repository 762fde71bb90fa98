pub mod dashboard;
pub mod widgets;

use crate::app::{App, Screen};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match &app.screen {
        Screen::Showcase(showcase) => dashboard::render_showcase(showcase, &app.status_message, f),
        Screen::Error(panel) => dashboard::render_error(panel, f),
    }
}
