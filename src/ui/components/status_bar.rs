//! Status bar component

use crate::routes::Route;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Shortcut hints for the current route, or the oldest running request
    pub fn status_text(route: &Route, running: &[String]) -> String {
        if let Some(first) = running.first() {
            return format!("🔄 {}...", first);
        }

        let hints = match route {
            Route::EventList => "j/k: move • e: edit • d: delete • a: add • s: statistics • r: reload",
            Route::CreateEvent | Route::EditEvent(_) => "Tab: next field • ←/→: choose • Enter: save • Esc: back",
            Route::Statistics => "Tab: next filter • ←/→: choose • Enter: fetch • Esc: back",
        };
        format!("{} • ?: help • G: logs", hints)
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, route: &Route, running: &[String]) {
        let status_color = if running.is_empty() { Color::Gray } else { Color::Yellow };

        let status_bar = Paragraph::new(Self::status_text(route, running))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
