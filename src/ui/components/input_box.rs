//! Bordered, labelled input box used by the form and filter panels

use crate::ui::components::event_card::CARD_ACCENT;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_input_box(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(CARD_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(value.to_string())
        .style(Style::default().fg(CARD_ACCENT))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()).border_style(border_style));

    f.render_widget(paragraph, area);
}
