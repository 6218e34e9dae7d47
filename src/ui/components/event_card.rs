//! Event card rendering shared by the list and statistics views.

use crate::backend::Event;
use crate::config::DisplayConfig;
use crate::constants::CARD_COVER_CHARGE_PREFIX;
use crate::utils::datetime::{format_time_range, relative_date};
use chrono::NaiveDate;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Gold-on-black accent used for card text
pub const CARD_ACCENT: Color = Color::Rgb(212, 175, 55);

/// Text rows of one card. Values are shown exactly as the service sent them.
pub fn card_text(event: &Event, display: &DisplayConfig, today: NaiveDate) -> Vec<String> {
    let mut rows = vec![event.title.clone()];

    if let Some(bar_name) = &event.name {
        rows.push(bar_name.clone());
    }

    if display.show_descriptions {
        rows.push(event.description.clone().unwrap_or_default());
    }

    rows.push(format!("{}+", optional(event.age_requirement)));
    rows.push(format!("{}{}", CARD_COVER_CHARGE_PREFIX, optional(event.cover_charge)));

    let date = event.event_date.clone().unwrap_or_default();
    let date_row = match (display.show_relative_dates, relative_date(&date, today)) {
        (true, Some(hint)) => format!("{} ({})", date, hint),
        _ => date,
    };
    rows.push(date_row);

    rows.push(format_time_range(event.start_time.as_deref(), event.end_time.as_deref()));

    if display.show_status {
        if let Some(status) = &event.status {
            rows.push(format!("Status: {}", status));
        }
    }

    rows
}

/// Styled lines of one card; the title row is bold
pub fn card_lines(event: &Event, display: &DisplayConfig, today: NaiveDate, selected: bool) -> Vec<Line<'static>> {
    let base = if selected {
        Style::default().fg(Color::Black).bg(CARD_ACCENT)
    } else {
        Style::default().fg(CARD_ACCENT)
    };

    card_text(event, display, today)
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let style = if index == 0 {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            };
            Line::from(Span::styled(row, style))
        })
        .collect()
}

// Missing values render as nothing, like an unset template slot
fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
