use crate::fake_backend::sample_event;
use barboard::backend::Event;
use barboard::config::DisplayConfig;
use barboard::ui::components::event_card::{card_lines, card_text};
use chrono::NaiveDate;
use ratatui::style::Modifier;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 30).unwrap()
}

#[test]
fn test_card_rows_in_order() {
    let event = sample_event(1, "Trivia Night");
    let rows = card_text(&event, &DisplayConfig::default(), today());

    assert_eq!(
        rows,
        vec![
            "Trivia Night",
            "The Anchor",
            "Trivia Night description",
            "21+",
            "Cover Charge: $5",
            "2025-06-01",
            "19:00:00 - 22:00:00",
        ]
    );
}

#[test]
fn test_values_are_verbatim_and_missing_values_empty() {
    let event = Event {
        event_id: 4,
        title: "Mystery".to_string(),
        cover_charge: Some(7.25),
        start_time: Some("9pm".to_string()),
        ..Default::default()
    };
    let rows = card_text(&event, &DisplayConfig::default(), today());

    assert_eq!(rows[0], "Mystery");
    // No bar name row, and the description row is empty
    assert_eq!(rows[1], "");
    assert_eq!(rows[2], "+");
    assert_eq!(rows[3], "Cover Charge: $7.25");
    assert_eq!(rows[4], "");
    assert_eq!(rows[5], "9pm - ");
}

#[test]
fn test_display_options() {
    let event = Event {
        status: Some("scheduled".to_string()),
        ..sample_event(2, "Karaoke")
    };
    let display = DisplayConfig {
        show_descriptions: false,
        show_status: true,
        show_relative_dates: true,
    };
    let rows = card_text(&event, &display, today());

    assert!(!rows.iter().any(|row| row.contains("description")));
    assert!(rows.contains(&"2025-06-01 (next Sunday)".to_string()));
    assert_eq!(rows.last().map(String::as_str), Some("Status: scheduled"));
}

#[test]
fn test_title_line_is_bold() {
    let event = sample_event(1, "Trivia Night");
    let lines = card_lines(&event, &DisplayConfig::default(), today(), true);

    let title_style = lines[0].spans[0].style;
    assert!(title_style.add_modifier.contains(Modifier::BOLD));
    assert_eq!(lines.len(), 7);
}
