use crate::fake_backend::{buffer_text, sample_event, RecordingBackend};
use barboard::forms::EventField;
use barboard::routes::Route;
use barboard::ui::components::EventFormComponent;
use barboard::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(form: &mut EventFormComponent, text: &str) {
    for c in text.chars() {
        form.handle_key_events(key(KeyCode::Char(c)));
    }
}

fn reference_loaded(event_id: Option<i64>) -> EventFormComponent {
    let sample = RecordingBackend::sample();
    let mut form = EventFormComponent::new(event_id);
    form.update(Action::FormDataLoaded {
        bars: Some(sample.bars.clone()),
        categories: Some(sample.categories.clone()),
        event: None,
    });
    form
}

#[test]
fn test_typing_goes_to_focused_field() {
    let mut form = EventFormComponent::new(None);
    assert!(form.captures_text());

    type_text(&mut form, "Quiz");
    form.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(form.data.title, "Qui");

    // Bar is a selector and does not take text
    form.handle_key_events(key(KeyCode::Tab));
    assert_eq!(form.focused_field(), EventField::BarId);
    assert!(!form.captures_text());
    type_text(&mut form, "x");
    assert_eq!(form.data.bar_id, "");
}

#[test]
fn test_selectors_cycle_reference_ids() {
    let mut form = reference_loaded(None);
    form.handle_key_events(key(KeyCode::Tab));

    form.handle_key_events(key(KeyCode::Right));
    assert_eq!(form.data.bar_id, "1");
    form.handle_key_events(key(KeyCode::Right));
    assert_eq!(form.data.bar_id, "2");
    form.handle_key_events(key(KeyCode::Right));
    assert_eq!(form.data.bar_id, "");
    form.handle_key_events(key(KeyCode::Left));
    assert_eq!(form.data.bar_id, "2");
}

#[test]
fn test_submit_blocked_until_complete() {
    let mut form = reference_loaded(None);
    type_text(&mut form, "Quiz");

    assert_eq!(form.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert_eq!(
        form.validation_message.as_deref(),
        Some("Please fill out this field: Select Bar")
    );
}

#[test]
fn test_submit_create_builds_payload() {
    let mut form = reference_loaded(None);
    form.set_field(EventField::Title, "Quiz");
    form.set_field(EventField::BarId, "2");
    form.set_field(EventField::Description, "Teams of four");
    form.set_field(EventField::CoverCharge, "3");
    form.set_field(EventField::AgeRequirement, "18");
    form.set_field(EventField::CategoryId, "10");
    form.set_field(EventField::EventDate, "2025-09-12");
    form.set_field(EventField::StartTime, "19:30");
    form.set_field(EventField::EndTime, "21:30");

    match form.handle_key_events(key(KeyCode::Enter)) {
        Action::SubmitEvent { event_id, payload } => {
            assert_eq!(event_id, None);
            assert_eq!(payload.bar_id, 2);
            assert_eq!(payload.cover_charge, 3.0);
            assert_eq!(payload.start_time, "19:30:00");
        }
        other => panic!("unexpected action {:?}", other),
    }
    assert!(form.validation_message.is_none());
}

#[test]
fn test_loaded_event_overwrites_form() {
    let mut form = EventFormComponent::new(Some(1));
    form.set_field(EventField::Description, "typed before the load finished");

    let mut event = sample_event(1, "Trivia Night");
    event.category_id = None;
    form.update(Action::FormDataLoaded {
        bars: None,
        categories: None,
        event: Some(event),
    });

    assert_eq!(form.data.title, "Trivia Night");
    assert_eq!(form.data.description, "Trivia Night description");
    assert_eq!(form.data.category_id, "");
    assert_eq!(form.data.start_time, "19:00:00");
}

#[test]
fn test_failed_slices_leave_state_alone() {
    let mut form = reference_loaded(Some(1));
    form.update(Action::FormDataLoaded {
        bars: None,
        categories: None,
        event: None,
    });

    assert_eq!(form.bars.len(), 2);
    assert_eq!(form.categories.len(), 2);
}

#[test]
fn test_edit_submit_targets_route_id() {
    let mut form = reference_loaded(Some(1));
    form.update(Action::FormDataLoaded {
        bars: None,
        categories: None,
        event: Some(sample_event(1, "Trivia Night")),
    });

    match form.submit() {
        Action::SubmitEvent { event_id, payload } => {
            assert_eq!(event_id, Some(1));
            assert_eq!(payload.title, "Trivia Night");
        }
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn test_escape_returns_to_list() {
    let mut form = EventFormComponent::new(None);
    assert_eq!(form.handle_key_events(key(KeyCode::Esc)), Action::Navigate(Route::EventList));
}

#[test]
fn test_render_titles_and_names() {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

    let mut form = reference_loaded(Some(1));
    form.set_field(EventField::BarId, "2");
    terminal
        .draw(|f| {
            let area = f.area();
            form.render(f, area);
        })
        .unwrap();
    let text = buffer_text(terminal.backend().buffer());

    assert!(text.contains("Edit Event"));
    assert!(text.contains("Update Event"));
    // Selected bars show by name
    assert!(text.contains("Dive"));

    let mut create = EventFormComponent::new(None);
    terminal
        .draw(|f| {
            let area = f.area();
            create.render(f, area);
        })
        .unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Create Event"));
    assert!(text.contains("Select a bar"));
}
