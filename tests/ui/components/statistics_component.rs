use crate::fake_backend::{buffer_text, sample_event, RecordingBackend};
use barboard::backend::StatsFilter;
use barboard::forms::FilterField;
use barboard::routes::Route;
use barboard::ui::components::statistics_component::statistics_lines;
use barboard::ui::components::StatisticsComponent;
use barboard::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn with_reference_data() -> StatisticsComponent {
    let sample = RecordingBackend::sample();
    let mut statistics = StatisticsComponent::default();
    statistics.update(Action::ReferenceDataLoaded {
        bars: Some(sample.bars.clone()),
        categories: Some(sample.categories.clone()),
    });
    statistics
}

#[test]
fn test_statistics_lines_verbatim() {
    let stats = RecordingBackend::sample().stats;
    assert_eq!(
        statistics_lines(&stats),
        vec![
            "Average Cover Charge: $12.5",
            "Average Duration: 90 minutes",
            "Average Age Requirement: 21",
            "Average Event Start Time: 20:15",
        ]
    );
}

#[test]
fn test_enter_fetches_with_current_filters() {
    let mut statistics = with_reference_data();
    for c in "2025-01-01".chars() {
        statistics.handle_key_events(key(KeyCode::Char(c)));
    }

    // Category selector cycles names
    statistics.handle_key_events(key(KeyCode::Tab));
    statistics.handle_key_events(key(KeyCode::Tab));
    statistics.handle_key_events(key(KeyCode::Right));

    // Bar selector cycles ids
    statistics.handle_key_events(key(KeyCode::Tab));
    statistics.handle_key_events(key(KeyCode::Left));

    let expected = StatsFilter {
        start_date: "2025-01-01".to_string(),
        end_date: String::new(),
        category: "Trivia".to_string(),
        bar_id: "2".to_string(),
    };
    assert_eq!(statistics.handle_key_events(key(KeyCode::Enter)), Action::FetchStatistics(expected));
}

#[test]
fn test_keyed_filter_update() {
    let mut statistics = StatisticsComponent::default();
    statistics.set_filter(FilterField::EndDate, "2025-12-31");
    assert_eq!(statistics.filter.end_date, "2025-12-31");
    assert_eq!(statistics.fetch(), Action::FetchStatistics(statistics.filter.clone()));
}

#[test]
fn test_results_replace_previous() {
    let mut statistics = with_reference_data();
    statistics.update(Action::StatisticsLoaded(RecordingBackend::sample().stats));
    statistics.update(Action::FilteredEventsLoaded(vec![sample_event(1, "Trivia Night")]));
    statistics.update(Action::FilteredEventsLoaded(vec![sample_event(2, "Karaoke")]));

    assert!(statistics.statistics.is_some());
    assert_eq!(statistics.events.len(), 1);
    assert_eq!(statistics.events[0].event_id, 2);
}

#[test]
fn test_escape_returns_to_list() {
    let mut statistics = StatisticsComponent::default();
    assert_eq!(
        statistics.handle_key_events(key(KeyCode::Esc)),
        Action::Navigate(Route::EventList)
    );
}

#[test]
fn test_render_only_after_statistics_arrive() {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

    let mut statistics = with_reference_data();
    terminal
        .draw(|f| {
            let area = f.area();
            statistics.render(f, area);
        })
        .unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Event Statistics"));
    assert!(!text.contains("Average Cover Charge"));

    statistics.update(Action::StatisticsLoaded(RecordingBackend::sample().stats));
    statistics.update(Action::FilteredEventsLoaded(vec![sample_event(1, "Trivia Night")]));
    terminal
        .draw(|f| {
            let area = f.area();
            statistics.render(f, area);
        })
        .unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Average Cover Charge: $12.5"));
    assert!(text.contains("Average Event Start Time: 20:15"));
    assert!(text.contains("Trivia Night"));
}
