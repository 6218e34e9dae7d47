use barboard::backend::StatsFilter;
use barboard::routes::Route;
use barboard::ui::core::actions::{Action, DialogType};

#[test]
fn test_action_equality() {
    assert_eq!(Action::Navigate(Route::EditEvent(4)), Action::Navigate(Route::EditEvent(4)));
    assert_ne!(Action::DeleteEvent(1), Action::DeleteEvent(2));
    assert_ne!(Action::ShowDialog(DialogType::Help), Action::ShowDialog(DialogType::Logs));
}

#[test]
fn test_fetch_statistics_carries_filter() {
    let filter = StatsFilter {
        category: "Trivia".to_string(),
        ..Default::default()
    };

    match Action::FetchStatistics(filter.clone()) {
        Action::FetchStatistics(carried) => assert_eq!(carried, filter),
        other => panic!("unexpected action {:?}", other),
    }
}
