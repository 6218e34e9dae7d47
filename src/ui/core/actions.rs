use crate::backend::{Bar, Category, Event, EventPayload, EventStats, StatsFilter};
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Navigate(Route),
    NextEvent,
    PreviousEvent,

    // Event operations
    ReloadEvents,
    DeleteEvent(i64),
    SubmitEvent {
        event_id: Option<i64>,
        payload: EventPayload,
    },
    FetchStatistics(StatsFilter),

    // Background results
    EventsLoaded(Vec<Event>),
    EventDeleted(i64),
    EventSaved,
    /// Joined result of the form's mount fetches. `None` slices failed and
    /// leave the form's current state alone.
    FormDataLoaded {
        bars: Option<Vec<Bar>>,
        categories: Option<Vec<Category>>,
        event: Option<Event>,
    },
    ReferenceDataLoaded {
        bars: Option<Vec<Bar>>,
        categories: Option<Vec<Category>>,
    },
    StatisticsLoaded(EventStats),
    FilteredEventsLoaded(Vec<Event>),
    RequestFailed {
        context: String,
        error: String,
    },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
