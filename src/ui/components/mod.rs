//! Reusable UI components

pub mod event_card;
pub mod input_box;
pub mod status_bar;

// Component architecture
pub mod dialog_component;
pub mod event_form_component;
pub mod event_list_component;
pub mod statistics_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use event_form_component::EventFormComponent;
pub use event_list_component::EventListComponent;
pub use statistics_component::StatisticsComponent;
pub use status_bar::StatusBar;
