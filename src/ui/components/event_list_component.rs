use crate::backend::Event;
use crate::config::DisplayConfig;
use crate::constants::EMPTY_EVENT_LIST;
use crate::routes::Route;
use crate::ui::components::event_card::{card_lines, CARD_ACCENT};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// All events, one card per event, with edit and delete on the selected card.
pub struct EventListComponent {
    pub events: Vec<Event>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub display_config: DisplayConfig,
    /// Set once the first fetch has answered
    pub loaded: bool,
}

impl Default for EventListComponent {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}

impl EventListComponent {
    pub fn new(display_config: DisplayConfig) -> Self {
        Self {
            events: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            display_config,
            loaded: false,
        }
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.events.get(self.selected_index)
    }

    /// Replace the whole collection
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
        self.loaded = true;
        self.update_list_state();
    }

    /// Drop the card for `event_id`, keeping every other card in place
    pub fn remove_event(&mut self, event_id: i64) {
        self.events.retain(|event| event.event_id != event_id);
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.events.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.events.len() {
                self.selected_index = self.events.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn next(&mut self) {
        if !self.events.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.events.len();
            self.update_list_state();
        }
    }

    fn previous(&mut self) {
        if !self.events.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.events.len() - 1
            } else {
                self.selected_index - 1
            };
            self.update_list_state();
        }
    }
}

impl Component for EventListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextEvent,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousEvent,
            KeyCode::Char('e') | KeyCode::Enter => self
                .selected_event()
                .map(|event| Action::Navigate(Route::EditEvent(event.event_id)))
                .unwrap_or(Action::None),
            KeyCode::Char('d') | KeyCode::Delete => self
                .selected_event()
                .map(|event| Action::DeleteEvent(event.event_id))
                .unwrap_or(Action::None),
            KeyCode::Char('a') => Action::Navigate(Route::CreateEvent),
            KeyCode::Char('s') => Action::Navigate(Route::Statistics),
            KeyCode::Char('r') => Action::ReloadEvents,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextEvent => {
                self.next();
                Action::None
            }
            Action::PreviousEvent => {
                self.previous();
                Action::None
            }
            Action::EventsLoaded(events) => {
                self.set_events(events);
                Action::None
            }
            Action::EventDeleted(event_id) => {
                self.remove_event(event_id);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Route::EventList.title())
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(CARD_ACCENT));

        if self.events.is_empty() {
            let message = if self.loaded { EMPTY_EVENT_LIST } else { "" };
            let paragraph = Paragraph::new(message).alignment(Alignment::Center).block(block);
            f.render_widget(paragraph, rect);
            return;
        }

        let today = chrono::Local::now().date_naive();
        let items: Vec<ListItem> = self
            .events
            .iter()
            .enumerate()
            .map(|(index, event)| {
                let mut lines = card_lines(event, &self.display_config, today, index == self.selected_index);
                lines.push(Line::from(""));
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items).block(block);
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
