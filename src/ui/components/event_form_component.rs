//! Create/edit form for a single event.
//!
//! The same component serves both routes: without an identifier it creates,
//! with one it loads the event and updates it.

use crate::backend::{Bar, Category};
use crate::constants::{EMPTY_SELECT, INPUT_HEIGHT};
use crate::forms::{cycle_option, EventField, EventFormData, FieldKind};
use crate::routes::Route;
use crate::ui::components::event_card::CARD_ACCENT;
use crate::ui::components::input_box::render_input_box;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct EventFormComponent {
    /// Identifier from the route; `None` means create mode
    pub event_id: Option<i64>,
    pub data: EventFormData,
    pub bars: Vec<Bar>,
    pub categories: Vec<Category>,
    pub focus: usize,
    /// Why the last submit attempt was blocked
    pub validation_message: Option<String>,
}

impl EventFormComponent {
    pub fn new(event_id: Option<i64>) -> Self {
        Self {
            event_id,
            data: EventFormData::default(),
            bars: Vec::new(),
            categories: Vec::new(),
            focus: 0,
            validation_message: None,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.event_id.is_some()
    }

    pub fn focused_field(&self) -> EventField {
        EventField::ALL[self.focus]
    }

    /// Keyed update used by every input
    pub fn set_field(&mut self, field: EventField, value: impl Into<String>) {
        self.data.set(field, value);
    }

    /// Validate and build the submit action for the current values
    pub fn submit(&mut self) -> Action {
        match self.data.to_payload() {
            Ok(payload) => {
                self.validation_message = None;
                Action::SubmitEvent {
                    event_id: self.event_id,
                    payload,
                }
            }
            Err(e) => {
                self.validation_message = Some(e.to_string());
                Action::None
            }
        }
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % EventField::ALL.len();
    }

    fn focus_previous(&mut self) {
        self.focus = (self.focus + EventField::ALL.len() - 1) % EventField::ALL.len();
    }

    fn select_options(&self, field: EventField) -> Vec<String> {
        match field {
            EventField::BarId => self.bars.iter().map(|bar| bar.bar_id.to_string()).collect(),
            EventField::CategoryId => self
                .categories
                .iter()
                .map(|category| category.category_id.to_string())
                .collect(),
            _ => Vec::new(),
        }
    }

    fn cycle_select(&mut self, forward: bool) {
        let field = self.focused_field();
        let options = self.select_options(field);
        let next = cycle_option(&options, self.data.get(field), forward);
        self.set_field(field, next);
    }

    /// Text shown inside a field's box
    fn display_value(&self, field: EventField) -> String {
        let value = self.data.get(field);
        match field {
            EventField::BarId => {
                if value.is_empty() {
                    return "Select a bar".to_string();
                }
                self.bars
                    .iter()
                    .find(|bar| bar.bar_id.to_string() == value)
                    .map(|bar| bar.name.clone())
                    .unwrap_or_else(|| value.to_string())
            }
            EventField::CategoryId => {
                if value.is_empty() {
                    return "Select a category".to_string();
                }
                self.categories
                    .iter()
                    .find(|category| category.category_id.to_string() == value)
                    .map(|category| category.name.clone())
                    .unwrap_or_else(|| value.to_string())
            }
            _ => value.to_string(),
        }
    }

    fn render_field(&self, f: &mut Frame, area: Rect, field: EventField) {
        let focused = self.focused_field() == field;
        let mut value = self.display_value(field);
        if focused && field.kind() != FieldKind::Select {
            value.push('▏');
        }
        let title = match field.kind() {
            FieldKind::Select if focused => format!("{} ◀ ▶", field.label()),
            FieldKind::Date => format!("{} (YYYY-MM-DD)", field.label()),
            FieldKind::Time => format!("{} (HH:MM)", field.label()),
            _ => field.label().to_string(),
        };
        render_input_box(f, area, &title, &value, focused);
    }
}

impl Component for EventFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let field = self.focused_field();
        match key.code {
            KeyCode::Esc => Action::Navigate(Route::EventList),
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_previous();
                Action::None
            }
            KeyCode::Left if field.kind() == FieldKind::Select => {
                self.cycle_select(false);
                Action::None
            }
            KeyCode::Right | KeyCode::Char(' ') if field.kind() == FieldKind::Select => {
                self.cycle_select(true);
                Action::None
            }
            KeyCode::Backspace if field.kind() != FieldKind::Select => {
                self.data.field_mut(field).pop();
                Action::None
            }
            KeyCode::Char(c) if field.kind() != FieldKind::Select => {
                self.data.field_mut(field).push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::FormDataLoaded {
                bars,
                categories,
                event,
            } => {
                if let Some(bars) = bars {
                    self.bars = bars;
                }
                if let Some(categories) = categories {
                    self.categories = categories;
                }
                if let Some(event) = event {
                    self.data = EventFormData::from(&event);
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = self.event_id.map(Route::EditEvent).unwrap_or(Route::CreateEvent).title();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(CARD_ACCENT));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let rows = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT), // title
            Constraint::Length(INPUT_HEIGHT), // bar
            Constraint::Length(INPUT_HEIGHT), // description
            Constraint::Length(INPUT_HEIGHT), // cover charge | age requirement
            Constraint::Length(INPUT_HEIGHT), // category | date
            Constraint::Length(INPUT_HEIGHT), // start | end
            Constraint::Length(1),
            Constraint::Length(1), // submit hint
            Constraint::Length(1), // validation message
            Constraint::Min(0),
        ])
        .split(inner);

        self.render_field(f, rows[0], EventField::Title);
        self.render_field(f, rows[1], EventField::BarId);
        self.render_field(f, rows[2], EventField::Description);

        let pairs = [
            (rows[3], EventField::CoverCharge, EventField::AgeRequirement),
            (rows[4], EventField::CategoryId, EventField::EventDate),
            (rows[5], EventField::StartTime, EventField::EndTime),
        ];
        for (row, left, right) in pairs {
            let halves = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(row);
            self.render_field(f, halves[0], left);
            self.render_field(f, halves[1], right);
        }

        let button = if self.is_edit_mode() {
            "[ Enter: Update Event ]"
        } else {
            "[ Enter: Create Event ]"
        };
        let button = Paragraph::new(button)
            .alignment(Alignment::Center)
            .style(Style::default().fg(CARD_ACCENT).add_modifier(Modifier::BOLD));
        f.render_widget(button, rows[7]);

        if let Some(message) = &self.validation_message {
            let message = Paragraph::new(message.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow));
            f.render_widget(message, rows[8]);
        }

        // Hint for the empty placeholder in selectors
        if self.focused_field().kind() == FieldKind::Select && self.data.get(self.focused_field()).is_empty() {
            let hint = Paragraph::new(EMPTY_SELECT)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(hint, rows[6]);
        }
    }

    fn captures_text(&self) -> bool {
        self.focused_field().kind() != FieldKind::Select
    }
}
