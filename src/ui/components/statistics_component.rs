//! Statistics view: filter panel, aggregate figures and the matching events.

use crate::backend::{Bar, Category, Event, EventStats, StatsFilter};
use crate::config::DisplayConfig;
use crate::constants::{EMPTY_SELECT, INPUT_HEIGHT};
use crate::forms::{cycle_option, FieldKind, FilterField};
use crate::routes::Route;
use crate::ui::components::event_card::{card_lines, CARD_ACCENT};
use crate::ui::components::input_box::render_input_box;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// The four rows of the statistics summary, values rendered verbatim
pub fn statistics_lines(stats: &EventStats) -> Vec<String> {
    vec![
        format!("Average Cover Charge: ${}", stats.average_cover_charge),
        format!("Average Duration: {} minutes", stats.average_duration_minutes),
        format!("Average Age Requirement: {}", stats.average_age_requirement),
        format!("Average Event Start Time: {}", stats.average_event_time),
    ]
}

pub struct StatisticsComponent {
    pub filter: StatsFilter,
    pub bars: Vec<Bar>,
    pub categories: Vec<Category>,
    pub statistics: Option<EventStats>,
    pub events: Vec<Event>,
    pub focus: usize,
    pub display_config: DisplayConfig,
}

impl Default for StatisticsComponent {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}

impl StatisticsComponent {
    pub fn new(display_config: DisplayConfig) -> Self {
        Self {
            filter: StatsFilter::default(),
            bars: Vec::new(),
            categories: Vec::new(),
            statistics: None,
            events: Vec::new(),
            focus: 0,
            display_config,
        }
    }

    pub fn focused_field(&self) -> FilterField {
        FilterField::ALL[self.focus]
    }

    /// Keyed update used by every filter input
    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.filter.set(field, value);
    }

    /// Request both statistics calls with the current filters
    pub fn fetch(&self) -> Action {
        Action::FetchStatistics(self.filter.clone())
    }

    fn select_options(&self, field: FilterField) -> Vec<String> {
        match field {
            // Categories filter by name, bars by id
            FilterField::Category => self.categories.iter().map(|category| category.name.clone()).collect(),
            FilterField::BarId => self.bars.iter().map(|bar| bar.bar_id.to_string()).collect(),
            _ => Vec::new(),
        }
    }

    fn cycle_select(&mut self, forward: bool) {
        let field = self.focused_field();
        let options = self.select_options(field);
        let next = cycle_option(&options, self.filter.get(field), forward);
        self.set_filter(field, next);
    }

    fn display_value(&self, field: FilterField) -> String {
        let value = self.filter.get(field);
        match field {
            FilterField::Category if value.is_empty() => EMPTY_SELECT.to_string(),
            FilterField::BarId if value.is_empty() => "Select a bar".to_string(),
            FilterField::BarId => self
                .bars
                .iter()
                .find(|bar| bar.bar_id.to_string() == value)
                .map(|bar| bar.name.clone())
                .unwrap_or_else(|| value.to_string()),
            _ => value.to_string(),
        }
    }

    fn render_filters(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
        for (index, field) in FilterField::ALL.iter().enumerate() {
            let focused = self.focus == index;
            let mut value = self.display_value(*field);
            if focused && field.kind() != FieldKind::Select {
                value.push('▏');
            }
            let title = if focused && field.kind() == FieldKind::Select {
                format!("{} ◀ ▶", field.label())
            } else {
                field.label().to_string()
            };
            render_input_box(f, columns[index], &title, &value, focused);
        }
    }

    fn render_results(&self, f: &mut Frame, area: Rect, stats: &EventStats) {
        let sections = Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).split(area);

        let mut lines = vec![Line::from(Span::styled(
            "Statistics",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        lines.extend(statistics_lines(stats).into_iter().map(Line::from));
        f.render_widget(Paragraph::new(lines), sections[0]);

        let today = chrono::Local::now().date_naive();
        let items: Vec<ListItem> = self
            .events
            .iter()
            .map(|event| {
                let mut lines = card_lines(event, &self.display_config, today, false);
                lines.push(Line::from(""));
                ListItem::new(lines)
            })
            .collect();
        f.render_widget(List::new(items), sections[1]);
    }
}

impl Component for StatisticsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let field = self.focused_field();
        match key.code {
            KeyCode::Esc => Action::Navigate(Route::EventList),
            KeyCode::Enter | KeyCode::F(5) => self.fetch(),
            KeyCode::Tab => {
                self.focus = (self.focus + 1) % FilterField::ALL.len();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = (self.focus + FilterField::ALL.len() - 1) % FilterField::ALL.len();
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
                self.filter.field_mut(field).pop();
                Action::None
            }
            KeyCode::Char(c) if field.kind() != FieldKind::Select => {
                self.filter.field_mut(field).push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ReferenceDataLoaded { bars, categories } => {
                if let Some(bars) = bars {
                    self.bars = bars;
                }
                if let Some(categories) = categories {
                    self.categories = categories;
                }
                Action::None
            }
            Action::StatisticsLoaded(stats) => {
                self.statistics = Some(stats);
                Action::None
            }
            Action::FilteredEventsLoaded(events) => {
                self.events = events;
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Route::Statistics.title())
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(CARD_ACCENT));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let rows = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        self.render_filters(f, rows[0]);

        let button = Paragraph::new("[ Enter: Fetch Statistics ]")
            .alignment(Alignment::Center)
            .style(Style::default().fg(CARD_ACCENT).add_modifier(Modifier::BOLD));
        f.render_widget(button, rows[1]);

        // Nothing below the filters until statistics have arrived
        if let Some(stats) = &self.statistics {
            self.render_results(f, rows[3], stats);
        }
    }

    fn captures_text(&self) -> bool {
        self.focused_field().kind() != FieldKind::Select
    }
}
