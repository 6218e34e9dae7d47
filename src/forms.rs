//! Form state for the event editor and the statistics filter panel.
//!
//! Both forms are plain records of strings updated through one keyed setter over
//! an explicit field enum. Values are only interpreted when a payload is built.

use chrono::{NaiveDate, NaiveTime};

use crate::backend::{Event, EventPayload, StatsFilter};
use crate::utils::datetime::{DATE_FORMAT, WIRE_TIME_FORMAT};

/// How a field's text is entered and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Time,
    /// Value picked from a reference list (bars or categories).
    Select,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill out this field: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {field}: '{value}'")]
    Invalid { field: &'static str, value: String },
}

/// Fields of the event form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    Title,
    BarId,
    Description,
    CoverCharge,
    AgeRequirement,
    CategoryId,
    EventDate,
    StartTime,
    EndTime,
}

impl EventField {
    pub const ALL: [EventField; 9] = [
        EventField::Title,
        EventField::BarId,
        EventField::Description,
        EventField::CoverCharge,
        EventField::AgeRequirement,
        EventField::CategoryId,
        EventField::EventDate,
        EventField::StartTime,
        EventField::EndTime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventField::Title => "Event Title",
            EventField::BarId => "Select Bar",
            EventField::Description => "Description",
            EventField::CoverCharge => "Cover Charge ($)",
            EventField::AgeRequirement => "Age Requirement",
            EventField::CategoryId => "Select Category",
            EventField::EventDate => "Event Date",
            EventField::StartTime => "Start Time",
            EventField::EndTime => "End Time",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            EventField::Title | EventField::Description => FieldKind::Text,
            EventField::CoverCharge | EventField::AgeRequirement => FieldKind::Number,
            EventField::BarId | EventField::CategoryId => FieldKind::Select,
            EventField::EventDate => FieldKind::Date,
            EventField::StartTime | EventField::EndTime => FieldKind::Time,
        }
    }
}

/// Editable state of the event form. Every value is kept as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFormData {
    pub title: String,
    pub bar_id: String,
    pub description: String,
    pub cover_charge: String,
    pub age_requirement: String,
    pub category_id: String,
    pub event_date: String,
    pub start_time: String,
    pub end_time: String,
}

impl EventFormData {
    pub fn get(&self, field: EventField) -> &str {
        match field {
            EventField::Title => &self.title,
            EventField::BarId => &self.bar_id,
            EventField::Description => &self.description,
            EventField::CoverCharge => &self.cover_charge,
            EventField::AgeRequirement => &self.age_requirement,
            EventField::CategoryId => &self.category_id,
            EventField::EventDate => &self.event_date,
            EventField::StartTime => &self.start_time,
            EventField::EndTime => &self.end_time,
        }
    }

    pub fn set(&mut self, field: EventField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EventField::Title => self.title = value,
            EventField::BarId => self.bar_id = value,
            EventField::Description => self.description = value,
            EventField::CoverCharge => self.cover_charge = value,
            EventField::AgeRequirement => self.age_requirement = value,
            EventField::CategoryId => self.category_id = value,
            EventField::EventDate => self.event_date = value,
            EventField::StartTime => self.start_time = value,
            EventField::EndTime => self.end_time = value,
        }
    }

    pub fn field_mut(&mut self, field: EventField) -> &mut String {
        match field {
            EventField::Title => &mut self.title,
            EventField::BarId => &mut self.bar_id,
            EventField::Description => &mut self.description,
            EventField::CoverCharge => &mut self.cover_charge,
            EventField::AgeRequirement => &mut self.age_requirement,
            EventField::CategoryId => &mut self.category_id,
            EventField::EventDate => &mut self.event_date,
            EventField::StartTime => &mut self.start_time,
            EventField::EndTime => &mut self.end_time,
        }
    }

    /// Build the request body, checking that every field is present and parses
    /// for its kind. Times are sent as `HH:MM:SS`.
    pub fn to_payload(&self) -> Result<EventPayload, FormError> {
        for field in EventField::ALL {
            if self.get(field).trim().is_empty() {
                return Err(FormError::Missing(field.label()));
            }
        }

        Ok(EventPayload {
            bar_id: parse_int(EventField::BarId, &self.bar_id)?,
            category_id: parse_int(EventField::CategoryId, &self.category_id)?,
            title: self.title.clone(),
            description: self.description.clone(),
            event_date: parse_date(EventField::EventDate, &self.event_date)?,
            start_time: parse_time(EventField::StartTime, &self.start_time)?,
            end_time: parse_time(EventField::EndTime, &self.end_time)?,
            cover_charge: parse_number(EventField::CoverCharge, &self.cover_charge)?,
            age_requirement: parse_int(EventField::AgeRequirement, &self.age_requirement)?,
        })
    }
}

/// The whole form is replaced by the event, field for field. Anything the
/// response lacks becomes empty.
impl From<&Event> for EventFormData {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            bar_id: event.bar_id.map(|id| id.to_string()).unwrap_or_default(),
            description: event.description.clone().unwrap_or_default(),
            cover_charge: event.cover_charge.map(|c| c.to_string()).unwrap_or_default(),
            age_requirement: event.age_requirement.map(|a| a.to_string()).unwrap_or_default(),
            category_id: event.category_id.map(|id| id.to_string()).unwrap_or_default(),
            event_date: event.event_date.clone().unwrap_or_default(),
            start_time: event.start_time.clone().unwrap_or_default(),
            end_time: event.end_time.clone().unwrap_or_default(),
        }
    }
}

fn invalid(field: EventField, value: &str) -> FormError {
    FormError::Invalid {
        field: field.label(),
        value: value.to_string(),
    }
}

fn parse_int(field: EventField, value: &str) -> Result<i64, FormError> {
    value.trim().parse::<i64>().map_err(|_| invalid(field, value))
}

fn parse_number(field: EventField, value: &str) -> Result<f64, FormError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| invalid(field, value))
}

fn parse_date(field: EventField, value: &str) -> Result<String, FormError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|_| invalid(field, value))
}

fn parse_time(field: EventField, value: &str) -> Result<String, FormError> {
    let value_trimmed = value.trim();
    NaiveTime::parse_from_str(value_trimmed, WIRE_TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value_trimmed, "%H:%M"))
        .map(|t| t.format(WIRE_TIME_FORMAT).to_string())
        .map_err(|_| invalid(field, value))
}

/// Fields of the statistics filter panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    StartDate,
    EndDate,
    Category,
    BarId,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::StartDate,
        FilterField::EndDate,
        FilterField::Category,
        FilterField::BarId,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::StartDate => "Start Date",
            FilterField::EndDate => "End Date",
            FilterField::Category => "Event Category",
            FilterField::BarId => "Bar Name",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FilterField::StartDate | FilterField::EndDate => FieldKind::Date,
            FilterField::Category | FilterField::BarId => FieldKind::Select,
        }
    }
}

impl StatsFilter {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::StartDate => &self.start_date,
            FilterField::EndDate => &self.end_date,
            FilterField::Category => &self.category,
            FilterField::BarId => &self.bar_id,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn field_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::StartDate => &mut self.start_date,
            FilterField::EndDate => &mut self.end_date,
            FilterField::Category => &mut self.category,
            FilterField::BarId => &mut self.bar_id,
        }
    }
}

/// Step through `"" + options` from `current`, wrapping at both ends.
///
/// Returns the newly selected option value, or an empty string for "none".
pub fn cycle_option(options: &[String], current: &str, forward: bool) -> String {
    if options.is_empty() {
        return String::new();
    }

    // Slot 0 is the empty placeholder, options follow from slot 1
    let slots = options.len() + 1;
    let position = options.iter().position(|o| o == current).map(|i| i + 1).unwrap_or(0);
    let next = if forward {
        (position + 1) % slots
    } else {
        (position + slots - 1) % slots
    };

    if next == 0 {
        String::new()
    } else {
        options[next - 1].clone()
    }
}
