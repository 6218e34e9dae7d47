//! Client-side routes.
//!
//! Four paths map onto three views. `/add-event` is accepted as an alias of
//! `/create` because the event list historically linked there.

use std::fmt;
use std::str::FromStr;

pub const ROUTE_EVENT_LIST: &str = "/";
pub const ROUTE_CREATE_EVENT: &str = "/create";
pub const ROUTE_ADD_EVENT_ALIAS: &str = "/add-event";
pub const ROUTE_EDIT_EVENT_PREFIX: &str = "/edit/";
pub const ROUTE_STATISTICS: &str = "/statistics";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    Unknown(String),

    #[error("Invalid event id in route: {0}")]
    InvalidEventId(String),
}

/// A navigable location in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    EventList,
    CreateEvent,
    EditEvent(i64),
    Statistics,
}

impl Route {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        // "/statistics/" and "/statistics" are the same location
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        match normalized {
            "" | ROUTE_EVENT_LIST => Ok(Route::EventList),
            ROUTE_CREATE_EVENT | ROUTE_ADD_EVENT_ALIAS => Ok(Route::CreateEvent),
            ROUTE_STATISTICS => Ok(Route::Statistics),
            other => match other.strip_prefix(ROUTE_EDIT_EVENT_PREFIX) {
                Some(id) => id
                    .parse::<i64>()
                    .map(Route::EditEvent)
                    .map_err(|_| RouteError::InvalidEventId(id.to_string())),
                None => Err(RouteError::Unknown(other.to_string())),
            },
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::EventList => ROUTE_EVENT_LIST.to_string(),
            Route::CreateEvent => ROUTE_CREATE_EVENT.to_string(),
            Route::EditEvent(id) => format!("{}{}", ROUTE_EDIT_EVENT_PREFIX, id),
            Route::Statistics => ROUTE_STATISTICS.to_string(),
        }
    }

    /// Identifier supplied by the route, if any.
    pub fn event_id(&self) -> Option<i64> {
        match self {
            Route::EditEvent(id) => Some(*id),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::EventList => "All Events",
            Route::CreateEvent => "Create Event",
            Route::EditEvent(_) => "Edit Event",
            Route::Statistics => "Event Statistics",
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
