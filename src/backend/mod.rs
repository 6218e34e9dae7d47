//! Backend abstraction layer for the events service.
//!
//! This module defines the interface the UI uses to reach the events REST service,
//! along with the wire data types and error handling.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod factory;
pub mod http;

pub use factory::create_backend;
pub use http::HttpBackend;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// A scheduled happening at a bar.
///
/// Every field except the identifier may be missing or null in service responses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub event_id: i64,
    pub bar_id: Option<i64>,
    pub category_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub event_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub cover_charge: Option<f64>,
    pub age_requirement: Option<i64>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    /// Bar display name, only present when the service joins it in.
    pub name: Option<String>,
}

/// A venue that events belong to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub bar_id: i64,
    pub name: String,
}

/// A classification label for events.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: i64,
    pub name: String,
}

/// Aggregates computed by the service over a filtered event set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventStats {
    pub average_cover_charge: f64,
    pub average_duration_minutes: f64,
    pub average_age_requirement: f64,
    /// Average start time as `HH:MM`.
    pub average_event_time: String,
}

/// Body sent when creating or updating an event. Never carries an identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    pub bar_id: i64,
    pub category_id: i64,
    pub title: String,
    pub description: String,
    pub event_date: String,
    pub start_time: String,
    pub end_time: String,
    pub cover_charge: f64,
    pub age_requirement: i64,
}

/// Filter set for the statistics endpoints.
///
/// All four parameters are always sent, empty when unset; the service ANDs them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsFilter {
    pub start_date: String,
    pub end_date: String,
    /// Category name, not id.
    pub category: String,
    pub bar_id: String,
}

/// Backend trait implemented by every events service client.
#[async_trait]
pub trait EventsBackend: Send + Sync {
    /// Returns the backend type identifier (e.g., "http").
    fn backend_type(&self) -> &str;

    // Reference data
    async fn fetch_bars(&self) -> Result<Vec<Bar>, BackendError>;
    async fn fetch_categories(&self) -> Result<Vec<Category>, BackendError>;

    // Event CRUD
    async fn fetch_events(&self) -> Result<Vec<Event>, BackendError>;
    async fn fetch_event(&self, event_id: i64) -> Result<Event, BackendError>;
    async fn create_event(&self, payload: &EventPayload) -> Result<(), BackendError>;
    async fn update_event(&self, event_id: i64, payload: &EventPayload) -> Result<(), BackendError>;
    async fn delete_event(&self, event_id: i64) -> Result<(), BackendError>;

    // Statistics
    async fn fetch_event_stats(&self, filter: &StatsFilter) -> Result<EventStats, BackendError>;
    async fn fetch_filtered_events(&self, filter: &StatsFilter) -> Result<Vec<Event>, BackendError>;
}
