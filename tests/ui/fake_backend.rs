//! In-memory events backend that records every call it receives.

use async_trait::async_trait;
use barboard::backend::{BackendError, Bar, Category, Event, EventPayload, EventStats, EventsBackend, StatsFilter};
use barboard::ui::core::BackgroundAction;
use ratatui::buffer::Buffer;
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

#[derive(Default)]
pub struct RecordingBackend {
    pub events: Vec<Event>,
    pub bars: Vec<Bar>,
    pub categories: Vec<Category>,
    pub stats: EventStats,
    /// Names of operations that fail with a network error
    failing: Mutex<HashSet<&'static str>>,
    /// Delay applied to `fetch_events`
    pub events_delay: Option<Duration>,
    /// Delay applied to `delete_event`, after the call is recorded
    pub delete_delay: Option<Duration>,
    completed_deletes: Mutex<Vec<i64>>,
    calls: Mutex<Vec<String>>,
    payloads: Mutex<Vec<EventPayload>>,
}

impl RecordingBackend {
    pub fn sample() -> Self {
        Self {
            events: vec![
                sample_event(1, "Trivia Night"),
                sample_event(2, "Karaoke"),
                sample_event(3, "Jazz Brunch"),
            ],
            bars: vec![
                Bar {
                    bar_id: 1,
                    name: "The Anchor".to_string(),
                },
                Bar {
                    bar_id: 2,
                    name: "Dive".to_string(),
                },
            ],
            categories: vec![
                Category {
                    category_id: 10,
                    name: "Trivia".to_string(),
                },
                Category {
                    category_id: 11,
                    name: "Music".to_string(),
                },
            ],
            stats: EventStats {
                average_cover_charge: 12.5,
                average_duration_minutes: 90.0,
                average_age_requirement: 21.0,
                average_event_time: "20:15".to_string(),
            },
            ..Default::default()
        }
    }

    pub fn with_events_delay(mut self, delay: Duration) -> Self {
        self.events_delay = Some(delay);
        self
    }

    pub fn with_delete_delay(mut self, delay: Duration) -> Self {
        self.delete_delay = Some(delay);
        self
    }

    pub fn failing(self, operation: &'static str) -> Self {
        self.start_failing(operation);
        self
    }

    /// Make an operation fail from now on, after earlier calls succeeded
    pub fn start_failing(&self, operation: &'static str) {
        self.failing.lock().unwrap().insert(operation);
    }

    /// Ids whose delete ran to completion
    pub fn completed_deletes(&self) -> Vec<i64> {
        self.completed_deletes.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|call| call.starts_with(prefix)).count()
    }

    pub fn payloads(&self) -> Vec<EventPayload> {
        self.payloads.lock().unwrap().clone()
    }

    fn record(&self, call: String, operation: &'static str) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(operation) {
            return Err(BackendError::Network(format!("{} refused", operation)));
        }
        Ok(())
    }
}

pub fn sample_event(event_id: i64, title: &str) -> Event {
    Event {
        event_id,
        bar_id: Some(1),
        category_id: Some(10),
        title: title.to_string(),
        description: Some(format!("{} description", title)),
        event_date: Some("2025-06-01".to_string()),
        start_time: Some("19:00:00".to_string()),
        end_time: Some("22:00:00".to_string()),
        cover_charge: Some(5.0),
        age_requirement: Some(21),
        name: Some("The Anchor".to_string()),
        ..Default::default()
    }
}

#[async_trait]
impl EventsBackend for RecordingBackend {
    fn backend_type(&self) -> &str {
        "recording"
    }

    async fn fetch_bars(&self) -> Result<Vec<Bar>, BackendError> {
        self.record("fetch_bars".to_string(), "fetch_bars")?;
        Ok(self.bars.clone())
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, BackendError> {
        self.record("fetch_categories".to_string(), "fetch_categories")?;
        Ok(self.categories.clone())
    }

    async fn fetch_events(&self) -> Result<Vec<Event>, BackendError> {
        if let Some(delay) = self.events_delay {
            tokio::time::sleep(delay).await;
        }
        self.record("fetch_events".to_string(), "fetch_events")?;
        Ok(self.events.clone())
    }

    async fn fetch_event(&self, event_id: i64) -> Result<Event, BackendError> {
        self.record(format!("fetch_event:{}", event_id), "fetch_event")?;
        self.events
            .iter()
            .find(|event| event.event_id == event_id)
            .cloned()
            .ok_or_else(|| BackendError::Status {
                status: 404,
                body: "Event not found".to_string(),
            })
    }

    async fn create_event(&self, payload: &EventPayload) -> Result<(), BackendError> {
        self.record("create_event".to_string(), "create_event")?;
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(())
    }

    async fn update_event(&self, event_id: i64, payload: &EventPayload) -> Result<(), BackendError> {
        self.record(format!("update_event:{}", event_id), "update_event")?;
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(())
    }

    async fn delete_event(&self, event_id: i64) -> Result<(), BackendError> {
        let outcome = self.record(format!("delete_event:{}", event_id), "delete_event");
        if let Some(delay) = self.delete_delay {
            tokio::time::sleep(delay).await;
        }
        outcome?;
        self.completed_deletes.lock().unwrap().push(event_id);
        Ok(())
    }

    async fn fetch_event_stats(&self, filter: &StatsFilter) -> Result<EventStats, BackendError> {
        self.record(format!("fetch_event_stats:{:?}", filter), "fetch_event_stats")?;
        Ok(self.stats.clone())
    }

    async fn fetch_filtered_events(&self, filter: &StatsFilter) -> Result<Vec<Event>, BackendError> {
        self.record(format!("fetch_filtered_events:{:?}", filter), "fetch_filtered_events")?;
        Ok(self.events.iter().take(2).cloned().collect())
    }
}

/// Wait for `count` background actions, failing the test after two seconds
pub async fn recv_actions(rx: &mut UnboundedReceiver<BackgroundAction>, count: usize) -> Vec<BackgroundAction> {
    let mut received = Vec::new();
    while received.len() < count {
        match tokio::time::timeout(Duration::from_secs(2), rx.recv()).await {
            Ok(Some(action)) => received.push(action),
            Ok(None) => break,
            Err(_) => panic!("timed out after {} of {} actions", received.len(), count),
        }
    }
    received
}

/// Flatten a rendered buffer into newline separated rows
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
