//! HTTP backend implementation over `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{Bar, BackendError, Category, Event, EventPayload, EventStats, EventsBackend, StatsFilter};

/// Events service client speaking JSON over HTTP.
pub struct HttpBackend {
    http: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a backend with a default `reqwest` client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a backend around an already configured client.
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, filter: Option<&StatsFilter>) -> Result<T, BackendError> {
        let mut request = self.http.get(self.url(path));
        if let Some(filter) = filter {
            request = request.query(filter);
        }

        let response = request.send().await.map_err(|e| BackendError::Network(e.to_string()))?;
        let body = Self::check(response).await?.text().await.map_err(|e| BackendError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| BackendError::Decode(e.to_string()))
    }

    // Non-2xx responses are failures; the body is kept for the diagnostic log.
    async fn check(response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl EventsBackend for HttpBackend {
    fn backend_type(&self) -> &str {
        "http"
    }

    async fn fetch_bars(&self) -> Result<Vec<Bar>, BackendError> {
        self.get_json("/bars", None).await
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, BackendError> {
        self.get_json("/categories", None).await
    }

    async fn fetch_events(&self) -> Result<Vec<Event>, BackendError> {
        self.get_json("/events", None).await
    }

    async fn fetch_event(&self, event_id: i64) -> Result<Event, BackendError> {
        self.get_json(&format!("/events/{}", event_id), None).await
    }

    async fn create_event(&self, payload: &EventPayload) -> Result<(), BackendError> {
        let response = self
            .http
            .post(self.url("/events"))
            .json(payload)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        Self::check(response).await.map(|_| ())
    }

    async fn update_event(&self, event_id: i64, payload: &EventPayload) -> Result<(), BackendError> {
        let response = self
            .http
            .put(self.url(&format!("/events/{}", event_id)))
            .json(payload)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        Self::check(response).await.map(|_| ())
    }

    async fn delete_event(&self, event_id: i64) -> Result<(), BackendError> {
        let response = self
            .http
            .delete(self.url(&format!("/events/{}", event_id)))
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        Self::check(response).await.map(|_| ())
    }

    async fn fetch_event_stats(&self, filter: &StatsFilter) -> Result<EventStats, BackendError> {
        self.get_json("/event-stats", Some(filter)).await
    }

    async fn fetch_filtered_events(&self, filter: &StatsFilter) -> Result<Vec<Event>, BackendError> {
        self.get_json("/filtered-events", Some(filter)).await
    }
}
