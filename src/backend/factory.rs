//! Backend factory for creating backend instances from configuration.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use super::{http::HttpBackend, EventsBackend};
use crate::config::ApiConfig;

/// Create the events backend described by the `[api]` configuration section.
///
/// # Errors
/// Returns error if:
/// - The base URL does not parse
/// - The HTTP client cannot be built
pub fn create_backend(api: &ApiConfig) -> Result<Arc<dyn EventsBackend>> {
    reqwest::Url::parse(&api.base_url).map_err(|e| anyhow!("Invalid api.base_url '{}': {}", api.base_url, e))?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(api.timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    log::info!("Using events service at {}", api.base_url);
    Ok(Arc::new(HttpBackend::with_client(http, api.base_url.clone())))
}
