//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Service defaults
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const API_URL_ENV: &str = "BARBOARD_API_URL";
/// Default per-request timeout in seconds
pub const API_TIMEOUT_DEFAULT_SECS: u64 = 10;
/// Upper bound accepted for `api.timeout_secs`
pub const API_TIMEOUT_MAX_SECS: u64 = 300;

// Request failure contexts, logged verbatim
pub const LOG_ERROR_FETCH_EVENTS: &str = "Error fetching events";
pub const LOG_ERROR_FETCH_EVENT: &str = "Error fetching event";
pub const LOG_ERROR_FETCH_BARS: &str = "Error fetching bars";
pub const LOG_ERROR_FETCH_CATEGORIES: &str = "Error fetching categories";
pub const LOG_ERROR_DELETE_EVENT: &str = "Error deleting event";
pub const LOG_ERROR_SUBMIT_EVENT: &str = "Error submitting event";
pub const LOG_ERROR_FETCH_STATISTICS: &str = "Error fetching event statistics";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "❓ Help - Press 'Esc', '?' or 'q' to close";
pub const EMPTY_EVENT_LIST: &str = "No events yet. Press 'a' to add one.";
pub const EMPTY_SELECT: &str = "Select an option";

// Card text
pub const CARD_COVER_CHARGE_PREFIX: &str = "Cover Charge: $";

// UI Layout Constants
/// Height of one labelled input box on the form and filter panels
pub const INPUT_HEIGHT: u16 = 3;
