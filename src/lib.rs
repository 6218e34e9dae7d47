//! barboard - A Terminal User Interface (TUI) for bar events
//!
//! This library provides a terminal client for a bar-events REST service:
//! browsing, creating, editing and deleting events, and querying aggregate
//! event statistics with filters. The interface is built with Ratatui and
//! talks to the service over HTTP.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`backend`] - Events service client and data structures
//! * [`config`] - Application configuration management
//! * [`forms`] - Form state and payload validation
//! * [`routes`] - Application routes and their parsing
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Events service abstraction and its HTTP implementation
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Form data for the event editor and the statistics filters
pub mod forms;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Routes the application can navigate to
pub mod routes;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;
