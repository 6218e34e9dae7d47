//! Utility modules for barboard.
//!
//! - [`datetime`] - Wire formats for dates and times, and relative date hints

pub mod datetime;
