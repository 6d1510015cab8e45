//! Utility functions and helpers
//!
//! This module contains atomic file replacement and date helpers.

pub mod atomic;
pub mod time;

pub use atomic::{atomic_write_with, cleanup_stale_temp};
pub use time::{month_year_key, parse_event_date};
