//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod record;

pub use record::{format_balance, format_record_details, format_record_register, format_record_row};
