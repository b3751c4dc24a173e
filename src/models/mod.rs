//! Core data models for the wallet ledger
//!
//! This module contains the data structures of the ledger domain: records,
//! their category, search filters and balance totals.

pub mod balance;
pub mod category;
pub mod filter;
pub mod record;

pub use balance::Balance;
pub use category::Category;
pub use filter::RecordFilter;
pub use record::{parse_amount, parse_date, Record, RecordUpdate, RecordValidationError};
