//! Storage layer for the wallet ledger
//!
//! A single flat file holds every record. Writes replace the file atomically;
//! reads recover from malformed lines instead of failing.

pub mod file_io;
pub mod format;
pub mod records;

pub use file_io::{read_if_present, write_atomic};
pub use records::{LoadReport, RecordStore};
