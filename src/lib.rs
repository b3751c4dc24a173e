//! Wallet - terminal-based personal income and expense ledger
//!
//! This library provides the core functionality of the wallet application:
//! dated income and expense records kept in a single comma-delimited file,
//! with balance totals, editing, deletion and filtered search.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (records, categories, filters, balances)
//! - `storage`: Flat-file record store
//! - `display`: Terminal formatting
//! - `cli`: One-shot commands and the interactive menu
//!
//! # Example
//!
//! ```rust,no_run
//! use wallet::models::{Category, Record, RecordFilter};
//! use wallet::storage::RecordStore;
//!
//! # fn main() -> wallet::error::WalletResult<()> {
//! let mut store = RecordStore::open("records.txt")?;
//! store.add(Record::new("2024-06-01", Category::Income, 5000.0, "USD", "Salary"))?;
//!
//! let balance = store.balance();
//! println!("{:.2}", balance.total());
//!
//! let salaries = store.search(&RecordFilter::new().category(Category::Income));
//! # let _ = salaries;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{WalletError, WalletResult};
pub use storage::RecordStore;
