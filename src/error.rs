//! Custom error types for the wallet ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for wallet operations
#[derive(Error, Debug)]
pub enum WalletError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File and terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for record fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// Category outside of income/expense
    #[error("Invalid category: '{0}' (expected 'income' or 'expense')")]
    InvalidCategory(String),

    /// Positional index outside of the record sequence
    #[error("Invalid index: {index} (store holds {len} records)")]
    InvalidIndex { index: i64, len: usize },

    /// Failure writing the backing file
    #[error("Storage error: {0}")]
    Storage(String),
}

impl WalletError {
    /// Create an "invalid index" error from a position in the store
    pub fn invalid_index(index: usize, len: usize) -> Self {
        Self::InvalidIndex {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len,
        }
    }

    /// Check if this is an "invalid index" error
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidCategory(_))
    }

    /// Errors that should end an interactive session
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Io(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;
