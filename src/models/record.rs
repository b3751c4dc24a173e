//! Record model
//!
//! A record is one dated income or expense entry. Records have no identity of
//! their own: the store addresses them by position.

use serde::Serialize;
use std::fmt;

use super::category::Category;
use crate::error::{WalletError, WalletResult};

/// Field delimiter of the on-disk format; it may not appear inside text fields
pub const FIELD_DELIMITER: char = ',';

/// A single financial record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Date as `YYYY-MM-DD` text
    pub date: String,

    /// Income or expense
    pub category: Category,

    /// Non-negative amount, stored at full precision
    pub amount: f64,

    /// Currency code (e.g. "USD"), may be empty
    pub currency: String,

    /// Free-form description, may be empty
    pub description: String,
}

impl Record {
    /// Create a new record
    pub fn new(
        date: impl Into<String>,
        category: Category,
        amount: f64,
        currency: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category,
            amount,
            currency: currency.into(),
            description: description.into(),
        }
    }

    /// Check if this record is income
    pub fn is_income(&self) -> bool {
        self.category == Category::Income
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if !self.amount.is_finite() {
            return Err(RecordValidationError::NonFiniteAmount);
        }
        if self.amount < 0.0 {
            return Err(RecordValidationError::NegativeAmount(self.amount));
        }

        for (field, value) in [
            ("date", &self.date),
            ("currency", &self.currency),
            ("description", &self.description),
        ] {
            if let Some(found) = value
                .chars()
                .find(|&c| c == FIELD_DELIMITER || c == '\n' || c == '\r')
            {
                return Err(RecordValidationError::ForbiddenCharacter { field, found });
            }
        }

        Ok(())
    }

    /// Return a copy of this record with the present fields of `update` applied
    pub fn merged(&self, update: &RecordUpdate) -> Self {
        let mut merged = self.clone();
        if let Some(date) = &update.date {
            merged.date = date.clone();
        }
        if let Some(category) = update.category {
            merged.category = category;
        }
        if let Some(amount) = update.amount {
            merged.amount = amount;
        }
        if let Some(currency) = &update.currency {
            merged.currency = currency.clone();
        }
        if let Some(description) = &update.description {
            merged.description = description.clone();
        }
        merged
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2} {} {}",
            self.date, self.category, self.amount, self.currency, self.description
        )
    }
}

/// Field overrides for editing a record; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordUpdate {
    pub date: Option<String>,
    pub category: Option<Category>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub description: Option<String>,
}

impl RecordUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the date
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Override the category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Override the amount
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Override the currency
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Override the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when no field is overridden
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.currency.is_none()
            && self.description.is_none()
    }
}

/// Validation errors for records
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValidationError {
    NegativeAmount(f64),
    NonFiniteAmount,
    ForbiddenCharacter { field: &'static str, found: char },
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative: {}", amount)
            }
            Self::NonFiniteAmount => write!(f, "Amount must be a finite number"),
            Self::ForbiddenCharacter { field, found } => {
                write!(f, "Field '{}' cannot contain {:?}", field, found)
            }
        }
    }
}

impl std::error::Error for RecordValidationError {}

impl From<RecordValidationError> for WalletError {
    fn from(err: RecordValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Parse a user-supplied amount (finite, non-negative)
pub fn parse_amount(s: &str) -> WalletResult<f64> {
    let trimmed = s.trim();
    let amount: f64 = trimmed.parse().map_err(|_| {
        WalletError::Validation(format!(
            "Invalid amount format: '{}'. Use a number like '1500' or '12.50'",
            trimmed
        ))
    })?;

    if !amount.is_finite() {
        return Err(RecordValidationError::NonFiniteAmount.into());
    }
    if amount < 0.0 {
        return Err(RecordValidationError::NegativeAmount(amount).into());
    }

    Ok(amount)
}

/// Check that a date has the `YYYY-MM-DD` shape (not that it is a real day)
pub fn is_date_shaped(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Validate a user-supplied date, returning it trimmed
pub fn parse_date(s: &str) -> WalletResult<String> {
    let trimmed = s.trim();
    if is_date_shaped(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(WalletError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            trimmed
        )))
    }
}
