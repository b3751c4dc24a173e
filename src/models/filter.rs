//! Search criteria for records

use super::category::Category;
use super::record::Record;

/// Options for filtering records
///
/// Every supplied criterion must match; an omitted criterion matches anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    /// Filter by category
    pub category: Option<Category>,
    /// Filter by exact date text
    pub date: Option<String>,
    /// Filter by exact amount (no tolerance)
    pub amount: Option<f64>,
}

impl RecordFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by date
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Filter by amount
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// True when no criterion is supplied
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.date.is_none() && self.amount.is_none()
    }

    /// Check a record against all supplied criteria
    pub fn matches(&self, record: &Record) -> bool {
        self.category.map_or(true, |c| record.category == c)
            && self.date.as_deref().map_or(true, |d| record.date == d)
            && self.amount.map_or(true, |a| record.amount == a)
    }
}
