//! Record display formatting
//!
//! Provides utilities for formatting records and balances for terminal display.

use crate::models::{Balance, Record};

/// Format a single record as a register row
pub fn format_record_row(index: usize, record: &Record) -> String {
    format!(
        "{:>4}  {:10} {:8} {:>12.2} {:4} {}",
        index,
        record.date,
        record.category.as_str(),
        record.amount,
        record.currency,
        record.description
    )
}

/// Format indexed records as a register
pub fn format_record_register(records: &[(usize, &Record)]) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:10} {:8} {:>12} {:4} {}\n",
        "#", "Date", "Category", "Amount", "Cur", "Description"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for (index, record) in records {
        output.push_str(&format_record_row(*index, record));
        output.push('\n');
    }

    output
}

/// Format record details for display
pub fn format_record_details(index: usize, record: &Record) -> String {
    let mut output = String::new();

    output.push_str(&format!("Record:      #{}\n", index));
    output.push_str(&format!("Date:        {}\n", record.date));
    output.push_str(&format!("Category:    {}\n", record.category));
    output.push_str(&format!("Amount:      {:.2}\n", record.amount));

    if !record.currency.is_empty() {
        output.push_str(&format!("Currency:    {}\n", record.currency));
    }
    if !record.description.is_empty() {
        output.push_str(&format!("Description: {}\n", record.description));
    }

    output
}

/// Format balance totals with two decimal places
pub fn format_balance(balance: &Balance) -> String {
    format!(
        "Balance:  {:.2}\nIncome:   {:.2}\nExpenses: {:.2}\n",
        balance.total(),
        balance.income,
        balance.expense
    )
}
