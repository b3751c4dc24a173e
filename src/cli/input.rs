//! Raw input handling for the shell
//!
//! Turns text typed by the user into the typed arguments the record store
//! expects. Blank answers mean "not supplied".

use std::io::{BufRead, Write};

use crate::error::{WalletError, WalletResult};
use crate::models::{parse_amount, parse_date, Category, RecordFilter, RecordUpdate};

/// Line-oriented prompt over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    pub fn ask(&mut self, prompt: &str) -> WalletResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask and treat end of input as a blank answer
    pub fn ask_or_blank(&mut self, prompt: &str) -> WalletResult<String> {
        Ok(self.ask(prompt)?.unwrap_or_default())
    }

    /// Write text as-is
    pub fn say(&mut self, text: &str) -> WalletResult<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write a line of text
    pub fn say_line(&mut self, text: &str) -> WalletResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Consume the prompter, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }
}

/// `None` for blank text, otherwise the text itself
pub fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Parse an index typed by the user and check it against the store size
pub fn parse_index(s: &str, len: usize) -> WalletResult<usize> {
    let trimmed = s.trim();
    let index: i64 = trimmed.parse().map_err(|_| {
        WalletError::Validation(format!("Invalid index: '{}'. Use a whole number", trimmed))
    })?;
    resolve_index(index, len)
}

/// Convert a signed index to a position, rejecting anything out of range
pub fn resolve_index(index: i64, len: usize) -> WalletResult<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(WalletError::InvalidIndex { index, len })
}

/// Build an update from optional raw field values
pub fn parse_update(
    date: Option<&str>,
    category: Option<&str>,
    amount: Option<&str>,
    currency: Option<&str>,
    description: Option<&str>,
) -> WalletResult<RecordUpdate> {
    let mut update = RecordUpdate::new();

    if let Some(date) = date.and_then(non_blank) {
        update = update.date(parse_date(date)?);
    }
    if let Some(category) = category.and_then(non_blank) {
        update = update.category(category.parse()?);
    }
    if let Some(amount) = amount.and_then(non_blank) {
        update = update.amount(parse_amount(amount)?);
    }
    if let Some(currency) = currency.and_then(non_blank) {
        update = update.currency(currency);
    }
    if let Some(description) = description.and_then(non_blank) {
        update = update.description(description);
    }

    Ok(update)
}

/// Build a search filter from optional raw criteria
pub fn parse_filter(
    category: Option<&str>,
    date: Option<&str>,
    amount: Option<&str>,
) -> WalletResult<RecordFilter> {
    let mut filter = RecordFilter::new();

    if let Some(category) = Category::parse_optional(category.unwrap_or_default())? {
        filter = filter.category(category);
    }
    if let Some(date) = date.and_then(non_blank) {
        filter = filter.date(date);
    }
    if let Some(amount) = amount.and_then(non_blank) {
        filter = filter.amount(parse_amount(amount)?);
    }

    Ok(filter)
}

/// Today's date in `YYYY-MM-DD` form
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
