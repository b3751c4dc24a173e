//! Record CLI commands
//!
//! Implements one-shot CLI commands over the record store.

use clap::Subcommand;
use serde::Serialize;

use crate::config::Settings;
use crate::display::record::{
    format_balance, format_record_details, format_record_register,
};
use crate::error::{WalletError, WalletResult};
use crate::models::{parse_amount, parse_date, Record};
use crate::storage::RecordStore;

use super::input::{non_blank, parse_filter, parse_update, resolve_index, today};

/// Record subcommands
#[derive(Subcommand)]
pub enum RecordCommands {
    /// Show balance, total income and total expenses
    Balance,
    /// Add a new record
    Add {
        /// Amount (e.g., "1500" or "12.50")
        amount: String,
        /// Category: income or expense
        #[arg(short, long)]
        category: String,
        /// Record date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Currency code, defaults to the configured currency
        #[arg(short = 'u', long)]
        currency: Option<String>,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Edit a record; omitted fields keep their value
    Edit {
        /// Record index as shown by `list`
        #[arg(allow_negative_numbers = true)]
        index: i64,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New currency
        #[arg(short = 'u', long)]
        currency: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Delete a record
    Delete {
        /// Record index as shown by `list`
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// List all records
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Search records; every given criterion must match
    Search {
        /// Category: income or expense
        #[arg(short, long)]
        category: Option<String>,
        /// Exact date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// Exact amount
        #[arg(short, long)]
        amount: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Record paired with its position, for JSON output
#[derive(Serialize)]
struct IndexedRecord<'a> {
    index: usize,
    #[serde(flatten)]
    record: &'a Record,
}

/// Handle a record command
pub fn handle_record_command(
    store: &mut RecordStore,
    settings: &Settings,
    cmd: RecordCommands,
) -> WalletResult<()> {
    match cmd {
        RecordCommands::Balance => {
            print!("{}", format_balance(&store.balance()));
        }

        RecordCommands::Add {
            amount,
            category,
            date,
            currency,
            description,
        } => {
            let date = match date.as_deref().and_then(non_blank) {
                Some(date) => parse_date(date)?,
                None => today(),
            };
            let currency = currency
                .as_deref()
                .and_then(non_blank)
                .map(str::to_string)
                .unwrap_or_else(|| settings.default_currency.clone());

            let record = Record::new(
                date,
                category.trim().parse()?,
                parse_amount(&amount)?,
                currency,
                description.unwrap_or_default().trim(),
            );

            let index = store.add(record)?;
            println!("Record added:");
            print!("{}", format_record_details(index, store.get(index)?));
        }

        RecordCommands::Edit {
            index,
            date,
            category,
            amount,
            currency,
            description,
        } => {
            let index = resolve_index(index, store.len())?;
            let update = parse_update(
                date.as_deref(),
                category.as_deref(),
                amount.as_deref(),
                currency.as_deref(),
                description.as_deref(),
            )?;

            let record = store.edit(index, &update)?;
            println!("Record updated:");
            print!("{}", format_record_details(index, record));
        }

        RecordCommands::Delete { index } => {
            let index = resolve_index(index, store.len())?;
            let removed = store.delete(index)?;
            println!("Record deleted:");
            print!("{}", format_record_details(index, &removed));
        }

        RecordCommands::List { json } => {
            let records: Vec<(usize, &Record)> = store.records().iter().enumerate().collect();
            print_records(&records, json)?;
        }

        RecordCommands::Search {
            category,
            date,
            amount,
            json,
        } => {
            let filter = parse_filter(category.as_deref(), date.as_deref(), amount.as_deref())?;
            let hits = store.search(&filter);
            print_records(&hits, json)?;
        }
    }

    Ok(())
}

fn print_records(records: &[(usize, &Record)], json: bool) -> WalletResult<()> {
    if json {
        let indexed: Vec<IndexedRecord<'_>> = records
            .iter()
            .map(|&(index, record)| IndexedRecord { index, record })
            .collect();
        let text = serde_json::to_string_pretty(&indexed)
            .map_err(|e| WalletError::Json(format!("Failed to serialize records: {}", e)))?;
        println!("{}", text);
    } else {
        print!("{}", format_record_register(records));
    }
    Ok(())
}
