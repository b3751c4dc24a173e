//! Canonical line format for records
//!
//! One record per line, five comma-separated fields in the order
//! `date,category,amount,currency,description`, no header and no quoting.
//! Lines that don't decode to a valid record are reported and skipped.

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::error::{WalletError, WalletResult};
use crate::models::{Category, Record};

/// Number of fields in every well-formed line
pub const FIELD_COUNT: usize = 5;

/// Why a line was not turned into a record
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    FieldCount(usize),
    Amount(String),
    Category(String),
    Invalid(String),
    Unreadable(String),
}

/// A line that was skipped while decoding
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number in the input
    pub line: u64,
    pub reason: SkipReason,
}

/// Result of decoding a whole file
#[derive(Debug, Default)]
pub struct Decoded {
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedLine>,
}

/// Decode file contents into records, skipping malformed lines
///
/// Empty lines are ignored but still count towards line numbers.
pub fn decode(input: &[u8]) -> Decoded {
    let builder = line_reader();
    let mut decoded = Decoded::default();

    for (number, raw) in (1u64..).zip(input.split(|&b| b == b'\n')) {
        let line = raw.strip_suffix(b"\r").unwrap_or(raw);
        if line.is_empty() {
            continue;
        }

        let mut fields = StringRecord::new();
        let reason = match builder.from_reader(line).read_record(&mut fields) {
            Ok(_) => match decode_fields(&fields) {
                Ok(record) => {
                    decoded.records.push(record);
                    continue;
                }
                Err(reason) => reason,
            },
            Err(e) => SkipReason::Unreadable(e.to_string()),
        };
        decoded.skipped.push(SkippedLine { line: number, reason });
    }

    decoded
}

fn line_reader() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).quoting(false);
    builder
}

fn decode_fields(fields: &StringRecord) -> Result<Record, SkipReason> {
    if fields.len() != FIELD_COUNT {
        return Err(SkipReason::FieldCount(fields.len()));
    }

    let category: Category = fields[1]
        .parse()
        .map_err(|_| SkipReason::Category(fields[1].to_string()))?;

    let amount: f64 = fields[2]
        .trim()
        .parse()
        .map_err(|_| SkipReason::Amount(fields[2].to_string()))?;

    let record = Record::new(&fields[0], category, amount, &fields[3], &fields[4]);
    record
        .validate()
        .map_err(|e| SkipReason::Invalid(e.to_string()))?;

    Ok(record)
}

/// Encode records into the canonical format, one `\n`-terminated line each
pub fn encode(records: &[Record]) -> WalletResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in records {
        writer
            .write_record([
                record.date.as_str(),
                record.category.as_str(),
                record.amount.to_string().as_str(),
                record.currency.as_str(),
                record.description.as_str(),
            ])
            .map_err(|e| WalletError::Storage(format!("Failed to encode record: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| WalletError::Storage(format!("Failed to encode records: {}", e)))
}
