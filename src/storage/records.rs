//! Record store backed by a single flat file
//!
//! The store holds records in insertion order. A record's position in that
//! order is its index for edit and delete. Every mutation rewrites the whole
//! file from memory, so memory and disk agree after each successful call.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{WalletError, WalletResult};
use crate::models::{Balance, Record, RecordFilter, RecordUpdate};

use super::file_io::{read_if_present, write_atomic};
use super::format::{decode, encode};

/// Outcome of the last load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records read successfully
    pub loaded: usize,
    /// Lines dropped as malformed
    pub skipped: usize,
    /// The backing file did not exist
    pub missing: bool,
}

/// File-backed, ordered collection of records
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<Record>,
    load_report: LoadReport,
}

impl RecordStore {
    /// Open a store over `path` and load whatever it contains
    ///
    /// A missing file is not an error: the store starts empty and nothing is
    /// created on disk until the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> WalletResult<Self> {
        let mut store = Self {
            path: path.into(),
            records: Vec::new(),
            load_report: LoadReport::default(),
        };
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory records with the contents of the backing file
    pub fn load(&mut self) -> WalletResult<&LoadReport> {
        let Some(bytes) = read_if_present(&self.path)? else {
            info!(path = %self.path.display(), "records file not found, starting empty");
            self.records.clear();
            self.load_report = LoadReport {
                missing: true,
                ..LoadReport::default()
            };
            return Ok(&self.load_report);
        };

        let decoded = decode(&bytes);
        for skipped in &decoded.skipped {
            warn!(
                path = %self.path.display(),
                line = skipped.line,
                reason = ?skipped.reason,
                "skipping malformed record"
            );
        }

        self.load_report = LoadReport {
            loaded: decoded.records.len(),
            skipped: decoded.skipped.len(),
            missing: false,
        };
        self.records = decoded.records;

        debug!(
            path = %self.path.display(),
            loaded = self.load_report.loaded,
            skipped = self.load_report.skipped,
            "loaded records"
        );
        Ok(&self.load_report)
    }

    /// Rewrite the backing file from the in-memory records
    pub fn save(&self) -> WalletResult<()> {
        let bytes = encode(&self.records)?;
        write_atomic(&self.path, &bytes)?;
        debug!(path = %self.path.display(), count = self.records.len(), "saved records");
        Ok(())
    }

    /// Append a record and save; returns its index
    pub fn add(&mut self, record: Record) -> WalletResult<usize> {
        record.validate()?;

        self.records.push(record);
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }

        let index = self.records.len() - 1;
        info!(index, "added record");
        Ok(index)
    }

    /// Overwrite the fields present in `update` on the record at `index` and save
    pub fn edit(&mut self, index: usize, update: &RecordUpdate) -> WalletResult<&Record> {
        if update.is_empty() {
            return self.get(index);
        }
        let updated = self.get(index)?.merged(update);
        updated.validate()?;

        let previous = std::mem::replace(&mut self.records[index], updated);
        if let Err(e) = self.save() {
            self.records[index] = previous;
            return Err(e);
        }

        info!(index, "edited record");
        Ok(&self.records[index])
    }

    /// Remove the record at `index` and save; later records shift down by one
    pub fn delete(&mut self, index: usize) -> WalletResult<Record> {
        self.get(index)?;

        let removed = self.records.remove(index);
        if let Err(e) = self.save() {
            self.records.insert(index, removed);
            return Err(e);
        }

        info!(index, "deleted record");
        Ok(removed)
    }

    /// Records matching every supplied criterion, with their indices
    pub fn search(&self, filter: &RecordFilter) -> Vec<(usize, &Record)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| filter.matches(record))
            .collect()
    }

    /// Income and expense totals over all records
    pub fn balance(&self) -> Balance {
        Balance::from_records(&self.records)
    }

    /// Get the record at `index`
    pub fn get(&self, index: usize) -> WalletResult<&Record> {
        self.records
            .get(index)
            .ok_or_else(|| WalletError::invalid_index(index, self.records.len()))
    }

    /// All records in order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Report of the last load
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    /// Human-readable notice about the last load, if there is something to say
    pub fn notice(&self) -> Option<String> {
        if self.load_report.missing {
            Some(format!(
                "File {} not found. A new file will be created.",
                self.path.display()
            ))
        } else if self.load_report.skipped > 0 {
            Some(format!(
                "Skipped {} malformed line(s) in {}.",
                self.load_report.skipped,
                self.path.display()
            ))
        } else {
            None
        }
    }
}
