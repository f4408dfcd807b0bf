//! Owned record collection with positional addressing.
//!
//! The `PhoneBook` owns the full in-memory record sequence for a session.
//! All mutation goes through its methods; nothing else holds a mutable
//! handle to the sequence.

use crate::record::Record;
use thiserror::Error;

/// Errors from positional operations on the book.
#[derive(Debug, Error)]
pub enum PhoneBookError {
    #[error("index {index} is out of range (book holds {len} records)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// The ordered, index-addressable record collection.
#[derive(Debug, Clone, Default)]
pub struct PhoneBook {
    records: Vec<Record>,
}

impl PhoneBook {
    /// Create an empty phone book.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Wrap an already-loaded record sequence.
    #[must_use]
    pub const fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record to the end of the sequence.
    ///
    /// No duplicate check and no validation; always succeeds.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Replace the record at `index` in place.
    ///
    /// Out-of-range indices leave the book untouched.
    pub fn edit(&mut self, index: usize, record: Record) -> Result<(), PhoneBookError> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(PhoneBookError::IndexOutOfRange { index, len })?;
        *slot = record;
        Ok(())
    }

    /// Linear case-insensitive substring search over the rendered text of
    /// every record, preserving original relative order.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<Record> {
        self.records
            .iter()
            .filter(|record| record.matches(term))
            .cloned()
            .collect()
    }
}

/// A contiguous window of records, carrying the absolute offset of its
/// first record in the source sequence.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    pub start: usize,
    pub records: &'a [Record],
}

/// Partition `records` into consecutive non-overlapping windows of
/// `page_size` (the last window may be shorter). A `page_size` of zero is
/// clamped to one; callers validate sizes before they get here.
pub fn pages(records: &[Record], page_size: usize) -> impl Iterator<Item = Page<'_>> {
    let size = page_size.max(1);
    records
        .chunks(size)
        .enumerate()
        .map(move |(number, chunk)| Page {
            start: number * size,
            records: chunk,
        })
}
