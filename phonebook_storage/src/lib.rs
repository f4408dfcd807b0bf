#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Flat-file persistence for phone book records.
//!
//! The data file is plain text: one record per line, six fields joined by
//! ASCII commas, no header and no quoting or escaping. A field value that
//! itself contains a comma cannot be represented; `load` rejects any line
//! that does not split into exactly six parts.
//!
//! `save` replaces the whole file through a temp-file-then-rename so a
//! crash mid-write never truncates the previous contents.

use phonebook_core::{FIELD_COUNT, Record};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from loading or saving the data file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected {FIELD_COUNT} comma-separated fields, found {found}")]
    MalformedLine { line: usize, found: usize },

    #[error("cannot replace {path}: {source}")]
    Replace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read the file at `path` and parse every line into a [`Record`].
///
/// A missing or unreadable file is an error, as is any line with the wrong
/// field count; there is no partial recovery of the remaining lines.
pub fn load(path: &Path) -> Result<Vec<Record>, StorageError> {
    let content = std::fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = content
        .lines()
        .enumerate()
        .map(|(i, line)| parse_line(line, i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Write all `records` to `path`, replacing the previous file contents.
///
/// The new contents are written to a temp file in the target's directory
/// and renamed over the target, so the old file survives a failed write.
pub fn save(path: &Path, records: &[Record]) -> Result<(), StorageError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| StorageError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for record in records {
        writeln!(tmp, "{record}").map_err(|source| StorageError::Io {
            path: tmp.path().to_path_buf(),
            source,
        })?;
    }
    tmp.flush().map_err(|source| StorageError::Io {
        path: tmp.path().to_path_buf(),
        source,
    })?;

    tmp.persist(path).map_err(|e| StorageError::Replace {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}

/// Parse one data-file line. `line_number` is 1-based, for error reporting.
///
/// The line is trimmed of surrounding whitespace before splitting; the six
/// field values themselves are taken verbatim.
fn parse_line(line: &str, line_number: usize) -> Result<Record, StorageError> {
    let parts: Vec<&str> = line.trim().split(',').collect();
    let [last, first, surname, organization, work, personal]: [&str; FIELD_COUNT] = parts
        .as_slice()
        .try_into()
        .map_err(|_| StorageError::MalformedLine {
            line: line_number,
            found: parts.len(),
        })?;

    Ok(Record::new(
        last.to_string(),
        first.to_string(),
        surname.to_string(),
        organization.to_string(),
        work.to_string(),
        personal.to_string(),
    ))
}
