//! Whole-file structural checks

use crate::dialect::{load, ReadOptions};
use crate::reader::{csv_reader, read_header_with};
use crate::TabularError;
use kurator_domain::merge_headers;
use std::path::Path;
use tracing::{debug, info};

/// First data row with fewer fields than the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortRow {
    /// 1-based index among data rows (the header is not counted)
    pub index: usize,

    /// Raw text of the offending line
    pub line: String,

    /// Fields in the header
    pub expected: usize,

    /// Fields found on the row
    pub found: usize,
}

/// Find the first data row with fewer fields than the header
///
/// Returns `Ok(None)` when every row is complete. Longer rows are not
/// reported.
pub fn check_field_counts<P: AsRef<Path>>(
    path: P,
    options: ReadOptions,
) -> Result<Option<ShortRow>, TabularError> {
    let path = path.as_ref();
    let (text, dialect) = load(path, options)?;

    let mut reader = csv_reader(text.clone(), dialect);
    let mut records = reader.records();
    let expected = match records.next() {
        Some(header) => header?.len(),
        None => return Err(TabularError::Empty(path.to_path_buf())),
    };

    for (i, record) in records.enumerate() {
        let record = record?;
        if record.len() < expected {
            let start = record
                .position()
                .map(|p| p.byte() as usize)
                .unwrap_or_default();
            let line = text
                .get(start..)
                .and_then(|rest| rest.lines().next())
                .unwrap_or_default()
                .to_string();
            info!(path = %path.display(), row = i + 1, "short row found");
            return Ok(Some(ShortRow {
                index: i + 1,
                line,
                expected,
                found: record.len(),
            }));
        }
    }

    debug!(path = %path.display(), "all rows complete");
    Ok(None)
}

/// Sorted union of the header fields of several files
///
/// Returns `Ok(None)` when no file contributes a non-blank field.
pub fn composite_header<P: AsRef<Path>>(
    paths: &[P],
    options: ReadOptions,
) -> Result<Option<Vec<String>>, TabularError> {
    let mut merged: Option<Vec<String>> = None;
    for path in paths {
        let header = read_header_with(path, options)?;
        merged = merge_headers(merged.as_deref(), Some(header.as_slice()));
    }
    Ok(merged)
}
