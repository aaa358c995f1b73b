//! Core Extractor implementation

use crate::config::{ExtractorConfig, KeyOrder};
use crate::error::ExtractorError;
use crate::types::KeySpec;
use kurator_domain::{
    CompositeKey, FieldCompleteness, Header, Row, RowSource, TokenReport, ValueCount,
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Run `f` over every row of a source, returning the number of rows read
fn scan<S, F>(source: &mut S, mut f: F) -> Result<usize, ExtractorError>
where
    S: RowSource,
    F: FnMut(&Row),
{
    let mut rows = 0;
    while let Some(row) = source.next_row() {
        let row = row.map_err(|e| ExtractorError::Source(Box::new(e)))?;
        f(&row);
        rows += 1;
    }
    Ok(rows)
}

/// Check a key against a source header
///
/// A missing single field is an error. Missing composite fields only
/// produce empty parts, so they are logged and tolerated.
fn check_key(header: &Header, key: &KeySpec) -> Result<(), ExtractorError> {
    let absent = key.missing_fields(header);
    if absent.is_empty() {
        return Ok(());
    }
    match key {
        KeySpec::Field(field) => Err(ExtractorError::MissingField(field.clone())),
        KeySpec::Composite(_) => {
            warn!(?absent, key = %key.name(), "key fields not in header");
            Ok(())
        }
    }
}

/// Distinct values in first-seen order
#[derive(Default)]
struct Distinct {
    seen: HashSet<String>,
    values: Vec<String>,
}

impl Distinct {
    fn push(&mut self, value: String) {
        if !self.seen.contains(&value) {
            self.seen.insert(value.clone());
            self.values.push(value);
        }
    }
}

/// The Extractor scans tabular sources for values, tokens and counts
///
/// Every operation makes a single pass over the source it is given. Values
/// are never trimmed or case-folded: `May`, `MAY` and `May ` are three
/// distinct values.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Distinct values of one field, in first-seen order
    ///
    /// Rows too short to carry the field are skipped.
    ///
    /// # Errors
    /// [`ExtractorError::MissingField`] when the field is not in the header.
    pub fn distinct_single_values<S: RowSource>(
        &self,
        source: &mut S,
        field: &str,
    ) -> Result<Vec<String>, ExtractorError> {
        if !source.header().contains(field) {
            return Err(ExtractorError::MissingField(field.to_string()));
        }

        let mut distinct = Distinct::default();
        let rows = scan(source, |row| {
            if let Some(value) = row.get(field) {
                distinct.push(value.to_string());
            }
        })?;

        info!(field, rows, distinct = distinct.values.len(), "extracted distinct values");
        Ok(distinct.values)
    }

    /// Distinct composite values of a key
    ///
    /// Key fields absent from the header or a row contribute empty parts.
    /// `order` selects first-seen or sorted output.
    pub fn distinct_composite_values<S: RowSource>(
        &self,
        source: &mut S,
        key: &CompositeKey,
        order: KeyOrder,
    ) -> Result<Vec<String>, ExtractorError> {
        check_key(source.header(), &KeySpec::Composite(key.clone()))?;

        let mut distinct = Distinct::default();
        let rows = scan(source, |row| distinct.push(key.value_for(row)))?;

        let mut values = distinct.values;
        if order == KeyOrder::Sorted {
            values.sort();
        }
        info!(key = %key.name(), rows, distinct = values.len(), ?order, "extracted composite values");
        Ok(values)
    }

    /// Distinct composite values in the configured order
    pub fn composite_values<S: RowSource>(
        &self,
        source: &mut S,
        key: &CompositeKey,
    ) -> Result<Vec<String>, ExtractorError> {
        self.distinct_composite_values(source, key, self.config.composite_order)
    }

    /// Whitespace-token statistics for one field
    ///
    /// # Errors
    /// [`ExtractorError::MissingField`] when the field is not in the header.
    pub fn token_counts<S: RowSource>(
        &self,
        source: &mut S,
        field: &str,
    ) -> Result<TokenReport, ExtractorError> {
        if !source.header().contains(field) {
            return Err(ExtractorError::MissingField(field.to_string()));
        }

        let mut report = TokenReport::new(field);
        scan(source, |row| match row.get(field) {
            Some(value) => report.record(value),
            None => report.record_absent(),
        })?;

        info!(
            field,
            rows = report.rows_scanned,
            populated = report.populated_rows,
            tokens = report.distinct_tokens(),
            "counted tokens"
        );
        Ok(report)
    }

    /// Occurrence counts of each distinct value of a key
    ///
    /// Sorted by descending count, ties by value. A single-field key whose
    /// field is not in the header is an error; composite keys are not.
    pub fn value_counts<S: RowSource>(
        &self,
        source: &mut S,
        key: &KeySpec,
    ) -> Result<Vec<ValueCount>, ExtractorError> {
        check_key(source.header(), key)?;

        let mut counts: HashMap<String, usize> = HashMap::new();
        let rows = scan(source, |row| {
            if let Some(value) = key.value_for(row) {
                *counts.entry(value).or_default() += 1;
            }
        })?;

        let mut counts: Vec<ValueCount> = counts
            .into_iter()
            .map(|(value, count)| ValueCount { value, count })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));

        info!(key = %key.name(), rows, distinct = counts.len(), "counted values");
        Ok(counts)
    }

    /// Number of rows with a non-blank value, for every header field in order
    pub fn term_completeness<S: RowSource>(
        &self,
        source: &mut S,
    ) -> Result<Vec<FieldCompleteness>, ExtractorError> {
        let fields = source.header().fields().to_vec();
        let mut populated = vec![0usize; fields.len()];

        let rows = scan(source, |row| {
            for (i, value) in row.values().iter().enumerate().take(populated.len()) {
                if !value.trim().is_empty() {
                    populated[i] += 1;
                }
            }
        })?;

        debug!(rows, fields = fields.len(), "term completeness");
        Ok(fields
            .into_iter()
            .zip(populated)
            .map(|(field, populated)| FieldCompleteness { field, populated })
            .collect())
    }

    /// Number of rows with a non-blank value for one field
    ///
    /// # Errors
    /// [`ExtractorError::MissingField`] when the field is not in the header.
    pub fn term_row_count<S: RowSource>(
        &self,
        source: &mut S,
        field: &str,
    ) -> Result<usize, ExtractorError> {
        if !source.header().contains(field) {
            return Err(ExtractorError::MissingField(field.to_string()));
        }

        let mut populated = 0;
        let rows = scan(source, |row| {
            if row.get(field).is_some_and(|v| !v.trim().is_empty()) {
                populated += 1;
            }
        })?;

        debug!(field, rows, populated, "counted populated rows");
        Ok(populated)
    }

    /// Distinct values of a key that are not keys of the vocabulary
    ///
    /// Values are trimmed first when `trim_lookup_values` is set; empty values
    /// are never reported. Output is in first-seen order.
    pub fn unknown_values<S: RowSource>(
        &self,
        source: &mut S,
        key: &KeySpec,
        known: &HashSet<String>,
    ) -> Result<Vec<String>, ExtractorError> {
        check_key(source.header(), key)?;

        let trim = self.config.trim_lookup_values;
        let mut distinct = Distinct::default();
        scan(source, |row| {
            if let Some(value) = key.value_for(row) {
                let value = if trim { value.trim().to_string() } else { value };
                if !value.is_empty() && !known.contains(&value) {
                    distinct.push(value);
                }
            }
        })?;

        info!(key = %key.name(), unknown = distinct.values.len(), "found unknown values");
        Ok(distinct.values)
    }
}
