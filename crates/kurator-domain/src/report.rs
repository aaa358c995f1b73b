//! Report module - result records produced by the extractor

use std::collections::BTreeMap;

/// Occurrence statistics of one token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenStats {
    /// Occurrences across all values, repeats within one value included
    pub total_count: usize,

    /// Rows in which the token appears at least once
    pub row_count: usize,
}

/// Token frequency table for one field of one source
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenReport {
    /// Field that was tokenized
    pub field: String,

    /// Data rows read from the source
    pub rows_scanned: usize,

    /// Rows where the field had a non-empty value
    pub populated_rows: usize,

    /// Sum of every token occurrence
    pub token_occurrences: usize,

    /// Statistics keyed by token, ordered by token
    pub tokens: BTreeMap<String, TokenStats>,
}

impl TokenReport {
    /// Empty report for a field
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Default::default()
        }
    }

    /// Account for one field value
    ///
    /// Whitespace-only values count as scanned but not populated.
    ///
    /// # Examples
    ///
    /// ```
    /// use kurator_domain::TokenReport;
    ///
    /// let mut report = TokenReport::new("locality");
    /// report.record("Ridge National Forest National");
    /// assert_eq!(report.tokens["National"].total_count, 2);
    /// assert_eq!(report.tokens["National"].row_count, 1);
    /// ```
    pub fn record(&mut self, value: &str) {
        self.rows_scanned += 1;
        if value.trim().is_empty() {
            return;
        }
        self.populated_rows += 1;

        let mut seen_in_row: Vec<&str> = Vec::new();
        for token in value.split_whitespace() {
            let stats = self.tokens.entry(token.to_string()).or_default();
            stats.total_count += 1;
            self.token_occurrences += 1;
            if !seen_in_row.contains(&token) {
                stats.row_count += 1;
                seen_in_row.push(token);
            }
        }
    }

    /// Count a row where the field is absent
    pub fn record_absent(&mut self) {
        self.rows_scanned += 1;
    }

    /// Number of distinct tokens
    pub fn distinct_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// Tokens ordered by descending total count, then by token
    pub fn by_frequency(&self) -> Vec<(&str, TokenStats)> {
        let mut ranked: Vec<(&str, TokenStats)> =
            self.tokens.iter().map(|(t, s)| (t.as_str(), *s)).collect();
        ranked.sort_by(|a, b| b.1.total_count.cmp(&a.1.total_count).then(a.0.cmp(b.0)));
        ranked
    }
}

/// A distinct value with its number of occurrences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount {
    /// Verbatim or composite value
    pub value: String,

    /// Rows carrying the value
    pub count: usize,
}

/// Populated-row count of one header field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCompleteness {
    /// Field name as it appears in the header
    pub field: String,

    /// Rows with a non-blank value
    pub populated: usize,
}
