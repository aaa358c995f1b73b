//! Row module - one data row addressed through its header

use crate::Header;
use std::sync::Arc;

/// One data row of a tabular source
///
/// Values are stored positionally and looked up through the shared header.
/// A row shorter than its header reports the trailing fields as absent, the
/// same as a field that is not in the header at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    header: Arc<Header>,
    values: Vec<String>,
}

impl Row {
    /// Create a row over a shared header
    pub fn new(header: Arc<Header>, values: Vec<String>) -> Self {
        Self { header, values }
    }

    /// Value of a field, `None` when the field is absent from this row
    ///
    /// # Examples
    ///
    /// ```
    /// use kurator_domain::{Header, Row};
    /// use std::sync::Arc;
    ///
    /// let header = Arc::new(Header::new(["year", "month"]).unwrap());
    /// let row = Row::new(header, vec!["1990".to_string()]);
    /// assert_eq!(row.get("year"), Some("1990"));
    /// assert_eq!(row.get("month"), None);
    /// ```
    pub fn get(&self, field: &str) -> Option<&str> {
        self.header
            .position(field)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }

    /// Value of a field, or the empty string when absent
    pub fn get_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Raw values in column order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The header this row is read against
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Number of values actually present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no values at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_row_reports_absent_fields() {
        let header = Arc::new(Header::new(["a", "b", "c"]).unwrap());
        let row = Row::new(header, vec!["1".to_string(), "".to_string()]);

        assert_eq!(row.get("a"), Some("1"));
        assert_eq!(row.get("b"), Some(""));
        assert_eq!(row.get("c"), None);
        assert_eq!(row.get_or_empty("c"), "");
        assert_eq!(row.get("missing"), None);
    }
}
