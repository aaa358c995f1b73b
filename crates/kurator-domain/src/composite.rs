//! Composite key module - several field values joined in a fixed order

use crate::Row;

/// Separator used between composite key parts unless configured otherwise
pub const DEFAULT_SEPARATOR: char = '|';

/// Join values with a separator
///
/// Every value keeps its slot: `["a", "", "c"]` composes to `a||c`.
pub fn compose_key<S: AsRef<str>>(values: &[S], separator: char) -> String {
    let mut key = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            key.push(separator);
        }
        key.push_str(value.as_ref());
    }
    key
}

/// Ordered key fields plus the separator that joins their values
///
/// The separator must not occur inside field values. If it does, keys
/// silently misalign; this is a known limitation, not something the type
/// can detect.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey {
    fields: Vec<String>,
    separator: char,
}

impl CompositeKey {
    /// Create a composite key from field names
    ///
    /// # Errors
    /// Returns error if no field names are given or a field name is blank
    pub fn new<I, S>(fields: I, separator: char) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err("Composite key needs at least one field".to_string());
        }
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err("Composite key fields cannot be blank".to_string());
        }
        Ok(Self { fields, separator })
    }

    /// Parse a key definition such as `country|stateProvince|county`
    ///
    /// Whitespace inside the definition is removed before splitting.
    ///
    /// # Examples
    ///
    /// ```
    /// use kurator_domain::CompositeKey;
    ///
    /// let key = CompositeKey::parse("country | stateProvince", '|').unwrap();
    /// assert_eq!(key.fields(), ["country", "stateProvince"]);
    /// assert_eq!(key.name(), "country|stateProvince");
    /// ```
    pub fn parse(definition: &str, separator: char) -> Result<Self, String> {
        let compact: String = definition.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err("Composite key definition is empty".to_string());
        }
        Self::new(compact.split(separator), separator)
    }

    /// Key field names in order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Separator between parts
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Column name of this key in a vocabulary file
    pub fn name(&self) -> String {
        compose_key(&self.fields, self.separator)
    }

    /// Composite value for a row; absent fields contribute an empty part
    pub fn value_for(&self, row: &Row) -> String {
        let parts: Vec<&str> = self.fields.iter().map(|f| row.get_or_empty(f)).collect();
        compose_key(&parts, self.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Header;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn row(fields: &[&str], values: &[&str]) -> Row {
        let header = Arc::new(Header::new(fields.iter().copied()).unwrap());
        Row::new(header, values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_compose_key() {
        assert_eq!(compose_key(&["a", "b", "c"], '|'), "a|b|c");
        assert_eq!(compose_key(&["a"], '|'), "a");
        assert_eq!(compose_key::<&str>(&[], '|'), "");
    }

    #[test]
    fn test_missing_field_keeps_its_slot() {
        let key = CompositeKey::new(["f1", "f2", "f3"], '|').unwrap();
        let r = row(&["f1", "f3"], &["v1", "v3"]);
        assert_eq!(key.value_for(&r), "v1||v3");
    }

    #[test]
    fn test_short_row_keeps_trailing_slots() {
        let key = CompositeKey::new(["a", "b", "c"], '|').unwrap();
        let r = row(&["a", "b", "c"], &["x"]);
        assert_eq!(key.value_for(&r), "x||");
    }

    #[test]
    fn test_parse_rejects_blank_parts() {
        assert!(CompositeKey::parse("", '|').is_err());
        assert!(CompositeKey::parse("a||b", '|').is_err());
        assert!(CompositeKey::new(Vec::<String>::new(), '|').is_err());
    }

    proptest! {
        #[test]
        fn prop_separator_count_matches_field_count(
            present in proptest::collection::vec(any::<bool>(), 1..12),
        ) {
            let fields: Vec<String> = (0..present.len()).map(|i| format!("f{}", i)).collect();
            let key = CompositeKey::new(fields.clone(), '|').unwrap();

            // Each present field carries its own name as value; "other" keeps
            // the header non-empty when no key field is present.
            let mut kept: Vec<&str> = vec!["other"];
            kept.extend(
                fields
                    .iter()
                    .zip(&present)
                    .filter(|(_, keep)| **keep)
                    .map(|(f, _)| f.as_str()),
            );
            let value = key.value_for(&row(&kept, &kept));

            prop_assert_eq!(value.matches('|').count(), fields.len() - 1);
            let parts: Vec<&str> = value.split('|').collect();
            for (i, keep) in present.iter().enumerate() {
                if *keep {
                    prop_assert_eq!(parts[i], fields[i].as_str());
                } else {
                    prop_assert_eq!(parts[i], "");
                }
            }
        }
    }
}
