//! Key specifications for extraction

use crate::ExtractorError;
use kurator_domain::{CompositeKey, Header, Row};

/// What value to pull out of each row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySpec {
    /// The verbatim value of one field
    Field(String),
    /// A composite of several field values
    Composite(CompositeKey),
}

impl KeySpec {
    /// Parse a key definition: a plain field name, or field names joined by `separator`
    ///
    /// ```
    /// use kurator_extractor::KeySpec;
    ///
    /// assert!(matches!(KeySpec::parse("year", '|').unwrap(), KeySpec::Field(_)));
    /// assert!(matches!(
    ///     KeySpec::parse("country|county", '|').unwrap(),
    ///     KeySpec::Composite(_)
    /// ));
    /// ```
    pub fn parse(definition: &str, separator: char) -> Result<Self, ExtractorError> {
        if definition.contains(separator) {
            CompositeKey::parse(definition, separator)
                .map(KeySpec::Composite)
                .map_err(ExtractorError::InvalidKey)
        } else {
            let field = definition.trim();
            if field.is_empty() {
                return Err(ExtractorError::InvalidKey("key is empty".to_string()));
            }
            Ok(KeySpec::Field(field.to_string()))
        }
    }

    /// Column name the key gets in vocabularies and reports
    pub fn name(&self) -> String {
        match self {
            KeySpec::Field(field) => field.clone(),
            KeySpec::Composite(key) => key.name(),
        }
    }

    /// Value of the key in a row
    ///
    /// A single field absent from the row yields `None`; composite keys always
    /// yield a value with empty parts for absent fields.
    pub fn value_for(&self, row: &Row) -> Option<String> {
        match self {
            KeySpec::Field(field) => row.get(field).map(str::to_string),
            KeySpec::Composite(key) => Some(key.value_for(row)),
        }
    }

    /// Key fields missing from a header
    pub fn missing_fields<'a>(&'a self, header: &Header) -> Vec<&'a str> {
        match self {
            KeySpec::Field(field) => {
                if header.contains(field) {
                    Vec::new()
                } else {
                    vec![field.as_str()]
                }
            }
            KeySpec::Composite(key) => key
                .fields()
                .iter()
                .map(String::as_str)
                .filter(|f| !header.contains(f))
                .collect(),
        }
    }
}
