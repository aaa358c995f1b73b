//! Replace key values with their vocabulary standard

use crate::error::ExtractorError;
use crate::extractor::Extractor;
use crate::types::KeySpec;
use kurator_domain::RowSource;
use kurator_store::VocabularyDict;
use tracing::{info, warn};

/// Suffix of the column that keeps a key field's original value
pub const ORIGINAL_SUFFIX: &str = "_orig";

/// A source rewritten with standardized key values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standardized {
    /// Source header followed by one `<field>_orig` column per key field
    pub header: Vec<String>,

    /// Every source row, padded to the source width, then the original key values
    pub rows: Vec<Vec<String>>,

    /// Rows whose key had a standard in the vocabulary
    pub changed: usize,
}

impl Extractor {
    /// Rewrite every row, replacing the key's fields with the vocabulary standard
    ///
    /// A composite standard is split on the key separator and assigned field by
    /// field; a standard with the wrong number of parts leaves the row as is.
    /// Keys without an entry, or whose entry has a blank standard, are kept.
    ///
    /// # Errors
    /// [`ExtractorError::MissingField`] for the first key field absent from the
    /// header, and [`ExtractorError::InvalidKey`] when an `_orig` column
    /// already exists.
    pub fn standardize<S: RowSource>(
        &self,
        source: &mut S,
        key: &KeySpec,
        vocabulary: &VocabularyDict,
    ) -> Result<Standardized, ExtractorError> {
        let header = source.header().clone();
        if let Some(field) = key.missing_fields(&header).first() {
            return Err(ExtractorError::MissingField(field.to_string()));
        }

        let (fields, separator) = match key {
            KeySpec::Field(field) => (vec![field.clone()], None),
            KeySpec::Composite(composite) => {
                (composite.fields().to_vec(), Some(composite.separator()))
            }
        };
        let positions: Vec<usize> = fields.iter().filter_map(|f| header.position(f)).collect();

        let mut out_header = header.fields().to_vec();
        for field in &fields {
            let orig = format!("{field}{ORIGINAL_SUFFIX}");
            if header.contains(&orig) {
                return Err(ExtractorError::InvalidKey(format!("{orig} already in header")));
            }
            out_header.push(orig);
        }

        let trim = self.config().trim_lookup_values;
        let width = header.len();
        let mut result = Standardized {
            header: out_header,
            ..Default::default()
        };

        while let Some(row) = source.next_row() {
            let row = row.map_err(|e| ExtractorError::Source(Box::new(e)))?;
            let mut values = row.values().to_vec();
            values.resize(width, String::new());
            let originals: Vec<String> = positions.iter().map(|&i| values[i].clone()).collect();

            let lookup = key.value_for(&row).unwrap_or_default();
            let lookup = if trim { lookup.trim() } else { lookup.as_str() };
            let standard = vocabulary
                .get(lookup)
                .map(|entry| entry.standard.as_str())
                .filter(|s| !s.trim().is_empty());

            if let Some(standard) = standard {
                let parts: Vec<&str> = match separator {
                    Some(sep) => standard.split(sep).collect(),
                    None => vec![standard],
                };
                if parts.len() == positions.len() {
                    for (&i, part) in positions.iter().zip(parts) {
                        values[i] = part.to_string();
                    }
                    result.changed += 1;
                } else {
                    warn!(key = %key.name(), lookup, standard, "standard does not fit the key fields");
                }
            }

            values.extend(originals);
            result.rows.push(values);
        }

        info!(key = %key.name(), rows = result.rows.len(), changed = result.changed, "standardized values");
        Ok(result)
    }
}
