//! Header module - the schema of one tabular source

use std::collections::HashMap;
use std::fmt;

/// Errors raised while building a header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// The source has no header fields at all
    Empty,

    /// A field name appears more than once
    DuplicateField(String),
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::Empty => write!(f, "header has no fields"),
            HeaderError::DuplicateField(name) => {
                write!(f, "header field '{}' appears more than once", name)
            }
        }
    }
}

impl std::error::Error for HeaderError {}

/// Ordered sequence of unique field names
///
/// Field lookup is case-sensitive. A header with a repeated field name is a
/// malformed source and is rejected at construction instead of silently
/// resolving to the first or last column. Blank names are kept in place but
/// cannot be looked up, so any number of them may appear; [`clean_header`]
/// gives them names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    fields: Vec<String>,
    index: HashMap<String, usize>,
}

impl Header {
    /// Build a header from field names
    ///
    /// # Errors
    /// Returns [`HeaderError::Empty`] for no fields and
    /// [`HeaderError::DuplicateField`] when a non-blank name repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use kurator_domain::Header;
    ///
    /// let header = Header::new(["catalogNumber", "year"]).unwrap();
    /// assert_eq!(header.position("year"), Some(1));
    /// assert!(Header::new(["year", "year"]).is_err());
    /// ```
    pub fn new<I, S>(fields: I) -> Result<Self, HeaderError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err(HeaderError::Empty);
        }

        let mut index = HashMap::with_capacity(fields.len());
        for (i, field) in fields.iter().enumerate() {
            if field.trim().is_empty() {
                continue;
            }
            if index.insert(field.clone(), i).is_some() {
                return Err(HeaderError::DuplicateField(field.clone()));
            }
        }

        Ok(Self { fields, index })
    }

    /// Field names in source order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Column position of a field, if present
    pub fn position(&self, field: &str) -> Option<usize> {
        self.index.get(field).copied()
    }

    /// Whether the header contains the field (case-sensitive)
    pub fn contains(&self, field: &str) -> bool {
        self.index.contains_key(field)
    }

    /// The first field, which is the key column of a vocabulary file
    pub fn first(&self) -> &str {
        // Construction guarantees at least one field
        &self.fields[0]
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false for a constructed header; present for API symmetry
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Lower-case, ASCII-only, underscore-joined form of a string
///
/// Characters other than ASCII letters, digits, whitespace and `:` become
/// spaces, words are joined with `_`, and anything that is not a word
/// character is dropped. `length` keeps only the first N words.
///
/// ```
/// use kurator_domain::slugify;
///
/// assert_eq!(slugify("Catalog Number", None), "catalog_number");
/// assert_eq!(slugify("dwc:year (verbatim)", Some(1)), "dwcyear");
/// ```
pub fn slugify(s: &str, length: Option<usize>) -> String {
    let spaced: String = s
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() || c == ':' {
                c
            } else {
                ' '
            }
        })
        .collect();

    let words = spaced.split_whitespace();
    let joined = match length {
        Some(n) => words.take(n).collect::<Vec<_>>().join("_"),
        None => words.collect::<Vec<_>>().join("_"),
    };

    joined
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Slug every field of a header; fields that slug to nothing become `field<N>`
/// (1-based position).
pub fn clean_header(fields: &[String]) -> Vec<String> {
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let clean = slugify(field, None);
            if clean.is_empty() {
                format!("field{}", i + 1)
            } else {
                clean
            }
        })
        .collect()
}

/// Union of the trimmed, non-blank fields of two headers, sorted
///
/// Returns `None` when neither header contributes a field.
pub fn merge_headers(so_far: Option<&[String]>, to_add: Option<&[String]>) -> Option<Vec<String>> {
    let mut merged: Vec<String> = so_far
        .into_iter()
        .chain(to_add)
        .flatten()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect();

    if merged.is_empty() {
        return None;
    }

    merged.sort();
    merged.dedup();
    Some(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_header_positions() {
        let header = Header::new(["a", "b", "c"]).unwrap();
        assert_eq!(header.len(), 3);
        assert_eq!(header.first(), "a");
        assert_eq!(header.position("c"), Some(2));
        assert_eq!(header.position("C"), None);
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = Header::new(["year", "month", "year"]).unwrap_err();
        assert_eq!(err, HeaderError::DuplicateField("year".to_string()));
    }

    #[test]
    fn test_blank_fields_are_kept_but_not_indexed() {
        let header = Header::new(["a", "b", "", " "]).unwrap();
        assert_eq!(header.len(), 4);
        assert_eq!(header.position("b"), Some(1));
        assert_eq!(header.position(""), None);
        assert!(!header.contains(" "));
        assert_eq!(clean_header(header.fields()), strings(&["a", "b", "field3", "field4"]));
    }

    #[test]
    fn test_empty_header_rejected() {
        let err = Header::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, HeaderError::Empty);
    }

    #[test]
    fn test_slugify_strips_punctuation_and_case() {
        assert_eq!(slugify("  Scientific Name! ", None), "scientific_name");
        assert_eq!(slugify("décimal latitude", None), "d_cimal_latitude");
        assert_eq!(slugify("***", None), "");
    }

    #[test]
    fn test_clean_header_names_blank_fields() {
        let cleaned = clean_header(&strings(&["Catalog Number", "", "year"]));
        assert_eq!(cleaned, strings(&["catalog_number", "field2", "year"]));
    }

    #[test]
    fn test_merge_headers() {
        let a = strings(&["b", " a ", ""]);
        let b = strings(&["c", "a"]);
        let merged = merge_headers(Some(&a), Some(&b)).unwrap();
        assert_eq!(merged, strings(&["a", "b", "c"]));

        assert!(merge_headers(None, None).is_none());
        assert!(merge_headers(Some(&strings(&["  "])), None).is_none());
    }
}
