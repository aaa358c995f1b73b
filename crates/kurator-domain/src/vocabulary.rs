//! Vocabulary module - entries of an append-only lookup file

use crate::terms::GEOGRAPHY_KEY_FIELDS;
use crate::{compose_key, DEFAULT_SEPARATOR};

/// Key column name of a single-term vocabulary
pub const VERBATIM_FIELD: &str = "verbatim";

/// Curation metadata columns that follow the key column, in file order
pub const METADATA_FIELDS: [&str; 7] = [
    "standard",
    "checked",
    "error",
    "misplaced",
    "incorrectable",
    "source",
    "comment",
];

/// Extra trailing column of the geography vocabulary
pub const NOT_HIGHER_GEOGRAPHY_FIELD: &str = "notHigherGeography";

/// `checked` value written for freshly appended entries
pub const UNCHECKED: &str = "0";

/// `checked` value of an entry a curator has reviewed
pub const CHECKED: &str = "1";

/// Shape of a vocabulary file's header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyKind {
    /// `verbatim` key column plus the metadata columns
    SingleTerm,

    /// Named (usually composite) key column plus the metadata columns
    Keyed(String),

    /// Geography composite key, metadata columns, then `notHigherGeography`
    Geography,
}

impl VocabularyKind {
    /// Kind for a key column name; `verbatim` maps to [`VocabularyKind::SingleTerm`]
    pub fn for_key(key_column: &str) -> Self {
        if key_column == VERBATIM_FIELD {
            VocabularyKind::SingleTerm
        } else {
            VocabularyKind::Keyed(key_column.to_string())
        }
    }

    /// Name of the key column
    pub fn key_column(&self) -> String {
        match self {
            VocabularyKind::SingleTerm => VERBATIM_FIELD.to_string(),
            VocabularyKind::Keyed(key) => key.clone(),
            VocabularyKind::Geography => compose_key(&GEOGRAPHY_KEY_FIELDS, DEFAULT_SEPARATOR),
        }
    }

    /// Full header for a new file of this kind
    ///
    /// # Examples
    ///
    /// ```
    /// use kurator_domain::VocabularyKind;
    ///
    /// let header = VocabularyKind::for_key("geography").header();
    /// assert_eq!(header.len(), 8);
    /// assert_eq!(header[0], "geography");
    /// assert_eq!(header[7], "comment");
    /// ```
    pub fn header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(METADATA_FIELDS.len() + 2);
        header.push(self.key_column());
        header.extend(METADATA_FIELDS.iter().map(|f| f.to_string()));
        if matches!(self, VocabularyKind::Geography) {
            header.push(NOT_HIGHER_GEOGRAPHY_FIELD.to_string());
        }
        header
    }
}

/// One row of a vocabulary file
///
/// Only `key` is mandatory. The remaining slots are free text filled in by
/// curators after the value has been collected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VocabularyEntry {
    /// Verbatim value or composite key, unique within one file
    pub key: String,

    /// Standardized form of the value
    pub standard: String,

    /// `1` once a curator has reviewed the entry
    pub checked: String,

    /// Error annotation
    pub error: String,

    /// Whether the value was found in the wrong field
    pub misplaced: String,

    /// Whether the value cannot be standardized
    pub incorrectable: String,

    /// Reference the standard value came from
    pub source: String,

    /// Free-form curator comment
    pub comment: String,
}

impl VocabularyEntry {
    /// A fresh, unreviewed entry
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            checked: UNCHECKED.to_string(),
            ..Default::default()
        }
    }

    /// Build an entry from a file record; missing trailing columns are empty
    pub fn from_record(record: &[String]) -> Self {
        let field = |i: usize| record.get(i).cloned().unwrap_or_default();
        Self {
            key: field(0),
            standard: field(1),
            checked: field(2),
            error: field(3),
            misplaced: field(4),
            incorrectable: field(5),
            source: field(6),
            comment: field(7),
        }
    }

    /// File record of `width` columns; columns past `comment` are left empty
    pub fn to_record(&self, width: usize) -> Vec<String> {
        let mut record = vec![
            self.key.clone(),
            self.standard.clone(),
            self.checked.clone(),
            self.error.clone(),
            self.misplaced.clone(),
            self.incorrectable.clone(),
            self.source.clone(),
            self.comment.clone(),
        ];
        record.resize(width.max(1), String::new());
        record
    }

    /// Whether a curator has reviewed this entry
    pub fn is_checked(&self) -> bool {
        self.checked.trim() == CHECKED
    }

    /// Reviewed entry whose standard form differs from the verbatim key
    pub fn recommends_change(&self) -> bool {
        self.is_checked() && self.standard != self.key
    }
}
