//! In-memory view of a loaded vocabulary

use kurator_domain::VocabularyEntry;
use std::collections::HashMap;

/// Vocabulary entries in file order, addressable by key
///
/// When a key occurs more than once in the file, the first row wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyDict {
    entries: Vec<VocabularyEntry>,
    index: HashMap<String, usize>,
}

impl VocabularyDict {
    /// Build from entries, keeping the first entry of each key
    pub fn from_entries<I: IntoIterator<Item = VocabularyEntry>>(entries: I) -> Self {
        let mut dict = Self::default();
        for entry in entries {
            if dict.index.contains_key(&entry.key) {
                continue;
            }
            dict.index.insert(entry.key.clone(), dict.entries.len());
            dict.entries.push(entry);
        }
        dict
    }

    /// Entry for a key
    pub fn get(&self, key: &str) -> Option<&VocabularyEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Entry whose key equals `key` ignoring ASCII case; exact matches win
    pub fn get_ignore_case(&self, key: &str) -> Option<&VocabularyEntry> {
        self.get(key)
            .or_else(|| self.entries.iter().find(|e| e.key.eq_ignore_ascii_case(key)))
    }

    /// Whether the key is present
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vocabulary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in file order
    pub fn iter(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.entries.iter()
    }

    /// Subset holding the entries of the listed keys, in checklist order
    pub fn matching<S: AsRef<str>>(&self, checklist: &[S]) -> VocabularyDict {
        VocabularyDict::from_entries(
            checklist
                .iter()
                .filter_map(|key| self.get(key.as_ref()))
                .cloned(),
        )
    }

    /// Reviewed entries whose standard form differs from the key
    pub fn recommended(&self) -> Vec<&VocabularyEntry> {
        self.entries.iter().filter(|e| e.recommends_change()).collect()
    }

    /// Values not present as keys, in input order
    pub fn missing<'a, S: AsRef<str>>(&self, values: &'a [S]) -> Vec<&'a str> {
        let mut missing = Vec::new();
        for value in values {
            let value: &'a str = value.as_ref();
            if !self.contains(value) {
                missing.push(value);
            }
        }
        missing
    }
}
