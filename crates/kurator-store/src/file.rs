//! File-backed vocabulary store

use crate::{StoreError, VocabularyDict};
use kurator_domain::{RowSource, VocabularyEntry, VocabularyKind, VocabularyStore};
use kurator_tabular::{append_rows, write_header, Delimiter, Dialect, Encoding, TabularReader};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Header, records and dialect of an existing vocabulary file
struct Snapshot {
    header: Vec<String>,
    records: Vec<Vec<String>>,
    dialect: Dialect,
}

/// An append-only vocabulary lookup file
///
/// The file is re-read on every call; nothing is cached between calls.
/// Rows are only ever appended, never rewritten or reordered.
///
/// # Concurrency
///
/// Single writer only. Two processes appending to the same file can race
/// between reading the existing keys and appending, and may both add a key.
///
/// # Examples
///
/// ```no_run
/// use kurator_domain::VocabularyKind;
/// use kurator_store::VocabularyFile;
///
/// let vocab = VocabularyFile::new("month.txt", VocabularyKind::SingleTerm);
/// let added = vocab.append(&["May".to_string(), "MAY".to_string()]).unwrap();
/// assert_eq!(added.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct VocabularyFile {
    path: PathBuf,
    kind: VocabularyKind,
    delimiter: Delimiter,
}

impl VocabularyFile {
    /// Vocabulary at `path`; new files are tab-delimited
    pub fn new<P: Into<PathBuf>>(path: P, kind: VocabularyKind) -> Self {
        Self {
            path: path.into(),
            kind,
            delimiter: Delimiter::Tab,
        }
    }

    /// Delimiter used when the file has to be created
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Path of the vocabulary file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Shape of the vocabulary
    pub fn kind(&self) -> &VocabularyKind {
        &self.kind
    }

    /// Whether the file exists with at least a header
    pub fn exists(&self) -> bool {
        self.path
            .metadata()
            .map(|m| m.is_file() && m.len() > 0)
            .unwrap_or(false)
    }

    fn snapshot(&self) -> Result<Option<Snapshot>, StoreError> {
        if !self.exists() {
            return Ok(None);
        }

        let mut reader = TabularReader::open(&self.path)?;
        let header = reader.header().fields().to_vec();
        let dialect = reader.dialect();
        let mut records = Vec::new();
        while let Some(row) = reader.next_row() {
            records.push(row?.values().to_vec());
        }
        debug!(path = %self.path.display(), rows = records.len(), "read vocabulary");

        Ok(Some(Snapshot {
            header,
            records,
            dialect,
        }))
    }

    /// Keys already present; empty when the file does not exist yet
    pub fn load_existing_keys(&self) -> Result<HashSet<String>, StoreError> {
        let keys = match self.snapshot()? {
            Some(snapshot) => snapshot
                .records
                .into_iter()
                .filter_map(|record| record.into_iter().next())
                .collect(),
            None => HashSet::new(),
        };
        Ok(keys)
    }

    /// Append candidates that are not yet present
    ///
    /// Candidates keep their relative order. Repeats within the list and
    /// empty strings are skipped. The file is created with the full header
    /// when missing or zero-length, in UTF-8. An existing file keeps the
    /// delimiter and encoding it was written with, and must carry exactly
    /// this vocabulary's header.
    ///
    /// # Errors
    /// [`StoreError::HeaderMismatch`] when an existing header differs, or an
    /// error from reading or appending, including a key the file's encoding
    /// cannot hold.
    pub fn append(&self, candidates: &[String]) -> Result<Vec<String>, StoreError> {
        let expected = self.kind.header();

        let (existing, dialect) = match self.snapshot()? {
            Some(snapshot) => {
                if snapshot.header != expected {
                    return Err(StoreError::HeaderMismatch {
                        path: self.path.clone(),
                        expected,
                        found: snapshot.header,
                    });
                }
                let keys: HashSet<String> = snapshot
                    .records
                    .into_iter()
                    .filter_map(|record| record.into_iter().next())
                    .collect();
                (keys, snapshot.dialect)
            }
            None => {
                write_header(&self.path, &expected, self.delimiter)?;
                info!(path = %self.path.display(), key = %expected[0], "created vocabulary");
                let dialect = Dialect {
                    delimiter: self.delimiter,
                    encoding: Encoding::Utf8,
                };
                (HashSet::new(), dialect)
            }
        };

        let mut seen = HashSet::new();
        let added: Vec<String> = candidates
            .iter()
            .filter(|c| !c.is_empty())
            .filter(|c| !existing.contains(c.as_str()))
            .filter(|c| seen.insert(c.as_str()))
            .cloned()
            .collect();

        let rows: Vec<Vec<String>> = added
            .iter()
            .map(|key| VocabularyEntry::new(key.as_str()).to_record(expected.len()))
            .collect();
        append_rows(&self.path, &rows, dialect)?;

        info!(
            path = %self.path.display(),
            candidates = candidates.len(),
            added = added.len(),
            "appended to vocabulary"
        );
        Ok(added)
    }

    /// All entries in file order; empty when the file does not exist yet
    pub fn load_entries(&self) -> Result<Vec<VocabularyEntry>, StoreError> {
        let entries = match self.snapshot()? {
            Some(snapshot) => snapshot
                .records
                .iter()
                .map(|record| VocabularyEntry::from_record(record))
                .collect(),
            None => Vec::new(),
        };
        Ok(entries)
    }

    /// The whole vocabulary keyed by its key column
    pub fn dict(&self) -> Result<VocabularyDict, StoreError> {
        Ok(VocabularyDict::from_entries(self.load_entries()?))
    }
}

impl VocabularyStore for VocabularyFile {
    type Error = StoreError;

    fn existing_keys(&self) -> Result<HashSet<String>, Self::Error> {
        self.load_existing_keys()
    }

    fn append_new(&self, candidates: &[String]) -> Result<Vec<String>, Self::Error> {
        self.append(candidates)
    }

    fn entries(&self) -> Result<Vec<VocabularyEntry>, Self::Error> {
        self.load_entries()
    }
}

/// Keys present in the vocabulary at `path`
///
/// A missing file yields an empty set.
pub fn load_existing_keys<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, StoreError> {
    VocabularyFile::new(path.as_ref(), VocabularyKind::SingleTerm).load_existing_keys()
}

/// Append new keys to the vocabulary at `path` whose key column is `key_column`
///
/// `None` for `candidates` is a failure ([`StoreError::NoCandidates`]); an
/// empty list is not, and simply adds nothing. A new file is tab-delimited.
pub fn append_new<P: AsRef<Path>>(
    path: P,
    candidates: Option<&[String]>,
    key_column: &str,
) -> Result<Vec<String>, StoreError> {
    append_new_with(path, candidates, key_column, Delimiter::Tab)
}

/// [`append_new`] creating a missing file with `delimiter`
///
/// An existing file keeps its own delimiter.
pub fn append_new_with<P: AsRef<Path>>(
    path: P,
    candidates: Option<&[String]>,
    key_column: &str,
    delimiter: Delimiter,
) -> Result<Vec<String>, StoreError> {
    let candidates = candidates.ok_or(StoreError::NoCandidates)?;
    VocabularyFile::new(path.as_ref(), VocabularyKind::for_key(key_column))
        .with_delimiter(delimiter)
        .append(candidates)
}
